pub mod parse;
pub mod url;
