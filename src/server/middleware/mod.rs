pub mod auth;
pub mod modding;
pub mod session;

#[cfg(test)]
mod test;
