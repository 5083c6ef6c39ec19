//! Business logic between the controllers and the repositories.

pub mod loader;
pub mod modding_history;
pub mod user;

#[cfg(test)]
mod test;
