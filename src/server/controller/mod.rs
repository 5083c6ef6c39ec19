//! HTTP request handlers.

pub mod modding_history;
