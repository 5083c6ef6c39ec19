use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};
use test_utils::{builder::TestBuilder, factory};

mod auth;
mod modding;
