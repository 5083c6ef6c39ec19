use super::*;
use crate::server::middleware::auth::AuthGuard;

mod privileges;
