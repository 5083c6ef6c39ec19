use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user matched the id or username, including historical usernames.
    #[error("No user found for '{0}'")]
    UserNotFound(String),

    /// The user is a bot account, which has no modding profile.
    #[error("User {0} is a bot")]
    UserIsBot(i32),

    /// The viewer is not allowed to see this profile (restricted or inactive user).
    #[error("User {target} is not visible to viewer {viewer:?}")]
    ProfileHidden { target: i32, viewer: Option<i32> },
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant renders the same 404 "User not found" body so a hidden profile
/// is indistinguishable from a missing one. The actual reason is logged at debug
/// level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "User not found".to_string(),
            }),
        )
            .into_response()
    }
}
