//! Type-safe session access.
//!
//! The session is shared with the rest of the site, which handles login. This
//! service only reads who the viewer is.

use tower_sessions::Session;

use crate::server::{error::AppError, util::parse::parse_id};

const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Wraps the tower-sessions `Session` to read the logged in user's id.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id in the session.
    ///
    /// Logging in happens elsewhere on the site; this mirrors what it writes.
    #[cfg(test)]
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_USER_ID, user_id.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the logged in user's id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session, or the stored value is not an id
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let Some(user_id) = self.session.get::<String>(SESSION_AUTH_USER_ID).await? else {
            return Ok(None);
        };

        let parsed = parse_id(&user_id);
        if parsed.is_none() {
            tracing::warn!("Ignoring malformed user id in session: {}", user_id);
        }

        Ok(parsed)
    }
}
