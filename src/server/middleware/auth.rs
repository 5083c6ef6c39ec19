use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository, error::AppError, middleware::session::AuthSession,
    model::privilege::Privileges,
};

/// Resolves what the current viewer may see.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Privileges of the viewer behind the session.
    ///
    /// Anonymous viewers, and sessions pointing at a user that no longer exists,
    /// get no privileges.
    pub async fn privileges(&self) -> Result<Privileges, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(Privileges::anonymous());
        };

        let Some(viewer) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            tracing::debug!("Session user {} not found, treating as anonymous", user_id);
            return Ok(Privileges::anonymous());
        };

        Ok(Privileges::for_viewer(&viewer))
    }
}
