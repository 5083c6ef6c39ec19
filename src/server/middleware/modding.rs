//! Target user resolution for the modding history pages.
//!
//! Runs before every modding history action: works out who the viewer is, finds
//! the user named in the route (following old usernames), hides profiles the viewer
//! may not see and sends non-canonical URLs to the id-based one.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;
use url::Url;

use crate::server::{
    data::{user::UserRepository, username_change::UsernameChangeRepository},
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    model::{
        modding::{ModdingAction, ModdingContext},
        search::SearchParams,
    },
    util::url::UrlBuilder,
};

/// Outcome of resolving the route's user.
#[derive(Debug)]
pub enum Resolution {
    /// The route names the user by id; serve the action.
    Target(ModdingContext),
    /// The user was found by name; redirect to this canonical URL.
    Redirect(String),
}

pub struct ModdingHistoryGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
    app_url: &'a Url,
}

impl<'a> ModdingHistoryGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session, app_url: &'a Url) -> Self {
        Self {
            db,
            session,
            app_url,
        }
    }

    /// Resolves the route's user for `action`.
    ///
    /// # Arguments
    /// - `action` - The modding history page being requested
    /// - `user_param` - The `{user}` route segment, an id or a (previous) username
    /// - `query` - Raw query pairs, preserved on redirect
    ///
    /// # Returns
    /// - `Ok(Resolution::Target(_))` - User found and visible, route uses the id
    /// - `Ok(Resolution::Redirect(_))` - User found by name
    /// - `Err(AuthError::UserNotFound)` - No such user, current or previous name
    /// - `Err(AuthError::UserIsBot)` - Bots have no modding history
    /// - `Err(AuthError::ProfileHidden)` - Viewer may not see this profile
    pub async fn resolve(
        &self,
        action: ModdingAction,
        user_param: &str,
        query: &[(String, String)],
    ) -> Result<Resolution, AppError> {
        let privileges = AuthGuard::new(self.db, self.session).privileges().await?;
        let user_repo = UserRepository::new(self.db);

        let mut user = user_repo.lookup(user_param, privileges.is_moderator).await?;

        if user.is_none() {
            if let Some(change) = UsernameChangeRepository::new(self.db)
                .latest_visible_from(user_param)
                .await?
            {
                user = user_repo.lookup_by_id(change.user_id, false).await?;
            }
        }

        let Some(user) = user else {
            return Err(AuthError::UserNotFound(user_param.to_string()).into());
        };

        if user.is_bot() {
            return Err(AuthError::UserIsBot(user.id).into());
        }

        if !privileges.can_view_profile(&user) {
            return Err(AuthError::ProfileHidden {
                target: user.id,
                viewer: privileges.viewer_id,
            }
            .into());
        }

        if user.id.to_string() != user_param {
            let url = UrlBuilder::new(self.app_url).modding(user.id, action, query);
            tracing::debug!("Redirecting modding history for '{}' to {}", user_param, url);

            return Ok(Resolution::Redirect(url));
        }

        let params = SearchParams::from_query(query, user.id, &privileges);

        Ok(Resolution::Target(ModdingContext {
            action,
            user,
            privileges,
            params,
        }))
    }
}
