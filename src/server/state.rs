//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;
use url::Url;

/// Application state containing shared resources.
///
/// Cloned for each request via Axum's state extraction. `DatabaseConnection` is a
/// pool, so clones share connections.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for reading modding records.
    pub db: DatabaseConnection,

    /// Public base URL of the site.
    ///
    /// Used to build canonical redirects, pagination links and profile links.
    pub app_url: Url,
}

impl AppState {
    pub fn new(db: DatabaseConnection, app_url: Url) -> Self {
        Self { db, app_url }
    }
}
