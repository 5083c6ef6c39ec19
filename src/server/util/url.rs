//! Absolute links into the site.

use url::Url;

use crate::server::model::modding::ModdingAction;

/// Builds absolute URLs relative to the configured `APP_URL`.
pub struct UrlBuilder<'a> {
    base: &'a Url,
}

impl<'a> UrlBuilder<'a> {
    pub fn new(base: &'a Url) -> Self {
        Self { base }
    }

    fn join(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        let prefix = self.base.path().trim_end_matches('/');
        url.set_path(&format!("{prefix}{path}"));
        url.set_query(None);
        url.set_fragment(None);
        url
    }

    /// Profile page of a user.
    pub fn user(&self, user_id: i32) -> String {
        self.join(&format!("/users/{user_id}")).into()
    }

    /// Discussion page of a beatmapset, scrolled to one discussion.
    pub fn discussion(&self, beatmapset_id: i32, discussion_id: i32) -> String {
        let mut url = self.join(&format!("/beatmapsets/{beatmapset_id}/discussion"));
        url.set_fragment(Some(&format!("/{discussion_id}")));
        url.into()
    }

    /// A modding history endpoint for `user_id` with the given query.
    pub fn modding(&self, user_id: i32, action: ModdingAction, query: &[(String, String)]) -> String {
        let mut url = self.join(&format!("/api/users/{user_id}/modding{}", action.path()));
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        url.into()
    }
}
