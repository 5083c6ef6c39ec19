//! Viewer privileges for the modding history pages.

use crate::server::model::user::User;

/// Groups allowed to moderate beatmap discussions.
pub const MODERATOR_GROUPS: &[&str] = &["admin", "gmt", "nat"];

/// Groups allowed to allow or deny kudosu in addition to moderators.
pub const KUDOSU_MODERATOR_GROUPS: &[&str] = &["bng"];

/// What the current viewer is allowed to see.
///
/// Anonymous viewers and restricted users get no privileges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Privileges {
    /// Logged in user id, `None` for anonymous viewers.
    pub viewer_id: Option<i32>,
    /// May see deleted discussions, posts and moderation-only events.
    pub is_moderator: bool,
    /// May see kudosu allow/deny events.
    pub is_kudosu_moderator: bool,
}

impl Privileges {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Derives privileges from the logged in user's groups.
    pub fn for_viewer(viewer: &User) -> Self {
        if viewer.is_restricted {
            return Self {
                viewer_id: Some(viewer.id),
                ..Self::default()
            };
        }

        let is_moderator = viewer.in_any_group(MODERATOR_GROUPS);

        Self {
            viewer_id: Some(viewer.id),
            is_moderator,
            is_kudosu_moderator: is_moderator || viewer.in_any_group(KUDOSU_MODERATOR_GROUPS),
        }
    }

    /// Whether the viewer may open the profile of `target`.
    ///
    /// Inactive and restricted profiles are only visible to moderators and to
    /// the user themself.
    pub fn can_view_profile(&self, target: &User) -> bool {
        target.has_profile_visible() || self.is_moderator || self.viewer_id == Some(target.id)
    }
}
