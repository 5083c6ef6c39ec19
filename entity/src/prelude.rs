pub use super::beatmap::Entity as Beatmap;
pub use super::beatmap_discussion::Entity as BeatmapDiscussion;
pub use super::beatmap_discussion_post::Entity as BeatmapDiscussionPost;
pub use super::beatmap_discussion_vote::Entity as BeatmapDiscussionVote;
pub use super::beatmapset::Entity as Beatmapset;
pub use super::beatmapset_event::Entity as BeatmapsetEvent;
pub use super::kudosu_history::Entity as KudosuHistory;
pub use super::user::Entity as User;
pub use super::user_group::Entity as UserGroup;
pub use super::username_change_history::Entity as UsernameChangeHistory;
