//! SeaORM entities for the modding records read by the modding history service.

pub mod prelude;

pub mod beatmap;
pub mod beatmap_discussion;
pub mod beatmap_discussion_post;
pub mod beatmap_discussion_vote;
pub mod beatmapset;
pub mod beatmapset_event;
pub mod kudosu_history;
pub mod user;
pub mod user_group;
pub mod username_change_history;
