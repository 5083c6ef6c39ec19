//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and
//! a `create_*` convenience function for quick default creation. Factories take the ids
//! of the rows they reference, so tests create parents first.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let mapper = factory::create_user(&db).await?;
//! let beatmapset = factory::create_beatmapset(&db, mapper.id).await?;
//! let discussion = factory::beatmap_discussion::BeatmapDiscussionFactory::new(&db, beatmapset.id)
//!     .user_id(modder.id)
//!     .message_type("problem")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Users, their groups and username changes
//! - `beatmapset` / `beatmap` - Mapping targets
//! - `beatmap_discussion` - Discussions, with a starting post by default
//! - `beatmap_discussion_post` - Replies and system posts
//! - `beatmap_discussion_vote` - Votes on discussions
//! - `beatmapset_event` - Moderation events
//! - `kudosu_history` - Kudosu exchanges
//! - `helpers` - Id generation and multi-entity shortcuts

pub mod beatmap;
pub mod beatmap_discussion;
pub mod beatmap_discussion_post;
pub mod beatmap_discussion_vote;
pub mod beatmapset;
pub mod beatmapset_event;
pub mod helpers;
pub mod kudosu_history;
pub mod user;

pub use beatmap::create_beatmap;
pub use beatmap_discussion::create_discussion;
pub use beatmap_discussion_post::create_post;
pub use beatmap_discussion_vote::create_vote;
pub use beatmapset::create_beatmapset;
pub use beatmapset_event::create_event;
pub use kudosu_history::create_kudosu;
pub use user::{create_user, create_user_in_group, create_username_change};
