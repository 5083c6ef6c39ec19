//! Database repository layer for the modding records.
//!
//! Each repository reads one kind of record. Searches return a page of entity models
//! together with the un-paged total, batch lookups return maps keyed by id so the
//! service layer can attach relations without per-row queries.

pub mod beatmapset;
pub mod beatmapset_event;
pub mod discussion;
pub mod discussion_post;
pub mod discussion_vote;
pub mod kudosu_history;
pub mod user;
pub mod username_change;

#[cfg(test)]
mod test;
