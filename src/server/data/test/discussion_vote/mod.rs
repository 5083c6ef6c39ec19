use super::{moderator, search_params};
use crate::server::{data::discussion_vote::DiscussionVoteRepository, model::privilege::Privileges};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, beatmap_discussion_vote::BeatmapDiscussionVoteFactory},
};

mod recently_given_by_user;
mod recently_received_by_user;
mod search;
