use super::{moderator, search_params};
use crate::server::{data::discussion_post::DiscussionPostRepository, model::privilege::Privileges};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, beatmap_discussion_post::BeatmapDiscussionPostFactory},
};

mod search;
mod starting_posts;
