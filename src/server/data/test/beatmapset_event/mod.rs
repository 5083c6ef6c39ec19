use super::{moderator, search_params};
use crate::server::{
    data::beatmapset_event::BeatmapsetEventRepository, model::privilege::Privileges,
};
use chrono::{TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, beatmapset_event::BeatmapsetEventFactory},
};
