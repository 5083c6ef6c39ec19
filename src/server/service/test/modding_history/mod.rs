use super::*;
use crate::server::{
    model::kudosu::KudosuPageParams, service::modding_history::ModdingHistoryService,
};
use test_utils::factory::{
    beatmap_discussion::BeatmapDiscussionFactory, beatmapset::BeatmapsetFactory,
};

mod events;
mod kudosu;
mod votes_received;
