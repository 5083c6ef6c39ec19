use super::*;
use crate::server::service::user::UserService;
use chrono::{Duration, Utc};
use test_utils::factory::beatmapset::BeatmapsetFactory;

mod profile;
