use crate::server::data::username_change::UsernameChangeRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod latest_visible_from;
mod visible_for_user;
