use crate::server::data::kudosu_history::KudosuHistoryRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod received_by_user;
