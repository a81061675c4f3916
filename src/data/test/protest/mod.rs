use crate::data::protest::ProtestRepository;
use chrono::Utc;
use entity::enums::{ProtestStatus, Verdict};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod close;
mod reopen;
mod upsert_vote;
