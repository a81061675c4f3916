use crate::data::pilot::{PilotRepository, UpdatePilotParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod adjust_cnh;
mod adjust_warnings;
mod update;
