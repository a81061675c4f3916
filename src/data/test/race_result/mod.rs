use crate::data::race_result::{InsertResultParams, RaceResultRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod adjust_points;
mod delete_by_race;
mod get_by_team;
mod insert;
mod pilot_has_results;
