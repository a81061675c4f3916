use crate::data::team::TeamRepository;
use entity::enums::Grid;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod archive_all;
mod get_active_by_grid;
