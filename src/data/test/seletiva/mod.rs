use crate::data::seletiva::SeletivaRepository;
use entity::prelude::SeletivaEntry;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete_by_pilot;
mod get_ranked;
mod upsert;
