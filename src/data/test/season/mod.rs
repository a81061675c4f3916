use crate::data::season::SeasonRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_active;
