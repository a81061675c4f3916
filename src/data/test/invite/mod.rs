use crate::data::invite::InviteRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod mark_used;
