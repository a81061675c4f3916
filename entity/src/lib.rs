//! SeaORM entity definitions for the league database.

pub mod enums;
pub mod prelude;

pub mod invite;
pub mod news;
pub mod pilot;
pub mod protest;
pub mod protest_vote;
pub mod race;
pub mod race_registration;
pub mod race_result;
pub mod season;
pub mod seletiva_entry;
pub mod team;
pub mod user;
