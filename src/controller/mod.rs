pub mod auth;
pub mod invite;
pub mod me;
pub mod news;
pub mod overview;
pub mod pilot;
pub mod protest;
pub mod public;
pub mod race;
pub mod season;
pub mod seletiva;
pub mod team;
pub mod user;
