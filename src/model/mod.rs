pub mod api;
pub mod auth;
pub mod invite;
pub mod news;
pub mod overview;
pub mod pilot;
pub mod protest;
pub mod race;
pub mod result;
pub mod season;
pub mod seletiva;
pub mod standings;
pub mod team;
pub mod user;
