pub mod auth;
pub mod invite;
pub mod pilot;
pub mod results;
pub mod scoring;
pub mod season;
pub mod seletiva;
pub mod standings;
pub mod tribunal;
