mod invite;
mod pilot;
mod protest;
mod race_result;
mod registration;
mod season;
mod seletiva;
mod team;
