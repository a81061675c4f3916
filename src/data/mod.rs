pub mod invite;
pub mod news;
pub mod pilot;
pub mod protest;
pub mod race;
pub mod race_result;
pub mod registration;
pub mod season;
pub mod seletiva;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;
