pub use super::invite::Entity as Invite;
pub use super::news::Entity as News;
pub use super::pilot::Entity as Pilot;
pub use super::protest::Entity as Protest;
pub use super::protest_vote::Entity as ProtestVote;
pub use super::race::Entity as Race;
pub use super::race_registration::Entity as RaceRegistration;
pub use super::race_result::Entity as RaceResult;
pub use super::season::Entity as Season;
pub use super::seletiva_entry::Entity as SeletivaEntry;
pub use super::team::Entity as Team;
pub use super::user::Entity as User;
