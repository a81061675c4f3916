//! Typed active enums stored as strings in the database.

use sea_orm::entity::prelude::*;

/// Access level of a user account.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum Role {
    #[sea_orm(string_value = "PILOT")]
    Pilot,
    #[sea_orm(string_value = "ADMIN")]
    Admin,
    #[sea_orm(string_value = "SUPER_ADMIN")]
    SuperAdmin,
    /// Anonymized account kept only to preserve historical results.
    #[sea_orm(string_value = "INACTIVE")]
    Inactive,
}

impl Role {
    /// Whether the role grants access to the race-direction area.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin | Role::SuperAdmin)
    }
}

/// Skill tier a pilot or team competes in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum Grid {
    #[sea_orm(string_value = "ELITE")]
    Elite,
    #[sea_orm(string_value = "ADVANCED")]
    Advanced,
    #[sea_orm(string_value = "INITIAL")]
    Initial,
    #[sea_orm(string_value = "RESERVE")]
    Reserve,
    /// Not yet assigned by a seletiva (or race-direction staff account).
    #[sea_orm(string_value = "UNRANKED")]
    Unranked,
}

impl Grid {
    /// The three grids that actually race in a season.
    pub const COMPETITIVE: [Grid; 3] = [Grid::Elite, Grid::Advanced, Grid::Initial];
}

/// Stage type of a race, selecting the points multiplier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum RaceKind {
    #[sea_orm(string_value = "NORMAL")]
    Normal,
    #[sea_orm(string_value = "SPRINT")]
    Sprint,
    #[sea_orm(string_value = "FINAL")]
    Final,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum RaceStatus {
    #[sea_orm(string_value = "SCHEDULED")]
    Scheduled,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
}

/// Check-in answer a pilot gives ahead of a race.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum RegistrationStatus {
    #[sea_orm(string_value = "CONFIRMED")]
    Confirmed,
    #[sea_orm(string_value = "JUSTIFIED")]
    Justified,
}

/// Absence recorded on a result line for a pilot who did not race.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum Absence {
    /// Justified ahead of time; no disciplinary penalty.
    #[sea_orm(string_value = "JUSTIFIED")]
    Justified,
    /// No-show without justification; costs CNH points.
    #[sea_orm(string_value = "UNJUSTIFIED")]
    Unjustified,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum ProtestStatus {
    #[sea_orm(string_value = "AWAITING_DEFENSE")]
    AwaitingDefense,
    #[sea_orm(string_value = "VOTING")]
    Voting,
    #[sea_orm(string_value = "CLOSED")]
    Closed,
}

/// Committee verdict on a protest; also the shape of a commissioner's vote.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum Verdict {
    /// No infraction found; settles zero points.
    #[sea_orm(string_value = "DISMISSED")]
    Dismissed,
    /// Accumulates on the pilot's record; every third converts to -3 points.
    #[sea_orm(string_value = "WARNING")]
    Warning,
    #[sea_orm(string_value = "LIGHT")]
    Light,
    #[sea_orm(string_value = "MEDIUM")]
    Medium,
    #[sea_orm(string_value = "SEVERE")]
    Severe,
}
