//! Race result settlement.
//!
//! Saving a results sheet is the one operation that moves both championship
//! points and license points, so it has to be safe to run twice: admins fix
//! typos by re-submitting the whole sheet. Every license deduction made by a
//! previous settlement of the same race is refunded before the new sheet is
//! applied, which makes re-saving idempotent.

use sea_orm::DatabaseConnection;

use entity::enums::{Absence, RaceStatus};

use crate::{
    data::{
        pilot::PilotRepository,
        race::RaceRepository,
        race_result::{InsertResultParams, RaceResultRepository},
        season::SeasonRepository,
    },
    error::AppError,
    service::scoring::{self, ScoredLine, UNJUSTIFIED_ABSENCE_PENALTY},
};

/// One line of a results sheet after DTO validation.
#[derive(Debug, Clone)]
pub struct SaveResultLine {
    pub pilot_id: i32,
    pub team_id: Option<i32>,
    pub position: i32,
    pub dnf: bool,
    pub dsq: bool,
    pub fastest_lap: bool,
    pub driver_of_the_day: bool,
    pub fan_favorite: bool,
    pub absence: Option<Absence>,
}

/// Settles a race from a full results sheet.
///
/// Replaces any previously saved classification for the race. License
/// deductions from the previous settlement are refunded first, then the new
/// sheet is scored and applied, so saving twice never double-charges anyone.
///
/// Team attribution per line: an explicit `team_id` wins, otherwise the team
/// recorded the last time this race was settled, otherwise the pilot's
/// current team. This keeps a mid-season transfer from rewriting history
/// when an old race is corrected.
///
/// # Arguments
/// - `race_id`: Race being settled
/// - `lines`: Complete classification, including absentees
///
/// # Returns
/// - `Ok(Vec<Model>)`: The stored result lines
/// - `Err(AppError::NotFound)`: Race or a listed pilot does not exist
/// - `Err(AppError::BadRequest)`: Closed season, duplicate pilot lines, or a
///   classified line with no team to credit
pub async fn save_results(
    db: &DatabaseConnection,
    race_id: i32,
    lines: Vec<SaveResultLine>,
) -> Result<Vec<entity::race_result::Model>, AppError> {
    let race_repo = RaceRepository::new(db);
    let result_repo = RaceResultRepository::new(db);
    let pilot_repo = PilotRepository::new(db);
    let season_repo = SeasonRepository::new(db);

    let Some(race) = race_repo.find_by_id(race_id).await? else {
        return Err(AppError::NotFound(format!("Race {race_id} not found")));
    };

    let Some(season) = season_repo.find_by_id(race.season_id).await? else {
        return Err(AppError::NotFound(format!(
            "Season {} not found",
            race.season_id
        )));
    };
    if !season.active {
        return Err(AppError::BadRequest(
            "Results cannot be changed once the season is closed".to_string(),
        ));
    }

    for (i, line) in lines.iter().enumerate() {
        if lines[..i].iter().any(|l| l.pilot_id == line.pilot_id) {
            return Err(AppError::BadRequest(format!(
                "Pilot {} appears more than once in the results sheet",
                line.pilot_id
            )));
        }
    }

    // Undo the license charges of the previous settlement and remember which
    // team each pilot was credited to.
    let prior = result_repo.get_by_race(race_id).await?;
    let mut team_snapshot = std::collections::HashMap::new();

    for old in &prior {
        team_snapshot.insert(old.pilot_id, old.team_id);

        if old.absence == Some(Absence::Unjustified) {
            pilot_repo
                .adjust_cnh(old.pilot_id, UNJUSTIFIED_ABSENCE_PENALTY)
                .await?;
        }
    }

    result_repo.delete_by_race(race_id).await?;

    let mut stored = Vec::with_capacity(lines.len());

    for line in lines {
        let Some(pilot) = pilot_repo.find_by_id(line.pilot_id).await? else {
            return Err(AppError::NotFound(format!(
                "Pilot {} not found",
                line.pilot_id
            )));
        };

        let team_id = line
            .team_id
            .or_else(|| team_snapshot.get(&pilot.id).copied().flatten())
            .or(pilot.team_id);

        // Reserves have no roster team, so their lines must name one or the
        // points would attach to no constructor.
        if team_id.is_none() && line.absence.is_none() {
            return Err(AppError::BadRequest(format!(
                "Pilot {} has no team; the results sheet must name one",
                pilot.id
            )));
        }

        let (position, points, fastest_lap, driver_of_the_day, fan_favorite, dnf, dsq) =
            if line.absence.is_some() {
                (0, 0.0, false, false, false, false, false)
            } else {
                let scored = ScoredLine {
                    position: line.position,
                    dnf: line.dnf,
                    dsq: line.dsq,
                    fastest_lap: line.fastest_lap,
                    driver_of_the_day: line.driver_of_the_day,
                    fan_favorite: line.fan_favorite,
                };

                (
                    line.position,
                    scoring::score(&scored, race.kind),
                    line.fastest_lap,
                    line.driver_of_the_day,
                    line.fan_favorite,
                    line.dnf,
                    line.dsq,
                )
            };

        if line.absence == Some(Absence::Unjustified) {
            pilot_repo
                .adjust_cnh(pilot.id, -UNJUSTIFIED_ABSENCE_PENALTY)
                .await?;
        }

        let result = result_repo
            .insert(InsertResultParams {
                race_id,
                pilot_id: pilot.id,
                team_id,
                position,
                points,
                fastest_lap,
                driver_of_the_day,
                fan_favorite,
                dnf,
                dsq,
                absence: line.absence,
            })
            .await?;

        stored.push(result);
    }

    race_repo.set_status(race_id, RaceStatus::Completed).await?;

    tracing::info!("Settled race {} with {} result lines", race_id, stored.len());

    Ok(stored)
}

/// Deletes a race and its results, refunding any license deductions the
/// settlement had made.
///
/// # Returns
/// - `Ok(())`: Race removed and absentees refunded
/// - `Err(AppError::NotFound)`: Race does not exist
/// - `Err(AppError::BadRequest)`: Season is archived
pub async fn delete_race(db: &DatabaseConnection, race_id: i32) -> Result<(), AppError> {
    let race_repo = RaceRepository::new(db);
    let result_repo = RaceResultRepository::new(db);
    let pilot_repo = PilotRepository::new(db);
    let season_repo = SeasonRepository::new(db);

    let Some(race) = race_repo.find_by_id(race_id).await? else {
        return Err(AppError::NotFound(format!("Race {race_id} not found")));
    };

    let archived = season_repo
        .find_by_id(race.season_id)
        .await?
        .is_none_or(|s| !s.active);
    if archived {
        return Err(AppError::BadRequest(
            "Races in an archived season cannot be deleted".to_string(),
        ));
    }

    let prior = result_repo.get_by_race(race_id).await?;

    for old in &prior {
        if old.absence == Some(Absence::Unjustified) {
            pilot_repo
                .adjust_cnh(old.pilot_id, UNJUSTIFIED_ABSENCE_PENALTY)
                .await?;
        }
    }

    result_repo.delete_by_race(race_id).await?;
    race_repo.delete(race_id).await?;

    tracing::info!("Deleted race {} and refunded absence penalties", race_id);

    Ok(())
}
