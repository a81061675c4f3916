//! Season lifecycle.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use entity::enums::{Grid, Role};

use crate::{
    data::{
        pilot::{PilotRepository, UpdatePilotParams},
        season::SeasonRepository,
        team::TeamRepository,
        user::UserRepository,
    },
    error::AppError,
    service::scoring,
};

/// Opens a new season. Only one season may be active at a time.
///
/// # Returns
/// - `Ok(Model)`: The new active season
/// - `Err(AppError::Conflict)`: Another season is still active
pub async fn create(
    db: &DatabaseConnection,
    name: String,
    start_date: NaiveDate,
) -> Result<entity::season::Model, AppError> {
    let season_repo = SeasonRepository::new(db);

    if season_repo.find_active().await?.is_some() {
        return Err(AppError::Conflict(
            "Close the current season before opening a new one".to_string(),
        ));
    }

    Ok(season_repo.create(name, start_date).await?)
}

/// Closes a season and resets the league for the next one.
///
/// Every pilot except race direction returns to a full license, zero
/// warnings, no team, and the unranked grid. All teams are archived. Race
/// results are kept untouched for the history books.
///
/// # Returns
/// - `Ok(Model)`: The closed season
/// - `Err(AppError::NotFound)`: Season does not exist
/// - `Err(AppError::Conflict)`: Season is already closed
pub async fn close(
    db: &DatabaseConnection,
    season_id: i32,
) -> Result<entity::season::Model, AppError> {
    let season_repo = SeasonRepository::new(db);
    let pilot_repo = PilotRepository::new(db);
    let user_repo = UserRepository::new(db);
    let team_repo = TeamRepository::new(db);

    let Some(season) = season_repo.find_by_id(season_id).await? else {
        return Err(AppError::NotFound(format!("Season {season_id} not found")));
    };
    if !season.active {
        return Err(AppError::Conflict(
            "This season is already closed".to_string(),
        ));
    }

    for pilot in pilot_repo.get_all().await? {
        let Some(user) = user_repo.find_by_id(pilot.user_id).await? else {
            continue;
        };

        // Race direction keeps its standing placement across seasons.
        if user.role == Role::SuperAdmin {
            continue;
        }

        pilot_repo
            .update(
                pilot.id,
                UpdatePilotParams {
                    grid: Some(Grid::Unranked),
                    team_id: Some(None),
                    cnh_points: Some(scoring::STARTING_CNH),
                    warnings: Some(0),
                    ..Default::default()
                },
            )
            .await?;
    }

    let archived = team_repo.archive_all().await?;
    let closed = season_repo.deactivate(season_id).await?;

    tracing::info!(
        "Closed season {}, archived {} teams and reset pilot licenses",
        season_id,
        archived
    );

    Ok(closed)
}
