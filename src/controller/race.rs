//! Race administration: scheduling, results settlement, and grid sheets.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use entity::enums::{Absence, Grid, RaceKind};

use crate::{
    data::{
        pilot::PilotRepository, race::RaceRepository, registration::RegistrationRepository,
        season::SeasonRepository,
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        race::{CreateRaceDto, RaceDto, RegistrationDto, UpdateRaceDto},
        result::SaveResultsDto,
    },
    service::{
        results::{self, SaveResultLine},
        standings,
    },
    state::AppState,
    util::parse,
};

/// POST /api/admin/races
pub async fn create_race(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateRaceDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let season_repo = SeasonRepository::new(&state.db);
    let race_repo = RaceRepository::new(&state.db);

    let season = season_repo
        .find_by_id(dto.season_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Season not found".to_string()))?;
    if !season.active {
        return Err(AppError::BadRequest(
            "Races can only be scheduled in the active season".to_string(),
        ));
    }

    let grid: Grid = parse::parse_enum(&dto.grid, "grid")?;
    let kind: RaceKind = parse::parse_enum(&dto.kind, "race kind")?;

    let race = race_repo
        .create(dto.season_id, dto.gp_name, dto.track, dto.race_date, grid, kind)
        .await?;

    Ok((StatusCode::CREATED, Json(RaceDto::from(race))))
}

/// PUT /api/admin/races/{id}
pub async fn update_race(
    State(state): State<AppState>,
    session: Session,
    Path(race_id): Path<i32>,
    Json(dto): Json<UpdateRaceDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let race_repo = RaceRepository::new(&state.db);
    let season_repo = SeasonRepository::new(&state.db);

    let Some(race) = race_repo.find_by_id(race_id).await? else {
        return Err(AppError::NotFound("Race not found".to_string()));
    };

    let archived = season_repo
        .find_by_id(race.season_id)
        .await?
        .is_none_or(|s| !s.active);
    if archived {
        return Err(AppError::BadRequest(
            "Races in an archived season cannot be edited".to_string(),
        ));
    }

    let grid = dto
        .grid
        .as_deref()
        .map(|g| parse::parse_enum::<Grid>(g, "grid"))
        .transpose()?;
    let kind = dto
        .kind
        .as_deref()
        .map(|k| parse::parse_enum::<RaceKind>(k, "race kind"))
        .transpose()?;

    let updated = race_repo
        .update(
            race_id,
            dto.gp_name,
            dto.track,
            dto.race_date.map(Some),
            grid,
            kind,
        )
        .await?;

    Ok((StatusCode::OK, Json(RaceDto::from(updated))))
}

/// DELETE /api/admin/races/{id}
/// Removes the race and refunds any license deductions its results made
pub async fn delete_race(
    State(state): State<AppState>,
    session: Session,
    Path(race_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    results::delete_race(&state.db, race_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/admin/races/{id}/registrations
pub async fn list_registrations(
    State(state): State<AppState>,
    session: Session,
    Path(race_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let race_repo = RaceRepository::new(&state.db);
    let registration_repo = RegistrationRepository::new(&state.db);
    let pilot_repo = PilotRepository::new(&state.db);

    if race_repo.find_by_id(race_id).await?.is_none() {
        return Err(AppError::NotFound("Race not found".to_string()));
    }

    let mut dtos = Vec::new();

    for registration in registration_repo.get_by_race(race_id).await? {
        let nickname = pilot_repo
            .find_by_id(registration.pilot_id)
            .await?
            .map(|p| p.nickname)
            .unwrap_or_default();

        dtos.push(RegistrationDto::from_model(registration, nickname));
    }

    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /api/admin/races/{id}/results
/// Settles the race from a complete results sheet; safe to re-submit
pub async fn save_results(
    State(state): State<AppState>,
    session: Session,
    Path(race_id): Path<i32>,
    Json(dto): Json<SaveResultsDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let mut lines = Vec::with_capacity(dto.lines.len());

    for line in dto.lines {
        let absence = line
            .absence
            .as_deref()
            .map(|a| parse::parse_enum::<Absence>(a, "absence"))
            .transpose()?;

        lines.push(SaveResultLine {
            pilot_id: line.pilot_id,
            team_id: line.team_id,
            position: line.position,
            dnf: line.dnf,
            dsq: line.dsq,
            fastest_lap: line.fastest_lap,
            driver_of_the_day: line.driver_of_the_day,
            fan_favorite: line.fan_favorite,
            absence,
        });
    }

    let stored = results::save_results(&state.db, race_id, lines).await?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "saved": stored.len() })),
    ))
}

/// GET /api/admin/races/{id}/grid-sheet
pub async fn grid_sheet(
    State(state): State<AppState>,
    session: Session,
    Path(race_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let sheet = standings::grid_sheet(&state.db, race_id).await?;

    Ok((StatusCode::OK, Json(sheet)))
}
