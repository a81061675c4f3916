use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use entity::enums::Grid;

use crate::{
    data::{
        pilot::{PilotRepository, UpdatePilotParams},
        team::TeamRepository,
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::pilot::{PilotDto, UpdatePilotDto},
    service::pilot,
    state::AppState,
    util::parse,
};

/// PUT /api/admin/pilots/{id}
/// Edits any pilot field, including grid, team, and disciplinary counters
pub async fn update_pilot(
    State(state): State<AppState>,
    session: Session,
    Path(pilot_id): Path<i32>,
    Json(dto): Json<UpdatePilotDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let pilot_repo = PilotRepository::new(&state.db);
    let team_repo = TeamRepository::new(&state.db);

    if pilot_repo.find_by_id(pilot_id).await?.is_none() {
        return Err(AppError::NotFound("Pilot not found".to_string()));
    }

    let grid = dto
        .grid
        .as_deref()
        .map(|g| parse::parse_enum::<Grid>(g, "grid"))
        .transpose()?;

    if let Some(Some(team_id)) = dto.team_id {
        if team_repo.find_by_id(team_id).await?.is_none() {
            return Err(AppError::NotFound("Team not found".to_string()));
        }
    }

    let updated = pilot_repo
        .update(
            pilot_id,
            UpdatePilotParams {
                nickname: dto.nickname,
                real_name: dto.real_name,
                photo_url: dto.photo_url.map(Some),
                phone: dto.phone.map(Some),
                grid,
                team_id: dto.team_id,
                cnh_points: dto.cnh_points,
                warnings: dto.warnings,
            },
        )
        .await?;

    let team_name = match updated.team_id {
        Some(team_id) => team_repo.find_by_id(team_id).await?.map(|t| t.name),
        None => None,
    };

    Ok((StatusCode::OK, Json(PilotDto::from_model(updated, team_name))))
}

/// DELETE /api/admin/pilots/{id}
/// Anonymizes pilots with race history, purges the rest
pub async fn remove_pilot(
    State(state): State<AppState>,
    session: Session,
    Path(pilot_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let anonymized = pilot::remove_pilot(&state.db, pilot_id).await?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "anonymized": anonymized })),
    ))
}
