use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use entity::enums::Grid;

use crate::{
    data::{pilot::PilotRepository, race_result::RaceResultRepository, team::TeamRepository},
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::team::{CreateTeamDto, TeamDto, UpdateTeamDto},
    state::AppState,
    util::parse,
};

/// POST /api/admin/teams
pub async fn create_team(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let grid: Grid = parse::parse_enum(&dto.grid, "grid")?;

    let team_repo = TeamRepository::new(&state.db);
    let team = team_repo.create(dto.name, dto.logo_url, grid).await?;

    Ok((StatusCode::CREATED, Json(TeamDto::from(team))))
}

/// PUT /api/admin/teams/{id}
pub async fn update_team(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
    Json(dto): Json<UpdateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let team_repo = TeamRepository::new(&state.db);

    if team_repo.find_by_id(team_id).await?.is_none() {
        return Err(AppError::NotFound("Team not found".to_string()));
    }

    let grid = dto
        .grid
        .as_deref()
        .map(|g| parse::parse_enum::<Grid>(g, "grid"))
        .transpose()?;

    let updated = team_repo
        .update(team_id, dto.name, dto.logo_url.map(Some), grid)
        .await?;

    Ok((StatusCode::OK, Json(TeamDto::from(updated))))
}

/// DELETE /api/admin/teams/{id}
/// Unassigns the team's pilots, then archives the team when its result
/// lines anchor past standings and deletes it otherwise
pub async fn delete_team(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let team_repo = TeamRepository::new(&state.db);
    let pilot_repo = PilotRepository::new(&state.db);
    let result_repo = RaceResultRepository::new(&state.db);

    if team_repo.find_by_id(team_id).await?.is_none() {
        return Err(AppError::NotFound("Team not found".to_string()));
    }

    for pilot in pilot_repo.get_by_team(team_id).await? {
        pilot_repo
            .update(
                pilot.id,
                crate::data::pilot::UpdatePilotParams {
                    team_id: Some(None),
                    ..Default::default()
                },
            )
            .await?;
    }

    let archived = result_repo.team_has_results(team_id).await?;
    if archived {
        team_repo.archive(team_id).await?;
    } else {
        team_repo.delete(team_id).await?;
    }

    Ok((StatusCode::OK, Json(serde_json::json!({ "archived": archived }))))
}
