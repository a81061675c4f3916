use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    data::season::SeasonRepository,
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::season::{CreateSeasonDto, SeasonDto},
    service::season,
    state::AppState,
};

/// GET /api/admin/seasons
pub async fn list_seasons(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let season_repo = SeasonRepository::new(&state.db);

    let dtos: Vec<SeasonDto> = season_repo
        .get_all()
        .await?
        .into_iter()
        .map(SeasonDto::from)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /api/admin/seasons
pub async fn create_season(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateSeasonDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let created = season::create(&state.db, dto.name, dto.start_date).await?;

    Ok((StatusCode::CREATED, Json(SeasonDto::from(created))))
}

/// POST /api/admin/seasons/{id}/close
/// Closing a season is irreversible, so it is reserved for race direction
pub async fn close_season(
    State(state): State<AppState>,
    session: Session,
    Path(season_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    let closed = season::close(&state.db, season_id).await?;

    Ok((StatusCode::OK, Json(SeasonDto::from(closed))))
}
