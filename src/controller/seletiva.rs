use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::ActiveEnum;
use tower_sessions::Session;

use crate::{
    data::{pilot::PilotRepository, seletiva::SeletivaRepository},
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::seletiva::{RecordTimeDto, SeletivaEntryDto},
    service::seletiva,
    state::AppState,
};

/// GET /api/admin/seletiva
/// Current ranking, fastest first
pub async fn list_entries(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let seletiva_repo = SeletivaRepository::new(&state.db);
    let pilot_repo = PilotRepository::new(&state.db);

    let mut dtos = Vec::new();

    for (rank, entry) in seletiva_repo.get_ranked().await?.into_iter().enumerate() {
        let nickname = pilot_repo
            .find_by_id(entry.pilot_id)
            .await?
            .map(|p| p.nickname)
            .unwrap_or_default();

        dtos.push(SeletivaEntryDto {
            rank: rank as u32 + 1,
            pilot_id: entry.pilot_id,
            nickname,
            time_ms: entry.time_ms,
            time_display: entry.time_display,
            recorded_at: entry.recorded_at,
        });
    }

    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /api/admin/seletiva/times
pub async fn record_time(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<RecordTimeDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let entry = seletiva::record_time(&state.db, dto.pilot_id, &dto.time).await?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "pilot_id": entry.pilot_id,
            "time_ms": entry.time_ms,
            "time_display": entry.time_display,
        })),
    ))
}

/// DELETE /api/admin/seletiva/times/{pilot_id}
pub async fn delete_entry(
    State(state): State<AppState>,
    session: Session,
    Path(pilot_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let seletiva_repo = SeletivaRepository::new(&state.db);

    if seletiva_repo.delete_by_pilot(pilot_id).await? == 0 {
        return Err(AppError::NotFound(
            "No seletiva entry for this pilot".to_string(),
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/admin/seletiva/close
/// Applies grid placements from the final ranking. Race direction only
pub async fn close(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    let placements = seletiva::close(&state.db).await?;

    let placed: Vec<serde_json::Value> = placements
        .into_iter()
        .map(|(pilot, grid)| {
            serde_json::json!({
                "pilot_id": pilot.id,
                "nickname": pilot.nickname,
                "grid": grid.to_value(),
            })
        })
        .collect();

    Ok((StatusCode::OK, Json(placed)))
}
