use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    data::invite::InviteRepository,
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::invite::{CreateInviteDto, InviteDto},
    service::invite,
    state::AppState,
};

/// GET /api/admin/invites
pub async fn list_invites(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let invite_repo = InviteRepository::new(&state.db);

    let dtos: Vec<InviteDto> = invite_repo
        .get_all()
        .await?
        .into_iter()
        .map(InviteDto::from)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /api/admin/invites
pub async fn create_invite(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateInviteDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let created = invite::create_invite(&state.db, dto.email).await?;

    Ok((StatusCode::CREATED, Json(InviteDto::from(created))))
}

/// DELETE /api/admin/invites/{id}
pub async fn delete_invite(
    State(state): State<AppState>,
    session: Session,
    Path(invite_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let invite_repo = InviteRepository::new(&state.db);

    invite_repo.delete(invite_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
