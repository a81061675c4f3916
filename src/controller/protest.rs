//! Tribunal endpoints for race direction: voting and verdicts.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::ActiveEnum;
use tower_sessions::Session;

use entity::enums::Verdict;

use crate::{
    data::{
        pilot::PilotRepository, protest::ProtestRepository, race::RaceRepository,
        user::UserRepository,
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::protest::{CloseProtestDto, ProtestDto, ProtestListItemDto, ProtestVoteDto, VoteDto},
    service::tribunal,
    state::AppState,
    util::parse,
};

/// GET /api/admin/protests
pub async fn list_protests(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let protest_repo = ProtestRepository::new(&state.db);
    let race_repo = RaceRepository::new(&state.db);
    let pilot_repo = PilotRepository::new(&state.db);

    let mut dtos = Vec::new();

    for protest in protest_repo.get_all().await? {
        let gp_name = race_repo
            .find_by_id(protest.race_id)
            .await?
            .map(|r| r.gp_name)
            .unwrap_or_default();
        let accuser_nickname = pilot_repo
            .find_by_id(protest.accuser_id)
            .await?
            .map(|p| p.nickname)
            .unwrap_or_default();
        let accused_nickname = pilot_repo
            .find_by_id(protest.accused_id)
            .await?
            .map(|p| p.nickname)
            .unwrap_or_default();

        dtos.push(ProtestListItemDto {
            id: protest.id,
            race_id: protest.race_id,
            gp_name,
            accuser_nickname,
            accused_nickname,
            status: protest.status.to_value(),
            verdict: protest.verdict.map(|v| v.to_value()),
            created_at: protest.created_at,
        });
    }

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/admin/protests/{id}
pub async fn get_protest(
    State(state): State<AppState>,
    session: Session,
    Path(protest_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let protest_repo = ProtestRepository::new(&state.db);
    let race_repo = RaceRepository::new(&state.db);
    let pilot_repo = PilotRepository::new(&state.db);
    let user_repo = UserRepository::new(&state.db);

    let protest = protest_repo
        .find_by_id(protest_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Protest not found".to_string()))?;

    let gp_name = race_repo
        .find_by_id(protest.race_id)
        .await?
        .map(|r| r.gp_name)
        .unwrap_or_default();
    let accuser_nickname = pilot_repo
        .find_by_id(protest.accuser_id)
        .await?
        .map(|p| p.nickname)
        .unwrap_or_default();
    let accused_nickname = pilot_repo
        .find_by_id(protest.accused_id)
        .await?
        .map(|p| p.nickname)
        .unwrap_or_default();

    let mut votes = Vec::new();

    for vote in protest_repo.get_votes(protest_id).await? {
        let admin_username = user_repo
            .find_by_id(vote.admin_id)
            .await?
            .map(|u| u.username)
            .unwrap_or_default();

        votes.push(ProtestVoteDto {
            admin_id: vote.admin_id,
            admin_username,
            choice: vote.choice.to_value(),
        });
    }

    Ok((
        StatusCode::OK,
        Json(ProtestDto::from_model(
            protest,
            gp_name,
            accuser_nickname,
            accused_nickname,
            votes,
        )),
    ))
}

/// POST /api/admin/protests/{id}/votes
pub async fn cast_vote(
    State(state): State<AppState>,
    session: Session,
    Path(protest_id): Path<i32>,
    Json(dto): Json<VoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let choice: Verdict = parse::parse_enum(&dto.choice, "vote")?;

    tribunal::cast_vote(&state.db, protest_id, user.id, choice).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/admin/protests/{id}/close
/// Applies the verdict's penalty exactly once. Verdicts are reserved for
/// race direction; admins only vote.
pub async fn close_protest(
    State(state): State<AppState>,
    session: Session,
    Path(protest_id): Path<i32>,
    Json(dto): Json<CloseProtestDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    let verdict: Verdict = parse::parse_enum(&dto.verdict, "verdict")?;

    tribunal::close(&state.db, protest_id, verdict, dto.reason).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/admin/protests/{id}/reopen
/// Refunds the verdict's penalty and returns the protest to voting
pub async fn reopen_protest(
    State(state): State<AppState>,
    session: Session,
    Path(protest_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    tribunal::reopen(&state.db, protest_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/admin/protests/{id}
pub async fn delete_protest(
    State(state): State<AppState>,
    session: Session,
    Path(protest_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    tribunal::delete(&state.db, protest_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
