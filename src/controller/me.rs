//! Endpoints for the logged-in pilot: profile, check-in, and protests.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::ActiveEnum;
use tower_sessions::Session;

use entity::enums::RegistrationStatus;

use crate::{
    data::{
        pilot::{PilotRepository, UpdatePilotParams},
        protest::{OpenProtestParams, ProtestRepository},
        race::RaceRepository,
        registration::RegistrationRepository,
        team::TeamRepository,
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        pilot::{PilotDto, UpdateProfileDto},
        protest::{DefenseDto, OpenProtestDto, ProtestListItemDto},
        race::AbsenceDto,
    },
    service::tribunal,
    state::AppState,
};

/// GET /api/me
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let (_user, pilot) = AuthGuard::new(&state.db, &session).require_pilot().await?;

    let team_repo = TeamRepository::new(&state.db);

    let team_name = match pilot.team_id {
        Some(team_id) => team_repo.find_by_id(team_id).await?.map(|t| t.name),
        None => None,
    };

    Ok((StatusCode::OK, Json(PilotDto::from_model(pilot, team_name))))
}

/// PUT /api/me
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let (_user, pilot) = AuthGuard::new(&state.db, &session).require_pilot().await?;

    let pilot_repo = PilotRepository::new(&state.db);

    let updated = pilot_repo
        .update(
            pilot.id,
            UpdatePilotParams {
                nickname: dto.nickname,
                real_name: dto.real_name,
                photo_url: dto.photo_url.map(Some),
                phone: dto.phone.map(Some),
                ..Default::default()
            },
        )
        .await?;

    let team_repo = TeamRepository::new(&state.db);
    let team_name = match updated.team_id {
        Some(team_id) => team_repo.find_by_id(team_id).await?.map(|t| t.name),
        None => None,
    };

    Ok((StatusCode::OK, Json(PilotDto::from_model(updated, team_name))))
}

/// POST /api/races/{id}/checkin
/// Confirms attendance for a race
pub async fn checkin(
    State(state): State<AppState>,
    session: Session,
    Path(race_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let (_user, pilot) = AuthGuard::new(&state.db, &session).require_pilot().await?;

    if pilot.is_banned() {
        return Err(AppError::BadRequest(
            "Banned pilots cannot check in".to_string(),
        ));
    }

    respond_to_race(&state, race_id, pilot.id, RegistrationStatus::Confirmed, None).await
}

/// POST /api/races/{id}/absence
/// Declares a justified absence ahead of a race
pub async fn declare_absence(
    State(state): State<AppState>,
    session: Session,
    Path(race_id): Path<i32>,
    Json(dto): Json<AbsenceDto>,
) -> Result<impl IntoResponse, AppError> {
    let (_user, pilot) = AuthGuard::new(&state.db, &session).require_pilot().await?;

    let excuse = dto
        .excuse
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .ok_or_else(|| {
            AppError::BadRequest("A justified absence requires an excuse".to_string())
        })?;

    respond_to_race(
        &state,
        race_id,
        pilot.id,
        RegistrationStatus::Justified,
        Some(excuse),
    )
    .await
}

async fn respond_to_race(
    state: &AppState,
    race_id: i32,
    pilot_id: i32,
    status: RegistrationStatus,
    excuse: Option<String>,
) -> Result<(StatusCode, Json<crate::model::race::RegistrationDto>), AppError> {
    let race_repo = RaceRepository::new(&state.db);
    let registration_repo = RegistrationRepository::new(&state.db);
    let pilot_repo = PilotRepository::new(&state.db);

    let race = race_repo
        .find_by_id(race_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Race not found".to_string()))?;

    if race.status != entity::enums::RaceStatus::Scheduled {
        return Err(AppError::BadRequest(
            "Check-in has closed for this race".to_string(),
        ));
    }

    let registration = registration_repo
        .upsert(race_id, pilot_id, status, excuse)
        .await?;

    let nickname = pilot_repo
        .find_by_id(pilot_id)
        .await?
        .map(|p| p.nickname)
        .unwrap_or_default();

    Ok((
        StatusCode::OK,
        Json(crate::model::race::RegistrationDto::from_model(
            registration,
            nickname,
        )),
    ))
}

/// POST /api/protests
pub async fn open_protest(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<OpenProtestDto>,
) -> Result<impl IntoResponse, AppError> {
    let (_user, pilot) = AuthGuard::new(&state.db, &session).require_pilot().await?;

    let protest = tribunal::open(
        &state.db,
        pilot.id,
        OpenProtestParams {
            race_id: dto.race_id,
            accuser_id: pilot.id,
            accused_id: dto.accused_id,
            video_url: dto.video_url,
            minute_mark: dto.minute_mark,
            description: dto.description,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(serde_json::json!({ "id": protest.id }))))
}

/// GET /api/me/protests
/// Protests the pilot is a party to, either side
pub async fn my_protests(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let (_user, pilot) = AuthGuard::new(&state.db, &session).require_pilot().await?;

    let protest_repo = ProtestRepository::new(&state.db);
    let race_repo = RaceRepository::new(&state.db);
    let pilot_repo = PilotRepository::new(&state.db);

    let mut dtos = Vec::new();

    for protest in protest_repo.get_by_pilot(pilot.id).await? {
        let gp_name = race_repo
            .find_by_id(protest.race_id)
            .await?
            .map(|r| r.gp_name)
            .unwrap_or_default();
        let accuser = pilot_repo
            .find_by_id(protest.accuser_id)
            .await?
            .map(|p| p.nickname)
            .unwrap_or_default();
        let accused = pilot_repo
            .find_by_id(protest.accused_id)
            .await?
            .map(|p| p.nickname)
            .unwrap_or_default();

        dtos.push(ProtestListItemDto {
            id: protest.id,
            race_id: protest.race_id,
            gp_name,
            accuser_nickname: accuser,
            accused_nickname: accused,
            status: protest.status.to_value(),
            verdict: protest.verdict.map(|v| v.to_value()),
            created_at: protest.created_at,
        });
    }

    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /api/protests/{id}/defense
pub async fn submit_defense(
    State(state): State<AppState>,
    session: Session,
    Path(protest_id): Path<i32>,
    Json(dto): Json<DefenseDto>,
) -> Result<impl IntoResponse, AppError> {
    let (_user, pilot) = AuthGuard::new(&state.db, &session).require_pilot().await?;

    tribunal::submit_defense(
        &state.db,
        protest_id,
        pilot.id,
        dto.defense_video_url,
        dto.defense_argument,
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/protests/{id}
/// Withdraws the pilot's own protest
pub async fn withdraw_protest(
    State(state): State<AppState>,
    session: Session,
    Path(protest_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let (_user, pilot) = AuthGuard::new(&state.db, &session).require_pilot().await?;

    tribunal::withdraw(&state.db, protest_id, pilot.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
