//! Account management, restricted to race direction's top role.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use entity::enums::Role;

use crate::{
    data::user::UserRepository,
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    service::auth,
    state::AppState,
    util::parse,
};

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    let user_repo = UserRepository::new(&state.db);

    let dtos: Vec<UserDto> = user_repo
        .get_all()
        .await?
        .into_iter()
        .map(UserDto::from)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /api/admin/users
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    let user_repo = UserRepository::new(&state.db);

    if user_repo.find_by_username(&dto.username).await?.is_some() {
        return Err(AppError::BadRequest(
            "This username is already taken".to_string(),
        ));
    }
    if user_repo.find_by_email(&dto.email).await?.is_some() {
        return Err(AppError::BadRequest(
            "An account with this email already exists".to_string(),
        ));
    }

    let role: Role = parse::parse_enum(&dto.role, "role")?;
    let password_hash = auth::hash_password(&dto.password)?;

    let user = user_repo
        .create(dto.username, dto.email, password_hash, role)
        .await?;

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

/// PUT /api/admin/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(dto): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    let user_repo = UserRepository::new(&state.db);

    if user_repo.find_by_id(user_id).await?.is_none() {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    let role = dto
        .role
        .as_deref()
        .map(|r| parse::parse_enum::<Role>(r, "role"))
        .transpose()?;

    let password_hash = dto
        .password
        .as_deref()
        .map(auth::hash_password)
        .transpose()?;

    let updated = user_repo
        .update(user_id, dto.username, dto.email, password_hash, role)
        .await?;

    Ok((StatusCode::OK, Json(UserDto::from(updated))))
}

/// DELETE /api/admin/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    if caller.id == user_id {
        return Err(AppError::BadRequest(
            "You cannot delete your own account".to_string(),
        ));
    }

    let user_repo = UserRepository::new(&state.db);
    let pilot_repo = crate::data::pilot::PilotRepository::new(&state.db);

    if user_repo.find_by_id(user_id).await?.is_none() {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    // Accounts with a raced pilot profile are anonymized instead of deleted
    // so historical results keep their anchor.
    if let Some(pilot) = pilot_repo.find_by_user_id(user_id).await? {
        crate::service::pilot::remove_pilot(&state.db, pilot.id).await?;
    } else {
        user_repo.delete(user_id).await?;
    }

    Ok(StatusCode::NO_CONTENT)
}
