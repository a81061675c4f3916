use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

/// Session key holding the authenticated user's id
pub static SESSION_AUTH_USER_ID: &str = "auth:user_id";

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::auth::{LoginDto, RegisterDto, SessionUserDto},
    service::auth,
    state::AppState,
};

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = auth::login(&state.db, &dto.username, &dto.password).await?;

    session.insert(SESSION_AUTH_USER_ID, user.id).await?;

    Ok((StatusCode::OK, Json(SessionUserDto::from(user))))
}

/// POST /api/auth/register
/// Creates an account from an invite token and logs it in
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = auth::register(&state.db, dto).await?;

    session.insert(SESSION_AUTH_USER_ID, user.id).await?;

    Ok((StatusCode::CREATED, Json(SessionUserDto::from(user))))
}

/// GET /api/auth/logout
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    session.flush().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/user
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(SessionUserDto::from(user))))
}
