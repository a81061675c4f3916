use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    data::news::NewsRepository,
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::news::{CreateNewsDto, NewsDto, UpdateNewsDto},
    state::AppState,
};

/// POST /api/admin/news
pub async fn create_news(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateNewsDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let news_repo = NewsRepository::new(&state.db);

    let article = news_repo
        .create(dto.title, dto.subtitle, dto.body, dto.image_url, user.id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(NewsDto::from_model(article, user.username)),
    ))
}

/// PUT /api/admin/news/{id}
pub async fn update_news(
    State(state): State<AppState>,
    session: Session,
    Path(news_id): Path<i32>,
    Json(dto): Json<UpdateNewsDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let news_repo = NewsRepository::new(&state.db);
    let user_repo = crate::data::user::UserRepository::new(&state.db);

    if news_repo.find_by_id(news_id).await?.is_none() {
        return Err(AppError::NotFound("Article not found".to_string()));
    }

    let updated = news_repo
        .update(
            news_id,
            dto.title,
            dto.subtitle.map(Some),
            dto.body,
            dto.image_url.map(Some),
        )
        .await?;

    let author_name = user_repo
        .find_by_id(updated.author_id)
        .await?
        .map(|u| u.username)
        .unwrap_or_default();

    Ok((
        StatusCode::OK,
        Json(NewsDto::from_model(updated, author_name)),
    ))
}

/// DELETE /api/admin/news/{id}
pub async fn delete_news(
    State(state): State<AppState>,
    session: Session,
    Path(news_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let news_repo = NewsRepository::new(&state.db);

    if news_repo.find_by_id(news_id).await?.is_none() {
        return Err(AppError::NotFound("Article not found".to_string()));
    }

    news_repo.delete(news_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
