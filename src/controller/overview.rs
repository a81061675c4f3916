use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use tower_sessions::Session;

use entity::enums::{ProtestStatus, RaceStatus};

use crate::{
    data::season::SeasonRepository,
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{overview::OverviewDto, season::SeasonDto},
    state::AppState,
};

/// GET /api/admin/overview
/// Dashboard counts for race direction
pub async fn get_overview(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let season_repo = SeasonRepository::new(&state.db);

    let active_season = season_repo.find_active().await?.map(SeasonDto::from);

    let pilot_count = entity::prelude::Pilot::find().count(&state.db).await?;
    let team_count = entity::prelude::Team::find()
        .filter(entity::team::Column::Active.eq(true))
        .count(&state.db)
        .await?;
    let completed_races = entity::prelude::Race::find()
        .filter(entity::race::Column::Status.eq(RaceStatus::Completed))
        .count(&state.db)
        .await?;
    let open_protests = entity::prelude::Protest::find()
        .filter(entity::protest::Column::Status.ne(ProtestStatus::Closed))
        .count(&state.db)
        .await?;

    Ok((
        StatusCode::OK,
        Json(OverviewDto {
            active_season,
            pilot_count,
            team_count,
            completed_races,
            open_protests,
        }),
    ))
}
