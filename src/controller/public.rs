//! Read-only endpoints for the public league site. No session required.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use entity::enums::Grid;

use crate::{
    data::{
        news::NewsRepository, pilot::PilotRepository, race::RaceRepository,
        race_result::RaceResultRepository, season::SeasonRepository, team::TeamRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        news::NewsDto, pilot::PilotDto, race::RaceDto, result::RaceResultDto, team::TeamDto,
    },
    service::standings,
    state::AppState,
    util::parse,
};

#[derive(Deserialize)]
pub struct NewsQuery {
    #[serde(default = "default_news_limit")]
    pub limit: u64,
}

fn default_news_limit() -> u64 {
    20
}

/// GET /api/news
pub async fn list_news(
    State(state): State<AppState>,
    query: Query<NewsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let news_repo = NewsRepository::new(&state.db);
    let user_repo = UserRepository::new(&state.db);

    let mut dtos = Vec::new();

    for article in news_repo.get_latest(query.limit).await? {
        let author_name = user_repo
            .find_by_id(article.author_id)
            .await?
            .map(|u| u.username)
            .unwrap_or_default();

        dtos.push(NewsDto::from_model(article, author_name));
    }

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/news/{id}
pub async fn get_news(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let news_repo = NewsRepository::new(&state.db);
    let user_repo = UserRepository::new(&state.db);

    let article = news_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Article not found".to_string()))?;

    let author_name = user_repo
        .find_by_id(article.author_id)
        .await?
        .map(|u| u.username)
        .unwrap_or_default();

    Ok((StatusCode::OK, Json(NewsDto::from_model(article, author_name))))
}

/// GET /api/standings/{grid}
pub async fn pilot_standings(
    State(state): State<AppState>,
    Path(grid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let grid: Grid = parse::parse_enum(&grid, "grid")?;

    let dtos = standings::pilot_standings(&state.db, grid).await?;

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/standings/{grid}/constructors
pub async fn constructor_standings(
    State(state): State<AppState>,
    Path(grid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let grid: Grid = parse::parse_enum(&grid, "grid")?;

    let dtos = standings::constructor_standings(&state.db, grid).await?;

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/calendar/{grid}
/// The active season's races for one grid, in date order
pub async fn calendar(
    State(state): State<AppState>,
    Path(grid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let grid: Grid = parse::parse_enum(&grid, "grid")?;

    let season_repo = SeasonRepository::new(&state.db);
    let race_repo = RaceRepository::new(&state.db);

    let races = match season_repo.find_active().await? {
        Some(season) => race_repo.get_by_season_and_grid(season.id, grid).await?,
        None => Vec::new(),
    };

    let dtos: Vec<RaceDto> = races.into_iter().map(RaceDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/races/{id}/results
pub async fn race_results(
    State(state): State<AppState>,
    Path(race_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let race_repo = RaceRepository::new(&state.db);
    let result_repo = RaceResultRepository::new(&state.db);
    let pilot_repo = PilotRepository::new(&state.db);
    let team_repo = TeamRepository::new(&state.db);

    if race_repo.find_by_id(race_id).await?.is_none() {
        return Err(AppError::NotFound("Race not found".to_string()));
    }

    let mut team_names: HashMap<i32, String> = HashMap::new();
    let mut dtos = Vec::new();

    for result in result_repo.get_by_race(race_id).await? {
        let nickname = pilot_repo
            .find_by_id(result.pilot_id)
            .await?
            .map(|p| p.nickname)
            .unwrap_or_default();

        let team_name = match result.team_id {
            Some(team_id) => match team_names.get(&team_id) {
                Some(name) => Some(name.clone()),
                None => {
                    let name = team_repo.find_by_id(team_id).await?.map(|t| t.name);
                    if let Some(ref name) = name {
                        team_names.insert(team_id, name.clone());
                    }
                    name
                }
            },
            None => None,
        };

        dtos.push(RaceResultDto::from_model(result, nickname, team_name));
    }

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/pilots
pub async fn list_pilots(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let pilot_repo = PilotRepository::new(&state.db);
    let team_repo = TeamRepository::new(&state.db);

    let mut team_names: HashMap<i32, String> = HashMap::new();
    for team in team_repo.get_active().await? {
        team_names.insert(team.id, team.name);
    }

    let dtos: Vec<PilotDto> = pilot_repo
        .get_all()
        .await?
        .into_iter()
        .map(|pilot| {
            let team_name = pilot.team_id.and_then(|id| team_names.get(&id).cloned());
            PilotDto::from_model(pilot, team_name)
        })
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/pilots/{id}
pub async fn get_pilot(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let pilot_repo = PilotRepository::new(&state.db);
    let team_repo = TeamRepository::new(&state.db);

    let pilot = pilot_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Pilot not found".to_string()))?;

    let team_name = match pilot.team_id {
        Some(team_id) => team_repo.find_by_id(team_id).await?.map(|t| t.name),
        None => None,
    };

    Ok((StatusCode::OK, Json(PilotDto::from_model(pilot, team_name))))
}

/// GET /api/pilots/{id}/career
pub async fn pilot_career(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let pilot_repo = PilotRepository::new(&state.db);

    if pilot_repo.find_by_id(id).await?.is_none() {
        return Err(AppError::NotFound("Pilot not found".to_string()));
    }

    let career = standings::career(&state.db, id).await?;

    Ok((StatusCode::OK, Json(career)))
}

/// GET /api/teams
pub async fn list_teams(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let team_repo = TeamRepository::new(&state.db);

    let dtos: Vec<TeamDto> = team_repo
        .get_active()
        .await?
        .into_iter()
        .map(TeamDto::from)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/teams/{id}
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let team_repo = TeamRepository::new(&state.db);

    let team = team_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

    Ok((StatusCode::OK, Json(TeamDto::from(team))))
}
