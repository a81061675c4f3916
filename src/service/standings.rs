//! Championship standings, ballast assignment, and career history.
//!
//! Standings are always computed from the stored result lines rather than a
//! cached total, so a re-settled race or a tribunal refund is reflected
//! immediately.

use std::collections::{HashMap, HashSet};

use sea_orm::{ActiveEnum, DatabaseConnection};

use entity::enums::Grid;

use crate::{
    data::{
        pilot::PilotRepository, race::RaceRepository, race_result::RaceResultRepository,
        season::SeasonRepository, team::TeamRepository,
    },
    error::AppError,
    model::{
        pilot::CareerSeasonDto,
        standings::{ConstructorStandingDto, GridEntryDto, GridSheetDto, PilotStandingDto},
    },
};

/// Ballast ladder. The championship leader gets the slowest car, the tail of
/// the field the fastest, paired so teammates in the standings share a car.
pub const CAR_LADDER: [&str; 20] = [
    "Sauber",
    "Sauber",
    "Haas",
    "Haas",
    "Alpine",
    "Alpine",
    "Racing Bulls",
    "Racing Bulls",
    "Williams",
    "Williams",
    "Aston Martin",
    "Aston Martin",
    "Ferrari",
    "Ferrari",
    "Mercedes",
    "Mercedes",
    "Red Bull",
    "Red Bull",
    "McLaren",
    "McLaren",
];

/// Car handed to pilots ranked below the ladder.
pub const EXTRA_CAR: &str = "McLaren (Extra)";

fn ladder_car(rank: usize) -> String {
    CAR_LADDER
        .get(rank)
        .map(|c| c.to_string())
        .unwrap_or_else(|| EXTRA_CAR.to_string())
}

/// Pilot standings for one grid of the active season, best first.
///
/// Ties on points break on race wins. Each entry carries the ballast car its
/// position earns for upcoming rounds.
///
/// # Returns
/// - `Ok(Vec<PilotStandingDto>)`: Ordered standings, empty if no active season
/// - `Err(AppError)`: Database error
pub async fn pilot_standings(
    db: &DatabaseConnection,
    grid: Grid,
) -> Result<Vec<PilotStandingDto>, AppError> {
    let season_repo = SeasonRepository::new(db);

    let Some(season) = season_repo.find_active().await? else {
        return Ok(Vec::new());
    };

    let race_ids = season_race_ids(db, season.id).await?;

    let pilot_repo = PilotRepository::new(db);
    let result_repo = RaceResultRepository::new(db);
    let team_repo = TeamRepository::new(db);

    let pilots = pilot_repo.get_by_grid(grid).await?;

    let mut team_names: HashMap<i32, String> = HashMap::new();
    for team in team_repo.get_active().await? {
        team_names.insert(team.id, team.name);
    }

    let mut ranking = Vec::with_capacity(pilots.len());

    for pilot in pilots {
        let results = result_repo.get_by_pilot(pilot.id).await?;

        let mut points = 0.0;
        let mut wins = 0u32;

        for result in results.iter().filter(|r| race_ids.contains(&r.race_id)) {
            points += result.points;
            if result.position == 1 && !result.dsq {
                wins += 1;
            }
        }

        let team_name = pilot.team_id.and_then(|id| team_names.get(&id).cloned());

        ranking.push((pilot, team_name, points, wins));
    }

    sort_ranking(&mut ranking);

    Ok(ranking
        .into_iter()
        .enumerate()
        .map(|(i, (pilot, team_name, points, wins))| PilotStandingDto {
            position: i as u32 + 1,
            pilot_id: pilot.id,
            nickname: pilot.nickname,
            team_name,
            points,
            wins,
            car: Some(ladder_car(i)),
        })
        .collect())
}

/// Constructor standings for one grid of the active season.
pub async fn constructor_standings(
    db: &DatabaseConnection,
    grid: Grid,
) -> Result<Vec<ConstructorStandingDto>, AppError> {
    let season_repo = SeasonRepository::new(db);

    let Some(season) = season_repo.find_active().await? else {
        return Ok(Vec::new());
    };

    let race_ids = season_race_ids(db, season.id).await?;

    let team_repo = TeamRepository::new(db);
    let result_repo = RaceResultRepository::new(db);

    let teams = team_repo.get_active_by_grid(grid).await?;

    let mut ranking = Vec::with_capacity(teams.len());

    for team in teams {
        let mut points = 0.0;
        let mut wins = 0u32;

        // Points count toward whichever team the result line credits, which
        // preserves attribution across transfers and roster departures.
        let results = result_repo.get_by_team(team.id).await?;

        for result in results.iter().filter(|r| race_ids.contains(&r.race_id)) {
            points += result.points;
            if result.position == 1 && !result.dsq {
                wins += 1;
            }
        }

        ranking.push((team, points, wins));
    }

    ranking.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(b.2.cmp(&a.2))
    });

    Ok(ranking
        .into_iter()
        .enumerate()
        .map(|(i, (team, points, wins))| ConstructorStandingDto {
            position: i as u32 + 1,
            team_id: team.id,
            name: team.name,
            points,
            wins,
        })
        .collect())
}

/// Car assignments for one scheduled round.
///
/// Ballast is suspended on the opening and closing rounds of a grid's
/// calendar: everyone races on equal machinery when there are no standings
/// yet and when the title is decided.
///
/// # Returns
/// - `Ok(GridSheetDto)`: Entries in standings order
/// - `Err(AppError::NotFound)`: Race does not exist
pub async fn grid_sheet(db: &DatabaseConnection, race_id: i32) -> Result<GridSheetDto, AppError> {
    let race_repo = RaceRepository::new(db);

    let Some(race) = race_repo.find_by_id(race_id).await? else {
        return Err(AppError::NotFound(format!("Race {race_id} not found")));
    };

    let calendar = race_repo
        .get_by_season_and_grid(race.season_id, race.grid)
        .await?;

    let round = calendar
        .iter()
        .position(|r| r.id == race.id)
        .map(|i| i + 1)
        .unwrap_or(1);
    let total_rounds = calendar.len().max(1);

    let ballast_applies = round != 1 && round != total_rounds;

    let standings = pilot_standings(db, race.grid).await?;

    let entries = standings
        .into_iter()
        .enumerate()
        .map(|(i, s)| GridEntryDto {
            pilot_id: s.pilot_id,
            nickname: s.nickname,
            team_name: s.team_name,
            car: ballast_applies.then(|| ladder_car(i)),
        })
        .collect();

    Ok(GridSheetDto {
        race_id: race.id,
        gp_name: race.gp_name,
        ballast_applies,
        entries,
    })
}

/// A pilot's results summarized per season, newest season first. Each
/// summary names the grid the pilot predominantly raced in that season.
pub async fn career(
    db: &DatabaseConnection,
    pilot_id: i32,
) -> Result<Vec<CareerSeasonDto>, AppError> {
    let result_repo = RaceResultRepository::new(db);
    let race_repo = RaceRepository::new(db);
    let season_repo = SeasonRepository::new(db);

    let results = result_repo.get_by_pilot(pilot_id).await?;

    let mut race_seasons: HashMap<i32, i32> = HashMap::new();
    let mut race_grids: HashMap<i32, Grid> = HashMap::new();
    let mut summaries: HashMap<i32, CareerSeasonDto> = HashMap::new();
    let mut grid_counts: HashMap<i32, HashMap<Grid, u32>> = HashMap::new();

    for season in season_repo.get_all().await? {
        for race in race_repo.get_by_season(season.id).await? {
            race_seasons.insert(race.id, season.id);
            race_grids.insert(race.id, race.grid);
        }

        summaries.insert(
            season.id,
            CareerSeasonDto {
                season_id: season.id,
                season_name: season.name,
                grid: String::new(),
                points: 0.0,
                wins: 0,
                podiums: 0,
                races: 0,
            },
        );
    }

    for result in results {
        let Some(season_id) = race_seasons.get(&result.race_id) else {
            continue;
        };
        let Some(summary) = summaries.get_mut(season_id) else {
            continue;
        };

        summary.points += result.points;
        summary.races += 1;
        if result.position == 1 && !result.dsq {
            summary.wins += 1;
        }
        if (1..=3).contains(&result.position) && !result.dsq {
            summary.podiums += 1;
        }

        if let Some(grid) = race_grids.get(&result.race_id) {
            *grid_counts
                .entry(*season_id)
                .or_default()
                .entry(*grid)
                .or_insert(0u32) += 1;
        }
    }

    // The grid a pilot "raced in" for a season is the one most of their
    // results that season were scored in.
    for (season_id, counts) in grid_counts {
        let Some(summary) = summaries.get_mut(&season_id) else {
            continue;
        };

        if let Some(grid) = counts
            .into_iter()
            .max_by_key(|(grid, count)| (*count, grid.to_value()))
            .map(|(grid, _)| grid)
        {
            summary.grid = grid.to_value();
        }
    }

    let mut career: Vec<CareerSeasonDto> =
        summaries.into_values().filter(|s| s.races > 0).collect();
    career.sort_by(|a, b| b.season_id.cmp(&a.season_id));

    Ok(career)
}

async fn season_race_ids(
    db: &DatabaseConnection,
    season_id: i32,
) -> Result<HashSet<i32>, AppError> {
    let race_repo = RaceRepository::new(db);

    Ok(race_repo
        .get_by_season(season_id)
        .await?
        .into_iter()
        .map(|r| r.id)
        .collect())
}

fn sort_ranking(ranking: &mut [(entity::pilot::Model, Option<String>, f64, u32)]) {
    ranking.sort_by(|a, b| {
        b.2.partial_cmp(&a.2)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(b.3.cmp(&a.3))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[test]
    fn ladder_pairs_cars_and_overflows() {
        assert_eq!(ladder_car(0), "Sauber");
        assert_eq!(ladder_car(1), "Sauber");
        assert_eq!(ladder_car(18), "McLaren");
        assert_eq!(ladder_car(19), "McLaren");
        assert_eq!(ladder_car(20), EXTRA_CAR);
        assert_eq!(ladder_car(45), EXTRA_CAR);
    }

    #[tokio::test]
    async fn standings_order_by_points_then_wins() {
        let test = TestBuilder::new().with_result_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, leader) = factory::helpers::create_pilot_with_user(db).await.unwrap();
        let (_, runner_up) = factory::helpers::create_pilot_with_user(db).await.unwrap();
        let (season, race_one) = factory::helpers::create_race_with_season(db).await.unwrap();
        let race_two = factory::race::create_race(db, season.id).await.unwrap();

        // Same points, but the leader has a win.
        factory::race_result::RaceResultFactory::new(db, race_one.id, leader.id)
            .position(1)
            .points(35.0)
            .build()
            .await
            .unwrap();
        factory::race_result::RaceResultFactory::new(db, race_one.id, runner_up.id)
            .position(2)
            .points(30.0)
            .build()
            .await
            .unwrap();
        factory::race_result::RaceResultFactory::new(db, race_two.id, runner_up.id)
            .position(2)
            .points(5.0)
            .build()
            .await
            .unwrap();

        let standings = pilot_standings(db, Grid::Elite).await.unwrap();

        assert_eq!(standings.len(), 2);
        assert_eq!(standings[0].pilot_id, leader.id);
        assert_eq!(standings[0].points, 35.0);
        assert_eq!(standings[0].wins, 1);
        assert_eq!(standings[1].pilot_id, runner_up.id);
        assert_eq!(standings[1].points, 35.0);
    }

    #[tokio::test]
    async fn standings_are_empty_between_seasons() {
        let test = TestBuilder::new().with_result_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::helpers::create_pilot_with_user(db).await.unwrap();

        let standings = pilot_standings(db, Grid::Elite).await.unwrap();

        assert!(standings.is_empty());
    }

    #[tokio::test]
    async fn ballast_is_suspended_on_the_opening_and_closing_rounds() {
        let test = TestBuilder::new().with_result_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (season, opener) = factory::helpers::create_race_with_season(db).await.unwrap();
        let middle = factory::race::RaceFactory::new(db, season.id)
            .race_date(chrono::NaiveDate::from_ymd_opt(2026, 4, 1).unwrap())
            .build()
            .await
            .unwrap();
        let closer = factory::race::RaceFactory::new(db, season.id)
            .race_date(chrono::NaiveDate::from_ymd_opt(2026, 5, 1).unwrap())
            .build()
            .await
            .unwrap();

        assert!(!grid_sheet(db, opener.id).await.unwrap().ballast_applies);
        assert!(grid_sheet(db, middle.id).await.unwrap().ballast_applies);
        assert!(!grid_sheet(db, closer.id).await.unwrap().ballast_applies);
    }

    #[tokio::test]
    async fn constructor_points_follow_the_result_line_team() {
        let test = TestBuilder::new().with_result_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let team = factory::team::create_team(db).await.unwrap();
        let other = factory::team::create_team(db).await.unwrap();

        let user = factory::user::create_user(db).await.unwrap();
        let pilot = factory::pilot::PilotFactory::new(db, user.id)
            .team_id(team.id)
            .build()
            .await
            .unwrap();

        let (season, race_one) = factory::helpers::create_race_with_season(db).await.unwrap();
        let race_two = factory::race::create_race(db, season.id).await.unwrap();

        // One result scored for the current team, one left with the old team.
        factory::race_result::RaceResultFactory::new(db, race_one.id, pilot.id)
            .team_id(team.id)
            .position(1)
            .points(35.0)
            .build()
            .await
            .unwrap();
        factory::race_result::RaceResultFactory::new(db, race_two.id, pilot.id)
            .team_id(other.id)
            .position(2)
            .points(30.0)
            .build()
            .await
            .unwrap();

        let standings = constructor_standings(db, Grid::Elite).await.unwrap();

        let current = standings.iter().find(|s| s.team_id == team.id).unwrap();
        assert_eq!(current.points, 35.0);
    }

    #[tokio::test]
    async fn constructor_points_survive_a_roster_departure() {
        let test = TestBuilder::new().with_result_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let team = factory::team::create_team(db).await.unwrap();

        let user = factory::user::create_user(db).await.unwrap();
        let pilot = factory::pilot::PilotFactory::new(db, user.id)
            .team_id(team.id)
            .build()
            .await
            .unwrap();

        let (_, race) = factory::helpers::create_race_with_season(db).await.unwrap();

        factory::race_result::RaceResultFactory::new(db, race.id, pilot.id)
            .team_id(team.id)
            .position(1)
            .points(35.0)
            .build()
            .await
            .unwrap();

        // The pilot leaves the roster after the race was settled.
        crate::data::pilot::PilotRepository::new(db)
            .update(
                pilot.id,
                crate::data::pilot::UpdatePilotParams {
                    team_id: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let standings = constructor_standings(db, Grid::Elite).await.unwrap();

        let entry = standings.iter().find(|s| s.team_id == team.id).unwrap();
        assert_eq!(entry.points, 35.0);
        assert_eq!(entry.wins, 1);
    }

    #[tokio::test]
    async fn a_disqualified_first_place_is_not_a_win() {
        let test = TestBuilder::new().with_result_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, pilot) = factory::helpers::create_pilot_with_user(db).await.unwrap();
        let (_, race) = factory::helpers::create_race_with_season(db).await.unwrap();

        factory::race_result::RaceResultFactory::new(db, race.id, pilot.id)
            .position(1)
            .points(0.0)
            .dsq(true)
            .build()
            .await
            .unwrap();

        let standings = pilot_standings(db, Grid::Elite).await.unwrap();
        assert_eq!(standings[0].wins, 0);

        let career = career(db, pilot.id).await.unwrap();
        assert_eq!(career[0].wins, 0);
        assert_eq!(career[0].podiums, 0);
    }

    #[tokio::test]
    async fn career_summarizes_per_season() {
        let test = TestBuilder::new().with_result_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, pilot) = factory::helpers::create_pilot_with_user(db).await.unwrap();
        let (_, race) = factory::helpers::create_race_with_season(db).await.unwrap();

        factory::race_result::RaceResultFactory::new(db, race.id, pilot.id)
            .position(1)
            .points(35.0)
            .build()
            .await
            .unwrap();

        let career = career(db, pilot.id).await.unwrap();

        assert_eq!(career.len(), 1);
        assert_eq!(career[0].points, 35.0);
        assert_eq!(career[0].wins, 1);
        assert_eq!(career[0].podiums, 1);
        assert_eq!(career[0].races, 1);
        assert_eq!(career[0].grid, "ELITE");
    }

    #[tokio::test]
    async fn career_reports_the_predominant_grid() {
        let test = TestBuilder::new().with_result_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, pilot) = factory::helpers::create_pilot_with_user(db).await.unwrap();
        let (season, elite_one) = factory::helpers::create_race_with_season(db).await.unwrap();
        let elite_two = factory::race::create_race(db, season.id).await.unwrap();
        let advanced = factory::race::RaceFactory::new(db, season.id)
            .grid(Grid::Advanced)
            .build()
            .await
            .unwrap();

        for race_id in [elite_one.id, elite_two.id, advanced.id] {
            factory::race_result::RaceResultFactory::new(db, race_id, pilot.id)
                .position(5)
                .points(22.0)
                .build()
                .await
                .unwrap();
        }

        let career = career(db, pilot.id).await.unwrap();

        // Two elite rounds against one advanced round.
        assert_eq!(career[0].grid, "ELITE");
        assert_eq!(career[0].races, 3);
    }
}
