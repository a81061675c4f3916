//! Qualifying seletiva: time trials that place pilots into grids.
//!
//! The seletiva runs between seasons. Lap times rank every entrant, and
//! closing the board assigns grids by rank: the fastest twenty make the
//! elite grid, the next twenty advanced, the next twenty initial, and
//! everyone else goes to the reserve pool.

use sea_orm::DatabaseConnection;

use entity::enums::Grid;

use crate::{
    data::{
        pilot::{PilotRepository, UpdatePilotParams},
        season::SeasonRepository,
        seletiva::SeletivaRepository,
    },
    error::AppError,
    util::parse,
};

const ELITE_CUTOFF: usize = 20;
const ADVANCED_CUTOFF: usize = 40;
const INITIAL_CUTOFF: usize = 60;

fn grid_for_rank(rank: usize) -> Grid {
    if rank < ELITE_CUTOFF {
        Grid::Elite
    } else if rank < ADVANCED_CUTOFF {
        Grid::Advanced
    } else if rank < INITIAL_CUTOFF {
        Grid::Initial
    } else {
        Grid::Reserve
    }
}

async fn ensure_off_season(db: &DatabaseConnection) -> Result<(), AppError> {
    let season_repo = SeasonRepository::new(db);

    if season_repo.find_active().await?.is_some() {
        return Err(AppError::BadRequest(
            "The seletiva only runs between seasons".to_string(),
        ));
    }

    Ok(())
}

/// Records a pilot's qualifying lap, replacing any earlier one.
///
/// # Arguments
/// - `pilot_id`: Entrant
/// - `time`: Lap time as text, `M:SS.mmm`
///
/// # Returns
/// - `Ok(Model)`: The stored entry
/// - `Err(AppError::BadRequest)`: Malformed time or a season is running
/// - `Err(AppError::NotFound)`: Pilot does not exist
pub async fn record_time(
    db: &DatabaseConnection,
    pilot_id: i32,
    time: &str,
) -> Result<entity::seletiva_entry::Model, AppError> {
    ensure_off_season(db).await?;

    let pilot_repo = PilotRepository::new(db);
    let seletiva_repo = SeletivaRepository::new(db);

    if pilot_repo.find_by_id(pilot_id).await?.is_none() {
        return Err(AppError::NotFound(format!("Pilot {pilot_id} not found")));
    }

    let time_ms = parse::parse_lap_time(time)?;
    let display = parse::format_lap_time(time_ms);

    Ok(seletiva_repo.upsert(pilot_id, time_ms, display).await?)
}

/// Applies grid placements from the final ranking.
///
/// The recorded times stay on the board afterwards so the final ranking can
/// still be consulted; entries are removed one by one through the admin
/// surface when no longer wanted.
///
/// # Returns
/// - `Ok(Vec<(Model, Grid)>)`: Each placed pilot with their new grid
/// - `Err(AppError::BadRequest)`: A season is running, or the board is empty
pub async fn close(
    db: &DatabaseConnection,
) -> Result<Vec<(entity::pilot::Model, Grid)>, AppError> {
    ensure_off_season(db).await?;

    let seletiva_repo = SeletivaRepository::new(db);
    let pilot_repo = PilotRepository::new(db);

    let entries = seletiva_repo.get_ranked().await?;

    if entries.is_empty() {
        return Err(AppError::BadRequest(
            "No seletiva times have been recorded".to_string(),
        ));
    }

    let mut placements = Vec::with_capacity(entries.len());

    for (rank, entry) in entries.iter().enumerate() {
        let grid = grid_for_rank(rank);

        let pilot = pilot_repo
            .update(
                entry.pilot_id,
                UpdatePilotParams {
                    grid: Some(grid),
                    ..Default::default()
                },
            )
            .await?;

        placements.push((pilot, grid));
    }

    tracing::info!("Seletiva closed, {} pilots placed", placements.len());

    Ok(placements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::prelude::SeletivaEntry;
    use test_utils::{builder::TestBuilder, factory};

    #[test]
    fn rank_cutoffs_map_to_grids() {
        assert_eq!(grid_for_rank(0), Grid::Elite);
        assert_eq!(grid_for_rank(19), Grid::Elite);
        assert_eq!(grid_for_rank(20), Grid::Advanced);
        assert_eq!(grid_for_rank(39), Grid::Advanced);
        assert_eq!(grid_for_rank(40), Grid::Initial);
        assert_eq!(grid_for_rank(59), Grid::Initial);
        assert_eq!(grid_for_rank(60), Grid::Reserve);
        assert_eq!(grid_for_rank(200), Grid::Reserve);
    }

    #[tokio::test]
    async fn rejects_recording_while_a_season_runs() {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_table(SeletivaEntry)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, pilot) = factory::helpers::create_pilot_with_user(db).await.unwrap();
        factory::season::create_season(db).await.unwrap();

        let result = record_time(db, pilot.id, "1:35.800").await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn records_and_normalizes_the_lap_time() {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_table(SeletivaEntry)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, pilot) = factory::helpers::create_pilot_with_user(db).await.unwrap();

        let entry = record_time(db, pilot.id, "135800").await.unwrap();

        assert_eq!(entry.time_ms, 95_800);
        assert_eq!(entry.time_display, "1:35.800");
    }

    #[tokio::test]
    async fn closing_places_pilots_by_rank_and_keeps_the_board() {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_table(SeletivaEntry)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, fast) = factory::helpers::create_pilot_with_user(db).await.unwrap();
        let (_, slow) = factory::helpers::create_pilot_with_user(db).await.unwrap();

        record_time(db, slow.id, "1:37.000").await.unwrap();
        record_time(db, fast.id, "1:33.500").await.unwrap();

        let placements = close(db).await.unwrap();

        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0].0.id, fast.id);
        assert_eq!(placements[0].1, Grid::Elite);

        // The final ranking stays consultable after placements are applied.
        assert_eq!(
            SeletivaRepository::new(db).get_ranked().await.unwrap().len(),
            2
        );
    }

    #[tokio::test]
    async fn closing_an_empty_board_is_rejected() {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_table(SeletivaEntry)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let result = close(db).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
