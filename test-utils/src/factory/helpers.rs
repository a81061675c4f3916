//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a pilot together with its owning user account.
///
/// Both entities are created with default values. Use the individual
/// factories if you need to customize specific fields.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, pilot))` - The created account and profile
/// - `Err(DbErr)` - Database error during creation
pub async fn create_pilot_with_user(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::pilot::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let pilot = crate::factory::pilot::create_pilot(db, user.id).await?;

    Ok((user, pilot))
}

/// Creates a race inside a fresh active season.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((season, race))` - The created season and scheduled race
/// - `Err(DbErr)` - Database error during creation
pub async fn create_race_with_season(
    db: &DatabaseConnection,
) -> Result<(entity::season::Model, entity::race::Model), DbErr> {
    let season = crate::factory::season::create_season(db).await?;
    let race = crate::factory::race::create_race(db, season.id).await?;

    Ok((season, race))
}
