use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter};
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{
    config::Config,
    error::AppError,
    service::{auth, scoring},
};

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is
/// up-to-date before the application touches the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the same SQLite database.
///
/// Sessions are stored in a dedicated table (created here if missing) and
/// expire after a week of inactivity.
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    store.migrate().await?;

    Ok(SessionManagerLayer::new(store).with_expiry(Expiry::OnInactivity(Duration::weeks(1))))
}

/// Seeds a SUPER_ADMIN account when none exists.
///
/// On a fresh database there is no way to log in, so the first boot creates
/// race direction from the configured credentials, together with an unranked
/// pilot profile (admins may still race as reserves).
pub async fn check_for_super_admin(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<(), AppError> {
    let existing = entity::prelude::User::find()
        .filter(entity::user::Column::Role.eq(entity::enums::Role::SuperAdmin))
        .one(db)
        .await?;

    if existing.is_some() {
        return Ok(());
    }

    let user = entity::user::ActiveModel {
        username: ActiveValue::Set("Race Direction".to_string()),
        email: ActiveValue::Set(config.super_admin_email.clone()),
        password_hash: ActiveValue::Set(auth::hash_password(&config.super_admin_password)?),
        role: ActiveValue::Set(entity::enums::Role::SuperAdmin),
        ..Default::default()
    }
    .insert(db)
    .await?;

    entity::pilot::ActiveModel {
        user_id: ActiveValue::Set(user.id),
        nickname: ActiveValue::Set("Race Direction".to_string()),
        real_name: ActiveValue::Set("Race Direction".to_string()),
        grid: ActiveValue::Set(entity::enums::Grid::Unranked),
        cnh_points: ActiveValue::Set(scoring::STARTING_CNH),
        warnings: ActiveValue::Set(0),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::info!("Created initial SUPER_ADMIN account ({})", config.super_admin_email);

    Ok(())
}
