use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError};

/// Initializes the global tracing subscriber.
///
/// Reads the filter from `RUST_LOG`, falling back to `info`. If a global subscriber
/// is already installed it is kept and a warning is logged through it.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
    {
        tracing::warn!("Tracing subscriber not installed: {}", err);
    }
}

/// Connects to the Postgres database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration,
/// verifies the store is reachable, then runs all pending SeaORM migrations so the
/// `users` and `questions` tables exist. This function must complete successfully
/// before the application can serve requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect, ping, or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;
    db.ping().await?;

    tracing::info!("Successfully connected to database");

    Migrator::up(&db, None).await?;

    Ok(db)
}
