use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, service::token::TokenService};

const DEFAULT_LOG_FILTER: &str = "info,sea_orm=warn";

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG`, falling back to `info,sea_orm=warn`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the category, product and
/// user tables exist before the first request is served.
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

/// Builds the token service from the configured secret.
pub fn setup_token_service(config: &Config) -> TokenService {
    TokenService::new(config.jwt_secret.as_bytes())
}
