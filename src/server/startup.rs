use sea_orm::DatabaseConnection;

use crate::server::{
    cache::ResponseCache, config::Config, error::AppError, service::auth::ensure_admin,
    state::AppState, util::token::TokenCodec,
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date before any request
/// is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connects, bootstraps the admin account and assembles the shared state.
pub async fn build_state(config: &Config) -> Result<AppState, AppError> {
    let db = connect_to_database(config).await?;

    ensure_admin(&db, config.admin.as_ref()).await?;

    let tokens = TokenCodec::new(&config.jwt_secret, config.token_ttl);
    let cache = ResponseCache::new(config.cache_ttl);

    Ok(AppState::new(db, tokens, cache))
}

/// Resolves when Ctrl-C is received.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }

    tracing::info!("Shutdown signal received, draining connections");
}
