use pagevisits_domain::config::DatabaseConfig;
use sqlx::migrate::MigrateError;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

mod health;

pub use health::SqliteStoreHealth;

/// True for `:memory:` style paths, which cannot be shared between two pools.
pub fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

fn connect_options(
    database_url: &str,
    cfg: &DatabaseConfig,
) -> Result<SqliteConnectOptions, sqlx::Error> {
    let options = if database_url.starts_with("sqlite:") {
        SqliteConnectOptions::from_str(database_url)?
    } else {
        SqliteConnectOptions::new().filename(database_url)
    };

    let options = options
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(cfg.busy_timeout_secs));

    if is_in_memory(database_url) {
        Ok(options)
    } else {
        Ok(options
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal))
    }
}

/// Opens the write pool, creating the database file if needed, and brings the
/// schema up to date.
pub async fn create_write_pool(
    database_url: &str,
    cfg: &DatabaseConfig,
) -> Result<SqlitePool, sqlx::Error> {
    let options = connect_options(database_url, cfg)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.write_pool_max_connections)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Opens a read-only pool. The write pool must have been created first so the
/// file and schema exist.
pub async fn create_read_pool(
    database_url: &str,
    cfg: &DatabaseConfig,
) -> Result<SqlitePool, sqlx::Error> {
    let options = connect_options(database_url, cfg)?.read_only(true);

    SqlitePoolOptions::new()
        .max_connections(cfg.read_pool_max_connections)
        .connect_with(options)
        .await
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}
