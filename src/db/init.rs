//! Database initialization.
use crate::db::{DatabaseConnection, Db as _};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection as _};
use std::env;
use std::path::Path;
use std::str::FromStr;

/// Connects to a database and applies migrations.
/// We use `SQLite` by default, but we can override this by setting the `DATABASE_URL` environment variable.
///
/// # Errors
/// Errors if connection to database fails.
/// Connections can fail if the database is not running, or if the database URL is invalid.
pub async fn connect(db_path: &Path) -> anyhow::Result<DatabaseConnection> {
    let db_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
        let sqlite_db_path = db_path.join("avengers.sqlite3");
        format!("sqlite://{}?mode=rwc", sqlite_db_path.to_string_lossy())
    });
    let connection = DatabaseConnection::connect(&db_url).await?;
    tracing::info!("Connected to database");
    migrate(&db_url).await?;
    Ok(connection)
}

/// Applies embedded migrations.
///
/// The `any` driver does not implement the sqlx migrator, so migrations run
/// over a short-lived concrete `SQLite` connection instead of the pool.
///
/// # Errors
/// Errors if the migrations cannot be applied.
async fn migrate(db_url: &str) -> anyhow::Result<()> {
    let mut connection = SqliteConnectOptions::from_str(db_url)?.connect().await?;
    sqlx::migrate!("./migrations/sqlite")
        .run(&mut connection)
        .await?;
    connection.close().await?;
    Ok(())
}
