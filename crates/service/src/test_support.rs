#![cfg(test)]
use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

/// Fresh in-memory SQLite store with the product table bootstrapped.
/// Each call gets its own database, so tests never see each other's rows.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect(&DatabaseConfig::sqlite_memory()).await
}
