use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

use crate::db;


/// CRUD operations tests for the product entity
pub mod crud_tests;

/// Fresh in-memory SQLite database with the schema applied.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    db::connect(&DatabaseConfig::sqlite_memory()).await
}
