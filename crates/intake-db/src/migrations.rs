//! # Database Migrations
//!
//! The schema is a single embedded migration that creates the `customers`
//! table with `IF NOT EXISTS`.
//!
//! ## How It Runs
//! ```text
//! App startup
//!      │
//!      ▼
//! _sqlx_migrations present? ── no ──► create it
//!      │
//!      ▼
//! 001_create_customers.sql applied? ── yes ──► nothing to do
//!      │ no
//!      ▼
//! CREATE TABLE IF NOT EXISTS customers (...)
//! ```
//!
//! Because the statement is `IF NOT EXISTS`, a store whose table was made
//! outside sqlx is picked up as-is.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::DbResult;

/// Embedded migrations from the workspace `migrations/sqlite` directory.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Runs all pending database migrations.
///
/// ## Safety
/// - Idempotent: safe to run multiple times
/// - Transactional: each migration runs in a transaction
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    info!("Checking for pending migrations");

    MIGRATOR.run(pool).await?;

    info!("All migrations applied successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};

    #[tokio::test]
    async fn test_table_has_expected_columns() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let columns: Vec<String> =
            sqlx::query_scalar("SELECT name FROM pragma_table_info('customers') ORDER BY cid")
                .fetch_all(db.pool())
                .await
                .unwrap();

        assert_eq!(
            columns,
            vec![
                "id",
                "name",
                "phone",
                "address",
                "brand",
                "model",
                "fault",
                "note",
                "intake_timestamp"
            ]
        );
    }

    #[tokio::test]
    async fn test_existing_table_is_adopted() {
        let db = Database::new(DbConfig::in_memory().run_migrations(false))
            .await
            .unwrap();

        sqlx::query(
            "CREATE TABLE customers (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT, phone TEXT, \
             address TEXT, brand TEXT, model TEXT, fault TEXT, note TEXT, intake_timestamp TEXT)",
        )
        .execute(db.pool())
        .await
        .unwrap();
        sqlx::query("INSERT INTO customers (name) VALUES ('legacy')")
            .execute(db.pool())
            .await
            .unwrap();

        run_migrations(db.pool()).await.unwrap();
        assert_eq!(db.customers().count().await.unwrap(), 1);
    }
}
