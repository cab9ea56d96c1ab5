//! # Database State
//!
//! Wraps the `Database` handle that every form command receives.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! async fn find_customer(db: &DbState, form: CustomerForm) -> AppResult<FormResponse> {
//!     let hit = db.inner().customers().find_first_matching("555").await?;
//!     // ...
//! }
//! ```

use intake_db::{Database, DbConfig};

use crate::error::AppResult;

/// Owned handle to the record store.
///
/// There is no global connection. The handle is opened in `run()` and passed
/// by reference into each command.
#[derive(Debug)]
pub struct DbState {
    db: Database,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Opens the store and creates the schema if it is missing.
    pub async fn open(config: DbConfig) -> AppResult<Self> {
        let db = Database::new(config).await?;
        Ok(DbState::new(db))
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }

    /// Releases the pool. Pending writes are already committed.
    pub async fn close(self) {
        self.db.close().await;
    }
}
