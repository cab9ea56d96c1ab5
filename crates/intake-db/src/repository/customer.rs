//! # Customer Repository
//!
//! Database operations for customer intake records.
//!
//! ## Loose Lookup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  term = "555"                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  WHERE name = ?1 OR phone = ?1 OR address = ?1   (first row only)      │
//! │                                                                         │
//! │  id │ name │ phone │ address                                           │
//! │  ───┼──────┼───────┼─────────                                          │
//! │   1 │ Ana  │ 555   │ X         ← MATCH (phone)                         │
//! │   2 │ 555  │ 777   │ Y         ← would also match (name)               │
//! │                                                                         │
//! │  Returned: row 1, in store order. No ORDER BY is applied.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Text columns are nullable in the schema; every SELECT reads NULL as the
//! empty string so rows map onto [`CustomerRecord`] unchanged.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use intake_core::{CustomerChanges, CustomerRecord, NewCustomer};

/// Column list shared by every SELECT.
const SELECT_COLUMNS: &str = r#"
    id,
    COALESCE(name, '') AS name,
    COALESCE(phone, '') AS phone,
    COALESCE(address, '') AS address,
    COALESCE(brand, '') AS brand,
    COALESCE(model, '') AS model,
    COALESCE(fault, '') AS fault,
    COALESCE(note, '') AS note,
    COALESCE(intake_timestamp, '') AS intake_timestamp
"#;

/// Repository for customer database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = CustomerRepository::new(pool);
///
/// let created = repo.insert(&new_customer).await?;
/// let hit = repo.find_first_matching("Ana").await?;
/// ```
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Inserts a new record and returns it with its store-assigned id.
    ///
    /// The statement commits on its own; there is no surrounding
    /// transaction.
    pub async fn insert(&self, customer: &NewCustomer) -> DbResult<CustomerRecord> {
        debug!(name = %customer.name, "Inserting customer");

        let result = sqlx::query(
            r#"
            INSERT INTO customers (
                name, phone, address, brand, model, fault, note, intake_timestamp
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8
            )
            "#,
        )
        .bind(&customer.name)
        .bind(&customer.phone)
        .bind(&customer.address)
        .bind(&customer.brand)
        .bind(&customer.model)
        .bind(&customer.fault)
        .bind(&customer.note)
        .bind(&customer.intake_timestamp)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id = %id, "Customer inserted");

        Ok(CustomerRecord {
            id,
            name: customer.name.clone(),
            phone: customer.phone.clone(),
            address: customer.address.clone(),
            brand: customer.brand.clone(),
            model: customer.model.clone(),
            fault: customer.fault.clone(),
            note: customer.note.clone(),
            intake_timestamp: customer.intake_timestamp.clone(),
        })
    }

    /// Returns the first record whose name, phone OR address equals `term`.
    ///
    /// ## Returns
    /// * `Ok(Some(CustomerRecord))` - First match in store order
    /// * `Ok(None)` - Nothing matched
    pub async fn find_first_matching(&self, term: &str) -> DbResult<Option<CustomerRecord>> {
        debug!(term = %term, "Looking up customer");

        let sql = format!(
            "SELECT {} FROM customers WHERE name = ?1 OR phone = ?1 OR address = ?1 LIMIT 1",
            SELECT_COLUMNS
        );

        let customer = sqlx::query_as::<_, CustomerRecord>(&sql)
            .bind(term)
            .fetch_optional(&self.pool)
            .await?;

        debug!(found = customer.is_some(), "Lookup finished");
        Ok(customer)
    }

    /// Gets a record by its id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<CustomerRecord>> {
        let sql = format!("SELECT {} FROM customers WHERE id = ?1", SELECT_COLUMNS);

        let customer = sqlx::query_as::<_, CustomerRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(customer)
    }

    /// Overwrites the mutable fields of one record.
    ///
    /// `id` and `intake_timestamp` are not touched.
    ///
    /// ## Returns
    /// * `Ok(())` - Update committed
    /// * `Err(DbError::NotFound)` - No record has this id
    pub async fn update(&self, id: i64, changes: &CustomerChanges) -> DbResult<()> {
        debug!(id = %id, "Updating customer");

        let result = sqlx::query(
            r#"
            UPDATE customers SET
                name = ?2,
                phone = ?3,
                address = ?4,
                brand = ?5,
                model = ?6,
                fault = ?7,
                note = ?8
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.phone)
        .bind(&changes.address)
        .bind(&changes.brand)
        .bind(&changes.model)
        .bind(&changes.fault)
        .bind(&changes.note)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Customer", id));
        }

        Ok(())
    }

    /// Every record, in store order.
    pub async fn list_all(&self) -> DbResult<Vec<CustomerRecord>> {
        let sql = format!("SELECT {} FROM customers", SELECT_COLUMNS);

        let customers = sqlx::query_as::<_, CustomerRecord>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = customers.len(), "Listed customers");
        Ok(customers)
    }

    /// Counts stored records.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
