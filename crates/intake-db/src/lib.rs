//! # intake-db: Database Layer for Repair Intake
//!
//! This crate provides database access for the intake form.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Repair Intake Data Flow                            │
//! │                                                                         │
//! │  Form command (find_customer)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     intake-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌──────────────────┐   ┌─────────────┐  │   │
//! │  │   │   Database    │    │   Repository     │   │  Migration  │  │   │
//! │  │   │   (pool.rs)   │◄───│  (customer.rs)   │   │  (embedded) │  │   │
//! │  │   │  SqlitePool   │    │ CustomerRepo     │   │ 001_create  │  │   │
//! │  │   └───────────────┘    └──────────────────┘   └─────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │                     ./clientes.db                               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded schema (the `customers` table)
//! - [`error`] - Database error types
//! - [`repository`] - `CustomerRepository`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use intake_db::{Database, DbConfig};
//!
//! // Opening the database creates the table if it is missing
//! let db = Database::new(DbConfig::new("clientes.db")).await?;
//!
//! let hit = db.customers().find_first_matching("555").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::customer::CustomerRepository;
