//! # intake-core: Pure Rules for the Repair Intake Form
//!
//! This crate holds everything about customer intake records that can be
//! expressed without touching a database, a file or the clock.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Repair Intake Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Form front end (apps/cli)                       │   │
//! │  │   create ─ find ─ update ─ clear ─ export ─ status line         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ intake-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  search   │  │  status   │  │  report   │  │   │
//! │  │   │  Record   │  │ criterion │  │  message  │  │  layout   │  │   │
//! │  │   │   Form    │  │  + merge  │  │   kind    │  │  paging   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CLOCK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                   │                              │                      │
//! │  ┌────────────────▼─────────────┐  ┌─────────────▼──────────────────┐  │
//! │  │  intake-db (SQLite)          │  │  intake-export (PDF)           │  │
//! │  └──────────────────────────────┘  └────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `CustomerRecord`, `CustomerForm` and friends
//! - [`search`] - Which form field drives a lookup, and how updates merge
//! - [`status`] - Status line messages shown after every action
//! - [`timestamp`] - Intake timestamp format
//! - [`report`] - Paginated layout of the export report
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use intake_core::search::{select_criterion, SearchField};
//! use intake_core::CustomerForm;
//!
//! let mut form = CustomerForm::default();
//! form.phone = "555".to_string();
//!
//! // Name is empty, so the phone number becomes the single search term
//! let criterion = select_criterion(&form);
//! assert_eq!(criterion.field, SearchField::Phone);
//! assert_eq!(criterion.term, "555");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod report;
pub mod search;
pub mod status;
pub mod timestamp;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use status::{StatusKind, StatusMessage};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// File name of the local record store when nothing else is configured.
pub const DEFAULT_DATABASE_FILE: &str = "clientes.db";

/// File name of the export artifact. Each export overwrites it.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "clientes_yangq2025.pdf";

/// Title line printed at the top of the export report.
pub const DEFAULT_REPORT_TITLE: &str = "Customer Database - YangQ2025";
