//! # Error Types
//!
//! Domain-specific error types for intake-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  intake-core errors (this file)                                        │
//! │  ├── CoreError        - Domain errors (report settings, ...)           │
//! │  └── ValidationError  - Malformed input                                │
//! │                                                                         │
//! │  intake-db errors      └── DbError      - Database failures            │
//! │  intake-export errors  └── ExportError  - PDF / file failures          │
//! │  apps/cli              └── AppError     - What the operator sees       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! "Customer not found" and "nothing to export" are NOT errors. They are
//! ordinary outcomes reported on the status line (see [`crate::status`]).

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Report page geometry cannot hold any text.
    ///
    /// ## When This Occurs
    /// - Line height is zero or negative
    /// - Top margin reaches below the bottom margin
    #[error("Invalid report settings: {reason}")]
    InvalidReportSettings { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The form itself accepts any text, so these only cover values that must
/// follow a fixed format.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Invalid format (e.g., malformed intake timestamp).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Name does not refer to a form field.
    #[error("Unknown form field '{name}'")]
    UnknownField { name: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
