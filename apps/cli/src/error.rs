//! # App Error Type
//!
//! Unified error type for the form commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Repair Intake                          │
//! │                                                                         │
//! │  Command Function  ──►  Result<FormResponse, AppError>                  │
//! │         │                                                               │
//! │         ├── "no match" / "nothing to export"                            │
//! │         │        └──► Ok(FormResponse) with an Error-kind status        │
//! │         │                                                               │
//! │         ├── DbError      ──┐                                            │
//! │         ├── ExportError  ──┼──► AppError { code, message }              │
//! │         ├── CoreError    ──┤          │                                 │
//! │         └── config / io  ──┘          ▼                                 │
//! │                               logged, printed, non-zero exit            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A storage failure is never folded into "not found".

use serde::Serialize;

use intake_core::CoreError;
use intake_db::DbError;
use intake_export::ExportError;

/// Error returned from the form commands and startup.
///
/// ## Serialization
/// With `--json` a failure prints as:
/// ```json
/// {
///   "code": "DATABASE_ERROR",
///   "message": "Database connection failed"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for failed commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Record vanished between lookup and write
    NotFound,

    /// Input could not be accepted
    ValidationError,

    /// Store unreachable or a statement failed
    DatabaseError,

    /// PDF could not be built or written
    ExportError,

    /// Config file unreadable or invalid
    ConfigError,

    /// Anything else
    Internal,
}

/// Result type for commands.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ConfigError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

/// Converts database errors to app errors.
impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => {
                AppError::new(ErrorCode::NotFound, format!("{} not found: {}", entity, id))
            }
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(e) => {
                tracing::error!("Database migration failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                tracing::error!("Database query failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::PoolExhausted => {
                AppError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidReportSettings { reason } => AppError::new(
                ErrorCode::ConfigError,
                format!("Invalid report settings: {}", reason),
            ),
            CoreError::Validation(e) => AppError::validation(e.to_string()),
        }
    }
}

/// Converts export errors to app errors.
impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::InvalidTarget(reason) => AppError::new(ErrorCode::ConfigError, reason),
            other => {
                tracing::error!("Export failed: {}", other);
                AppError::new(ErrorCode::ExportError, other.to_string())
            }
        }
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::config(format!("Invalid config file: {}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::internal(format!("I/O error: {}", err))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_not_found_maps_to_not_found() {
        let err: AppError = DbError::not_found("Customer", 7).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Customer not found: 7");
    }

    #[test]
    fn test_pool_exhausted_is_database_error() {
        let err: AppError = DbError::PoolExhausted.into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }

    #[test]
    fn test_export_target_is_config_error() {
        let err: AppError = ExportError::InvalidTarget("bad name".into()).into();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_serializes_screaming_code() {
        let err = AppError::new(ErrorCode::DatabaseError, "boom");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"DATABASE_ERROR\""));
        assert!(json.contains("\"message\":\"boom\""));
    }

    #[test]
    fn test_display_includes_code() {
        let err = AppError::config("missing");
        assert_eq!(err.to_string(), "[ConfigError] missing");
    }
}
