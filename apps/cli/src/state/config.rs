//! # Configuration State
//!
//! Where the store lives and where the export goes.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line flags (highest priority)                               │
//! │     --db ./other.db                                                     │
//! │                                                                         │
//! │  2. Environment Variables                                               │
//! │     INTAKE_DB_PATH, INTAKE_EXPORT_DIR,                                  │
//! │     INTAKE_EXPORT_FILE, INTAKE_REPORT_TITLE                             │
//! │                                                                         │
//! │  3. TOML Config File                                                    │
//! │     ~/.config/repair/intake.toml (Linux)                                │
//! │     ~/Library/Application Support/com.intake.repair/intake.toml (macOS) │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                    │
//! │     ./clientes.db, ./clientes_yangq2025.pdf                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # intake.toml
//! [database]
//! path = "/srv/taller/clientes.db"
//! max_connections = 1
//!
//! [export]
//! directory = "/srv/taller/reportes"
//! file_name = "clientes_yangq2025.pdf"
//! title = "Customer Database - YangQ2025"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use intake_core::report::ReportSettings;
use intake_core::{DEFAULT_DATABASE_FILE, DEFAULT_EXPORT_FILE_NAME, DEFAULT_REPORT_TITLE};
use intake_db::DbConfig;
use intake_export::PdfExporter;

// =============================================================================
// Sections
// =============================================================================

/// `[database]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// SQLite file, relative to the working directory unless absolute.
    #[serde(default = "default_database_path")]
    pub path: PathBuf,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE_FILE)
}

fn default_max_connections() -> u32 {
    1
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        DatabaseSettings {
            path: default_database_path(),
            max_connections: default_max_connections(),
        }
    }
}

/// `[export]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSettings {
    #[serde(default = "default_export_directory")]
    pub directory: PathBuf,

    /// Bare file name, overwritten on every export.
    #[serde(default = "default_export_file_name")]
    pub file_name: String,

    /// Heading on the first report page.
    #[serde(default = "default_report_title")]
    pub title: String,
}

fn default_export_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_export_file_name() -> String {
    DEFAULT_EXPORT_FILE_NAME.to_string()
}

fn default_report_title() -> String {
    DEFAULT_REPORT_TITLE.to_string()
}

impl Default for ExportSettings {
    fn default() -> Self {
        ExportSettings {
            directory: default_export_directory(),
            file_name: default_export_file_name(),
            title: default_report_title(),
        }
    }
}

// =============================================================================
// App Config
// =============================================================================

/// Complete application configuration. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub database: DatabaseSettings,

    #[serde(default)]
    pub export: ExportSettings,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`intake.toml`), skipped when absent
    /// 3. Environment variables
    ///
    /// Command line flags are applied by the caller afterwards.
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a config file body.
    pub fn from_toml(contents: &str) -> AppResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        if self.database.max_connections == 0 {
            return Err(AppError::config(
                "database.max_connections must be greater than 0",
            ));
        }

        if self.export.file_name.trim().is_empty() {
            return Err(AppError::config("export.file_name cannot be empty"));
        }

        if self.database.path.as_os_str().is_empty() {
            return Err(AppError::config("database.path cannot be empty"));
        }

        Ok(())
    }

    /// Applies `INTAKE_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("INTAKE_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.database.path = PathBuf::from(path);
        }

        if let Some(dir) = lookup("INTAKE_EXPORT_DIR") {
            debug!(dir = %dir, "Overriding export directory from environment");
            self.export.directory = PathBuf::from(dir);
        }

        if let Some(name) = lookup("INTAKE_EXPORT_FILE") {
            self.export.file_name = name;
        }

        if let Some(title) = lookup("INTAKE_REPORT_TITLE") {
            self.export.title = title;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "intake", "repair")
            .map(|dirs| dirs.config_dir().join("intake.toml"))
    }

    // =========================================================================
    // Derived Settings
    // =========================================================================

    /// Connection settings for the record store.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(self.database.path.clone()).max_connections(self.database.max_connections)
    }

    /// Page geometry for the export, Letter size.
    pub fn report_settings(&self) -> ReportSettings {
        ReportSettings::letter(self.export.title.clone())
    }

    /// File writer for the export.
    pub fn exporter(&self) -> AppResult<PdfExporter> {
        Ok(PdfExporter::new(
            self.export.directory.clone(),
            self.export.file_name.clone(),
        )?)
    }
}
