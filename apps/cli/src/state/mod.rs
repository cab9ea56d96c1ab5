//! # State Module
//!
//! Everything the form commands need besides the form itself.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐      ┌──────────────────────────────┐    │
//! │  │        DbState           │      │         AppConfig            │    │
//! │  │                          │      │                              │    │
//! │  │  Database (SQLite pool)  │      │  [database] path, pool size  │    │
//! │  │  opened once at startup  │      │  [export]   dir, file, title │    │
//! │  │  closed on exit          │      │  read-only after load        │    │
//! │  └──────────────────────────┘      └──────────────────────────────┘    │
//! │                                                                         │
//! │  Commands declare exactly which of the two they need.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod db;

pub use config::{AppConfig, DatabaseSettings, ExportSettings};
pub use db::DbState;
