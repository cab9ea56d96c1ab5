//! # intake-export: PDF Report Writer
//!
//! Turns a [`ReportLayout`](intake_core::report::ReportLayout) into the export
//! artifact.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  export_customers command                                              │
//! │       │                                                                 │
//! │       │ records (store order)                                          │
//! │       ▼                                                                 │
//! │  intake_core::report::layout_report ──► ReportLayout                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PdfExporter::export (THIS CRATE)                                      │
//! │       ├── one PDF page per layout page                                 │
//! │       ├── builtin Helvetica / Helvetica-Bold                           │
//! │       └── bytes written to <dir>/<file name>, replacing any old file   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The document is fully built in memory before the file is opened, so a
//! failed render never truncates a previous export.

pub mod error;
pub mod pdf;

pub use error::{ExportError, ExportResult};
pub use pdf::{render_pdf, PdfExporter};
