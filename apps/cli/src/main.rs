//! # Repair Intake Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Repair Intake                                    │
//! │                                                                         │
//! │  intake create --name Ana --phone 555 ...   ──► "Customer created ..."  │
//! │  intake find --phone 555                    ──► record + "Customer found"│
//! │  intake update --phone 555 --fault ...      ──► "Customer updated ..."  │
//! │  intake export                              ──► clientes_yangq2025.pdf  │
//! │  intake form                                ──► interactive session     │
//! │                                                                         │
//! │                               │                                         │
//! │                               ▼                                         │
//! │                clientes.db (SQLite, table customers)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The actual setup is in lib.rs so the commands stay testable.

use std::process::ExitCode;

fn main() -> ExitCode {
    intake_cli::run()
}
