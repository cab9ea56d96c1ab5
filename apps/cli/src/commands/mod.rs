//! # Form Commands
//!
//! The five actions of the intake form.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── customer.rs  ◄─── create, find, update, clear
//! └── export.rs    ◄─── PDF export of every record
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  front end (clap flags or form session)                                 │
//! │         │  CustomerForm (request)                                       │
//! │         ▼                                                               │
//! │  async fn find_customer(                                                │
//! │      db: &DbState,          ◄── owned store handle                      │
//! │      form: CustomerForm,    ◄── the seven inputs                        │
//! │  ) -> AppResult<FormResponse>                                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  FormResponse { form to display, status line }                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! "Not found" and "nothing to export" come back as `Ok` with an Error-kind
//! status. `Err` is reserved for storage and export failures.

pub mod customer;
pub mod export;

pub use customer::{clear_form, create_customer, create_customer_at, find_customer, update_customer};
pub use export::export_customers;
