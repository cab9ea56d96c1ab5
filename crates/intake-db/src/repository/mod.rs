//! # Repository Module
//!
//! Database repository implementations for the intake form.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Form command                                                          │
//! │       │                                                                 │
//! │       │  db.customers().find_first_matching("555")                     │
//! │       ▼                                                                 │
//! │  CustomerRepository                                                    │
//! │  ├── insert(&self, new)                                                │
//! │  ├── find_first_matching(&self, term)                                  │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── update(&self, id, changes)                                        │
//! │  ├── list_all(&self)                                                   │
//! │  └── count(&self)                                                      │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CustomerRepository`](customer::CustomerRepository) - Customer intake records

pub mod customer;
