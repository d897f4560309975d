//! # Repository Module
//!
//! Database repository implementations for the rewards system.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  RewardService                                                         │
//! │       │                                                                 │
//! │       │  db.transactions().list_by_customer(&id)                       │
//! │       ▼                                                                 │
//! │  TransactionRepository                                                 │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── list_by_customer(&self, customer_id)                              │
//! │  ├── insert(&self, transaction)                                        │
//! │  └── update(&self, transaction)                                        │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CustomerRepository`](customer::CustomerRepository) - Customer CRUD
//! - [`TransactionRepository`](transaction::TransactionRepository) - Transaction CRUD and per-customer lookup

pub mod customer;
pub mod transaction;
