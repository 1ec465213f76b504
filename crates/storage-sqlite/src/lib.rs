//! SQLite storage implementation for papertrade.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `papertrade-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. All other crates are database-agnostic and work with traits.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!     storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```
//!
//! Monetary values are stored as TEXT and parsed with `Decimal::from_str`;
//! timestamps are stored as RFC3339 TEXT.

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod ledger;
pub mod snapshots;
pub mod users;
pub mod wallet;

// Re-export database utilities
pub use db::{create_pool, get_connection, get_db_path, init, run_migrations, DbConnection, DbPool};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from papertrade-core for convenience
pub use papertrade_core::errors::{DatabaseError, Error, Result};
