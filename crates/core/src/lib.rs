//! Papertrade Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for the papertrade simulated
//! trading platform. It is database-agnostic and defines repository traits
//! that are implemented by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod ledger;
pub mod portfolio;
pub mod quotes;
pub mod trading;
pub mod users;
pub mod wallet;

// Re-export common types
pub use ledger::*;
pub use trading::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
