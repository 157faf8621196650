//! # Repository Module
//!
//! SQLite-backed implementations of the `bizmate-core` store traits.
//!
//! ## Design
//! Each store wraps a cloned `SqlitePool` handle (pools are cheap to clone,
//! they share the underlying connections). Rows come back as plain
//! `FromRow` structs and are converted into domain types at the edge, so
//! a corrupt row surfaces as `StoreError::Corrupt` instead of a panic.

pub mod catalog;
pub mod ledger;

pub use catalog::SqliteCatalogStore;
pub use ledger::SqliteLedgerStore;
