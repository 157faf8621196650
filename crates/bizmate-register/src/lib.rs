//! # bizmate-register: Transaction Engine for BizMate POS
//!
//! The orchestration layer between the pure domain logic in
//! `bizmate-core` and the storage implementations in `bizmate-store`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     BizMate POS Engine Surface                       │
//! │                                                                     │
//! │   Presentation layer (out of scope here)                            │
//! │        │                          │                                 │
//! │        ▼                          ▼                                 │
//! │   ┌──────────────┐          ┌──────────────┐                        │
//! │   │   Register   │          │  Inventory   │                        │
//! │   │              │          │              │                        │
//! │   │  cart ops    │          │  save/delete │                        │
//! │   │  checkout    │          │  restock     │                        │
//! │   │  reports     │          │  report      │                        │
//! │   └──────┬───────┘          └──────┬───────┘                        │
//! │          │ CatalogStore + LedgerStore (traits, bizmate-core)        │
//! │          ▼                         ▼                                │
//! │   SQLite stores or in-memory fakes (bizmate-store)                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! use bizmate_register::Register;
//! use bizmate_store::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./bizmate.db")).await?;
//! let mut register = Register::new(db.catalog(), db.ledger());
//!
//! register.add_to_cart(&product_id).await?;
//! let sale = register.checkout().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod register;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{RegisterError, RegisterResult};
pub use inventory::Inventory;
pub use register::Register;
