//! # bizmate-store: Storage Layer for BizMate POS
//!
//! SQLite-backed implementations of the core store traits, plus in-memory
//! fakes for tests.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      BizMate POS Data Flow                          │
//! │                                                                     │
//! │  Register operation (checkout, add_to_cart, ...)                    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌──────────────────────────────────────────────────────────────┐  │
//! │  │                  bizmate-store (THIS CRATE)                  │  │
//! │  │                                                              │  │
//! │  │   ┌──────────────┐  ┌──────────────────┐  ┌──────────────┐  │  │
//! │  │   │   Database   │  │   Repositories   │  │  Migrations  │  │  │
//! │  │   │   (pool.rs)  │  │  (repository/)   │  │  (embedded)  │  │  │
//! │  │   │              │  │                  │  │              │  │  │
//! │  │   │  SqlitePool  │◄─│ SqliteCatalog…   │  │ 001_initial… │  │  │
//! │  │   │  WAL mode    │  │ SqliteLedger…    │  │              │  │  │
//! │  │   └──────────────┘  └──────────────────┘  └──────────────┘  │  │
//! │  │                                                              │  │
//! │  │   memory.rs: MemoryCatalogStore / MemoryLedgerStore          │  │
//! │  │   (trait-compatible fakes, no SQLite involved)               │  │
//! │  └──────────────────────────────────────────────────────────────┘  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database file (or :memory: for tests)                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bizmate_store::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./bizmate.db")).await?;
//! let products = db.catalog().list_products().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use memory::{MemoryCatalogStore, MemoryLedgerStore};
pub use pool::{Database, DbConfig};
pub use repository::catalog::SqliteCatalogStore;
pub use repository::ledger::SqliteLedgerStore;
