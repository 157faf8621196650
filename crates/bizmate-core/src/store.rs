//! # Store Traits
//!
//! Capability interfaces for the two durable collaborators of the engine:
//! the catalog (products) and the ledger (committed sales).
//!
//! ## Why traits here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Store Injection Pattern                         │
//! │                                                                     │
//! │  bizmate-core        declares   CatalogStore / LedgerStore traits   │
//! │        ▲                                                            │
//! │        │ implements                                                 │
//! │  bizmate-store       SqliteCatalogStore, SqliteLedgerStore          │
//! │                      MemoryCatalogStore, MemoryLedgerStore          │
//! │        ▲                                                            │
//! │        │ injects                                                    │
//! │  bizmate-register    Register<C: CatalogStore, L: LedgerStore>      │
//! │                                                                     │
//! │  The engine never reaches into a global store by key; it is handed  │
//! │  its stores explicitly, so tests substitute the in-memory fakes.    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The ledger is append-only from the engine's perspective: there is no
//! update or delete capability on purpose.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::types::{Product, Sale};

// =============================================================================
// Catalog Store
// =============================================================================

/// Durable mapping from product identifier to product record.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Returns all products in the catalog.
    async fn list_products(&self) -> StoreResult<Vec<Product>>;

    /// Looks up a single product by ID.
    ///
    /// Returns `Ok(None)` when the product does not exist; cart operations
    /// treat a vanished product as a silent no-op, not an error.
    async fn get_product(&self, id: &str) -> StoreResult<Option<Product>>;

    /// Inserts or replaces a product record.
    async fn upsert_product(&self, product: &Product) -> StoreResult<()>;

    /// Deletes a product. Returns [`StoreError::NotFound`] for a missing ID.
    ///
    /// [`StoreError::NotFound`]: crate::error::StoreError::NotFound
    async fn delete_product(&self, id: &str) -> StoreResult<()>;

    /// Decrements a product's stock by `quantity`, clamping at zero.
    ///
    /// A missing product is skipped silently: during checkout a cart line
    /// may reference a product deleted since it was added, and the sale
    /// still commits (best-effort decrement, see the register).
    async fn decrement_stock(&self, id: &str, quantity: i64) -> StoreResult<()>;
}

// =============================================================================
// Ledger Store
// =============================================================================

/// Durable append-only sequence of committed sales.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Returns all committed sales in commit order.
    async fn list_sales(&self) -> StoreResult<Vec<Sale>>;

    /// Appends a committed sale to the ledger.
    ///
    /// Once appended, a sale is never mutated or retracted by this engine.
    async fn append_sale(&self, sale: &Sale) -> StoreResult<()>;
}
