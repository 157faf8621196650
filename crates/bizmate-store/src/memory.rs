//! # In-Memory Stores
//!
//! Trait-compatible fakes backed by a `Mutex<Vec<...>>`. Used by the
//! register's unit tests and anywhere a test wants store behavior without
//! touching SQLite.
//!
//! Semantics mirror the SQLite stores exactly: clamped stock decrements,
//! no-op decrement for missing products, append-only ledger.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;

use bizmate_core::error::{StoreError, StoreResult};
use bizmate_core::store::{CatalogStore, LedgerStore};
use bizmate_core::types::{Product, Sale};

// =============================================================================
// Catalog
// =============================================================================

/// In-memory catalog store.
#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    products: Mutex<Vec<Product>>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog pre-loaded with the given products.
    pub fn with_products(products: Vec<Product>) -> Self {
        MemoryCatalogStore {
            products: Mutex::new(products),
        }
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn list_products(&self) -> StoreResult<Vec<Product>> {
        let mut products = self
            .products
            .lock()
            .expect("catalog mutex poisoned")
            .clone();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    async fn get_product(&self, id: &str) -> StoreResult<Option<Product>> {
        let products = self.products.lock().expect("catalog mutex poisoned");
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn upsert_product(&self, product: &Product) -> StoreResult<()> {
        let mut products = self.products.lock().expect("catalog mutex poisoned");
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product.clone(),
            None => products.push(product.clone()),
        }
        Ok(())
    }

    async fn delete_product(&self, id: &str) -> StoreResult<()> {
        let mut products = self.products.lock().expect("catalog mutex poisoned");
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(StoreError::not_found("product", id));
        }
        Ok(())
    }

    async fn decrement_stock(&self, id: &str, quantity: i64) -> StoreResult<()> {
        let mut products = self.products.lock().expect("catalog mutex poisoned");
        if let Some(product) = products.iter_mut().find(|p| p.id == id) {
            product.stock = (product.stock - quantity).max(0);
            product.updated_at = Utc::now();
        }
        Ok(())
    }
}

// =============================================================================
// Ledger
// =============================================================================

/// In-memory sales ledger.
#[derive(Debug, Default)]
pub struct MemoryLedgerStore {
    sales: Mutex<Vec<Sale>>,
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LedgerStore for MemoryLedgerStore {
    async fn list_sales(&self) -> StoreResult<Vec<Sale>> {
        let mut sales = self.sales.lock().expect("ledger mutex poisoned").clone();
        sales.sort_by(|a, b| b.committed_at.cmp(&a.committed_at));
        Ok(sales)
    }

    async fn append_sale(&self, sale: &Sale) -> StoreResult<()> {
        let mut sales = self.sales.lock().expect("ledger mutex poisoned");
        if sales.iter().any(|s| s.id == sale.id) {
            return Err(StoreError::backend(format!(
                "duplicate sale id: {}",
                sale.id
            )));
        }
        sales.push(sale.clone());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
