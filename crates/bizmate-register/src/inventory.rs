//! # Inventory Management
//!
//! The product-management surface: validated catalog writes plus the
//! restock view. Kept separate from [`crate::Register`] so the sale flow
//! and the back-office flow don't share a type.

use tracing::{debug, info};

use bizmate_core::reports;
use bizmate_core::store::CatalogStore;
use bizmate_core::types::Product;
use bizmate_core::validation::validate_product;

use crate::error::RegisterResult;

/// Back-office catalog operations over an injected store.
#[derive(Debug)]
pub struct Inventory<C> {
    catalog: C,
}

impl<C> Inventory<C>
where
    C: CatalogStore,
{
    pub fn new(catalog: C) -> Self {
        Inventory { catalog }
    }

    /// The injected catalog store.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// All products, sorted by name.
    pub async fn list_products(&self) -> RegisterResult<Vec<Product>> {
        Ok(self.catalog.list_products().await?)
    }

    /// Creates or updates a product.
    ///
    /// Validation runs before anything touches the store; the saved record
    /// carries a refreshed `updated_at`.
    pub async fn save_product(&self, mut product: Product) -> RegisterResult<Product> {
        validate_product(&product)?;

        product.updated_at = chrono::Utc::now();
        self.catalog.upsert_product(&product).await?;

        info!(product_id = %product.id, name = %product.name, "Product saved");
        Ok(product)
    }

    /// Deletes a product from the catalog.
    ///
    /// Committed sales referencing it are unaffected: sale lines hold
    /// frozen snapshots, not foreign keys.
    pub async fn delete_product(&self, id: &str) -> RegisterResult<()> {
        self.catalog.delete_product(id).await?;
        info!(product_id = %id, "Product deleted");
        Ok(())
    }

    /// Products at or below their reorder point.
    pub async fn restock_report(&self) -> RegisterResult<Vec<Product>> {
        let products = self.catalog.list_products().await?;
        let low: Vec<Product> = reports::restock_candidates(&products)
            .into_iter()
            .cloned()
            .collect();
        debug!(count = low.len(), "Restock report built");
        Ok(low)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegisterError;
    use bizmate_core::types::Category;
    use bizmate_store::MemoryCatalogStore;
    use chrono::Utc;

    fn product(id: &str, name: &str, stock: i64, reorder_point: i64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: Category::Beauty,
            retail_price_cents: 1850,
            wholesale_price_cents: 1125,
            stock,
            reorder_point,
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_save_and_list() {
        let inventory = Inventory::new(MemoryCatalogStore::new());

        inventory
            .save_product(product("p4", "Moisturizing Cream", 50, 10))
            .await
            .unwrap();

        let products = inventory.list_products().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Moisturizing Cream");
    }

    #[tokio::test]
    async fn test_save_rejects_invalid_product() {
        let inventory = Inventory::new(MemoryCatalogStore::new());

        let unnamed = product("p1", "   ", 5, 1);
        let err = inventory.save_product(unnamed).await.unwrap_err();
        assert!(matches!(err, RegisterError::Validation(_)));

        let mut negative = product("p1", "Cream", 5, 1);
        negative.retail_price_cents = -1;
        let err = inventory.save_product(negative).await.unwrap_err();
        assert!(matches!(err, RegisterError::Validation(_)));

        assert!(inventory.list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_refreshes_updated_at() {
        let inventory = Inventory::new(MemoryCatalogStore::new());

        let mut stale = product("p1", "Cream", 5, 1);
        stale.updated_at = Utc::now() - chrono::Duration::days(30);

        let saved = inventory.save_product(stale.clone()).await.unwrap();
        assert!(saved.updated_at > stale.updated_at);
    }

    #[tokio::test]
    async fn test_delete_product() {
        let inventory = Inventory::new(MemoryCatalogStore::with_products(vec![product(
            "p1", "Cream", 5, 1,
        )]));

        inventory.delete_product("p1").await.unwrap();
        assert!(inventory.list_products().await.unwrap().is_empty());

        let err = inventory.delete_product("p1").await.unwrap_err();
        assert!(matches!(err, RegisterError::Store(_)));
    }

    #[tokio::test]
    async fn test_restock_report_includes_boundary() {
        let inventory = Inventory::new(MemoryCatalogStore::with_products(vec![
            product("p1", "Plenty", 50, 10),
            product("p2", "Low", 8, 10),
            product("p3", "Boundary", 10, 10),
        ]));

        let low = inventory.restock_report().await.unwrap();
        let names: Vec<&str> = low.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Boundary", "Low"]);
    }
}
