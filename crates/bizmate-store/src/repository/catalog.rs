//! # Catalog Store (SQLite)
//!
//! `CatalogStore` implementation over the `products` table.
//!
//! ## Stock Decrement Semantics
//! `decrement_stock` clamps at zero inside the UPDATE itself
//! (`MAX(0, stock - ?)`), so an oversell attempt can never push stock
//! negative, and a decrement for a product that no longer exists is a
//! silent no-op. Checkout relies on both behaviors.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use bizmate_core::error::{StoreError, StoreResult};
use bizmate_core::store::CatalogStore;
use bizmate_core::types::Product;

// =============================================================================
// Row Types
// =============================================================================

/// Raw database row for a product.
///
/// Kept separate from the domain `Product` so that parsing failures
/// (bad category string, malformed timestamp) become `StoreError::Corrupt`
/// rather than silently producing garbage.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: String,
    name: String,
    category: String,
    retail_price_cents: i64,
    wholesale_price_cents: i64,
    stock: i64,
    reorder_point: i64,
    updated_at: String,
}

impl ProductRow {
    fn into_domain(self) -> StoreResult<Product> {
        let category = self
            .category
            .parse()
            .map_err(|e: String| StoreError::corrupt("product", e))?;

        let updated_at = DateTime::parse_from_rfc3339(&self.updated_at)
            .map_err(|e| StoreError::corrupt("product", format!("bad updated_at: {e}")))?
            .with_timezone(&Utc);

        Ok(Product {
            id: self.id,
            name: self.name,
            category,
            retail_price_cents: self.retail_price_cents,
            wholesale_price_cents: self.wholesale_price_cents,
            stock: self.stock,
            reorder_point: self.reorder_point,
            updated_at,
        })
    }
}

// =============================================================================
// Store
// =============================================================================

/// SQLite-backed catalog store.
#[derive(Debug, Clone)]
pub struct SqliteCatalogStore {
    pool: SqlitePool,
}

impl SqliteCatalogStore {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteCatalogStore { pool }
    }
}

#[async_trait]
impl CatalogStore for SqliteCatalogStore {
    async fn list_products(&self) -> StoreResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, category, retail_price_cents, wholesale_price_cents,
                   stock, reorder_point, updated_at
            FROM products
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        debug!(count = rows.len(), "Listed products");

        rows.into_iter().map(ProductRow::into_domain).collect()
    }

    async fn get_product(&self, id: &str) -> StoreResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, category, retail_price_cents, wholesale_price_cents,
                   stock, reorder_point, updated_at
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        row.map(ProductRow::into_domain).transpose()
    }

    async fn upsert_product(&self, product: &Product) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, category, retail_price_cents,
                                  wholesale_price_cents, stock, reorder_point, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ON CONFLICT(id) DO UPDATE SET
                name                  = excluded.name,
                category              = excluded.category,
                retail_price_cents    = excluded.retail_price_cents,
                wholesale_price_cents = excluded.wholesale_price_cents,
                stock                 = excluded.stock,
                reorder_point         = excluded.reorder_point,
                updated_at            = excluded.updated_at
            "#,
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(product.category.as_str())
        .bind(product.retail_price_cents)
        .bind(product.wholesale_price_cents)
        .bind(product.stock)
        .bind(product.reorder_point)
        .bind(product.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        debug!(product_id = %product.id, "Upserted product");
        Ok(())
    }

    async fn delete_product(&self, id: &str) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::backend)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("product", id));
        }

        debug!(product_id = %id, "Deleted product");
        Ok(())
    }

    async fn decrement_stock(&self, id: &str, quantity: i64) -> StoreResult<()> {
        // Clamp in SQL. A missing product affects zero rows, which is fine:
        // the sale line already holds its own snapshot of the product.
        let result = sqlx::query(
            r#"
            UPDATE products
            SET stock = MAX(0, stock - ?2), updated_at = ?3
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(quantity)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        debug!(
            product_id = %id,
            quantity,
            matched = result.rows_affected(),
            "Decremented stock"
        );
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
