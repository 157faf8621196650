//! # Sales Ledger Store (SQLite)
//!
//! `LedgerStore` implementation over the `sales` and `sale_lines` tables.
//!
//! ## Append-Only
//! There is no update or delete path here. A committed sale is a frozen
//! record; corrections happen as new sales, never as edits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::{debug, info};

use bizmate_core::error::{StoreError, StoreResult};
use bizmate_core::store::LedgerStore;
use bizmate_core::types::{Sale, SaleLine};

// =============================================================================
// Row Types
// =============================================================================

#[derive(Debug, sqlx::FromRow)]
struct SaleRow {
    id: String,
    committed_at: String,
    price_mode: String,
    total_cents: i64,
}

#[derive(Debug, sqlx::FromRow)]
struct SaleLineRow {
    sale_id: String,
    product_id: String,
    name: String,
    quantity: i64,
    unit_price_cents: i64,
}

impl SaleRow {
    fn into_domain(self, lines: Vec<SaleLine>) -> StoreResult<Sale> {
        let price_mode = self
            .price_mode
            .parse()
            .map_err(|e: String| StoreError::corrupt("sale", e))?;

        let committed_at = DateTime::parse_from_rfc3339(&self.committed_at)
            .map_err(|e| StoreError::corrupt("sale", format!("bad committed_at: {e}")))?
            .with_timezone(&Utc);

        Ok(Sale {
            id: self.id,
            committed_at,
            price_mode,
            lines,
            total_cents: self.total_cents,
        })
    }
}

// =============================================================================
// Store
// =============================================================================

/// SQLite-backed sales ledger.
#[derive(Debug, Clone)]
pub struct SqliteLedgerStore {
    pool: SqlitePool,
}

impl SqliteLedgerStore {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteLedgerStore { pool }
    }
}

#[async_trait]
impl LedgerStore for SqliteLedgerStore {
    async fn list_sales(&self) -> StoreResult<Vec<Sale>> {
        let sale_rows = sqlx::query_as::<_, SaleRow>(
            r#"
            SELECT id, committed_at, price_mode, total_cents
            FROM sales
            ORDER BY committed_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        let line_rows = sqlx::query_as::<_, SaleLineRow>(
            r#"
            SELECT sale_id, product_id, name, quantity, unit_price_cents
            FROM sale_lines
            ORDER BY sale_id, line_no
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        // Group lines by sale in memory. Two queries beat N+1 round trips
        // for the sizes a single shop's ledger reaches.
        let mut sales = Vec::with_capacity(sale_rows.len());
        for sale_row in sale_rows {
            let lines: Vec<SaleLine> = line_rows
                .iter()
                .filter(|l| l.sale_id == sale_row.id)
                .map(|l| SaleLine {
                    product_id: l.product_id.clone(),
                    name: l.name.clone(),
                    quantity: l.quantity,
                    unit_price_cents: l.unit_price_cents,
                })
                .collect();
            sales.push(sale_row.into_domain(lines)?);
        }

        debug!(count = sales.len(), "Listed sales");
        Ok(sales)
    }

    async fn append_sale(&self, sale: &Sale) -> StoreResult<()> {
        // Sale header and lines land atomically: a half-written sale
        // would corrupt every report downstream.
        let mut tx = self.pool.begin().await.map_err(StoreError::backend)?;

        sqlx::query(
            r#"
            INSERT INTO sales (id, committed_at, price_mode, total_cents)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&sale.id)
        .bind(sale.committed_at.to_rfc3339())
        .bind(sale.price_mode.as_str())
        .bind(sale.total_cents)
        .execute(&mut *tx)
        .await
        .map_err(StoreError::backend)?;

        for (line_no, line) in sale.lines.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO sale_lines (sale_id, line_no, product_id, name,
                                        quantity, unit_price_cents)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
            )
            .bind(&sale.id)
            .bind(line_no as i64)
            .bind(&line.product_id)
            .bind(&line.name)
            .bind(line.quantity)
            .bind(line.unit_price_cents)
            .execute(&mut *tx)
            .await
            .map_err(StoreError::backend)?;
        }

        tx.commit().await.map_err(StoreError::backend)?;

        info!(
            sale_id = %sale.id,
            lines = sale.lines.len(),
            total_cents = sale.total_cents,
            "Appended sale to ledger"
        );
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
