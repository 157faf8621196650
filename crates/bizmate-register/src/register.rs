//! # Register
//!
//! The transaction engine: one in-progress cart over injected catalog and
//! ledger stores.
//!
//! ## Checkout Sequencing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Pipeline                            │
//! │                                                                     │
//! │  1. cart.to_sale()           pure snapshot, rejects empty cart      │
//! │  2. ledger.append_sale()     the sale record is the source of truth │
//! │  3. decrement_stock() × N    clamped at zero, missing ids skipped   │
//! │  4. cart.clear()             ready for the next customer            │
//! │                                                                     │
//! │  A failed append leaves the cart intact so the operator can retry.  │
//! │  Stock decrements after a successful append are best-effort: the    │
//! │  committed sale is never rolled back over an inventory write.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stale-Reference Tolerance
//! Every cart operation resolves the product id against the CURRENT
//! catalog state before acting. A product deleted mid-session makes the
//! affected operation a quiet no-op rather than an error.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use bizmate_core::cart::{Cart, CartLine};
use bizmate_core::money::Money;
use bizmate_core::reports::{self, CategoryRevenue, DailySummary};
use bizmate_core::store::{CatalogStore, LedgerStore};
use bizmate_core::types::{PriceMode, Sale};

use crate::error::RegisterResult;

/// The point-of-sale transaction engine.
///
/// Generic over the store traits so the same engine runs against SQLite
/// in production and the in-memory fakes in tests.
#[derive(Debug)]
pub struct Register<C, L> {
    catalog: C,
    ledger: L,
    cart: Cart,
}

impl<C, L> Register<C, L>
where
    C: CatalogStore,
    L: LedgerStore,
{
    /// Creates a register with an empty retail-mode cart.
    pub fn new(catalog: C, ledger: L) -> Self {
        Register {
            catalog,
            ledger,
            cart: Cart::new(),
        }
    }

    /// The injected catalog store.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// The injected ledger store.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    // =========================================================================
    // Cart Operations
    // =========================================================================

    /// Adds one unit of a product to the cart.
    ///
    /// The product is resolved fresh from the catalog so stock checks see
    /// current state. An unknown id is a quiet no-op (stale tap on a
    /// just-deleted product).
    pub async fn add_to_cart(&mut self, product_id: &str) -> RegisterResult<()> {
        match self.catalog.get_product(product_id).await? {
            Some(product) => {
                self.cart.add_line(&product);
                debug!(product_id, lines = self.cart.lines().len(), "Added to cart");
            }
            None => {
                warn!(product_id, "add_to_cart for unknown product, ignored");
            }
        }
        Ok(())
    }

    /// Removes a line from the cart. No error if absent.
    pub fn remove_from_cart(&mut self, product_id: &str) {
        self.cart.remove_line(product_id);
    }

    /// Adjusts a line's quantity by a signed delta, re-checked against the
    /// product's current stock.
    pub async fn adjust_quantity(&mut self, product_id: &str, delta: i64) -> RegisterResult<()> {
        let current = self.catalog.get_product(product_id).await?;
        self.cart.adjust_quantity(product_id, delta, current.as_ref());
        Ok(())
    }

    /// Switches the active price mode, repricing every line against the
    /// current catalog.
    pub async fn set_price_mode(&mut self, mode: PriceMode) -> RegisterResult<()> {
        let products = self.catalog.list_products().await?;
        self.cart.set_price_mode(mode, &products);
        debug!(mode = %mode, "Price mode switched");
        Ok(())
    }

    /// Abandons the in-progress sale. The active mode is kept.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Read-only view of the cart lines, in insertion order.
    pub fn line_items(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Running total of the in-progress sale.
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    /// The active price mode.
    pub fn active_mode(&self) -> PriceMode {
        self.cart.active_mode()
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Commits the in-progress sale.
    ///
    /// Sequencing: snapshot, append to ledger, decrement stock per line,
    /// clear the cart. See the module docs for the failure semantics of
    /// each step.
    pub async fn checkout(&mut self) -> RegisterResult<Sale> {
        let sale = self.cart.to_sale()?;

        // Ledger first. If this fails the cart is untouched and the
        // operator can retry the whole commit.
        self.ledger.append_sale(&sale).await?;

        for line in &sale.lines {
            self.catalog
                .decrement_stock(&line.product_id, line.quantity)
                .await?;
        }

        self.cart.clear();

        info!(
            sale_id = %sale.id,
            lines = sale.lines.len(),
            total_cents = sale.total_cents,
            mode = %sale.price_mode,
            "Sale committed"
        );

        Ok(sale)
    }

    // =========================================================================
    // Reporting
    // =========================================================================

    /// Sales history, newest first.
    pub async fn sales_history(&self) -> RegisterResult<Vec<Sale>> {
        Ok(self.ledger.list_sales().await?)
    }

    /// Revenue and transaction count for a calendar date.
    pub async fn daily_summary(&self, date: NaiveDate) -> RegisterResult<DailySummary> {
        let sales = self.ledger.list_sales().await?;
        Ok(reports::daily_summary(&sales, date))
    }

    /// Revenue split by product category across the whole ledger.
    pub async fn revenue_by_category(&self) -> RegisterResult<Vec<CategoryRevenue>> {
        let sales = self.ledger.list_sales().await?;
        let products = self.catalog.list_products().await?;
        Ok(reports::revenue_by_category(&sales, &products))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
