//! # Cart
//!
//! The working set of product/quantity pairs for the sale in progress.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Cart State Operations                         │
//! │                                                                     │
//! │  Operator Action        Cart Operation         State Change         │
//! │  ───────────────        ──────────────         ────────────         │
//! │                                                                     │
//! │  Tap Product ─────────► add_line(&product) ──► qty+1 or new line    │
//! │                                                                     │
//! │  +/- Buttons ─────────► adjust_quantity() ───► qty+delta (guarded)  │
//! │                                                                     │
//! │  Tap Remove ──────────► remove_line() ───────► line deleted         │
//! │                                                                     │
//! │  Toggle Mode ─────────► set_price_mode() ────► every line repriced  │
//! │                                                                     │
//! │  Checkout ────────────► to_sale() ───────────► immutable snapshot   │
//! │                                                                     │
//! │  GUARD: every quantity-increasing operation re-checks the CURRENT   │
//! │  product stock passed in by the caller, never a cached value.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Silent Rejection
//! Stock-limit violations are no-ops, not errors: the cart state is simply
//! left unchanged. The catalog view already prevents selecting sold-out
//! items, so surfacing these as errors would only produce noise.
//!
//! ## Weak Product References
//! Lines hold product ids, never live product handles. Callers resolve the
//! id against the catalog store per operation and pass the result in, so a
//! product deleted mid-session can never dangle.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::resolve_price;
use crate::types::{PriceMode, Product, Sale, SaleLine};

// =============================================================================
// Cart Line
// =============================================================================

/// A line item in the cart.
///
/// ## Design Notes
/// - `product_id`: weak reference, resolved against the catalog per
///   operation for stock checks
/// - `name`: captured at add time for UI stability even if the product is
///   later renamed
/// - `unit_price_cents`: captured at add time, recomputed whenever the
///   active price mode changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product ID (UUID).
    pub product_id: String,

    /// Product name at time of adding (captured).
    pub name: String,

    /// Quantity in cart. Invariant: 1 <= quantity <= product stock at all
    /// observation points prior to commit.
    pub quantity: i64,

    /// Unit price in cents under the cart's active price mode.
    pub unit_price_cents: i64,
}

impl CartLine {
    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.unit_price_cents).multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The in-progress sale.
///
/// ## Invariants
/// - Lines are unique by `product_id` (adding the same product increments
///   the existing line)
/// - Quantity is always >= 1; removal happens only via `remove_line`
/// - No line's quantity exceeds the referenced product's current stock at
///   any observation point
///
/// ## Ownership
/// Owned exclusively by the in-progress transaction. Discarded on commit
/// or abandonment, never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    mode: PriceMode,
}

impl Cart {
    /// Creates a new empty cart in retail mode.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Creates a new empty cart with the given starting mode.
    pub fn with_mode(mode: PriceMode) -> Self {
        Cart {
            lines: Vec::new(),
            mode,
        }
    }

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// - Product out of stock: silent no-op (the catalog view should have
    ///   prevented the selection already)
    /// - Line exists: quantity increments by 1 only if the result stays
    ///   within the product's current stock, otherwise no-op
    /// - No line yet: creates one with quantity 1, priced by the pricing
    ///   resolver at the cart's active mode
    ///
    /// The caller must pass the product as freshly resolved from the
    /// catalog so the stock check sees current state.
    pub fn add_line(&mut self, product: &Product) {
        if product.stock == 0 {
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            if line.quantity + 1 <= product.stock {
                line.quantity += 1;
            }
            return;
        }

        self.lines.push(CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            quantity: 1,
            unit_price_cents: resolve_price(product, self.mode).cents(),
        });
    }

    /// Removes a line by product ID. No error if absent.
    pub fn remove_line(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Adjusts a line's quantity by a signed delta.
    ///
    /// `current` is the product as freshly resolved from the catalog;
    /// `None` means the product has vanished and the line is left as-is
    /// (stale-reference tolerance, not an error).
    ///
    /// ## Behavior
    /// - New quantity <= 0: unchanged (quantity never drops below 1 through
    ///   this path; removal is only via [`Cart::remove_line`])
    /// - New quantity exceeds current stock: unchanged
    /// - Otherwise the quantity is updated
    pub fn adjust_quantity(&mut self, product_id: &str, delta: i64, current: Option<&Product>) {
        let Some(product) = current else {
            return;
        };

        let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) else {
            return;
        };

        let new_quantity = line.quantity + delta;
        if new_quantity <= 0 {
            return;
        }
        if new_quantity > product.stock {
            return;
        }

        line.quantity = new_quantity;
    }

    /// Switches the active price mode and re-resolves every line's unit
    /// price against current catalog state.
    ///
    /// Lines whose product can no longer be found keep their last known
    /// price.
    pub fn set_price_mode(&mut self, mode: PriceMode, catalog: &[Product]) {
        self.mode = mode;

        for line in &mut self.lines {
            if let Some(product) = catalog.iter().find(|p| p.id == line.product_id) {
                line.unit_price_cents = resolve_price(product, mode).cents();
            }
        }
    }

    /// Sum of quantity × unit price over all lines; zero for an empty cart.
    pub fn total(&self) -> Money {
        self.lines.iter().map(|l| l.line_total()).sum()
    }

    /// Empties all lines. Called after successful or abandoned checkout.
    /// The active mode is kept.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Read-only view of the lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The active price mode.
    pub fn active_mode(&self) -> PriceMode {
        self.mode
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Snapshots the cart into an immutable [`Sale`].
    ///
    /// This is the pure half of the commit: it copies the lines (value
    /// copies, decoupled from the live catalog), computes the total once,
    /// and assigns a fresh identifier and timestamp. Appending to the
    /// ledger and decrementing stock is the register's job.
    ///
    /// ## Errors
    /// Returns [`CoreError::EmptyCart`] if the cart has no lines.
    pub fn to_sale(&self) -> CoreResult<Sale> {
        if self.lines.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let lines: Vec<SaleLine> = self
            .lines
            .iter()
            .map(|l| SaleLine {
                product_id: l.product_id.clone(),
                name: l.name.clone(),
                quantity: l.quantity,
                unit_price_cents: l.unit_price_cents,
            })
            .collect();

        let total_cents: i64 = lines.iter().map(|l| l.line_total().cents()).sum();

        Ok(Sale {
            id: Uuid::new_v4().to_string(),
            committed_at: chrono::Utc::now(),
            price_mode: self.mode,
            lines,
            total_cents,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use chrono::Utc;

    fn product(id: &str, retail: i64, wholesale: i64, stock: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            category: Category::Groceries,
            retail_price_cents: retail,
            wholesale_price_cents: wholesale,
            stock,
            reorder_point: 5,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_line_creates_line_with_quantity_one() {
        let mut cart = Cart::new();
        let milk = product("1", 550, 380, 45);

        cart.add_line(&milk);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.lines()[0].unit_price_cents, 550);
    }

    #[test]
    fn test_add_line_increments_existing_line() {
        let mut cart = Cart::new();
        let milk = product("1", 550, 380, 45);

        cart.add_line(&milk);
        cart.add_line(&milk);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_add_line_out_of_stock_is_ignored() {
        let mut cart = Cart::new();
        let sold_out = product("1", 550, 380, 0);

        cart.add_line(&sold_out);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_line_stops_at_stock_limit() {
        let mut cart = Cart::new();
        let scarce = product("1", 550, 380, 2);

        cart.add_line(&scarce);
        cart.add_line(&scarce);
        cart.add_line(&scarce); // would exceed stock, silently rejected

        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_add_line_uses_wholesale_price_in_wholesale_mode() {
        let mut cart = Cart::with_mode(PriceMode::Wholesale);
        let milk = product("1", 550, 380, 45);

        cart.add_line(&milk);

        assert_eq!(cart.lines()[0].unit_price_cents, 380);
    }

    #[test]
    fn test_remove_line() {
        let mut cart = Cart::new();
        let milk = product("1", 550, 380, 45);
        cart.add_line(&milk);

        cart.remove_line("1");
        assert!(cart.is_empty());

        // Absent id is not an error
        cart.remove_line("nope");
    }

    #[test]
    fn test_adjust_quantity_up_within_stock() {
        let mut cart = Cart::new();
        let milk = product("1", 550, 380, 45);
        cart.add_line(&milk);

        cart.adjust_quantity("1", 3, Some(&milk));

        assert_eq!(cart.lines()[0].quantity, 4);
    }

    #[test]
    fn test_adjust_quantity_never_exceeds_current_stock() {
        let mut cart = Cart::new();
        let milk = product("1", 550, 380, 5);
        cart.add_line(&milk);

        cart.adjust_quantity("1", 10, Some(&milk));

        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_adjust_quantity_rechecks_current_stock_not_cached() {
        let mut cart = Cart::new();
        let milk = product("1", 550, 380, 45);
        cart.add_line(&milk);
        cart.adjust_quantity("1", 9, Some(&milk));
        assert_eq!(cart.lines()[0].quantity, 10);

        // Stock dropped since the line was built (e.g. a stock correction)
        let corrected = product("1", 550, 380, 3);
        cart.adjust_quantity("1", 1, Some(&corrected));

        // 11 > 3, rejected against CURRENT stock
        assert_eq!(cart.lines()[0].quantity, 10);
    }

    #[test]
    fn test_adjust_quantity_never_drops_below_one() {
        let mut cart = Cart::new();
        let milk = product("1", 550, 380, 45);
        cart.add_line(&milk);
        cart.adjust_quantity("1", 4, Some(&milk));

        cart.adjust_quantity("1", -10, Some(&milk));

        // Unchanged, and the line was not removed
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);

        cart.adjust_quantity("1", -4, Some(&milk));
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_adjust_quantity_vanished_product_leaves_line_unchanged() {
        let mut cart = Cart::new();
        let milk = product("1", 550, 380, 45);
        cart.add_line(&milk);

        cart.adjust_quantity("1", 2, None);

        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_set_price_mode_reprices_all_lines() {
        let milk = product("1", 550, 380, 45);
        let serum = product("3", 2499, 1500, 8);
        let catalog = vec![milk.clone(), serum.clone()];

        let mut cart = Cart::new();
        cart.add_line(&milk);
        cart.add_line(&serum);

        cart.set_price_mode(PriceMode::Wholesale, &catalog);

        assert_eq!(cart.active_mode(), PriceMode::Wholesale);
        assert_eq!(cart.lines()[0].unit_price_cents, 380);
        assert_eq!(cart.lines()[1].unit_price_cents, 1500);
    }

    #[test]
    fn test_set_price_mode_keeps_last_price_for_vanished_product() {
        let milk = product("1", 550, 380, 45);
        let serum = product("3", 2499, 1500, 8);

        let mut cart = Cart::new();
        cart.add_line(&milk);
        cart.add_line(&serum);

        // Serum was deleted from the catalog between add and mode switch
        let catalog = vec![milk];
        cart.set_price_mode(PriceMode::Wholesale, &catalog);

        assert_eq!(cart.lines()[0].unit_price_cents, 380);
        assert_eq!(cart.lines()[1].unit_price_cents, 2499); // stale but kept
    }

    #[test]
    fn test_total_sums_quantity_times_unit_price() {
        let milk = product("1", 550, 380, 45);
        let serum = product("3", 2499, 1500, 8);

        let mut cart = Cart::new();
        cart.add_line(&milk);
        cart.add_line(&milk);
        cart.add_line(&serum);

        assert_eq!(cart.total().cents(), 2 * 550 + 2499);
    }

    #[test]
    fn test_total_of_empty_cart_is_zero() {
        assert_eq!(Cart::new().total().cents(), 0);
    }

    #[test]
    fn test_clear_keeps_mode() {
        let milk = product("1", 550, 380, 45);
        let mut cart = Cart::with_mode(PriceMode::Wholesale);
        cart.add_line(&milk);

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total().cents(), 0);
        assert_eq!(cart.active_mode(), PriceMode::Wholesale);
    }

    #[test]
    fn test_to_sale_rejects_empty_cart() {
        let cart = Cart::new();
        assert!(matches!(cart.to_sale(), Err(CoreError::EmptyCart)));
    }

    #[test]
    fn test_to_sale_snapshots_lines_and_total() {
        let milk = product("1", 550, 380, 45);
        let serum = product("3", 2499, 1500, 8);

        let mut cart = Cart::new();
        cart.add_line(&milk);
        cart.add_line(&milk);
        cart.add_line(&serum);

        let sale = cart.to_sale().unwrap();

        assert_eq!(sale.price_mode, PriceMode::Retail);
        assert_eq!(sale.lines.len(), 2);
        assert_eq!(sale.lines[0].quantity, 2);
        assert_eq!(sale.lines[1].quantity, 1);
        // Round-trip property: committed total equals the cart total
        assert_eq!(sale.total_cents, cart.total().cents());

        // The snapshot is decoupled from the cart
        cart.clear();
        assert_eq!(sale.lines.len(), 2);
    }

    #[test]
    fn test_to_sale_generates_distinct_ids() {
        let milk = product("1", 550, 380, 45);
        let mut cart = Cart::new();
        cart.add_line(&milk);

        let first = cart.to_sale().unwrap();
        let second = cart.to_sale().unwrap();

        assert_ne!(first.id, second.id);
    }
}
