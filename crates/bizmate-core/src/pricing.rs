//! # Pricing Resolver
//!
//! Derives a line price from a product and the active price mode.
//!
//! Pure function, no side effects, never fails: `PriceMode` is a closed
//! enumeration and both price fields always exist on a product.

use crate::money::Money;
use crate::types::{PriceMode, Product};

/// Resolves the unit price for a product under the given mode.
///
/// ## Example
/// ```rust
/// use bizmate_core::pricing::resolve_price;
/// use bizmate_core::types::{Category, PriceMode, Product};
/// use chrono::Utc;
///
/// let product = Product {
///     id: "p1".to_string(),
///     name: "Organic Almond Milk".to_string(),
///     category: Category::Groceries,
///     retail_price_cents: 550,
///     wholesale_price_cents: 380,
///     stock: 45,
///     reorder_point: 20,
///     updated_at: Utc::now(),
/// };
///
/// assert_eq!(resolve_price(&product, PriceMode::Retail).cents(), 550);
/// assert_eq!(resolve_price(&product, PriceMode::Wholesale).cents(), 380);
/// ```
#[inline]
pub fn resolve_price(product: &Product, mode: PriceMode) -> Money {
    match mode {
        PriceMode::Retail => product.retail_price(),
        PriceMode::Wholesale => product.wholesale_price(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use chrono::Utc;

    fn serum() -> Product {
        Product {
            id: "3".to_string(),
            name: "Retinol Face Serum".to_string(),
            category: Category::Beauty,
            retail_price_cents: 2499,
            wholesale_price_cents: 1500,
            stock: 8,
            reorder_point: 10,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_retail_mode_uses_retail_price() {
        assert_eq!(resolve_price(&serum(), PriceMode::Retail).cents(), 2499);
    }

    #[test]
    fn test_wholesale_mode_uses_wholesale_price() {
        assert_eq!(resolve_price(&serum(), PriceMode::Wholesale).cents(), 1500);
    }

    #[test]
    fn test_zero_price_is_allowed() {
        let mut free = serum();
        free.retail_price_cents = 0;
        assert_eq!(resolve_price(&free, PriceMode::Retail).cents(), 0);
    }
}
