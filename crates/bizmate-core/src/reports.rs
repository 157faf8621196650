//! # Report Aggregation
//!
//! Pure aggregation over committed sales and current stock levels. These
//! functions feed dashboard-style views; they hold no state and never
//! touch a store themselves. Callers fetch the inputs and pass slices in.
//!
//! Sale lines reference products weakly, so a line whose product has since
//! been deleted aggregates under `None` in the category breakdown rather
//! than being dropped.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Category, Product, Sale};

// =============================================================================
// Restock Recommendations
// =============================================================================

/// Products at or below their reorder point, advisory only.
pub fn restock_candidates(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| p.needs_restock()).collect()
}

// =============================================================================
// Daily Summary
// =============================================================================

/// Revenue and transaction count for a single calendar day (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    pub revenue_cents: i64,
    pub transactions: usize,
}

impl DailySummary {
    /// Returns the day's revenue as Money.
    #[inline]
    pub fn revenue(&self) -> Money {
        Money::from_cents(self.revenue_cents)
    }
}

/// Aggregates all sales committed on the given UTC date.
pub fn daily_summary(sales: &[Sale], date: NaiveDate) -> DailySummary {
    let on_date = |committed_at: &DateTime<Utc>| committed_at.date_naive() == date;

    let mut revenue_cents = 0;
    let mut transactions = 0;
    for sale in sales.iter().filter(|s| on_date(&s.committed_at)) {
        revenue_cents += sale.total_cents;
        transactions += 1;
    }

    DailySummary {
        revenue_cents,
        transactions,
    }
}

// =============================================================================
// Revenue by Category
// =============================================================================

/// Revenue attributed to one category across all sales.
///
/// `category` is `None` for lines whose product no longer exists in the
/// catalog (the sale snapshot outlives the product).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRevenue {
    pub category: Option<Category>,
    pub revenue_cents: i64,
}

/// Breaks all-time line revenue down by product category.
///
/// Joins each sale line back to the catalog by product id; the join is
/// best-effort. Output order: Groceries, Beauty, then the unattributed
/// bucket, with zero-revenue buckets omitted.
pub fn revenue_by_category(sales: &[Sale], products: &[Product]) -> Vec<CategoryRevenue> {
    let mut groceries = 0i64;
    let mut beauty = 0i64;
    let mut unattributed = 0i64;

    for line in sales.iter().flat_map(|s| s.lines.iter()) {
        let revenue = line.line_total().cents();
        match products
            .iter()
            .find(|p| p.id == line.product_id)
            .map(|p| p.category)
        {
            Some(Category::Groceries) => groceries += revenue,
            Some(Category::Beauty) => beauty += revenue,
            None => unattributed += revenue,
        }
    }

    let mut out = Vec::new();
    if groceries != 0 {
        out.push(CategoryRevenue {
            category: Some(Category::Groceries),
            revenue_cents: groceries,
        });
    }
    if beauty != 0 {
        out.push(CategoryRevenue {
            category: Some(Category::Beauty),
            revenue_cents: beauty,
        });
    }
    if unattributed != 0 {
        out.push(CategoryRevenue {
            category: None,
            revenue_cents: unattributed,
        });
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PriceMode, SaleLine};
    use chrono::TimeZone;

    fn product(id: &str, category: Category, stock: i64, reorder_point: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            category,
            retail_price_cents: 1000,
            wholesale_price_cents: 700,
            stock,
            reorder_point,
            updated_at: Utc::now(),
        }
    }

    fn sale(id: &str, committed_at: DateTime<Utc>, lines: Vec<SaleLine>) -> Sale {
        let total_cents = lines.iter().map(|l| l.line_total().cents()).sum();
        Sale {
            id: id.to_string(),
            committed_at,
            price_mode: PriceMode::Retail,
            lines,
            total_cents,
        }
    }

    fn line(product_id: &str, quantity: i64, unit_price_cents: i64) -> SaleLine {
        SaleLine {
            product_id: product_id.to_string(),
            name: format!("Product {product_id}"),
            quantity,
            unit_price_cents,
        }
    }

    #[test]
    fn test_restock_candidates() {
        let products = vec![
            product("1", Category::Groceries, 45, 20),
            product("2", Category::Groceries, 12, 15),
            product("3", Category::Beauty, 10, 10), // boundary: stock == reorder point
        ];

        let low: Vec<&str> = restock_candidates(&products)
            .iter()
            .map(|p| p.id.as_str())
            .collect();

        assert_eq!(low, vec!["2", "3"]);
    }

    #[test]
    fn test_daily_summary_filters_by_date() {
        let today = Utc.with_ymd_and_hms(2026, 8, 23, 10, 0, 0).unwrap();
        let yesterday = Utc.with_ymd_and_hms(2026, 8, 22, 18, 30, 0).unwrap();

        let sales = vec![
            sale("s1", today, vec![line("1", 2, 550)]),
            sale("s2", today, vec![line("3", 1, 2499)]),
            sale("s3", yesterday, vec![line("1", 1, 550)]),
        ];

        let summary = daily_summary(&sales, today.date_naive());

        assert_eq!(summary.transactions, 2);
        assert_eq!(summary.revenue_cents, 2 * 550 + 2499);
    }

    #[test]
    fn test_daily_summary_empty_ledger() {
        let summary = daily_summary(&[], Utc::now().date_naive());
        assert_eq!(summary.transactions, 0);
        assert!(summary.revenue().is_zero());
    }

    #[test]
    fn test_revenue_by_category_joins_back_to_catalog() {
        let products = vec![
            product("1", Category::Groceries, 45, 20),
            product("3", Category::Beauty, 8, 10),
        ];
        let sales = vec![sale(
            "s1",
            Utc::now(),
            vec![line("1", 2, 550), line("3", 1, 2499), line("gone", 1, 600)],
        )];

        let breakdown = revenue_by_category(&sales, &products);

        assert_eq!(
            breakdown,
            vec![
                CategoryRevenue {
                    category: Some(Category::Groceries),
                    revenue_cents: 1100,
                },
                CategoryRevenue {
                    category: Some(Category::Beauty),
                    revenue_cents: 2499,
                },
                CategoryRevenue {
                    category: None,
                    revenue_cents: 600,
                },
            ]
        );
    }
}
