//! End-to-end checkout flow over the SQLite stores.
//!
//! The unit tests in `src/` run against the in-memory fakes; this suite
//! proves the same engine behavior holds over a real database file
//! (in-memory SQLite, WAL semantics aside).

use chrono::Utc;

use bizmate_core::store::{CatalogStore, LedgerStore};
use bizmate_core::types::{Category, PriceMode, Product};
use bizmate_register::{Inventory, Register};
use bizmate_store::{Database, DbConfig};

fn demo_product(
    id: &str,
    name: &str,
    category: Category,
    retail: i64,
    wholesale: i64,
    stock: i64,
    reorder_point: i64,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category,
        retail_price_cents: retail,
        wholesale_price_cents: wholesale,
        stock,
        reorder_point,
        updated_at: Utc::now(),
    }
}

async fn seeded_db() -> Database {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let catalog = db.catalog();

    let products = [
        demo_product("p1", "Organic Almond Milk", Category::Groceries, 550, 380, 45, 20),
        demo_product("p2", "Sourdough Bread", Category::Groceries, 600, 400, 12, 15),
        demo_product("p3", "Retinol Face Serum", Category::Beauty, 2499, 1500, 8, 10),
    ];
    for product in &products {
        catalog.upsert_product(product).await.unwrap();
    }

    db
}

#[tokio::test]
async fn retail_checkout_persists_sale_and_stock() {
    let db = seeded_db().await;
    let mut register = Register::new(db.catalog(), db.ledger());

    register.add_to_cart("p1").await.unwrap();
    register.add_to_cart("p1").await.unwrap();
    register.add_to_cart("p3").await.unwrap();
    assert_eq!(register.total().cents(), 3599);

    let sale = register.checkout().await.unwrap();
    assert_eq!(sale.total_cents, 3599);
    assert!(register.is_empty());

    // The sale round-trips through SQLite intact
    let sales = db.ledger().list_sales().await.unwrap();
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].id, sale.id);
    assert_eq!(sales[0].price_mode, PriceMode::Retail);
    assert_eq!(sales[0].lines.len(), 2);
    assert_eq!(sales[0].total_cents, 3599);

    // Stock decremented in place
    let milk = db.catalog().get_product("p1").await.unwrap().unwrap();
    let serum = db.catalog().get_product("p3").await.unwrap().unwrap();
    assert_eq!(milk.stock, 43);
    assert_eq!(serum.stock, 7);
}

#[tokio::test]
async fn wholesale_mode_reprices_before_commit() {
    let db = seeded_db().await;
    let mut register = Register::new(db.catalog(), db.ledger());

    register.add_to_cart("p1").await.unwrap();
    register.set_price_mode(PriceMode::Wholesale).await.unwrap();

    let sale = register.checkout().await.unwrap();
    assert_eq!(sale.price_mode, PriceMode::Wholesale);
    assert_eq!(sale.total_cents, 380);

    let sales = db.ledger().list_sales().await.unwrap();
    assert_eq!(sales[0].lines[0].unit_price_cents, 380);
}

#[tokio::test]
async fn committed_sale_outlives_product_deletion() {
    let db = seeded_db().await;
    let mut register = Register::new(db.catalog(), db.ledger());

    register.add_to_cart("p3").await.unwrap();
    let sale = register.checkout().await.unwrap();

    let inventory = Inventory::new(db.catalog());
    inventory.delete_product("p3").await.unwrap();

    // Snapshot survives with its frozen name and price
    let sales = db.ledger().list_sales().await.unwrap();
    assert_eq!(sales[0].id, sale.id);
    assert_eq!(sales[0].lines[0].name, "Retinol Face Serum");
    assert_eq!(sales[0].lines[0].unit_price_cents, 2499);
}

#[tokio::test]
async fn oversell_attempt_clamps_at_zero_stock() {
    let db = seeded_db().await;
    let mut register = Register::new(db.catalog(), db.ledger());

    // Drain serum stock to the cart limit (8 in stock)
    for _ in 0..20 {
        register.add_to_cart("p3").await.unwrap();
    }
    assert_eq!(register.line_items()[0].quantity, 8);

    register.checkout().await.unwrap();

    let serum = db.catalog().get_product("p3").await.unwrap().unwrap();
    assert_eq!(serum.stock, 0);
}

#[tokio::test]
async fn restock_report_reflects_post_sale_levels() {
    let db = seeded_db().await;
    let mut register = Register::new(db.catalog(), db.ledger());
    let inventory = Inventory::new(db.catalog());

    // Bread (12/15) is already low; serum (8/10) too; milk (45/20) is not
    let low = inventory.restock_report().await.unwrap();
    let ids: Vec<&str> = low.iter().map(|p| p.id.as_str()).collect();
    assert!(ids.contains(&"p2"));
    assert!(ids.contains(&"p3"));
    assert!(!ids.contains(&"p1"));

    // Sell milk down past its reorder point
    register.add_to_cart("p1").await.unwrap();
    register.adjust_quantity("p1", 29).await.unwrap();
    register.checkout().await.unwrap();

    let low = inventory.restock_report().await.unwrap();
    let ids: Vec<&str> = low.iter().map(|p| p.id.as_str()).collect();
    assert!(ids.contains(&"p1")); // 45 - 30 = 15 <= 20
}

#[tokio::test]
async fn daily_summary_over_sqlite_ledger() {
    let db = seeded_db().await;
    let mut register = Register::new(db.catalog(), db.ledger());

    register.add_to_cart("p1").await.unwrap();
    register.checkout().await.unwrap();
    register.add_to_cart("p2").await.unwrap();
    register.checkout().await.unwrap();

    let summary = register.daily_summary(Utc::now().date_naive()).await.unwrap();
    assert_eq!(summary.transactions, 2);
    assert_eq!(summary.revenue_cents, 550 + 600);
}
