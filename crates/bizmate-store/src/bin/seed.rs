//! # Seed Data Generator
//!
//! Populates the database with the demo catalog for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p bizmate-store --bin seed
//!
//! # Specify database path
//! cargo run -p bizmate-store --bin seed -- --db ./data/bizmate.db
//! ```
//!
//! Seeds five demo products spanning both categories, each with a stock
//! level and reorder point chosen so the restock report has something to
//! show out of the box.

use chrono::Utc;
use std::env;

use bizmate_core::store::CatalogStore;
use bizmate_core::types::{Category, Product};
use bizmate_store::{Database, DbConfig};
use uuid::Uuid;

/// Demo catalog: (name, category, retail cents, wholesale cents, stock, reorder point)
const DEMO_PRODUCTS: &[(&str, Category, i64, i64, i64, i64)] = &[
    ("Organic Almond Milk", Category::Groceries, 550, 380, 45, 20),
    ("Sourdough Bread", Category::Groceries, 600, 400, 12, 15),
    ("Retinol Face Serum", Category::Beauty, 2499, 1500, 8, 10),
    ("Moisturizing Cream", Category::Beauty, 1850, 1125, 50, 10),
    ("Jasmine Rice (5kg)", Category::Groceries, 1200, 950, 100, 20),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./bizmate_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("BizMate POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./bizmate_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 BizMate POS Seed Data Generator");
    println!("==================================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let catalog = db.catalog();

    let existing = catalog.list_products().await?;
    if !existing.is_empty() {
        println!("⚠ Database already has {} products", existing.len());
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Seeding demo catalog...");

    let now = Utc::now();
    for (name, category, retail, wholesale, stock, reorder_point) in DEMO_PRODUCTS {
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: (*name).to_string(),
            category: *category,
            retail_price_cents: *retail,
            wholesale_price_cents: *wholesale,
            stock: *stock,
            reorder_point: *reorder_point,
            updated_at: now,
        };
        catalog.upsert_product(&product).await?;
        println!("  + {} ({})", product.name, product.category);
    }

    println!();
    println!("✓ Seeded {} products", DEMO_PRODUCTS.len());

    Ok(())
}
