//! # Validation Module
//!
//! Input validation for product records before they reach the catalog.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Validation Layers                             │
//! │                                                                     │
//! │  Layer 1: Presentation (out of scope here)                          │
//! │  └── Basic format checks, immediate operator feedback               │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - business rule validation                    │
//! │  └── Called by Inventory::save_product before any write             │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Storage (SQLite CHECK/NOT NULL constraints)               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a price in cents. Zero is allowed (free items).
pub fn validate_price_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a stock or reorder-point count.
pub fn validate_count(field: &str, count: i64) -> ValidationResult<()> {
    if count < 0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates an entire product record.
///
/// Checks every field-level rule: retail/wholesale prices >= 0,
/// stock >= 0, reorder point >= 0, plus a usable display name.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_name(&product.name)?;
    validate_price_cents("retail price", product.retail_price_cents)?;
    validate_price_cents("wholesale price", product.wholesale_price_cents)?;
    validate_count("stock", product.stock)?;
    validate_count("reorder point", product.reorder_point)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use chrono::Utc;

    fn valid_product() -> Product {
        Product {
            id: "p1".to_string(),
            name: "Moisturizing Cream".to_string(),
            category: Category::Beauty,
            retail_price_cents: 1850,
            wholesale_price_cents: 1125,
            stock: 50,
            reorder_point: 10,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Jasmine Rice (5kg)").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents("retail price", 0).is_ok());
        assert!(validate_price_cents("retail price", 1099).is_ok());
        assert!(validate_price_cents("retail price", -100).is_err());
    }

    #[test]
    fn test_validate_count() {
        assert!(validate_count("stock", 0).is_ok());
        assert!(validate_count("stock", -1).is_err());
    }

    #[test]
    fn test_validate_product() {
        assert!(validate_product(&valid_product()).is_ok());

        let mut negative_stock = valid_product();
        negative_stock.stock = -5;
        assert!(validate_product(&negative_stock).is_err());

        let mut nameless = valid_product();
        nameless.name = String::new();
        assert!(validate_product(&nameless).is_err());
    }
}
