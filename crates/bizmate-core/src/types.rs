//! # Domain Types
//!
//! Core domain types used throughout BizMate POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                               │
//! │                                                                     │
//! │  ┌──────────────────────┐        ┌──────────────────────┐           │
//! │  │       Product        │        │         Sale         │           │
//! │  │  ──────────────────  │        │  ──────────────────  │           │
//! │  │  id (UUID)           │        │  id (UUID)           │           │
//! │  │  name                │        │  committed_at        │           │
//! │  │  category            │        │  price_mode          │           │
//! │  │  retail_price_cents  │        │  lines: [SaleLine]   │           │
//! │  │  wholesale_price_…   │        │  total_cents         │           │
//! │  │  stock               │        └──────────────────────┘           │
//! │  │  reorder_point       │                                           │
//! │  │  updated_at          │        ┌──────────────────────┐           │
//! │  └──────────────────────┘        │       SaleLine       │           │
//! │                                  │  ──────────────────  │           │
//! │  ┌───────────┐  ┌───────────┐    │  product_id (weak)   │           │
//! │  │ Category  │  │ PriceMode │    │  name (snapshot)     │           │
//! │  │ Groceries │  │  Retail   │    │  quantity            │           │
//! │  │ Beauty    │  │ Wholesale │    │  unit_price_cents    │           │
//! │  └───────────┘  └───────────┘    └──────────────────────┘           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Sale lines are value copies frozen at commit time. Renaming or repricing
//! a product afterwards must never alter historical sales.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// Product category.
///
/// Enumerated rather than free text so the reporting layer can aggregate
/// revenue per category without string normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Groceries,
    Beauty,
}

impl Category {
    /// Canonical name used in persisted records.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Groceries => "Groceries",
            Category::Beauty => "Beauty",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Groceries" => Ok(Category::Groceries),
            "Beauty" => Ok(Category::Beauty),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

// =============================================================================
// Price Mode
// =============================================================================

/// Active pricing mode for the sale in progress.
///
/// Determines which of a product's two price fields applies to new and
/// recalculated cart lines. Closed enumeration: price resolution never
/// fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceMode {
    Retail,
    Wholesale,
}

impl PriceMode {
    /// Canonical name used in persisted records (`'Retail' | 'Wholesale'`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            PriceMode::Retail => "Retail",
            PriceMode::Wholesale => "Wholesale",
        }
    }
}

impl Default for PriceMode {
    fn default() -> Self {
        PriceMode::Retail
    }
}

impl fmt::Display for PriceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Retail" => Ok(PriceMode::Retail),
            "Wholesale" => Ok(PriceMode::Wholesale),
            other => Err(format!("unknown price mode: {other}")),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// `stock` is the authoritative on-hand quantity and is never negative;
/// `reorder_point` is an advisory threshold surfaced by the reporting
/// layer, never enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4), immutable once assigned.
    pub id: String,

    /// Display name shown to the operator and captured into cart lines.
    pub name: String,

    /// Product category.
    pub category: Category,

    /// Retail price in cents.
    pub retail_price_cents: i64,

    /// Wholesale price in cents.
    pub wholesale_price_cents: i64,

    /// Current stock level. Invariant: stock >= 0 at all times.
    pub stock: i64,

    /// Advisory restock threshold.
    pub reorder_point: i64,

    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the retail price as a Money type.
    #[inline]
    pub fn retail_price(&self) -> Money {
        Money::from_cents(self.retail_price_cents)
    }

    /// Returns the wholesale price as a Money type.
    #[inline]
    pub fn wholesale_price(&self) -> Money {
        Money::from_cents(self.wholesale_price_cents)
    }

    /// Checks if the product is at or below its reorder point.
    #[inline]
    pub fn needs_restock(&self) -> bool {
        self.stock <= self.reorder_point
    }

    /// Checks if the product is out of stock.
    #[inline]
    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A committed sale.
///
/// Append-only: once committed, a sale is never mutated or deleted by this
/// engine. `total_cents` is computed once at commit and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    /// Unique identifier (UUID v4), generated at commit time.
    pub id: String,

    /// Commit timestamp.
    pub committed_at: DateTime<Utc>,

    /// Price mode in effect when the cart was committed.
    pub price_mode: PriceMode,

    /// Immutable snapshot of the cart's lines.
    pub lines: Vec<SaleLine>,

    /// Total amount in cents: sum(quantity × unit price) over all lines.
    pub total_cents: i64,
}

impl Sale {
    /// Returns the sale total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Sale Line
// =============================================================================

/// A line item in a committed sale.
///
/// Uses the snapshot pattern: product name and unit price are frozen at
/// commit time, decoupled from future product mutation. `product_id` is
/// kept only so reporting can join back to the catalog; the join is
/// best-effort (the product may since have been deleted).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleLine {
    /// Product this line was sold against (weak reference).
    pub product_id: String,

    /// Product name at time of sale (frozen).
    pub name: String,

    /// Quantity sold.
    pub quantity: i64,

    /// Unit price in cents at time of sale (frozen).
    pub unit_price_cents: i64,
}

impl SaleLine {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
