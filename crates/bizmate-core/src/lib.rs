//! # bizmate-core: Pure Business Logic for BizMate POS
//!
//! This crate is the **heart** of BizMate POS. It contains the transaction
//! and inventory-consistency rules as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      BizMate POS Architecture                       │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                 bizmate-register (Engine)                   │   │
//! │  │   add_to_cart, adjust_quantity, set_price_mode, checkout    │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │              ★ bizmate-core (THIS CRATE) ★                   │   │
//! │  │                                                              │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌────────┐ │   │
//! │  │  │  types  │ │  money  │ │  cart   │ │ pricing │ │ store  │ │   │
//! │  │  │ Product │ │  Money  │ │  Cart   │ │ resolve │ │ traits │ │   │
//! │  │  │  Sale   │ │ (cents) │ │CartLine │ │ _price  │ │        │ │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └────────┘ │   │
//! │  │                                                              │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │                 bizmate-store (Storage Layer)                │   │
//! │  │        SQLite catalog & ledger, in-memory fakes              │   │
//! │  └──────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Sale, Category, PriceMode)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The in-progress sale: line items, stock checks, snapshot
//! - [`pricing`] - Retail/wholesale price resolution
//! - [`store`] - Catalog and ledger store traits (capability interfaces)
//! - [`reports`] - Pure aggregation over committed sales and stock levels
//! - [`validation`] - Business rule validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic where possible
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64)
//! 4. **Weak product references**: cart lines carry product ids, never live
//!    handles; callers pass freshly resolved products into stock checks
//!
//! ## Example Usage
//!
//! ```rust
//! use bizmate_core::money::Money;
//!
//! // Create money from cents (never from floats!)
//! let retail = Money::from_cents(550); // $5.50
//! assert_eq!(retail.multiply_quantity(2).cents(), 1100);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod pricing;
pub mod reports;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bizmate_core::Money` instead of
// `use bizmate_core::money::Money`.

pub use cart::{Cart, CartLine};
pub use error::{CoreError, StoreError, ValidationError};
pub use money::Money;
pub use store::{CatalogStore, LedgerStore};
pub use types::*;
