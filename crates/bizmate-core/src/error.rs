//! # Error Types
//!
//! Domain-specific error types for bizmate-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  bizmate-core errors (this file)                                    │
//! │  ├── CoreError        - Business rule violations (empty commit)     │
//! │  ├── ValidationError  - Input validation failures                   │
//! │  └── StoreError       - Storage failures surfaced by store traits   │
//! │                                                                     │
//! │  bizmate-register errors (separate crate)                           │
//! │  └── RegisterError    - What the presentation layer sees            │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError ─┐                               │
//! │                         StoreError ─┴→ RegisterError → Caller       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## A note on silent rejections
//! Stock-limit rejections inside the cart are deliberately NOT errors.
//! The cart leaves its state unchanged and signals nothing; the catalog
//! view is expected to prevent most of them up front. Only conditions the
//! caller must react to (empty commit, storage failure) become variants
//! here.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Checkout was attempted with no lines in the cart.
    ///
    /// ## When This Occurs
    /// The presentation layer should disable the checkout action for an
    /// empty cart, but the engine enforces the rule regardless.
    #[error("cannot commit an empty cart")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when operator input doesn't meet requirements. Used for
/// early validation before a product record reaches the catalog store.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative (prices, stock, reorder point).
    #[error("{field} must not be negative")]
    Negative { field: String },
}

// =============================================================================
// Store Error
// =============================================================================

/// Errors surfaced by the catalog and ledger store traits.
///
/// Store implementations live outside this crate, so the variants stay
/// backend-agnostic: a SQLite implementation folds its driver errors into
/// [`StoreError::Backend`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found in the store.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A record in the store could not be decoded into its domain type.
    #[error("corrupt {entity} record: {reason}")]
    Corrupt { entity: String, reason: String },

    /// The underlying storage backend failed.
    ///
    /// Propagated to the caller as-is; the engine does not retry or roll
    /// back (see the commit ordering notes on the register).
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Creates a Corrupt error for an undecodable record.
    pub fn corrupt(entity: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        StoreError::Corrupt {
            entity: entity.into(),
            reason: reason.to_string(),
        }
    }

    /// Folds any backend error into [`StoreError::Backend`].
    ///
    /// The orphan rule keeps `From<sqlx::Error>` out of this crate, so
    /// implementations call `.map_err(StoreError::backend)` instead.
    pub fn backend(err: impl std::fmt::Display) -> Self {
        StoreError::Backend(err.to_string())
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
