//! # Register Errors
//!
//! The error surface callers of the engine see. Core and store errors are
//! folded into one enum here so the presentation layer handles a single
//! type.

use thiserror::Error;

use bizmate_core::error::{CoreError, StoreError, ValidationError};

/// Errors produced by register and inventory operations.
#[derive(Debug, Error)]
pub enum RegisterError {
    /// Checkout was attempted with no lines in the cart.
    #[error("cannot commit an empty cart")]
    EmptyCart,

    /// Operator input failed validation (product management).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The catalog or ledger store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<CoreError> for RegisterError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EmptyCart => RegisterError::EmptyCart,
            CoreError::Validation(v) => RegisterError::Validation(v),
        }
    }
}

/// Convenience type alias for Results with RegisterError.
pub type RegisterResult<T> = Result<T, RegisterError>;
