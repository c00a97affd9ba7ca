//! # Store Error Type
//!
//! Unified error type for the session state layer.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in BrewMaster                             │
//! │                                                                         │
//! │  add_to_cart("missing-id") ──► StoreError::ProductNotFound             │
//! │                                                                         │
//! │  Catalog::new(bad data) ─────► StoreError::Validation                  │
//! │                                                                         │
//! │  Everything else on the cart path is infallible: quantities are        │
//! │  clamped and unknown ids are ignored, reported via CartChange.         │
//! │  The only failure a cart mutation can have is naming a product the     │
//! │  catalog has never heard of.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use brew_core::ValidationError;

/// Errors from the catalog and cart store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested product id does not exist in the catalog.
    ///
    /// Note this is distinct from "not in the cart": operating on a
    /// catalog product that isn't in the cart is a no-op, not an error.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Catalog or configuration data failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::ProductNotFound("decaf-9".to_string());
        assert_eq!(err.to_string(), "Product not found: decaf-9");
    }

    #[test]
    fn test_validation_converts_to_store_error() {
        let validation_err = ValidationError::Required {
            field: "id".to_string(),
        };
        let store_err: StoreError = validation_err.into();
        assert!(matches!(store_err, StoreError::Validation(_)));
    }
}
