//! # Validation Module
//!
//! Input validation for catalog data.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Catalog construction (Rust)                                  │
//! │  └── THIS MODULE: every product is checked before it is served         │
//! │                                                                         │
//! │  Cart operations validate nothing: by the time a product reaches the   │
//! │  cart it came out of a validated catalog, and quantities are clamped   │
//! │  rather than rejected.                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use brew_core::validation::{validate_product_id, validate_product_name};
//!
//! validate_product_id("ethiopian-yirgacheffe").unwrap();
//! validate_product_name("Ethiopian Yirgacheffe").unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::Product;

pub use crate::error::ValidationResult;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 64 characters
///
/// Ids are catalog-scoped slugs ("ethiopian-yirgacheffe", "7"), not UUIDs,
/// so no format is enforced beyond length.
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > 64 {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: 64,
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use brew_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Colombian Supremo").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
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

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (promotional freebies)
///
/// ## Example
/// ```rust
/// use brew_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1250).is_ok());  // $12.50
/// assert!(validate_price_cents(0).is_ok());     // Free item
/// assert!(validate_price_cents(-100).is_err()); // Invalid
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a customer rating.
///
/// ## Rules
/// - Must be between 0.0 and 5.0 (NaN fails the range check)
pub fn validate_rating(rating: f32) -> ValidationResult<()> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0,
            max: 5,
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
/// - Typical storefront rates are 0-2500 (0% to 25%)
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Product Validator
// =============================================================================

/// Validates a whole catalog product.
///
/// Run on every product when the catalog is built, so anything the cart
/// later touches is known-good.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_id(&product.id)?;
    validate_product_name(&product.name)?;
    validate_price_cents(product.price_cents)?;
    validate_rating(product.rating)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
