//! # brew-core: Pure Business Logic for BrewMaster
//!
//! This crate is the **heart** of the BrewMaster storefront. It contains
//! all cart and pricing logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       BrewMaster Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront UI                                │   │
//! │  │    Product Grid ──► Detail Page ──► Cart Page ──► Header Badge │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CartSnapshot (JSON)                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              brew-store (Session State Layer)                   │   │
//! │  │    Catalog lookup, CartStore mutations, change notification    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ brew-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  pricing  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  tax +    │  │   │
//! │  │   │ Category  │  │  TaxCalc  │  │ LineItem  │  │  shipping │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • PURE LOGIC                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, RoastLevel, Availability)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart, line items, and the CartChange outcome type
//! - [`pricing`] - Tax, shipping, and order summaries
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog data validation
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: No globals - a cart is a value you construct and own
//! 2. **No I/O**: Network, file system, and database access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Clamp, Don't Throw**: Cart mutations never fail - bad input is clamped or
//!    ignored and the outcome is reported through [`cart::CartChange`]
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use brew_core::cart::Cart;
//! use brew_core::pricing::PricingPolicy;
//! use brew_core::types::{Category, Product};
//!
//! let beans = Arc::new(Product {
//!     id: "ethiopian-yirgacheffe".to_string(),
//!     name: "Ethiopian Yirgacheffe".to_string(),
//!     description: "Bright and floral".to_string(),
//!     price_cents: 1250,
//!     image: "/images/yirgacheffe.jpg".to_string(),
//!     category: Category::Beans,
//!     roast_level: None,
//!     origin: Some("Ethiopia".to_string()),
//!     brewing_methods: vec![],
//!     stock: 20,
//!     rating: 4.8,
//!     reviews: 127,
//!     is_organic: true,
//!     is_fair_trade: true,
//! });
//!
//! let mut cart = Cart::new();
//! cart.add_item(&beans, 2);
//!
//! let summary = PricingPolicy::default().summarize(&cart);
//! assert_eq!(summary.subtotal_cents, 2500); // $25.00
//! assert_eq!(summary.shipping_cents, 499);  // Not strictly above $25.00 yet
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use brew_core::Money` instead of
// `use brew_core::money::Money`

pub use cart::{Cart, CartChange, CartTotals, LineItem};
pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use pricing::{OrderSummary, PricingPolicy};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default sales tax in basis points (800 = 8%).
///
/// The storefront charges one flat rate on every order subtotal.
/// Jurisdiction-aware tax tables are out of scope for this store.
pub const DEFAULT_TAX_RATE_BPS: u32 = 800;

/// Flat shipping charge in cents ($4.99).
pub const FLAT_SHIPPING_CENTS: i64 = 499;

/// Free-shipping threshold in cents ($25.00).
///
/// Orders with a subtotal strictly above this amount ship free;
/// an order of exactly $25.00 still pays the flat rate.
pub const FREE_SHIPPING_OVER_CENTS: i64 = 2500;

/// Stock level at or below which the UI shows "Only N left".
pub const LOW_STOCK_THRESHOLD: u32 = 10;
