//! # Domain Types
//!
//! Core domain types used throughout BrewMaster.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Category     │   │   RoastLevel    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  Beans          │   │  Light          │       │
//! │  │  name           │   │  Ground         │   │  Medium         │       │
//! │  │  price_cents    │   │  Equipment      │   │  Dark           │       │
//! │  │  stock          │   │  Accessories    │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    TaxRate      │   │  Availability   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  bps (u32)      │   │  InStock        │                             │
//! │  │  800 = 8%       │   │  LowStock { n } │                             │
//! │  └─────────────────┘   │  OutOfStock     │                             │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Read Model
//! `Product` is a read model: the cart layer never mutates it. Stock here is
//! the advertised level used for quantity clamping, not a live inventory
//! counter.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::LOW_STOCK_THRESHOLD;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 800 bps = 8% (the storefront's flat sales tax)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Category
// =============================================================================

/// Top-level product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Whole coffee beans.
    Beans,
    /// Pre-ground coffee.
    Ground,
    /// Brewers, grinders, kettles.
    Equipment,
    /// Mugs, filters, scoops.
    Accessories,
}

// =============================================================================
// Roast Level
// =============================================================================

/// Roast level for coffee products.
///
/// Only meaningful for `Beans` and `Ground`; equipment and accessories
/// carry `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RoastLevel {
    Light,
    Medium,
    Dark,
}

// =============================================================================
// Product
// =============================================================================

/// A product available in the storefront catalog.
///
/// ## Design Notes
/// - `price_cents` and `stock` drive all cart behavior
/// - Everything else is display data the cart carries but never interprets
/// - `stock` is advertised availability, used as the clamp ceiling for
///   cart quantities
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: String,

    /// Display name shown on cards and in the cart.
    pub name: String,

    /// Longer description for the product detail view.
    pub description: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Image path or URL.
    pub image: String,

    /// Product category.
    pub category: Category,

    /// Roast level (coffee products only).
    pub roast_level: Option<RoastLevel>,

    /// Country or region of origin.
    pub origin: Option<String>,

    /// Suggested brewing methods ("Pour Over", "French Press", ...).
    #[serde(default)]
    pub brewing_methods: Vec<String>,

    /// Advertised stock level.
    pub stock: u32,

    /// Average customer rating, 0.0 to 5.0.
    pub rating: f32,

    /// Number of customer reviews.
    pub reviews: u32,

    /// Certified organic.
    #[serde(default)]
    pub is_organic: bool,

    /// Fair trade certified.
    #[serde(default)]
    pub is_fair_trade: bool,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks if the product has any stock to sell.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Derives the availability tier shown on product pages.
    ///
    /// ```text
    /// stock > 10   →  InStock
    /// stock 1..=10 →  LowStock { remaining }   "Only N left"
    /// stock == 0   →  OutOfStock
    /// ```
    pub fn availability(&self) -> Availability {
        if self.stock == 0 {
            Availability::OutOfStock
        } else if self.stock <= LOW_STOCK_THRESHOLD {
            Availability::LowStock {
                remaining: self.stock,
            }
        } else {
            Availability::InStock
        }
    }
}

// =============================================================================
// Availability
// =============================================================================

/// Stock availability tier for badges and add-button state.
///
/// Serializes as tagged JSON: `{ "status": "LowStock", "remaining": 3 }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "status")]
pub enum Availability {
    /// Plenty of stock; no badge shown.
    InStock,
    /// Running low; UI shows "Only N left".
    LowStock { remaining: u32 },
    /// Nothing to sell; add-to-cart is disabled.
    OutOfStock,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(stock: u32) -> Product {
        Product {
            id: "1".to_string(),
            name: "Ethiopian Yirgacheffe".to_string(),
            description: "Bright and floral with citrus notes".to_string(),
            price_cents: 1250,
            image: "/images/yirgacheffe.jpg".to_string(),
            category: Category::Beans,
            roast_level: Some(RoastLevel::Light),
            origin: Some("Ethiopia".to_string()),
            brewing_methods: vec!["Pour Over".to_string(), "Drip".to_string()],
            stock,
            rating: 4.8,
            reviews: 127,
            is_organic: true,
            is_fair_trade: true,
        }
    }

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(800);
        assert_eq!(rate.bps(), 800);
        assert_eq!(rate.percentage(), 8.0);
    }

    #[test]
    fn test_tax_rate_from_percentage() {
        let rate = TaxRate::from_percentage(8.0);
        assert_eq!(rate.bps(), 800);
    }

    #[test]
    fn test_product_price() {
        let product = test_product(15);
        assert_eq!(product.price(), Money::from_cents(1250));
    }

    #[test]
    fn test_availability_tiers() {
        assert_eq!(test_product(11).availability(), Availability::InStock);
        assert_eq!(
            test_product(10).availability(),
            Availability::LowStock { remaining: 10 }
        );
        assert_eq!(
            test_product(1).availability(),
            Availability::LowStock { remaining: 1 }
        );
        assert_eq!(test_product(0).availability(), Availability::OutOfStock);

        assert!(test_product(1).in_stock());
        assert!(!test_product(0).in_stock());
    }

    #[test]
    fn test_category_wire_format() {
        let json = serde_json::to_string(&Category::Beans).unwrap();
        assert_eq!(json, r#""beans""#);
        let json = serde_json::to_string(&RoastLevel::Medium).unwrap();
        assert_eq!(json, r#""medium""#);
    }

    #[test]
    fn test_availability_wire_format() {
        let json = serde_json::to_value(Availability::LowStock { remaining: 3 }).unwrap();
        assert_eq!(json["status"], "LowStock");
        assert_eq!(json["remaining"], 3);

        let json = serde_json::to_value(Availability::InStock).unwrap();
        assert_eq!(json["status"], "InStock");
    }

    #[test]
    fn test_product_deserializes_with_defaults() {
        // Equipment entries in the seed catalog omit coffee-only fields
        let json = r#"{
            "id": "7",
            "name": "Pour Over Dripper",
            "description": "Ceramic cone dripper",
            "priceCents": 2450,
            "image": "/images/dripper.jpg",
            "category": "equipment",
            "stock": 8,
            "rating": 4.6,
            "reviews": 89
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.category, Category::Equipment);
        assert!(product.roast_level.is_none());
        assert!(product.brewing_methods.is_empty());
        assert!(!product.is_organic);
        assert!(!product.is_fair_trade);
    }
}
