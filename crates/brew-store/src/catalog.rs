//! # Catalog Module
//!
//! The validated, immutable product catalog the storefront serves from.
//!
//! ## Catalog Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Lifecycle                                  │
//! │                                                                         │
//! │  Vec<Product> (seed data, JSON, fixtures)                              │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Catalog::new() ── validates every product, rejects duplicates         │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Arc<Catalog> ── shared by stores, views, and search                   │
//! │        │                                                                │
//! │        ├── get(id)      ──► product detail page, add_to_cart           │
//! │        ├── search(query)──► product grid with filters + sort           │
//! │        └── products()   ──► featured sections, sitemaps                │
//! │                                                                         │
//! │  The catalog never changes after construction. Carts hold Arc          │
//! │  handles into it, so prices and stock can't drift mid-session.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use brew_core::validation::validate_product;
use brew_core::{Category, Product, RoastLevel, ValidationError};

use crate::error::StoreResult;

// =============================================================================
// Sort Key
// =============================================================================

/// Sort order for catalog search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Alphabetical by product name (the default).
    #[default]
    Name,
    /// Cheapest first.
    PriceLowHigh,
    /// Most expensive first.
    PriceHighLow,
    /// Best rated first.
    Rating,
}

// =============================================================================
// Catalog Query
// =============================================================================

/// Filter and sort parameters for a catalog search.
///
/// All filters are optional and combine with AND. The default query
/// matches everything, sorted by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    /// Case-insensitive term matched against name, description, and origin.
    pub term: Option<String>,

    /// Restrict to one category.
    pub category: Option<Category>,

    /// Restrict to one roast level. Products without a roast level
    /// (equipment, accessories) never match a roast filter.
    pub roast_level: Option<RoastLevel>,

    /// Only certified-organic products.
    #[serde(default)]
    pub organic_only: bool,

    /// Only fair-trade products.
    #[serde(default)]
    pub fair_trade_only: bool,

    /// Result ordering.
    #[serde(default)]
    pub sort: SortKey,
}

impl CatalogQuery {
    /// The search term, trimmed and lowercased; None when there is
    /// effectively no term.
    fn normalized_term(&self) -> Option<String> {
        self.term
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
    }

    fn matches(&self, product: &Product, term: Option<&str>) -> bool {
        if let Some(term) = term {
            let hit = product.name.to_lowercase().contains(term)
                || product.description.to_lowercase().contains(term)
                || product
                    .origin
                    .as_deref()
                    .is_some_and(|o| o.to_lowercase().contains(term));
            if !hit {
                return false;
            }
        }

        if let Some(category) = self.category {
            if product.category != category {
                return false;
            }
        }

        if let Some(roast) = self.roast_level {
            if product.roast_level != Some(roast) {
                return false;
            }
        }

        if self.organic_only && !product.is_organic {
            return false;
        }

        if self.fair_trade_only && !product.is_fair_trade {
            return false;
        }

        true
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Immutable product catalog with id lookup and filtered search.
#[derive(Debug)]
pub struct Catalog {
    /// Products in seed order.
    products: Vec<Arc<Product>>,

    /// Product id → position in `products`.
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from seed products.
    ///
    /// Every product is validated and ids must be unique; a bad product
    /// fails the whole catalog rather than being silently dropped.
    pub fn new(products: Vec<Product>) -> StoreResult<Self> {
        let mut index = HashMap::with_capacity(products.len());
        let mut validated: Vec<Arc<Product>> = Vec::with_capacity(products.len());

        for product in products {
            validate_product(&product)?;

            if index.contains_key(&product.id) {
                return Err(ValidationError::Duplicate {
                    field: "id".to_string(),
                    value: product.id.clone(),
                }
                .into());
            }

            index.insert(product.id.clone(), validated.len());
            validated.push(Arc::new(product));
        }

        info!(products = validated.len(), "Catalog loaded");

        Ok(Catalog {
            products: validated,
            index,
        })
    }

    /// Looks up a product by id.
    pub fn get(&self, product_id: &str) -> Option<&Arc<Product>> {
        self.index.get(product_id).map(|&i| &self.products[i])
    }

    /// All products, in seed order.
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// Iterates over all products in seed order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Product>> {
        self.products.iter()
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Searches the catalog with filters and sorting.
    ///
    /// ## Behavior
    /// - Term matching is case-insensitive over name, description, origin
    /// - A blank or whitespace-only term matches everything
    /// - Filters combine with AND
    /// - Ties within a sort key fall back to name order
    ///
    /// Searching never fails: a query that matches nothing returns an
    /// empty list.
    pub fn search(&self, query: &CatalogQuery) -> Vec<Arc<Product>> {
        let term = query.normalized_term();

        debug!(
            term = term.as_deref().unwrap_or(""),
            sort = ?query.sort,
            "Searching catalog"
        );

        let mut results: Vec<Arc<Product>> = self
            .products
            .iter()
            .filter(|p| query.matches(p, term.as_deref()))
            .cloned()
            .collect();

        match query.sort {
            SortKey::Name => results.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::PriceLowHigh => results.sort_by(|a, b| {
                a.price_cents
                    .cmp(&b.price_cents)
                    .then_with(|| a.name.cmp(&b.name))
            }),
            SortKey::PriceHighLow => results.sort_by(|a, b| {
                b.price_cents
                    .cmp(&a.price_cents)
                    .then_with(|| a.name.cmp(&b.name))
            }),
            // Ratings are validated into 0.0..=5.0, so total_cmp is a
            // plain descending order here
            SortKey::Rating => results.sort_by(|a, b| {
                b.rating
                    .total_cmp(&a.rating)
                    .then_with(|| a.name.cmp(&b.name))
            }),
        }

        debug!(count = results.len(), "Search returned products");
        results
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(
        id: &str,
        name: &str,
        price_cents: i64,
        category: Category,
        roast: Option<RoastLevel>,
        origin: Option<&str>,
        rating: f32,
        organic: bool,
        fair_trade: bool,
    ) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{} description", name),
            price_cents,
            image: format!("/images/{}.jpg", id),
            category,
            roast_level: roast,
            origin: origin.map(str::to_string),
            brewing_methods: Vec::new(),
            stock: 20,
            rating,
            reviews: 10,
            is_organic: organic,
            is_fair_trade: fair_trade,
        }
    }

    fn test_catalog() -> Catalog {
        Catalog::new(vec![
            product(
                "1",
                "Ethiopian Yirgacheffe",
                1250,
                Category::Beans,
                Some(RoastLevel::Light),
                Some("Ethiopia"),
                4.8,
                true,
                true,
            ),
            product(
                "2",
                "Colombian Supremo",
                1100,
                Category::Beans,
                Some(RoastLevel::Medium),
                Some("Colombia"),
                4.5,
                false,
                true,
            ),
            product(
                "3",
                "Midnight Espresso",
                1400,
                Category::Ground,
                Some(RoastLevel::Dark),
                Some("Brazil"),
                4.2,
                false,
                false,
            ),
            product(
                "4",
                "Pour Over Dripper",
                2450,
                Category::Equipment,
                None,
                None,
                4.6,
                false,
                false,
            ),
            product(
                "5",
                "Ceramic Mug",
                1600,
                Category::Accessories,
                None,
                None,
                4.9,
                false,
                false,
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_catalog_rejects_duplicate_ids() {
        let result = Catalog::new(vec![
            product(
                "1",
                "First",
                100,
                Category::Beans,
                None,
                None,
                4.0,
                false,
                false,
            ),
            product(
                "1",
                "Second",
                200,
                Category::Beans,
                None,
                None,
                4.0,
                false,
                false,
            ),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_catalog_rejects_invalid_product() {
        let result = Catalog::new(vec![product(
            "1",
            "",
            100,
            Category::Beans,
            None,
            None,
            4.0,
            false,
            false,
        )]);
        assert!(result.is_err());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = test_catalog();
        assert_eq!(catalog.get("3").map(|p| p.name.as_str()), Some("Midnight Espresso"));
        assert!(catalog.get("missing").is_none());
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_search_term_is_case_insensitive() {
        let catalog = test_catalog();

        let results = catalog.search(&CatalogQuery {
            term: Some("ETHIOPIAN".to_string()),
            ..Default::default()
        });
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "1");
    }

    #[test]
    fn test_search_term_matches_origin() {
        let catalog = test_catalog();

        let results = catalog.search(&CatalogQuery {
            term: Some("colombia".to_string()),
            ..Default::default()
        });
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "2");
    }

    #[test]
    fn test_blank_term_matches_everything() {
        let catalog = test_catalog();

        let results = catalog.search(&CatalogQuery {
            term: Some("   ".to_string()),
            ..Default::default()
        });
        assert_eq!(results.len(), 5);
        // Default sort is by name
        assert_eq!(results[0].name, "Ceramic Mug");
    }

    #[test]
    fn test_category_filter() {
        let catalog = test_catalog();

        let results = catalog.search(&CatalogQuery {
            category: Some(Category::Beans),
            ..Default::default()
        });
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|p| p.category == Category::Beans));
    }

    #[test]
    fn test_roast_filter_excludes_unroasted_products() {
        let catalog = test_catalog();

        let results = catalog.search(&CatalogQuery {
            roast_level: Some(RoastLevel::Dark),
            ..Default::default()
        });
        // Equipment/accessories carry no roast level, so only the dark
        // ground coffee matches
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "3");
    }

    #[test]
    fn test_certification_filters() {
        let catalog = test_catalog();

        let organic = catalog.search(&CatalogQuery {
            organic_only: true,
            ..Default::default()
        });
        assert_eq!(organic.len(), 1);
        assert_eq!(organic[0].id, "1");

        let fair_trade = catalog.search(&CatalogQuery {
            fair_trade_only: true,
            ..Default::default()
        });
        assert_eq!(fair_trade.len(), 2);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let catalog = test_catalog();

        let results = catalog.search(&CatalogQuery {
            category: Some(Category::Beans),
            fair_trade_only: true,
            organic_only: true,
            ..Default::default()
        });
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "1");
    }

    #[test]
    fn test_sort_by_price() {
        let catalog = test_catalog();

        let low_high = catalog.search(&CatalogQuery {
            sort: SortKey::PriceLowHigh,
            ..Default::default()
        });
        let prices: Vec<i64> = low_high.iter().map(|p| p.price_cents).collect();
        assert_eq!(prices, vec![1100, 1250, 1400, 1600, 2450]);

        let high_low = catalog.search(&CatalogQuery {
            sort: SortKey::PriceHighLow,
            ..Default::default()
        });
        assert_eq!(high_low[0].price_cents, 2450);
    }

    #[test]
    fn test_sort_by_rating_descending() {
        let catalog = test_catalog();

        let results = catalog.search(&CatalogQuery {
            sort: SortKey::Rating,
            ..Default::default()
        });
        let ratings: Vec<f32> = results.iter().map(|p| p.rating).collect();
        assert_eq!(ratings, vec![4.9, 4.8, 4.6, 4.5, 4.2]);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let catalog = test_catalog();

        let results = catalog.search(&CatalogQuery {
            term: Some("kenyan".to_string()),
            ..Default::default()
        });
        assert!(results.is_empty());
    }
}
