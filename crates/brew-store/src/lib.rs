//! # brew-store: Storefront Sessions for BrewMaster
//!
//! This crate wires the pure domain logic in `brew-core` into a running
//! storefront: a validated product catalog, per-session cart stores, and
//! read-only views that UI components subscribe to.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Storefront Session                              │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                          Catalog                                 │  │
//! │  │                                                                  │  │
//! │  │  Validated, indexed product read model                           │  │
//! │  │  Search/filter/sort for listing pages                            │  │
//! │  └────────────────────────────┬─────────────────────────────────────┘  │
//! │                               │ Arc<Catalog>                            │
//! │                               ▼                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                         CartStore                                │  │
//! │  │                                                                  │  │
//! │  │  One per shopping session (no global state)                      │  │
//! │  │  add_to_cart / update_quantity / remove_from_cart / clear_cart   │  │
//! │  │  Publishes CartSnapshot on every observable change               │  │
//! │  └────────────────────────────┬─────────────────────────────────────┘  │
//! │                               │ store.view()                           │
//! │         ┌─────────────────────┼─────────────────────┐                  │
//! │         ▼                     ▼                     ▼                   │
//! │  ┌────────────┐        ┌────────────┐        ┌────────────┐            │
//! │  │ header     │        │ cart page  │        │ mini-cart  │            │
//! │  │ badge      │        │            │        │            │            │
//! │  └────────────┘        └────────────┘        └────────────┘            │
//! │        CartView clones: read + subscribe, never mutate                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`catalog`] - Validated product catalog with search and sorting
//! - [`config`] - Store configuration and currency formatting
//! - [`error`] - Store error types
//! - [`store`] - The per-session cart store and its snapshots
//! - [`view`] - Read-only cart views for UI components
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use brew_store::{Catalog, CartStore};
//!
//! // Load and validate the catalog once at startup
//! let catalog = Arc::new(Catalog::new(products)?);
//!
//! // One store per shopping session
//! let store = CartStore::new(Arc::clone(&catalog));
//! store.add_to_cart("ethiopian-yirgacheffe", None)?;
//!
//! // Components render from read-only views
//! let view = store.view();
//! println!("{} items", view.total_items());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod config;
pub mod error;
pub mod store;
pub mod view;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::{Catalog, CatalogQuery, SortKey};
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use store::{CartSnapshot, CartStore};
pub use view::CartView;
