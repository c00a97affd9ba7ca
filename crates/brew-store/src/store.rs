//! # Cart Store
//!
//! The per-session cart state container.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Session                                       │
//! │                                                                         │
//! │  Arc<Catalog> ──► CartStore::new() ──► session_id + empty cart         │
//! │                        │                                                │
//! │   Storefront Action    │  Store Operation         Outcome              │
//! │   ─────────────────    │  ───────────────         ───────              │
//! │   "Add to Cart" ───────┼─► add_to_cart()          Result<CartChange>  │
//! │   Quantity stepper ────┼─► update_quantity()      CartChange          │
//! │   Trash icon ──────────┼─► remove_from_cart()     CartChange          │
//! │   "Clear Cart" ────────┼─► clear_cart()           CartChange          │
//! │                        │                                                │
//! │                        ▼                                                │
//! │              ┌──────────────────┐     state changed?                   │
//! │              │  Arc<Mutex<Cart>>│ ──────────────────► watch channel    │
//! │              └──────────────────┘                        │              │
//! │                                                          ▼              │
//! │              header badge, cart page, mini-cart ◄── CartSnapshot       │
//! │                                                                         │
//! │  Only add_to_cart can fail (unknown product id). Every other           │
//! │  mutation clamps or ignores and reports through CartChange.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<Cart>>` because:
//! 1. The store and its views share one cart
//! 2. Only one caller should modify the cart at a time
//! 3. Snapshot publication must observe the post-mutation state
//!
//! ## Why Not RwLock?
//! Cart operations are quick, and most operations modify state.
//! A RwLock would add complexity with minimal benefit.

use std::sync::{Arc, Mutex};

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info};
use ts_rs::TS;
use uuid::Uuid;

use brew_core::{Cart, CartChange, CartTotals, LineItem, Money, OrderSummary, PricingPolicy};

use crate::catalog::Catalog;
use crate::error::{StoreError, StoreResult};
use crate::view::CartView;

// =============================================================================
// Cart Snapshot
// =============================================================================

/// Point-in-time view of the cart, published to subscribers and handed
/// to the UI after every read.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    /// Lines in insertion order.
    pub items: Vec<LineItem>,

    /// Line counts and subtotal (header badge data).
    pub totals: CartTotals,

    /// Checkout math: shipping, tax, total, free-shipping gap.
    pub summary: OrderSummary,
}

impl CartSnapshot {
    /// Captures the current cart under a pricing policy.
    pub fn capture(cart: &Cart, pricing: PricingPolicy) -> Self {
        CartSnapshot {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
            summary: pricing.summarize(cart),
        }
    }
}

// =============================================================================
// Cart Store
// =============================================================================

/// Owns one shopping session: a validated catalog, a pricing policy, and
/// the cart itself.
///
/// ## Design Notes
/// - Constructed explicitly and passed where needed; there is no global
///   instance
/// - Mutations go through the store so every observable change is also
///   published on the watch channel
/// - UI components receive [`CartView`] handles, which can read and
///   subscribe but never mutate
pub struct CartStore {
    /// Session identifier (one per store instance).
    session_id: Uuid,

    /// The catalog this session sells from.
    catalog: Arc<Catalog>,

    /// Tax and shipping rules.
    pricing: PricingPolicy,

    /// The cart, shared with views.
    cart: Arc<Mutex<Cart>>,

    /// Snapshot broadcaster; receivers always see the latest state.
    snapshot_tx: watch::Sender<CartSnapshot>,

    /// Held so the channel stays open while no views are subscribed.
    _snapshot_rx: watch::Receiver<CartSnapshot>,
}

impl CartStore {
    /// Creates a store with the default pricing policy.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_pricing(catalog, PricingPolicy::default())
    }

    /// Creates a store with an explicit pricing policy.
    pub fn with_pricing(catalog: Arc<Catalog>, pricing: PricingPolicy) -> Self {
        let session_id = Uuid::new_v4();
        let cart = Cart::new();
        let (snapshot_tx, snapshot_rx) = watch::channel(CartSnapshot::capture(&cart, pricing));

        info!(
            session_id = %session_id,
            products = catalog.len(),
            "Cart session opened"
        );

        CartStore {
            session_id,
            catalog,
            pricing,
            cart: Arc::new(Mutex::new(cart)),
            snapshot_tx,
            _snapshot_rx: snapshot_rx,
        }
    }

    /// This session's identifier.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// The catalog this session sells from.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// The pricing policy in effect.
    pub fn pricing(&self) -> PricingPolicy {
        self.pricing
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds a product to the cart by catalog id.
    ///
    /// ## Behavior
    /// - `quantity` defaults to 1 when omitted
    /// - Already in cart: the line's quantity increases, capped at stock
    /// - Out of stock: nothing happens, reported as `Unchanged`
    ///
    /// ## Errors
    /// `StoreError::ProductNotFound` if the id isn't in the catalog. This
    /// is the only fallible cart operation: the id comes from outside the
    /// cart, so a typo'd or stale id is a caller bug worth surfacing.
    pub fn add_to_cart(&self, product_id: &str, quantity: Option<u32>) -> StoreResult<CartChange> {
        let quantity = quantity.unwrap_or(1);
        debug!(product_id = %product_id, quantity = %quantity, "add_to_cart");

        let product = self
            .catalog
            .get(product_id)
            .cloned()
            .ok_or_else(|| StoreError::ProductNotFound(product_id.to_string()))?;

        Ok(self.mutate(|cart| cart.add_item(&product, quantity)))
    }

    /// Sets a line's quantity directly (0 removes the line).
    ///
    /// Unknown ids are ignored and reported as `Unchanged`; quantities
    /// above stock are clamped.
    pub fn update_quantity(&self, product_id: &str, quantity: u32) -> CartChange {
        debug!(product_id = %product_id, quantity = %quantity, "update_quantity");
        self.mutate(|cart| cart.update_quantity(product_id, quantity))
    }

    /// Removes a line from the cart. Unknown ids are ignored.
    pub fn remove_from_cart(&self, product_id: &str) -> CartChange {
        debug!(product_id = %product_id, "remove_from_cart");
        self.mutate(|cart| cart.remove_item(product_id))
    }

    /// Empties the cart. Clearing an empty cart is a no-op.
    pub fn clear_cart(&self) -> CartChange {
        debug!("clear_cart");
        self.mutate(|cart| cart.clear())
    }

    /// Runs a mutation under the lock and publishes the new snapshot if
    /// anything actually changed.
    fn mutate<F>(&self, f: F) -> CartChange
    where
        F: FnOnce(&mut Cart) -> CartChange,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        let change = f(&mut cart);

        if change.changed() {
            let _ = self
                .snapshot_tx
                .send(CartSnapshot::capture(&cart, self.pricing));
        }

        change
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = store.with_cart(|cart| CartTotals::from(cart));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Captures the current cart snapshot.
    pub fn snapshot(&self) -> CartSnapshot {
        self.with_cart(|c| CartSnapshot::capture(c, self.pricing))
    }

    /// Current line counts and subtotal.
    pub fn totals(&self) -> CartTotals {
        self.with_cart(|c| CartTotals::from(c))
    }

    /// Current checkout math under this store's pricing policy.
    pub fn summary(&self) -> OrderSummary {
        self.with_cart(|c| self.pricing.summarize(c))
    }

    /// Sum of all line totals (price × quantity).
    pub fn total_price(&self) -> Money {
        self.with_cart(|c| c.subtotal())
    }

    /// Total units across all lines (the badge number).
    pub fn total_items(&self) -> u32 {
        self.with_cart(|c| c.total_quantity())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.with_cart(|c| c.is_empty())
    }

    // =========================================================================
    // Subscriptions & Views
    // =========================================================================

    /// Subscribes to snapshot changes.
    ///
    /// The receiver starts at the latest snapshot; no-op mutations
    /// (`CartChange::Unchanged` or updates that land on the same
    /// quantity) are not published.
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Creates a read-only view for UI components.
    pub fn view(&self) -> CartView {
        CartView::new(
            Arc::clone(&self.cart),
            self.pricing,
            self.snapshot_tx.subscribe(),
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use brew_core::{Category, Product};

    fn product(id: &str, price_cents: i64, stock: u32) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Coffee {}", id),
            description: "Test roast".to_string(),
            price_cents,
            image: format!("/images/{}.jpg", id),
            category: Category::Beans,
            roast_level: None,
            origin: None,
            brewing_methods: Vec::new(),
            stock,
            rating: 4.5,
            reviews: 10,
            is_organic: false,
            is_fair_trade: false,
        }
    }

    fn test_store() -> CartStore {
        let catalog = Catalog::new(vec![
            product("beans", 1250, 20),
            product("filter", 800, 20),
            product("rare", 3000, 0),
        ])
        .unwrap();
        CartStore::new(Arc::new(catalog))
    }

    #[test]
    fn test_add_to_cart() {
        let store = test_store();

        let change = store.add_to_cart("beans", Some(2)).unwrap();

        assert_eq!(
            change,
            CartChange::Added {
                requested: 2,
                quantity: 2
            }
        );
        assert_eq!(store.total_items(), 2);
        assert_eq!(store.total_price(), Money::from_cents(2500));
    }

    #[test]
    fn test_add_defaults_to_one_unit() {
        let store = test_store();

        store.add_to_cart("beans", None).unwrap();

        assert_eq!(store.total_items(), 1);
    }

    #[test]
    fn test_add_unknown_product_fails() {
        let store = test_store();

        let err = store.add_to_cart("missing", None).unwrap_err();

        assert!(matches!(err, StoreError::ProductNotFound(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_out_of_stock_is_reported_unchanged() {
        let store = test_store();

        let change = store.add_to_cart("rare", None).unwrap();

        assert_eq!(change, CartChange::Unchanged);
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_remove_clear_flow() {
        let store = test_store();
        store.add_to_cart("beans", Some(2)).unwrap();
        store.add_to_cart("filter", None).unwrap();

        let change = store.update_quantity("beans", 4);
        assert_eq!(
            change,
            CartChange::Updated {
                requested: 4,
                previous: 2,
                quantity: 4
            }
        );

        let change = store.remove_from_cart("filter");
        assert_eq!(change, CartChange::Removed { previous: 1 });

        let change = store.clear_cart();
        assert_eq!(change, CartChange::Cleared { lines: 1, units: 4 });
        assert!(store.is_empty());

        // Mutations on what's already gone are quiet no-ops
        assert_eq!(store.update_quantity("beans", 3), CartChange::Unchanged);
        assert_eq!(store.remove_from_cart("beans"), CartChange::Unchanged);
        assert_eq!(store.clear_cart(), CartChange::Unchanged);
    }

    #[test]
    fn test_summary_via_store() {
        let store = test_store();
        store.add_to_cart("beans", Some(2)).unwrap(); // $25.00
        store.add_to_cart("filter", None).unwrap(); // $8.00

        let summary = store.summary();

        assert_eq!(summary.subtotal_cents, 3300);
        assert_eq!(summary.shipping_cents, 0);
        assert_eq!(summary.tax_cents, 264);
        assert_eq!(summary.total_cents, 3564);
    }

    #[test]
    fn test_subscribers_see_mutations() {
        let store = test_store();
        let mut rx = store.subscribe();

        // Fresh receiver starts caught-up on the empty snapshot
        assert!(!rx.has_changed().unwrap());

        store.add_to_cart("beans", Some(2)).unwrap();

        assert!(rx.has_changed().unwrap());
        let snapshot = rx.borrow_and_update().clone();
        assert_eq!(snapshot.totals.total_quantity, 2);
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].product.id, "beans");
    }

    #[test]
    fn test_noop_mutations_do_not_publish() {
        let store = test_store();
        let mut rx = store.subscribe();

        store.remove_from_cart("never-added");
        store.update_quantity("never-added", 5);
        store.clear_cart();
        store.add_to_cart("rare", None).unwrap(); // out of stock

        assert!(!rx.has_changed().unwrap());

        // An update that lands on the current quantity is also quiet
        store.add_to_cart("beans", Some(20)).unwrap(); // fills to stock
        rx.borrow_and_update();
        store.add_to_cart("beans", Some(1)).unwrap(); // clamped, no state change
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_snapshot_wire_format() {
        let store = test_store();
        store.add_to_cart("beans", Some(2)).unwrap();

        let json = serde_json::to_value(store.snapshot()).unwrap();

        assert_eq!(json["totals"]["itemCount"], 1);
        assert_eq!(json["totals"]["totalQuantity"], 2);
        assert_eq!(json["totals"]["subtotalCents"], 2500);
        assert_eq!(json["summary"]["shippingCents"], 499); // exactly at threshold still ships
        assert_eq!(json["items"][0]["quantity"], 2);
        assert_eq!(json["items"][0]["product"]["priceCents"], 1250);
        assert!(json["items"][0]["addedAt"].is_string());
    }

    #[test]
    fn test_sessions_are_independent() {
        let catalog = Arc::new(
            Catalog::new(vec![product("beans", 1250, 20)]).unwrap(),
        );
        let store_a = CartStore::new(Arc::clone(&catalog));
        let store_b = CartStore::new(Arc::clone(&catalog));

        store_a.add_to_cart("beans", Some(3)).unwrap();

        assert_ne!(store_a.session_id(), store_b.session_id());
        assert_eq!(store_a.total_items(), 3);
        assert!(store_b.is_empty());
    }
}
