//! Read-only cart views for UI components.
//!
//! A [`CartView`] is a cheap clone handed to each component that displays
//! cart state (header badge, mini-cart, cart page). Views share the
//! store's cart but expose no mutation methods, so a component cannot
//! accidentally edit the cart it is only supposed to render.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;

use brew_core::{Cart, CartTotals, LineItem, Money, OrderSummary, PricingPolicy};

use crate::store::CartSnapshot;

/// Read-only handle to a cart session.
///
/// Obtained from [`CartStore::view`](crate::store::CartStore::view).
/// Clone freely; all clones observe the same cart.
#[derive(Clone)]
pub struct CartView {
    cart: Arc<Mutex<Cart>>,
    pricing: PricingPolicy,
    snapshot_rx: watch::Receiver<CartSnapshot>,
}

impl CartView {
    pub(crate) fn new(
        cart: Arc<Mutex<Cart>>,
        pricing: PricingPolicy,
        snapshot_rx: watch::Receiver<CartSnapshot>,
    ) -> Self {
        CartView {
            cart,
            pricing,
            snapshot_rx,
        }
    }

    /// Executes a function with read access to the live cart.
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

    /// Current checkout math.
    pub fn summary(&self) -> OrderSummary {
        self.with_cart(|c| self.pricing.summarize(c))
    }

    /// Sum of all line totals.
    pub fn total_price(&self) -> Money {
        self.with_cart(|c| c.subtotal())
    }

    /// Total units across all lines.
    pub fn total_items(&self) -> u32 {
        self.with_cart(|c| c.total_quantity())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.with_cart(|c| c.is_empty())
    }

    /// The cart line for a product, if present.
    pub fn line(&self, product_id: &str) -> Option<LineItem> {
        self.with_cart(|c| c.get(product_id).cloned())
    }

    /// Units of a product currently in the cart (0 when absent).
    ///
    /// Product pages use this to seed their quantity steppers.
    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.with_cart(|c| c.get(product_id).map_or(0, |item| item.quantity))
    }

    /// The most recently published snapshot, without touching the lock.
    pub fn latest(&self) -> CartSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Subscribes to snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Waits for the next published snapshot.
    pub async fn wait_for_change(&mut self) -> CartSnapshot {
        // Ok(()) or channel closed; either way return the latest state
        self.snapshot_rx.changed().await.ok();
        self.snapshot_rx.borrow_and_update().clone()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::store::CartStore;
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
        ])
        .unwrap();
        CartStore::new(Arc::new(catalog))
    }

    #[test]
    fn test_view_reads_live_state() {
        let store = test_store();
        let view = store.view();

        assert!(view.is_empty());

        store.add_to_cart("beans", Some(3)).unwrap();

        assert_eq!(view.total_items(), 3);
        assert_eq!(view.total_price(), Money::from_cents(3750));
        assert_eq!(view.quantity_of("beans"), 3);
        assert_eq!(view.quantity_of("filter"), 0);
    }

    #[test]
    fn test_view_line_lookup() {
        let store = test_store();
        let view = store.view();
        store.add_to_cart("beans", Some(2)).unwrap();

        let line = view.line("beans").unwrap();
        assert_eq!(line.product.id, "beans");
        assert_eq!(line.quantity, 2);
        assert!(view.line("filter").is_none());
    }

    #[test]
    fn test_clones_share_the_cart() {
        let store = test_store();
        let header = store.view();
        let mini_cart = header.clone();

        store.add_to_cart("filter", None).unwrap();

        assert_eq!(header.total_items(), 1);
        assert_eq!(mini_cart.total_items(), 1);
    }

    #[test]
    fn test_latest_tracks_published_snapshots() {
        let store = test_store();
        let view = store.view();

        assert_eq!(view.latest().totals.total_quantity, 0);

        store.add_to_cart("beans", Some(2)).unwrap();
        store.remove_from_cart("not-in-cart"); // no-op, not published

        let latest = view.latest();
        assert_eq!(latest.totals.total_quantity, 2);
        assert_eq!(latest.summary.subtotal_cents, 2500);
    }

    #[test]
    fn test_latest_is_current_for_views_created_after_mutation() {
        let store = test_store();

        // No views alive while this publish happens
        store.add_to_cart("beans", Some(2)).unwrap();

        let view = store.view();
        assert_eq!(view.latest().totals.total_quantity, 2);
    }

    #[tokio::test]
    async fn test_wait_for_change() {
        let store = test_store();
        let mut view = store.view();

        store.add_to_cart("beans", Some(4)).unwrap();

        let snapshot = view.wait_for_change().await;
        assert_eq!(snapshot.totals.total_quantity, 4);
        assert_eq!(snapshot.items[0].product.id, "beans");
    }
}
