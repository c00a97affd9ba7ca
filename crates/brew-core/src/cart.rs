//! # Cart Module
//!
//! The shopping cart: an ordered collection of line items with
//! stock-clamped quantities.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Storefront Action        Operation               Cart State Change     │
//! │  ─────────────────        ─────────               ─────────────────     │
//! │                                                                         │
//! │  "Add to Cart" ──────────► add_item() ──────────► push / qty += n      │
//! │                                                                         │
//! │  Quantity stepper ───────► update_quantity() ───► items[i].qty = n     │
//! │                                                    (0 removes the line) │
//! │                                                                         │
//! │  Trash icon ─────────────► remove_item() ───────► items.remove(i)      │
//! │                                                                         │
//! │  "Clear Cart" ───────────► clear() ─────────────► items.clear()        │
//! │                                                                         │
//! │  Cart page / badge ──────► items(), totals() ───► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Semantics
//! Mutations never fail. Out-of-range quantities are clamped to what the
//! product's stock allows, and operations on products that are not in the
//! cart do nothing. Every operation reports what actually happened through
//! [`CartChange`], so callers that care about silent adjustments can
//! inspect the outcome instead of catching errors.
//!
//! ## Invariants
//! - Items are unique by product id (adding the same product merges lines)
//! - Every line quantity is between 1 and the product's advertised stock
//! - Lines keep their insertion order; updates never reorder

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Line Item
// =============================================================================

/// A line in the shopping cart.
///
/// ## Design Notes
/// - `product`: Shared handle to the catalog product. The catalog is
///   immutable for the life of a session, so the referenced price and
///   stock cannot drift under the cart.
/// - `quantity`: Always in `1..=product.stock`. A `u32` makes negative
///   quantities unrepresentable.
///
/// Line items are created only through [`Cart::add_item`]; there is no
/// public constructor and no `Deserialize`, so the quantity invariant
/// cannot be smuggled in from outside.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// The catalog product this line refers to.
    pub product: Arc<Product>,

    /// Quantity in cart (1..=stock).
    pub quantity: u32,

    /// When this line was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    fn new(product: Arc<Product>, quantity: u32) -> Self {
        LineItem {
            product,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// The product id this line refers to.
    #[inline]
    pub fn product_id(&self) -> &str {
        &self.product.id
    }

    /// Unit price of the product.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.product.price()
    }

    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart Change
// =============================================================================

/// The observable outcome of a cart mutation.
///
/// Serializes as tagged JSON: `{ "kind": "Updated", "requested": 9,
/// "previous": 2, "quantity": 5 }`
///
/// ## Reading an Outcome
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Outcome     When                         requested vs quantity         │
/// │  ─────────   ─────────────────────────    ─────────────────────────     │
/// │  Added       New line created             quantity < requested means    │
/// │  Updated     Existing line re-targeted      the stock ceiling kicked in │
/// │  Removed     Line deleted                 (previous = last quantity)    │
/// │  Cleared     Whole cart emptied           (lines / units counted)       │
/// │  Unchanged   Unknown id, out-of-stock                                   │
/// │              add, or empty clear                                        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind")]
pub enum CartChange {
    /// A new line was created.
    ///
    /// `requested` is the raw quantity asked for; `quantity` is what the
    /// line actually holds after clamping to `1..=stock`.
    Added { requested: u32, quantity: u32 },

    /// An existing line was re-targeted.
    ///
    /// Covers both quantity updates and add-to-existing-line merges
    /// (where `requested` is the previous quantity plus the increment).
    Updated {
        requested: u32,
        previous: u32,
        quantity: u32,
    },

    /// A line was removed. `previous` is the quantity it held.
    Removed { previous: u32 },

    /// The whole cart was emptied.
    Cleared { lines: usize, units: u32 },

    /// Nothing happened: unknown product id, add of an out-of-stock
    /// product, or clear of an already-empty cart.
    Unchanged,
}

impl CartChange {
    /// True when the operation actually modified cart state.
    ///
    /// An `Updated` outcome that lands on the quantity the line already
    /// held (e.g. adding to a line that sits at the stock ceiling) did
    /// not modify anything and reports `false` here.
    pub fn changed(&self) -> bool {
        match self {
            CartChange::Added { .. } | CartChange::Removed { .. } | CartChange::Cleared { .. } => {
                true
            }
            CartChange::Updated {
                previous, quantity, ..
            } => previous != quantity,
            CartChange::Unchanged => false,
        }
    }

    /// True when the stored quantity was reduced below what was asked for
    /// because of the product's stock ceiling.
    pub fn clamped(&self) -> bool {
        match self {
            CartChange::Added {
                requested,
                quantity,
            }
            | CartChange::Updated {
                requested,
                quantity,
                ..
            } => quantity < requested,
            _ => false,
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by product id (adding the same product merges lines)
/// - Quantities stay within `1..=stock`; out-of-range requests are clamped
/// - Line order is insertion order
///
/// Fields are private so the invariants hold for every reachable `Cart`:
/// the only way in is through the mutation methods below.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Items in the cart.
    items: Vec<LineItem>,

    /// When the cart was created/last cleared.
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the cart or increases quantity if already present.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases by `quantity`, capped
    ///   at the product's stock
    /// - Product not in cart: a new line is appended holding
    ///   `quantity.clamp(1, stock)` units
    /// - Product out of stock: nothing happens
    ///
    /// ## Returns
    /// A [`CartChange`] describing what happened; inspect
    /// [`CartChange::clamped`] to surface "only N available" notices.
    pub fn add_item(&mut self, product: &Arc<Product>, quantity: u32) -> CartChange {
        let stock = product.stock;
        if stock == 0 {
            return CartChange::Unchanged;
        }

        // Merge into the existing line if this product is already in cart
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            // Saturating: the ceiling below caps the stored value anyway
            let requested = item.quantity.saturating_add(quantity);
            let previous = item.quantity;
            let new_qty = requested.min(stock);
            item.quantity = new_qty;
            return CartChange::Updated {
                requested,
                previous,
                quantity: new_qty,
            };
        }

        // New line: at least one unit, at most the advertised stock
        let new_qty = quantity.clamp(1, stock);
        self.items.push(LineItem::new(Arc::clone(product), new_qty));
        CartChange::Added {
            requested: quantity,
            quantity: new_qty,
        }
    }

    /// Sets the quantity of a line directly.
    ///
    /// ## Behavior
    /// - Quantity 0: removes the line
    /// - Quantity above stock: clamped down to stock
    /// - Product not in cart: nothing happens
    pub fn update_quantity(&mut self, product_id: &str, quantity: u32) -> CartChange {
        if quantity == 0 {
            return self.remove_item(product_id);
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            let previous = item.quantity;
            let new_qty = quantity.min(item.product.stock);
            item.quantity = new_qty;
            CartChange::Updated {
                requested: quantity,
                previous,
                quantity: new_qty,
            }
        } else {
            CartChange::Unchanged
        }
    }

    /// Removes a line from the cart by product id.
    ///
    /// Unknown ids are ignored; remaining lines keep their order.
    pub fn remove_item(&mut self, product_id: &str) -> CartChange {
        match self.items.iter().position(|i| i.product.id == product_id) {
            Some(idx) => {
                let removed = self.items.remove(idx);
                CartChange::Removed {
                    previous: removed.quantity,
                }
            }
            None => CartChange::Unchanged,
        }
    }

    /// Clears all items from the cart.
    ///
    /// Clearing an already-empty cart reports [`CartChange::Unchanged`],
    /// so repeated clears are idempotent.
    pub fn clear(&mut self) -> CartChange {
        if self.items.is_empty() {
            return CartChange::Unchanged;
        }

        let lines = self.items.len();
        let units = self.total_quantity();
        self.items.clear();
        self.created_at = Utc::now();
        CartChange::Cleared { lines, units }
    }

    /// The lines in the cart, in insertion order.
    #[inline]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Looks up the line for a product, if present.
    pub fn get(&self, product_id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    /// Returns the number of distinct lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines (the badge number).
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Calculates the subtotal (before shipping and tax).
    pub fn subtotal(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |acc, i| acc + i.line_total())
    }

    /// Counts and subtotal in one serializable bundle.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self)
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// When the cart was created or last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for snapshots and the header badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: u32,
    pub subtotal_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: cart.subtotal().cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
