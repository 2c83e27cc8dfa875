//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The shell owns
//! the store; components only go through the helpers below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cart::Cart;
use crate::models::MenuItem;
use crate::section::SectionTracker;

/// Page session state
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Current cart snapshot; replaced wholesale on each change
    pub cart: Cart,
    /// Highlighted navigation section
    pub sections: SectionTracker,
    /// Cart modal visibility
    pub cart_open: bool,
}

impl AppState {
    /// Empty cart, first section active, modal closed
    pub fn new(section_ids: Vec<String>) -> Self {
        Self {
            cart: Cart::new(),
            sections: SectionTracker::new(section_ids),
            cart_open: false,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_add_to_cart(store: &AppStore, item: &MenuItem) {
    let next = store.cart().with_untracked(|cart| cart.add(item));
    log::debug!("[CART] add {} -> {} items", item.id, next.count());
    store.cart().set(next);
}

pub fn store_update_quantity(store: &AppStore, item_id: &str, delta: i32) {
    let current = store.cart().get_untracked();
    let next = current.update_quantity(item_id, delta);
    if next != current {
        log::debug!("[CART] {} {:+} -> {} items", item_id, delta, next.count());
        store.cart().set(next);
    }
}

/// Highlight a section picked from the navigation
pub fn store_navigate(store: &AppStore, section_id: &str) {
    store.sections().update(|s| {
        s.navigate(section_id);
    });
}

/// Highlight a section reported by the scrollspy. Returns whether it changed.
pub fn store_observe(store: &AppStore, section_id: &str) -> bool {
    let mut changed = false;
    store.sections().update(|s| changed = s.observe(section_id));
    changed
}

pub fn store_open_cart(store: &AppStore) {
    store.cart_open().set(true);
}

pub fn store_close_cart(store: &AppStore) {
    store.cart_open().set(false);
}
