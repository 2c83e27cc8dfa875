//! Menu & Cart App
//!
//! Page shell: owns the store, installs the scrollspy and lays out header,
//! navigation, sections and the cart overlay.

use leptos::prelude::*;
use leptos_scrollspy::{reveal_in_strip, use_scrollspy, SpyOptions};
use reactive_stores::Store;

use crate::catalog::{self, Catalog};
use crate::components::{CartModal, FloatingCartButton, InfoSection, MenuSection, SectionNav};
use crate::models::MenuItem;
use crate::config::{nav_button_id, NAV_STRIP_ID, SPY_BOTTOM_INSET_PERCENT, SPY_TOP_INSET_PX};
use crate::store::{store_add_to_cart, store_observe, store_open_cart, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    match catalog::menu() {
        Ok(catalog) => view! { <MenuPage catalog=catalog /> }.into_any(),
        Err(err) => {
            log::error!("[APP] menu unavailable: {}", err);
            view! {
                <div class="load-error">"Die Speisekarte konnte nicht geladen werden."</div>
            }
            .into_any()
        }
    }
}

#[component]
fn MenuPage(catalog: &'static Catalog) -> impl IntoView {
    let restaurant = &catalog.restaurant;

    // State
    let store = Store::new(AppState::new(catalog.section_ids()));
    provide_context(store);

    // Scroll-driven section highlighting, removed on unmount
    let spy_options = SpyOptions {
        top_inset_px: SPY_TOP_INSET_PX,
        bottom_inset_percent: SPY_BOTTOM_INSET_PERCENT,
        threshold: 0.0,
    };
    use_scrollspy(catalog.section_ids(), spy_options, move |id: String| {
        store_observe(&store, &id);
        reveal_in_strip(&nav_button_id(&id), NAV_STRIP_ID);
    });

    // Derived cart values
    let total = Memo::new(move |_| store.cart().with(|cart| cart.total()));
    let count = Memo::new(move |_| store.cart().with(|cart| cart.count()));

    view! {
        <div class="page">
            <header class="hero">
                <div class="hero-shade"></div>
                <img src="titelbild.png" class="hero-image" alt=restaurant.name.clone() />
                <div class="hero-content">
                    <h1 class="hero-title">{restaurant.name.clone()}</h1>
                    <p class="hero-town">{restaurant.town.clone()}</p>
                    <div class="hours-badge">
                        <span class="icon">"🕒"</span>
                        <span>{restaurant.hours_badge.clone()}</span>
                    </div>
                </div>
            </header>

            <SectionNav catalog=catalog />

            <main class="content">
                <InfoSection restaurant=restaurant />

                {catalog.categories.iter().map(|category| view! {
                    <MenuSection
                        category=category
                        on_add=move |item: MenuItem| store_add_to_cart(&store, &item)
                    />
                }).collect_view()}

                <div class="drinks-note">
                    <h3>"🍷 Getränke"</h3>
                    <p>{restaurant.drinks_note.clone()}</p>
                    <div class="price-note">"ℹ " {restaurant.price_note.clone()}</div>
                </div>

                <footer class="page-footer">
                    <p>{restaurant.copyright.clone()}</p>
                    <p class="tax-note">{restaurant.tax_note.clone()}</p>
                </footer>
            </main>

            <FloatingCartButton
                count=count
                total=total
                on_open=move |_: ()| store_open_cart(&store)
            />

            <CartModal restaurant=restaurant total=total />
        </div>
    }
}
