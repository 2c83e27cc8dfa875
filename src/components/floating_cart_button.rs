//! Floating Cart Button Component
//!
//! Bottom bar with the running total. Slides out of view while the cart is empty.

use leptos::prelude::*;

use crate::models::Price;

#[component]
pub fn FloatingCartButton(
    count: Memo<u32>,
    total: Memo<Price>,
    #[prop(into)] on_open: Callback<()>,
) -> impl IntoView {
    let bar_class = move || {
        if count.get() > 0 {
            "floating-cart visible"
        } else {
            "floating-cart"
        }
    };

    view! {
        <div class=bar_class on:click=move |_| on_open.run(())>
            <div class="floating-cart-summary">
                <div class="floating-cart-icon">"🧺"</div>
                <div class="floating-cart-text">
                    <span class="floating-cart-total">{move || total.get().to_string()}</span>
                    <span class="floating-cart-count">{move || format!("{} Artikel", count.get())}</span>
                </div>
            </div>
            <div class="floating-cart-action">"Bestellen ›"</div>
        </div>
    }
}
