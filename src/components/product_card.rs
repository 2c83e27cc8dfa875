//! Product Card Component

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::ADDED_FLASH_MS;
use crate::models::MenuItem;

/// One menu item with its price and an add button.
///
/// After adding, the button shows a check mark briefly.
#[component]
pub fn ProductCard(
    item: &'static MenuItem,
    #[prop(into)] on_add: Callback<MenuItem>,
) -> impl IntoView {
    let (added, set_added) = signal(false);

    let handle_add = move |_| {
        on_add.run(item.clone());
        set_added.set(true);
        spawn_local(async move {
            TimeoutFuture::new(ADDED_FLASH_MS).await;
            // Card may be gone by now
            let _ = set_added.try_set(false);
        });
    };

    view! {
        <div class="product-card">
            <div class="product-text">
                <h4 class="product-name">{item.name.clone()}</h4>
                {item.description.clone().map(|desc| view! {
                    <p class="product-description">{desc}</p>
                })}
            </div>
            <div class="product-side">
                <span class="product-price">{item.price.to_string()}</span>
                <button
                    class=move || if added.get() { "add-btn added" } else { "add-btn" }
                    aria-label=format!("{} in den Warenkorb", item.name)
                    on:click=handle_add
                >
                    {move || if added.get() { "✓" } else { "+" }}
                </button>
            </div>
        </div>
    }
}
