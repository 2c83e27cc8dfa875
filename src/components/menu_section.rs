//! Menu Section Component
//!
//! One category rendered as a page section the scrollspy can observe.

use leptos::prelude::*;

use crate::components::ProductCard;
use crate::models::{Category, MenuItem};

#[component]
pub fn MenuSection(
    category: &'static Category,
    #[prop(into)] on_add: Callback<MenuItem>,
) -> impl IntoView {
    view! {
        <section id=category.id.clone() class="page-section menu-section">
            <h2 class="section-title">{category.label.clone()}</h2>
            <div class="product-grid">
                {category.items.iter().map(|item| view! {
                    <ProductCard item=item on_add=on_add />
                }).collect_view()}
            </div>
        </section>
    }
}
