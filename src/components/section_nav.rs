//! Section Navigation Component
//!
//! Sticky, horizontally scrolling strip with one button per page section.

use leptos::prelude::*;
use leptos_scrollspy::scroll_to_section;

use crate::catalog::Catalog;
use crate::config::{nav_button_id, HEADER_OFFSET_PX, INFO_SECTION_ID, INFO_SECTION_LABEL, NAV_STRIP_ID};
use crate::store::{store_navigate, use_app_store, AppStateStoreFields};

/// Navigation strip: "Infos" plus one button per category
#[component]
pub fn SectionNav(catalog: &'static Catalog) -> impl IntoView {
    let store = use_app_store();

    let entries = std::iter::once((INFO_SECTION_ID, INFO_SECTION_LABEL))
        .chain(catalog.categories.iter().map(|c| (c.id.as_str(), c.label.as_str())));

    view! {
        <nav class="section-nav" id=NAV_STRIP_ID>
            <div class="section-nav-inner">
                {entries.map(|(id, label)| {
                    let is_active = move || store.sections().with(|s| s.is_active(id));
                    view! {
                        <button
                            id=nav_button_id(id)
                            class=move || if is_active() { "nav-btn active" } else { "nav-btn" }
                            on:click=move |_| {
                                // Highlight first; the smooth scroll catches up
                                store_navigate(&store, id);
                                scroll_to_section(id, HEADER_OFFSET_PX);
                            }
                        >
                            {label}
                        </button>
                    }
                }).collect_view()}
            </div>
        </nav>
    }
}
