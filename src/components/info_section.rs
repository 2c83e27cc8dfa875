//! Info Section Component
//!
//! First page section: delivery zones, opening hours and contact.

use leptos::prelude::*;

use crate::config::INFO_SECTION_ID;
use crate::models::Restaurant;

/// Card with a title row and arbitrary content
#[component]
pub fn InfoCard(
    #[prop(into)] title: String,
    icon: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="info-card">
            <h3 class="info-card-title">
                <span class="icon">{icon}</span>
                {title}
            </h3>
            <div class="info-card-body">{children()}</div>
        </div>
    }
}

#[component]
pub fn InfoSection(restaurant: &'static Restaurant) -> impl IntoView {
    view! {
        <section id=INFO_SECTION_ID class="page-section info-section">
            <div class="info-grid">
                <InfoCard title="Liefergebiete" icon="🛵">
                    <div class="surcharge-badge">
                        "+ " {restaurant.energy_surcharge.to_string()} " Energiepauschale"
                    </div>
                    <ul class="zone-list">
                        {restaurant.delivery_zones.iter().map(|zone| view! {
                            <li class="zone-row">
                                <span>{zone.places.clone()}</span>
                                <span class="zone-minimum">"ab " {zone.minimum.to_string()}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                </InfoCard>

                <InfoCard title="Kontakt" icon="🏪">
                    <div class="opening-hours">
                        {restaurant.opening_hours.iter().map(|oh| view! {
                            <p class="hours-row">
                                <span class="hours-days">{oh.days.clone()}</span>
                                {oh.hours.clone()}
                            </p>
                        }).collect_view()}
                    </div>
                    <div class="divider"></div>
                    <div class="contact-list">
                        {restaurant.phones.iter().map(|phone| view! {
                            <a class="contact-row" href=phone.tel_href()>
                                <span class="icon">"📞"</span>
                                <span>{phone.display.clone()}</span>
                            </a>
                        }).collect_view()}
                        <div class="contact-row address">
                            <span class="icon">"📍"</span>
                            <span>
                                {restaurant.address.iter().map(|line| view! {
                                    <span class="address-line">{line.clone()}</span>
                                }).collect_view()}
                            </span>
                        </div>
                    </div>
                </InfoCard>
            </div>
        </section>
    }
}
