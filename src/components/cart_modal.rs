//! Cart Modal Component
//!
//! Cart lines with quantity steppers, pickup/delivery choice, customer
//! details and the order hand-off links.

use leptos::prelude::*;

use crate::models::{DeliveryZone, OrderDetails, Price, Restaurant};
use crate::order::{compose_order_message, details_complete, messenger_link, OrderQuote};
use crate::store::{store_close_cart, store_update_quantity, use_app_store, AppStateStoreFields};

/// Quantity -/+ controls for one cart line
#[component]
fn QuantityStepper(item_id: String) -> impl IntoView {
    let store = use_app_store();
    let id = StoredValue::new(item_id);

    let qty = move || {
        id.with_value(|id| store.cart().with(|cart| cart.line(id).map(|l| l.qty).unwrap_or(0)))
    };

    view! {
        <div class="qty-stepper">
            <button
                class="qty-btn"
                aria-label="Weniger"
                on:click=move |_| id.with_value(|id| store_update_quantity(&store, id, -1))
            >
                "−"
            </button>
            <span class="qty-value">{qty}</span>
            <button
                class="qty-btn"
                aria-label="Mehr"
                on:click=move |_| id.with_value(|id| store_update_quantity(&store, id, 1))
            >
                "+"
            </button>
        </div>
    }
}

#[component]
pub fn CartModal(restaurant: &'static Restaurant, total: Memo<Price>) -> impl IntoView {
    let store = use_app_store();

    // Order form state
    let (zone_index, set_zone_index) = signal(None::<usize>);
    let (name, set_name) = signal(String::new());
    let (address, set_address) = signal(String::new());
    let (note, set_note) = signal(String::new());

    let zone = move || -> Option<&'static DeliveryZone> {
        zone_index.get().and_then(|i| restaurant.delivery_zones.get(i))
    };
    let quote = Memo::new(move |_| {
        let zone = zone();
        store
            .cart()
            .with(|cart| OrderQuote::new(cart, zone, restaurant.energy_surcharge))
    });
    let details = move || OrderDetails {
        name: name.get(),
        address: address.get(),
        note: note.get(),
    };
    let ready = move || {
        let q = quote.get();
        q.subtotal != Price::ZERO && q.meets_minimum() && details_complete(&details(), zone().is_some())
    };
    let order_link = move || {
        let message = store
            .cart()
            .with(|cart| compose_order_message(restaurant, cart, &details(), zone()));
        messenger_link(&restaurant.messenger_number, &message)
    };

    let close = move |_: web_sys::MouseEvent| store_close_cart(&store);

    view! {
        <Show when=move || store.cart_open().get()>
            <div class="modal-backdrop" on:click=close>
                <div class="modal-panel" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>"Warenkorb"</h2>
                        <button class="modal-close" aria-label="Schließen" on:click=close>"✕"</button>
                    </div>

                    <Show
                        when=move || !store.cart().with(|cart| cart.is_empty())
                        fallback=|| view! { <p class="cart-empty">"Ihr Warenkorb ist leer."</p> }
                    >
                        <ul class="cart-lines">
                            <For
                                each=move || store.cart().with(|cart| cart.lines().to_vec())
                                key=|line| line.item.id.clone()
                                children=move |line| {
                                    let id = line.item.id.clone();
                                    let line_total = {
                                        let id = id.clone();
                                        move || store.cart().with(|cart| {
                                            cart.line(&id).map(|l| l.line_total()).unwrap_or_default().to_string()
                                        })
                                    };
                                    view! {
                                        <li class="cart-line">
                                            <div class="cart-line-text">
                                                <span class="cart-line-name">{line.item.name.clone()}</span>
                                                <span class="cart-line-total">{line_total}</span>
                                            </div>
                                            <QuantityStepper item_id=id />
                                        </li>
                                    }
                                }
                            />
                        </ul>

                        <div class="cart-subtotal">
                            <span>"Zwischensumme"</span>
                            <span>{move || total.get().to_string()}</span>
                        </div>

                        <div class="order-form">
                            <label class="form-label">"Abholung oder Lieferung"</label>
                            <select
                                class="zone-select"
                                on:change=move |ev| set_zone_index.set(event_target_value(&ev).parse().ok())
                            >
                                <option value="" selected=move || zone_index.get().is_none()>"Abholung"</option>
                                {restaurant.delivery_zones.iter().enumerate().map(|(i, z)| view! {
                                    <option value=i.to_string() selected=move || zone_index.get() == Some(i)>
                                        {format!("Lieferung: {} (ab {})", z.places, z.minimum)}
                                    </option>
                                }).collect_view()}
                            </select>

                            <input
                                type="text"
                                placeholder="Name"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                            <Show when=move || zone().is_some()>
                                <input
                                    type="text"
                                    placeholder="Adresse"
                                    prop:value=move || address.get()
                                    on:input=move |ev| set_address.set(event_target_value(&ev))
                                />
                            </Show>
                            <textarea
                                placeholder="Anmerkung (optional)"
                                prop:value=move || note.get()
                                on:input=move |ev| set_note.set(event_target_value(&ev))
                            ></textarea>
                        </div>

                        <div class="quote">
                            <Show when=move || quote.get().surcharge != Price::ZERO>
                                <div class="quote-row">
                                    <span>"Energiepauschale"</span>
                                    <span>{move || quote.get().surcharge.to_string()}</span>
                                </div>
                            </Show>
                            <div class="quote-row total">
                                <span>"Gesamt"</span>
                                <span>{move || quote.get().total.to_string()}</span>
                            </div>
                            <Show when=move || !quote.get().meets_minimum()>
                                <p class="quote-shortfall">
                                    {move || format!("Noch {} bis zum Mindestbestellwert", quote.get().shortfall)}
                                </p>
                            </Show>
                        </div>

                        <div class="order-actions">
                            {restaurant.phones.first().map(|phone| view! {
                                <a class="order-call" href=phone.tel_href()>"📞 Telefonisch bestellen"</a>
                            })}
                            <Show
                                when=ready
                                fallback=|| view! { <span class="order-hint">"Bitte Angaben vervollständigen"</span> }
                            >
                                <a class="order-send" href=order_link target="_blank" rel="noopener">
                                    "Bestellung per Nachricht senden"
                                </a>
                            </Show>
                        </div>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
