//! Order Quote & Hand-off
//!
//! Totals for pickup or delivery and the plain-text order message the
//! customer sends by phone or messenger. Nothing here talks to a server.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::cart::Cart;
use crate::models::{DeliveryZone, OrderDetails, Price, Restaurant};

/// Derived totals for the current cart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderQuote {
    pub subtotal: Price,
    /// Energy surcharge, charged on delivery only
    pub surcharge: Price,
    pub total: Price,
    /// Amount still missing to reach the zone minimum
    pub shortfall: Price,
}

impl OrderQuote {
    /// Quote `cart` for delivery into `zone`, or pickup when `zone` is `None`
    pub fn new(cart: &Cart, zone: Option<&DeliveryZone>, surcharge: Price) -> Self {
        let subtotal = cart.total();
        let (surcharge, shortfall) = match zone {
            Some(zone) => (surcharge, zone.minimum.saturating_sub(subtotal)),
            None => (Price::ZERO, Price::ZERO),
        };
        Self {
            subtotal,
            surcharge,
            total: subtotal + surcharge,
            shortfall,
        }
    }

    pub fn meets_minimum(&self) -> bool {
        self.shortfall == Price::ZERO
    }
}

/// Plain-text order for the restaurant
pub fn compose_order_message(
    restaurant: &Restaurant,
    cart: &Cart,
    details: &OrderDetails,
    zone: Option<&DeliveryZone>,
) -> String {
    let quote = OrderQuote::new(cart, zone, restaurant.energy_surcharge);
    let mut msg = format!("Bestellung bei {}\n\n", restaurant.name);

    for line in cart.lines() {
        msg.push_str(&format!("{}x {} ({})\n", line.qty, line.item.name, line.line_total()));
    }

    msg.push_str(&format!("\nZwischensumme: {}\n", quote.subtotal));
    if quote.surcharge != Price::ZERO {
        msg.push_str(&format!("Energiepauschale: {}\n", quote.surcharge));
    }
    msg.push_str(&format!("Gesamt: {}\n", quote.total));

    match zone {
        Some(zone) => msg.push_str(&format!("\nLieferung nach: {}\n", zone.places)),
        None => msg.push_str("\nAbholung\n"),
    }
    msg.push_str(&format!("Name: {}\n", details.name.trim()));
    if zone.is_some() {
        msg.push_str(&format!("Adresse: {}\n", details.address.trim()));
    }
    if !details.note.trim().is_empty() {
        msg.push_str(&format!("Hinweis: {}\n", details.note.trim()));
    }
    msg
}

/// Messenger chat link with `message` pre-filled
pub fn messenger_link(number: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        number,
        utf8_percent_encode(message, NON_ALPHANUMERIC)
    )
}

/// Whether the form has what the restaurant needs to take the order
pub fn details_complete(details: &OrderDetails, delivery: bool) -> bool {
    !details.name.trim().is_empty() && (!delivery || !details.address.trim().is_empty())
}
