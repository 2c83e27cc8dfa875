//! Frontend Models
//!
//! Menu, restaurant and money types deserialized from the embedded catalog.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Euro amount in whole cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(u64);

/// Reason a decimal amount could not become a `Price`
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PriceError {
    #[error("price {0} is negative")]
    Negative(f64),
    #[error("price is not a finite number")]
    NotFinite,
}

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Price(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Price of `qty` units
    pub fn times(self, qty: u32) -> Price {
        Price(self.0.saturating_mul(u64::from(qty)))
    }

    pub fn saturating_sub(self, rhs: Price) -> Price {
        Price(self.0.saturating_sub(rhs.0))
    }
}

impl TryFrom<f64> for Price {
    type Error = PriceError;

    fn try_from(euros: f64) -> Result<Self, Self::Error> {
        if !euros.is_finite() {
            return Err(PriceError::NotFinite);
        }
        if euros < 0.0 {
            return Err(PriceError::Negative(euros));
        }
        Ok(Price((euros * 100.0).round() as u64))
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> f64 {
        price.0 as f64 / 100.0
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

/// German notation: `25,50 €`
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{:02} €", self.0 / 100, self.0 % 100)
    }
}

/// Catalog entry (immutable for the session)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Price,
    pub category: String,
}

/// Menu category, rendered as its own page section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub label: String,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub days: String,
    pub hours: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phone {
    /// Human-readable form, e.g. `08254 - 99 81 977`
    pub display: String,
    /// Digits for `tel:` links
    pub dial: String,
}

impl Phone {
    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.dial)
    }
}

/// Delivery area with its minimum order value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryZone {
    pub places: String,
    pub minimum: Price,
}

/// Static restaurant profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub town: String,
    pub hours_badge: String,
    pub opening_hours: Vec<OpeningHours>,
    pub phones: Vec<Phone>,
    pub address: Vec<String>,
    /// International number without `+` used for the messenger hand-off
    pub messenger_number: String,
    pub energy_surcharge: Price,
    pub delivery_zones: Vec<DeliveryZone>,
    pub drinks_note: String,
    pub price_note: String,
    pub copyright: String,
    pub tax_note: String,
}

/// Customer details typed into the cart modal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderDetails {
    pub name: String,
    pub address: String,
    pub note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_from_decimal_rounds_to_cents() {
        assert_eq!(Price::try_from(8.5).unwrap(), Price::from_cents(850));
        assert_eq!(Price::try_from(0.1 + 0.2).unwrap(), Price::from_cents(30));
        assert_eq!(Price::try_from(12.999).unwrap(), Price::from_cents(1300));
    }

    #[test]
    fn test_price_rejects_bad_values() {
        assert_eq!(Price::try_from(-1.0), Err(PriceError::Negative(-1.0)));
        assert_eq!(Price::try_from(f64::NAN), Err(PriceError::NotFinite));
        assert_eq!(Price::try_from(f64::INFINITY), Err(PriceError::NotFinite));
    }

    #[test]
    fn test_price_display() {
        assert_eq!(Price::from_cents(2550).to_string(), "25,50 €");
        assert_eq!(Price::from_cents(5).to_string(), "0,05 €");
        assert_eq!(Price::ZERO.to_string(), "0,00 €");
    }

    #[test]
    fn test_price_arithmetic() {
        let p = Price::from_cents(850);
        assert_eq!(p.times(3), Price::from_cents(2550));
        assert_eq!(p.times(0), Price::ZERO);
        assert_eq!(Price::from_cents(100).saturating_sub(Price::from_cents(250)), Price::ZERO);
        let total: Price = [p, p, Price::from_cents(100)].into_iter().sum();
        assert_eq!(total, Price::from_cents(1800));
    }

    #[test]
    fn test_price_arithmetic_saturates() {
        assert_eq!(Price::from_cents(u64::MAX).times(2), Price::from_cents(u64::MAX));
        assert_eq!(Price::from_cents(u64::MAX) + Price::from_cents(1), Price::from_cents(u64::MAX));
    }

    #[test]
    fn test_menu_item_deserializes_decimal_price() {
        let item: MenuItem = serde_json::from_str(
            r#"{"id":"p1","name":"Margherita","price":8.50,"category":"pizza"}"#,
        )
        .unwrap();
        assert_eq!(item.price, Price::from_cents(850));
        assert_eq!(item.description, None);
    }

    #[test]
    fn test_menu_item_rejects_negative_price() {
        let res: Result<MenuItem, _> = serde_json::from_str(
            r#"{"id":"p1","name":"Margherita","price":-2,"category":"pizza"}"#,
        );
        assert!(res.is_err());
    }
}
