//! Cart
//!
//! Immutable cart value. Every mutation returns a new `Cart`, so a stored
//! cart can be compared with `==` to detect change.

use crate::models::{MenuItem, Price};

/// One catalog item with a positive quantity
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item: MenuItem,
    pub qty: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Price {
        self.item.price.times(self.qty)
    }
}

/// Ordered cart lines, in order of first add.
///
/// No two lines share an item id and no line has quantity zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, item_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.item.id == item_id)
    }

    /// Add one unit of `item`, appending a new line on first add
    pub fn add(&self, item: &MenuItem) -> Cart {
        let mut lines = self.lines.clone();
        match lines.iter_mut().find(|line| line.item.id == item.id) {
            Some(line) => line.qty = line.qty.saturating_add(1),
            None => lines.push(CartLine {
                item: item.clone(),
                qty: 1,
            }),
        }
        Cart { lines }
    }

    /// Shift the quantity of `item_id` by `delta`, clamped at zero.
    ///
    /// A line that reaches zero is removed. Unknown ids leave the cart as is.
    pub fn update_quantity(&self, item_id: &str, delta: i32) -> Cart {
        let lines = self
            .lines
            .iter()
            .filter_map(|line| {
                if line.item.id != item_id {
                    return Some(line.clone());
                }
                let qty = (i64::from(line.qty) + i64::from(delta)).clamp(0, i64::from(u32::MAX)) as u32;
                (qty > 0).then(|| CartLine {
                    item: line.item.clone(),
                    qty,
                })
            })
            .collect();
        Cart { lines }
    }

    /// Sum of price × quantity over all lines
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities, saturating at `u32::MAX`
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|line| line.qty).fold(0, u32::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, cents: u64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            description: None,
            price: Price::from_cents(cents),
            category: "pizza".to_string(),
        }
    }

    fn ids(cart: &Cart) -> Vec<&str> {
        cart.lines().iter().map(|l| l.item.id.as_str()).collect()
    }

    #[test]
    fn test_repeated_add_converges_to_one_line() {
        let item = make_item("p1", 850);
        for n in 1..=20u32 {
            let cart = (0..n).fold(Cart::new(), |cart, _| cart.add(&item));
            assert_eq!(cart.lines().len(), 1);
            assert_eq!(cart.lines()[0].qty, n);
        }
    }

    #[test]
    fn test_add_preserves_first_add_order() {
        let a = make_item("a", 100);
        let b = make_item("b", 200);

        let ab = Cart::new().add(&a).add(&b).add(&a);
        assert_eq!(ids(&ab), vec!["a", "b"]);

        let ba = Cart::new().add(&b).add(&a).add(&b);
        assert_eq!(ids(&ba), vec!["b", "a"]);
    }

    #[test]
    fn test_add_returns_new_value() {
        let item = make_item("p1", 850);
        let before = Cart::new().add(&item);
        let after = before.add(&item);
        assert_ne!(before, after);
        assert_eq!(before.count(), 1);
        assert_eq!(after.count(), 2);
    }

    #[test]
    fn test_three_adds_scenario() {
        let p1 = make_item("p1", 850);
        let cart = Cart::new().add(&p1).add(&p1).add(&p1);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line("p1").map(|l| l.qty), Some(3));
        assert_eq!(cart.total(), Price::from_cents(2550));
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_decrement_then_clamp_scenario() {
        let p1 = make_item("p1", 850);
        let cart = Cart::new().add(&p1).add(&p1).add(&p1);

        let cart = cart.update_quantity("p1", -1);
        assert_eq!(cart.line("p1").map(|l| l.qty), Some(2));

        let cart = cart.update_quantity("p1", -5);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::ZERO);
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_removal_strictly_shrinks_line_count() {
        let a = make_item("a", 100);
        let b = make_item("b", 200);
        let cart = Cart::new().add(&a).add(&a).add(&b);

        for n in [2, 3, 100] {
            let next = cart.update_quantity("a", -n);
            assert_eq!(next.lines().len(), cart.lines().len() - 1);
            assert_eq!(ids(&next), vec!["b"]);
        }
    }

    #[test]
    fn test_removal_is_not_undone_by_increment() {
        let a = make_item("a", 100);
        let cart = Cart::new().add(&a).add(&a);

        let cart = cart.update_quantity("a", -2).update_quantity("a", 2);
        assert!(cart.line("a").is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let a = make_item("a", 100);
        let cart = Cart::new().add(&a);
        assert_eq!(cart.update_quantity("missing", 1), cart);
        assert_eq!(cart.update_quantity("missing", -1), cart);
    }

    #[test]
    fn test_increment_keeps_position() {
        let a = make_item("a", 100);
        let b = make_item("b", 200);
        let c = make_item("c", 300);
        let cart = Cart::new().add(&a).add(&b).add(&c).update_quantity("b", 4);
        assert_eq!(ids(&cart), vec!["a", "b", "c"]);
        assert_eq!(cart.line("b").map(|l| l.qty), Some(5));
    }

    #[test]
    fn test_total_matches_lines_and_is_idempotent() {
        let a = make_item("a", 850);
        let b = make_item("b", 1290);
        let cart = Cart::new().add(&a).add(&b).add(&b).add(&a).add(&a);

        let expected: u64 = cart.lines().iter().map(|l| l.item.price.cents() * u64::from(l.qty)).sum();
        assert_eq!(cart.total(), Price::from_cents(expected));
        assert_eq!(cart.total(), cart.total());
        assert_eq!(cart.total(), Price::from_cents(850 * 3 + 1290 * 2));
        assert_eq!(cart.count(), 5);
    }

    #[test]
    fn test_quantities_saturate_at_cap() {
        let a = make_item("a", 100);
        let b = make_item("b", 200);
        let cart = Cart::new()
            .add(&a)
            .add(&b)
            .update_quantity("a", i32::MAX)
            .update_quantity("a", i32::MAX)
            .update_quantity("b", i32::MAX)
            .update_quantity("b", i32::MAX);
        assert_eq!(cart.line("a").map(|l| l.qty), Some(u32::MAX));

        let cart = cart.add(&a);
        assert_eq!(cart.line("a").map(|l| l.qty), Some(u32::MAX));
        assert_eq!(cart.count(), u32::MAX);
        assert_eq!(cart.total(), Price::from_cents(300 * u64::from(u32::MAX)));

        let cart = cart.update_quantity("a", i32::MIN);
        assert_eq!(cart.line("a").map(|l| l.qty), Some(u32::MAX - 2_147_483_648));
    }

    #[test]
    fn test_zero_delta_is_noop() {
        let a = make_item("a", 100);
        let cart = Cart::new().add(&a);
        assert_eq!(cart.update_quantity("a", 0), cart);
    }
}
