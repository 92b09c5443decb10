//! # Pricing Engine
//!
//! The running total is derived, never stored:
//!
//! ```text
//! extras_subtotal = Σ extra.value × extra.quantity
//! total           = (item.price + extras_subtotal) × order_quantity
//! ```
//!
//! Callers recompute it after every change to the item, the ledger, or the
//! quantity. With no item loaded the total is zero.

use crate::extras::ExtrasLedger;
use crate::money::Money;
use crate::types::{Extra, Item};

/// Σ value × quantity. Zero-quantity extras contribute nothing.
pub fn extras_subtotal(extras: &[Extra]) -> Money {
    extras.iter().map(Extra::subtotal).sum()
}

/// Total for one configured unit, before the order quantity.
pub fn unit_total(item: Option<&Item>, extras: &[Extra]) -> Money {
    match item {
        Some(item) => item.price + extras_subtotal(extras),
        None => Money::zero(),
    }
}

/// Order total.
///
/// ## Example
/// ```rust
/// use savor_core::money::Money;
/// use savor_core::pricing::total;
///
/// assert_eq!(total(None, &[], 3), Money::zero());
/// ```
pub fn total(item: Option<&Item>, extras: &[Extra], quantity: u32) -> Money {
    unit_total(item, extras).multiply_quantity(quantity)
}

/// [`total`] over a ledger.
pub fn ledger_total(item: Option<&Item>, ledger: &ExtrasLedger, quantity: u32) -> Money {
    total(item, ledger.extras(), quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::MoneyFormatter;
    use crate::quantity::QuantityCounter;
    use crate::types::{fixtures, ExtraId};

    #[test]
    fn test_total_without_item_is_zero() {
        let item = fixtures::burger();
        let mut ledger = ExtrasLedger::new();
        ledger.load(&item.extras);
        ledger.increment(ExtraId(1));

        assert_eq!(ledger_total(None, &ledger, 4), Money::zero());
    }

    #[test]
    fn test_running_total_scenario() {
        let mut item = fixtures::burger();
        item.extras.truncate(1);
        let fmt = MoneyFormatter::en_us();
        let mut ledger = ExtrasLedger::new();
        ledger.load(&item.extras);
        let mut qty = QuantityCounter::new();

        let show = |ledger: &ExtrasLedger, qty: &QuantityCounter| {
            fmt.format(ledger_total(Some(&item), ledger, qty.get()))
        };

        assert_eq!(show(&ledger, &qty), "$10.00");

        ledger.increment(ExtraId(1));
        ledger.increment(ExtraId(1));
        assert_eq!(show(&ledger, &qty), "$14.00");

        qty.increment();
        assert_eq!(show(&ledger, &qty), "$28.00");
    }

    #[test]
    fn test_formula_matches_across_quantities() {
        let item = fixtures::burger();
        let mut ledger = ExtrasLedger::new();
        ledger.load(&item.extras);

        for bacon in 0..4u32 {
            for cheese in 0..4u32 {
                for qty in 1..5u32 {
                    ledger.load(&item.extras);
                    for _ in 0..bacon {
                        ledger.increment(ExtraId(1));
                    }
                    for _ in 0..cheese {
                        ledger.increment(ExtraId(2));
                    }
                    let expected = (1000 + 200 * i64::from(bacon) + 150 * i64::from(cheese))
                        * i64::from(qty);
                    assert_eq!(ledger_total(Some(&item), &ledger, qty).cents(), expected);
                }
            }
        }
    }

    #[test]
    fn test_extra_increment_adds_value_times_quantity() {
        let item = fixtures::burger();
        let mut ledger = ExtrasLedger::new();
        ledger.load(&item.extras);
        ledger.increment(ExtraId(1));

        let qty = 3;
        let before = ledger_total(Some(&item), &ledger, qty);
        ledger.increment(ExtraId(2));
        let after = ledger_total(Some(&item), &ledger, qty);

        assert_eq!(after - before, Money::from_cents(150).multiply_quantity(qty));
    }

    #[test]
    fn test_huge_price_saturates_instead_of_overflowing() {
        let mut item = fixtures::burger();
        item.price = serde_json::from_str("50000000000000000").unwrap();
        let mut ledger = ExtrasLedger::new();
        ledger.load(&item.extras);
        ledger.increment(ExtraId(1));

        assert_eq!(ledger_total(Some(&item), &ExtrasLedger::new(), 2).cents(), i64::MAX);
        assert_eq!(ledger_total(Some(&item), &ledger, 99).cents(), i64::MAX);
    }

    #[test]
    fn test_extras_subtotal_ignores_zero_quantity() {
        let item = fixtures::burger();
        let mut ledger = ExtrasLedger::new();
        ledger.load(&item.extras);
        assert!(extras_subtotal(ledger.extras()).is_zero());
        assert_eq!(unit_total(Some(&item), ledger.extras()).cents(), 1000);
    }
}
