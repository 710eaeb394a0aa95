//! Order total calculation using rust_decimal for precision
//!
//! All arithmetic runs on `Decimal`; the stored total is the unrounded
//! `f64` conversion and rounding to 2 decimal places happens only when a
//! figure is presented.

use rust_decimal::prelude::*;
use shared::OrderItemStatus;

const DECIMAL_PLACES: u32 = 2;

/// How one line prices out
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinePrice {
    /// Fixed unit price
    Fixed(Decimal),
    /// Per-kilogram price with the measured weight
    PerKg { per_kg: Decimal, weight_kg: Decimal },
}

/// One order line resolved against the menu
#[derive(Debug, Clone)]
pub struct OrderLine {
    pub status: OrderItemStatus,
    pub quantity: i32,
    /// None when the menu item no longer exists; the line contributes zero
    pub price: Option<LinePrice>,
}

impl OrderLine {
    fn amount(&self) -> Decimal {
        let Some(price) = self.price else {
            return Decimal::ZERO;
        };
        let quantity = Decimal::from(self.quantity);
        match price {
            LinePrice::Fixed(unit) => unit * quantity,
            LinePrice::PerKg { per_kg, weight_kg } => per_kg * weight_kg * quantity,
        }
    }
}

/// Sum the active lines of an order.
///
/// Cancelled lines and lines whose menu item is gone contribute nothing.
/// An order with no lines totals zero.
pub fn order_total(lines: &[OrderLine]) -> Decimal {
    lines
        .iter()
        .filter(|line| line.status.is_active())
        .map(OrderLine::amount)
        .sum()
}

/// Round a monetary figure for presentation (2 decimal places, half-up)
pub fn rounded_total(total: Decimal) -> Decimal {
    total.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, unrounded
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(status: OrderItemStatus, price: f64, quantity: i32) -> OrderLine {
        OrderLine {
            status,
            quantity,
            price: Some(LinePrice::Fixed(to_decimal(price))),
        }
    }

    fn per_kg(status: OrderItemStatus, per_kg: f64, weight_kg: f64, quantity: i32) -> OrderLine {
        OrderLine {
            status,
            quantity,
            price: Some(LinePrice::PerKg {
                per_kg: to_decimal(per_kg),
                weight_kg: to_decimal(weight_kg),
            }),
        }
    }

    #[test]
    fn test_empty_order_totals_zero() {
        assert_eq!(order_total(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_fixed_price_line() {
        // 8.50 x 3 = 25.50
        let lines = vec![fixed(OrderItemStatus::Pending, 8.50, 3)];
        assert_eq!(to_f64(order_total(&lines)), 25.50);
    }

    #[test]
    fn test_weight_based_line() {
        // 20.00/kg x 0.3 kg x 2 = 12.00
        let lines = vec![per_kg(OrderItemStatus::Pending, 20.0, 0.3, 2)];
        assert_eq!(to_f64(rounded_total(order_total(&lines))), 12.00);
    }

    #[test]
    fn test_cancelled_lines_excluded() {
        let lines = vec![
            fixed(OrderItemStatus::Served, 10.0, 1),
            fixed(OrderItemStatus::Cancelled, 99.0, 5),
        ];
        assert_eq!(to_f64(order_total(&lines)), 10.0);
    }

    #[test]
    fn test_missing_menu_item_contributes_zero() {
        let lines = vec![
            fixed(OrderItemStatus::Pending, 7.0, 2),
            OrderLine {
                status: OrderItemStatus::Pending,
                quantity: 4,
                price: None,
            },
        ];
        assert_eq!(to_f64(order_total(&lines)), 14.0);
    }

    #[test]
    fn test_mixed_pricing_modes() {
        let lines = vec![
            fixed(OrderItemStatus::Preparing, 8.50, 3),
            per_kg(OrderItemStatus::Pending, 20.0, 0.3, 2),
        ];
        // 25.50 + 12.00 = 37.50
        assert_eq!(to_f64(rounded_total(order_total(&lines))), 37.50);
    }

    #[test]
    fn test_decimal_beats_float_accumulation() {
        // 0.10 a hundred times is exactly 10.00
        let lines: Vec<OrderLine> = (0..100)
            .map(|_| fixed(OrderItemStatus::Pending, 0.10, 1))
            .collect();
        assert_eq!(to_f64(order_total(&lines)), 10.0);
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        let value = Decimal::new(125, 3); // 0.125
        assert_eq!(rounded_total(value), Decimal::new(13, 2)); // 0.13
    }
}
