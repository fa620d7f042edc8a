//! Price arithmetic helpers

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Tax rate applied when none is given
pub const DEFAULT_TAX_RATE: f64 = 0.1;

/// Prices at or above this are treated as data entry mistakes
pub const MAX_PRICE: f64 = 1_000_000.0;

/// A priced quantity of something
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub quantity: f64,
}

impl LineItem {
    pub fn new(price: f64, quantity: f64) -> Self {
        Self { price, quantity }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity
    }
}

/// Discount amount for a percentage (0-100). Negative prices yield no discount.
pub fn calculate_discount(price: f64, discount_percent: f64) -> f64 {
    if price < 0.0 {
        return 0.0;
    }
    price * (discount_percent / 100.0)
}

/// Price left after taking off a fraction (0.0-1.0) of it
pub fn price_after_discount(price: f64, discount_fraction: f64) -> f64 {
    price - price * discount_fraction
}

pub fn calculate_total(items: &[LineItem]) -> f64 {
    items.iter().map(LineItem::subtotal).sum()
}

/// Tax owed on an amount
pub fn calculate_tax(amount: f64, rate: f64) -> f64 {
    amount * rate
}

/// Amount including tax
pub fn apply_tax(amount: f64, rate: f64) -> f64 {
    amount + calculate_tax(amount, rate)
}

pub fn is_valid_price(price: f64) -> bool {
    price > 0.0 && price < MAX_PRICE
}

/// Format as dollars with two decimals, e.g. `$12.50`
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Division that yields zero instead of infinity for a zero divisor
pub fn divide(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        return 0.0;
    }
    a / b
}

/// `value` as a percentage of `total`
pub fn calculate_percentage(value: f64, total: f64) -> Result<f64, DomainError> {
    if total == 0.0 {
        return Err(DomainError::validation("Total cannot be zero"));
    }
    Ok((value / total) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_discount() {
        assert_eq!(calculate_discount(200.0, 10.0), 20.0);
        assert_eq!(calculate_discount(0.0, 50.0), 0.0);
        assert_eq!(calculate_discount(-5.0, 10.0), 0.0);
    }

    #[test]
    fn test_price_after_discount() {
        assert_eq!(price_after_discount(100.0, 0.25), 75.0);
        assert_eq!(price_after_discount(100.0, 0.0), 100.0);
    }

    #[test]
    fn test_calculate_total() {
        let items = [LineItem::new(2.5, 4.0), LineItem::new(10.0, 1.0)];
        assert_eq!(calculate_total(&items), 20.0);
        assert_eq!(calculate_total(&[]), 0.0);
    }

    #[test]
    fn test_line_item_missing_fields_default_to_zero() {
        let item: LineItem = serde_json::from_str(r#"{"price": 3.0}"#).unwrap();
        assert_eq!(item.subtotal(), 0.0);
    }

    #[test]
    fn test_tax() {
        assert_eq!(calculate_tax(50.0, DEFAULT_TAX_RATE), 5.0);
        assert_eq!(apply_tax(50.0, 0.2), 60.0);
    }

    #[test]
    fn test_is_valid_price() {
        assert!(is_valid_price(0.01));
        assert!(is_valid_price(999_999.99));
        assert!(!is_valid_price(0.0));
        assert!(!is_valid_price(-1.0));
        assert!(!is_valid_price(MAX_PRICE));
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(12.5), "$12.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234.5), "$1234.50");
        assert_eq!(format_currency(7.891), "$7.89");
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(10.0, 4.0), 2.5);
        assert_eq!(divide(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_calculate_percentage() {
        assert_eq!(calculate_percentage(25.0, 200.0).unwrap(), 12.5);
        assert!(matches!(
            calculate_percentage(1.0, 0.0),
            Err(DomainError::Validation { .. })
        ));
    }
}
