use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::menu::Beverage;
use crate::models::Size;

/// Round a money amount to whole cents.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// A customer's order: one fully wrapped beverage.
#[derive(Debug)]
pub struct Order {
    pub number: u32,
    pub customer: String,
    pub beverage: Box<dyn Beverage>,
    pub placed_at: DateTime<Local>,
    pub completed: bool,
}

impl Order {
    pub fn new(number: u32, customer: String, beverage: Box<dyn Beverage>) -> Self {
        Self {
            number,
            customer,
            beverage,
            placed_at: Local::now(),
            completed: false,
        }
    }

    pub fn receipt(&self, tax_rate: f64) -> Receipt {
        Receipt::new(self.beverage.cost(), tax_rate)
    }

    /// Snapshot the order for history and reports.
    pub fn to_record(&self, tax_rate: f64) -> OrderRecord {
        let receipt = self.receipt(tax_rate);
        OrderRecord {
            number: self.number,
            customer: self.customer.clone(),
            description: self.beverage.description(),
            size: self.beverage.size(),
            ingredients: self.beverage.ingredients(),
            calories: self.beverage.calories(),
            prep_minutes: self.beverage.preparation_time(),
            subtotal: receipt.subtotal,
            tax: receipt.tax,
            total: receipt.total,
            placed_at: self.placed_at,
            completed: self.completed,
        }
    }
}

/// Money breakdown for one order. Tax is rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Receipt {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

impl Receipt {
    pub fn new(subtotal: f64, tax_rate: f64) -> Self {
        let tax = round_cents(subtotal * tax_rate);
        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

/// Serializable snapshot of a placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub number: u32,
    pub customer: String,
    pub description: String,
    pub size: Size,
    pub ingredients: Vec<String>,
    pub calories: u32,
    pub prep_minutes: u32,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    pub placed_at: DateTime<Local>,
    #[serde(default)]
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{AddOn, BaseDrink, BeverageExt, MilkKind};

    #[test]
    fn test_receipt_rounds_tax() {
        let receipt = Receipt::new(5.15, 0.08);
        assert!((receipt.tax - 0.41).abs() < 0.001);
        assert!((receipt.total - 5.56).abs() < 0.001);
    }

    #[test]
    fn test_total_adds_rounded_tax() {
        // 3.70 * 0.08 = 0.296
        let receipt = Receipt::new(3.70, 0.08);
        assert!((receipt.tax - 0.30).abs() < 1e-9);
        assert!((receipt.total - 4.00).abs() < 1e-9);
        assert!((receipt.total - (receipt.subtotal + receipt.tax)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_tax() {
        let receipt = Receipt::new(3.0, 0.0);
        assert_eq!(receipt.tax, 0.0);
        assert_eq!(receipt.total, 3.0);
    }

    #[test]
    fn test_record_snapshot() {
        let drink = BaseDrink::plain_coffee(Size::Medium)
            .boxed()
            .with(AddOn::milk(MilkKind::Almond));
        let order = Order::new(7, "Ada".to_string(), drink);
        let record = order.to_record(0.08);

        assert_eq!(record.number, 7);
        assert_eq!(record.customer, "Ada");
        assert_eq!(record.description, "Medium Plain Coffee, Almond Milk");
        assert_eq!(record.size, Size::Medium);
        assert_eq!(record.ingredients.len(), 3);
        assert_eq!(record.calories, 20);
        assert_eq!(record.prep_minutes, 4);
        assert!((record.subtotal - 3.75).abs() < 0.001);
        assert!((record.tax - 0.30).abs() < 0.001);
        assert!(!record.completed);
    }
}
