use log::info;

use crate::error::{CafeError, Result};
use crate::menu::Beverage;
use crate::models::{Order, OrderRecord, Receipt};
use crate::shop::config::ShopConfig;
use crate::shop::stats::DailyStats;

/// Takes orders, tracks their completion and reports on the day.
pub struct CoffeeShop {
    config: ShopConfig,
    open: bool,
    next_number: u32,
    orders: Vec<Order>,
}

impl CoffeeShop {
    /// Create a shop whose first order is number 1.
    pub fn new(config: ShopConfig) -> Self {
        Self::starting_at(config, 1)
    }

    /// Create a shop that continues numbering from an earlier session.
    pub fn starting_at(config: ShopConfig, first_number: u32) -> Self {
        let open = config.open_on_start;
        Self {
            config,
            open,
            next_number: first_number.max(1),
            orders: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn tax_rate(&self) -> f64 {
        self.config.tax_rate
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        if !self.open {
            info!("{} is now open", self.config.name);
        }
        self.open = true;
    }

    pub fn close(&mut self) {
        if self.open {
            info!("{} is now closed", self.config.name);
        }
        self.open = false;
    }

    /// Record a new order and return its number.
    pub fn place_order(&mut self, customer: &str, beverage: Box<dyn Beverage>) -> Result<u32> {
        if !self.open {
            return Err(CafeError::ShopClosed);
        }

        if !beverage.is_available() {
            return Err(CafeError::BeverageUnavailable(beverage.description()));
        }

        let customer = customer.trim();
        if customer.is_empty() {
            return Err(CafeError::InvalidInput(
                "customer name must not be empty".to_string(),
            ));
        }

        let number = self.next_number;
        self.next_number += 1;

        info!(
            "order #{} for {}: {} (${:.2})",
            number,
            customer,
            beverage.description(),
            beverage.cost()
        );
        self.orders
            .push(Order::new(number, customer.to_string(), beverage));
        Ok(number)
    }

    /// Mark an order as handed over. Completing twice is a no-op.
    pub fn complete_order(&mut self, number: u32) -> Result<&Order> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.number == number)
            .ok_or(CafeError::OrderNotFound(number))?;

        if !order.completed {
            order.completed = true;
            info!("order #{} completed", number);
        }
        Ok(&*order)
    }

    pub fn get_order(&self, number: u32) -> Option<&Order> {
        self.orders.iter().find(|o| o.number == number)
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn pending_orders(&self) -> Vec<&Order> {
        self.orders.iter().filter(|o| !o.completed).collect()
    }

    pub fn receipt(&self, number: u32) -> Result<Receipt> {
        self.get_order(number)
            .map(|o| o.receipt(self.config.tax_rate))
            .ok_or(CafeError::OrderNotFound(number))
    }

    /// Snapshot every order, in placement order.
    pub fn records(&self) -> Vec<OrderRecord> {
        self.orders
            .iter()
            .map(|o| o.to_record(self.config.tax_rate))
            .collect()
    }

    pub fn daily_stats(&self) -> DailyStats {
        DailyStats::from_records(&self.records())
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
