use std::collections::BTreeMap;

use crate::models::{OrderRecord, Size};

/// Aggregated figures for a day of orders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyStats {
    pub total_orders: usize,
    pub completed_orders: usize,
    /// Sum of subtotals, before tax.
    pub revenue: f64,
    pub tax_collected: f64,
    pub total_calories: u64,
    pub size_counts: BTreeMap<Size, usize>,
}

impl DailyStats {
    pub fn from_records(records: &[OrderRecord]) -> Self {
        let mut stats = DailyStats::default();
        for record in records {
            stats.total_orders += 1;
            if record.completed {
                stats.completed_orders += 1;
            }
            stats.revenue += record.subtotal;
            stats.tax_collected += record.tax;
            stats.total_calories += record.calories as u64;
            *stats.size_counts.entry(record.size).or_insert(0) += 1;
        }
        stats
    }

    pub fn pending_orders(&self) -> usize {
        self.total_orders - self.completed_orders
    }

    /// Average subtotal per order, 0 when there are no orders.
    pub fn average_order_value(&self) -> f64 {
        if self.total_orders > 0 {
            self.revenue / self.total_orders as f64
        } else {
            0.0
        }
    }

    /// Most ordered size. Ties go to the smaller size.
    pub fn most_popular_size(&self) -> Option<Size> {
        let mut best: Option<(Size, usize)> = None;
        for (size, count) in &self.size_counts {
            if best.is_none_or(|(_, top)| *count > top) {
                best = Some((*size, *count));
            }
        }
        best.map(|(size, _)| size)
    }
}
