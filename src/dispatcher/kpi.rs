//! Dispatch quality metrics (KPIs).
//!
//! Computes load-balance and payout indicators from a finished dispatch.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Payout | Sum of courier earnings |
//! | Max / Min Load | Most / fewest deliveries held by one courier |
//! | Load Spread | Max load - min load |
//! | Mean Load | Deliveries per courier |
//! | Idle Couriers | Couriers with no delivery |

use std::collections::HashMap;

use crate::models::{Courier, DispatchLog};

/// Dispatch performance indicators.
#[derive(Debug, Clone)]
pub struct DispatchKpi {
    /// Number of committed deliveries.
    pub total_deliveries: usize,
    /// Sum of earnings across all couriers.
    pub total_payout: f64,
    /// Earnings per courier (couriers without deliveries map to 0).
    pub payout_by_courier: HashMap<String, f64>,
    /// What each store pays out in total.
    pub cost_by_store: HashMap<String, f64>,
    /// Largest delivery count held by one courier.
    pub max_load: usize,
    /// Smallest delivery count held by one courier.
    pub min_load: usize,
    /// Mean deliveries per courier.
    pub mean_load: f64,
    /// Couriers that received nothing.
    pub idle_couriers: usize,
}

impl DispatchKpi {
    /// Computes KPIs from a dispatch log and the couriers it ran on.
    pub fn calculate(log: &DispatchLog, couriers: &[Courier]) -> Self {
        let mut payout_by_courier = log.payout_by_courier();
        for courier in couriers {
            payout_by_courier.entry(courier.name.clone()).or_insert(0.0);
        }

        let max_load = couriers.iter().map(|c| c.delivery_count).max().unwrap_or(0);
        let min_load = couriers.iter().map(|c| c.delivery_count).min().unwrap_or(0);
        let idle_couriers = couriers.iter().filter(|c| !c.has_deliveries()).count();

        let mean_load = if couriers.is_empty() {
            0.0
        } else {
            let total: usize = couriers.iter().map(|c| c.delivery_count).sum();
            total as f64 / couriers.len() as f64
        };

        Self {
            total_deliveries: log.delivery_count(),
            total_payout: log.total_payout(),
            payout_by_courier,
            cost_by_store: log.cost_by_store(),
            max_load,
            min_load,
            mean_load,
            idle_couriers,
        }
    }

    /// Difference between the busiest and the least busy courier.
    pub fn load_spread(&self) -> usize {
        self.max_load - self.min_load
    }

    /// Whether no courier holds more than `max_spread` deliveries above another.
    pub fn is_balanced(&self, max_spread: usize) -> bool {
        self.load_spread() <= max_spread
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::Dispatcher;
    use crate::models::Store;

    #[test]
    fn test_kpi_after_dispatch() {
        let stores = vec![
            Store::new("A", vec![50.0, 50.0, 50.0], 0.05),
            Store::new("B", vec![50.0, 50.0, 50.0, 50.0], 0.05),
        ];
        let mut couriers = vec![
            Courier::new("M1", 2.0, ["A", "B"]),
            Courier::new("M2", 2.0, ["A", "B"]),
            Courier::new("M3", 2.0, ["B"]),
        ];

        let log = Dispatcher::new().run(&stores, &mut couriers).unwrap();
        let kpi = DispatchKpi::calculate(&log, &couriers);

        assert_eq!(kpi.total_deliveries, 7);
        assert!((kpi.total_payout - 7.0 * 4.5).abs() < 1e-9);
        assert!((kpi.cost_by_store["A"] - 13.5).abs() < 1e-9);
        assert!((kpi.cost_by_store["B"] - 18.0).abs() < 1e-9);
        assert_eq!(kpi.max_load, 3);
        assert_eq!(kpi.min_load, 2);
        assert_eq!(kpi.load_spread(), 1);
        assert!(kpi.is_balanced(1));
        assert!(!kpi.is_balanced(0));
        assert_eq!(kpi.idle_couriers, 0);
        assert!((kpi.mean_load - 7.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_kpi_idle_courier() {
        let stores = vec![Store::new("A", vec![10.0], 0.1)];
        let mut couriers = vec![
            Courier::new("busy", 1.0, ["A"]),
            Courier::new("spare", 1.0, ["A"]),
        ];

        let log = Dispatcher::new().run(&stores, &mut couriers).unwrap();
        let kpi = DispatchKpi::calculate(&log, &couriers);

        assert_eq!(kpi.idle_couriers, 1);
        assert_eq!(kpi.payout_by_courier["spare"], 0.0);
        assert!((kpi.payout_by_courier["busy"] - 2.0).abs() < 1e-9);
        assert_eq!(kpi.load_spread(), 1);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = DispatchKpi::calculate(&DispatchLog::new(), &[]);
        assert_eq!(kpi.total_deliveries, 0);
        assert_eq!(kpi.mean_load, 0.0);
        assert!(kpi.is_balanced(0));
    }
}
