//! Dispatch log model.
//!
//! The log is the ordered record of every committed assignment produced by a
//! dispatch run: which courier took which job, from which store, and what it
//! earned for it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ordered record of committed deliveries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DispatchLog {
    /// Deliveries in commit order.
    pub deliveries: Vec<Delivery>,
}

/// One committed (store, job) → courier assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    /// Commit sequence number, starting at 0.
    pub sequence: usize,
    /// Originating store.
    pub store: String,
    /// Position of the job within the store's delivery list.
    pub job_index: usize,
    /// Assigned courier.
    pub courier: String,
    /// Job price.
    pub price: f64,
    /// Courier earnings for this job (fixed fee + commission).
    pub earning: f64,
}

impl Delivery {
    /// Creates a delivery record.
    pub fn new(
        sequence: usize,
        store: impl Into<String>,
        job_index: usize,
        courier: impl Into<String>,
        price: f64,
        earning: f64,
    ) -> Self {
        Self {
            sequence,
            store: store.into(),
            job_index,
            courier: courier.into(),
            price,
            earning,
        }
    }
}

impl DispatchLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a delivery.
    pub fn record(&mut self, delivery: Delivery) {
        self.deliveries.push(delivery);
    }

    /// Sequence number the next recorded delivery should carry.
    pub fn next_sequence(&self) -> usize {
        self.deliveries.len()
    }

    /// Number of committed deliveries.
    pub fn delivery_count(&self) -> usize {
        self.deliveries.len()
    }

    /// Whether nothing was committed.
    pub fn is_empty(&self) -> bool {
        self.deliveries.is_empty()
    }

    /// Sum of earnings across all deliveries.
    pub fn total_payout(&self) -> f64 {
        self.deliveries.iter().map(|d| d.earning).sum()
    }

    /// All deliveries taken by a courier.
    pub fn deliveries_for_courier(&self, courier: &str) -> Vec<&Delivery> {
        self.deliveries
            .iter()
            .filter(|d| d.courier == courier)
            .collect()
    }

    /// All deliveries originating from a store.
    pub fn deliveries_for_store(&self, store: &str) -> Vec<&Delivery> {
        self.deliveries.iter().filter(|d| d.store == store).collect()
    }

    /// Who took a given job, if it was committed.
    pub fn courier_for_job(&self, store: &str, job_index: usize) -> Option<&str> {
        self.deliveries
            .iter()
            .find(|d| d.store == store && d.job_index == job_index)
            .map(|d| d.courier.as_str())
    }

    /// Earnings summed per courier.
    pub fn payout_by_courier(&self) -> HashMap<String, f64> {
        let mut out: HashMap<String, f64> = HashMap::new();
        for d in &self.deliveries {
            *out.entry(d.courier.clone()).or_insert(0.0) += d.earning;
        }
        out
    }

    /// Earnings summed per store: what each store pays out in total.
    pub fn cost_by_store(&self) -> HashMap<String, f64> {
        let mut out: HashMap<String, f64> = HashMap::new();
        for d in &self.deliveries {
            *out.entry(d.store.clone()).or_insert(0.0) += d.earning;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_log() -> DispatchLog {
        let mut log = DispatchLog::new();
        log.record(Delivery::new(0, "A", 0, "M1", 50.0, 4.5));
        log.record(Delivery::new(1, "A", 1, "M2", 50.0, 4.5));
        log.record(Delivery::new(2, "B", 0, "M1", 100.0, 17.0));
        log
    }

    #[test]
    fn test_log_queries() {
        let log = sample_log();

        assert_eq!(log.delivery_count(), 3);
        assert_eq!(log.next_sequence(), 3);
        assert!(!log.is_empty());
        assert_eq!(log.deliveries_for_courier("M1").len(), 2);
        assert_eq!(log.deliveries_for_store("A").len(), 2);
        assert_eq!(log.courier_for_job("A", 1), Some("M2"));
        assert_eq!(log.courier_for_job("B", 5), None);
    }

    #[test]
    fn test_log_payouts() {
        let log = sample_log();

        assert!((log.total_payout() - 26.0).abs() < 1e-9);
        let by_courier = log.payout_by_courier();
        assert!((by_courier["M1"] - 21.5).abs() < 1e-9);
        assert!((by_courier["M2"] - 4.5).abs() < 1e-9);
        let by_store = log.cost_by_store();
        assert!((by_store["A"] - 9.0).abs() < 1e-9);
        assert!((by_store["B"] - 17.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_log() {
        let log = DispatchLog::new();
        assert!(log.is_empty());
        assert_eq!(log.total_payout(), 0.0);
        assert!(log.payout_by_courier().is_empty());
    }

    #[test]
    fn test_log_serializes() {
        let log = sample_log();
        let json = serde_json::to_string(&log).unwrap();
        let back: DispatchLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log);
    }
}
