//! Store model.
//!
//! A store is a source of delivery jobs. Each job is represented only by
//! its price; the store pays the assigned courier a fixed fraction of that
//! price (the commission rate) on top of the courier's own fee.

use serde::{Deserialize, Serialize};

/// A source of delivery jobs.
///
/// The store's `name` doubles as its handle: couriers reference the stores
/// they may serve by name, so names must be unique within a batch
/// (see [`validate_input`](crate::validation::validate_input)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    /// Unique store identifier.
    pub name: String,
    /// Job prices, in processing order.
    pub deliveries: Vec<f64>,
    /// Fraction of each job price paid to the courier, in (0, 1].
    pub commission_rate: f64,
}

impl Store {
    /// Creates a store with its pending deliveries and commission rate.
    pub fn new(name: impl Into<String>, deliveries: Vec<f64>, commission_rate: f64) -> Self {
        Self {
            name: name.into(),
            deliveries,
            commission_rate,
        }
    }

    /// Appends one delivery job.
    pub fn with_delivery(mut self, price: f64) -> Self {
        self.deliveries.push(price);
        self
    }

    /// Commission owed to the courier for a job of the given price.
    #[inline]
    pub fn commission_on(&self, price: f64) -> f64 {
        price * self.commission_rate
    }

    /// Number of jobs this store hands out per batch.
    pub fn delivery_count(&self) -> usize {
        self.deliveries.len()
    }

    /// Whether this store has any jobs to dispatch.
    pub fn has_deliveries(&self) -> bool {
        !self.deliveries.is_empty()
    }

    /// Sum of all job prices.
    pub fn total_value(&self) -> f64 {
        self.deliveries.iter().sum()
    }
}
