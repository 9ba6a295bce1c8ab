//! Courier model.
//!
//! A courier (motoboy) charges a fixed fee per job and may only serve a
//! fixed subset of stores. Running totals (delivery count, profit, stores
//! actually served) change only through [`Courier::commit_delivery`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::Store;

/// A delivery worker with a fixed fee and a store eligibility set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Courier {
    /// Unique courier identifier.
    pub name: String,
    /// Amount earned per completed job, regardless of its price.
    pub fixed_fee: f64,
    /// Names of the stores this courier may serve.
    pub eligible_stores: BTreeSet<String>,
    /// Stores actually served, in first-delivery order.
    pub served_stores: Vec<String>,
    /// Number of committed deliveries.
    pub delivery_count: usize,
    /// Accumulated earnings.
    pub profit: f64,
}

/// Snapshot of a courier's running totals.
///
/// `Display` renders the one-line report:
/// `"<name> - Stores attended to: <csv> - Delivery count: <n> - Profit: <p>"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourierReport {
    /// Courier name.
    pub name: String,
    /// Served store names, in first-delivery order.
    pub stores_attended_to: Vec<String>,
    /// Number of committed deliveries.
    pub delivery_count: usize,
    /// Accumulated earnings.
    pub profit: f64,
}

impl Courier {
    /// Creates a courier eligible for the named stores.
    pub fn new<I, S>(name: impl Into<String>, fixed_fee: f64, eligible_stores: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            fixed_fee,
            eligible_stores: eligible_stores.into_iter().map(Into::into).collect(),
            served_stores: Vec::new(),
            delivery_count: 0,
            profit: 0.0,
        }
    }

    /// Creates a courier eligible for the given stores.
    pub fn for_stores(name: impl Into<String>, fixed_fee: f64, stores: &[&Store]) -> Self {
        Self::new(name, fixed_fee, stores.iter().map(|s| s.name.as_str()))
    }

    /// Adds a store to the eligibility set.
    pub fn with_store(mut self, store_name: impl Into<String>) -> Self {
        self.eligible_stores.insert(store_name.into());
        self
    }

    /// Whether this courier may serve the given store.
    pub fn is_eligible(&self, store: &Store) -> bool {
        self.eligible_stores.contains(&store.name)
    }

    /// Size of the eligibility set. Static for the whole batch.
    pub fn eligibility_size(&self) -> usize {
        self.eligible_stores.len()
    }

    /// Earnings for one job of `price` from `store`: fixed fee plus commission.
    #[inline]
    pub fn earning_for(&self, price: f64, store: &Store) -> f64 {
        self.fixed_fee + store.commission_on(price)
    }

    /// Commits one delivery to this courier.
    ///
    /// Increments the delivery count, adds `fixed_fee + price * commission_rate`
    /// to the profit and records the store as served on its first delivery.
    /// A store outside the eligibility set leaves the courier untouched.
    pub fn commit_delivery(&mut self, price: f64, store: &Store) {
        if !self.is_eligible(store) {
            tracing::trace!(courier = %self.name, store = %store.name, "ineligible delivery ignored");
            return;
        }

        self.profit += self.earning_for(price, store);
        self.delivery_count += 1;
        if !self.served_stores.iter().any(|s| *s == store.name) {
            self.served_stores.push(store.name.clone());
        }
    }

    /// Whether the courier has made at least one delivery.
    pub fn has_deliveries(&self) -> bool {
        self.delivery_count > 0
    }

    /// Projects the current running totals into a report.
    pub fn report(&self) -> CourierReport {
        CourierReport {
            name: self.name.clone(),
            stores_attended_to: self.served_stores.clone(),
            delivery_count: self.delivery_count,
            profit: self.profit,
        }
    }
}

impl fmt::Display for CourierReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps the fractional part on whole numbers (26.0, not 26).
        write!(
            f,
            "{} - Stores attended to: {} - Delivery count: {} - Profit: {:?}",
            self.name,
            self.stores_attended_to.join(", "),
            self.delivery_count,
            self.profit
        )
    }
}
