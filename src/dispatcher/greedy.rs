//! Greedy batch dispatcher.
//!
//! # Algorithm
//!
//! 1. Validate the batch; any issue aborts before the first commit.
//! 2. For each store, in order, collect the couriers eligible for it.
//! 3. For each job of the store, in order, re-rank the eligible couriers
//!    and commit the job to the first one.
//!
//! Ranking is recomputed per job since every commit changes the chosen
//! courier's delivery count.
//!
//! # Complexity
//! O(j * e log e) where j=jobs, e=eligible couriers per store.

use tracing::{debug, info};

use crate::dispatching::RuleEngine;
use crate::error::{DispatchError, Result};
use crate::models::{Courier, Delivery, DispatchLog, Store};
use crate::validation::{validate_input, ValidationError};

/// Input container for a dispatch run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    /// Job sources, in processing order.
    pub stores: Vec<Store>,
    /// Courier pool. Mutated by dispatch.
    pub couriers: Vec<Courier>,
}

impl Batch {
    /// Creates a batch.
    pub fn new(stores: Vec<Store>, couriers: Vec<Courier>) -> Self {
        Self { stores, couriers }
    }

    /// Total number of jobs across all stores.
    pub fn total_jobs(&self) -> usize {
        self.stores.iter().map(Store::delivery_count).sum()
    }

    /// Looks up a courier by name.
    pub fn courier(&self, name: &str) -> Option<&Courier> {
        self.couriers.iter().find(|c| c.name == name)
    }
}

/// Priority-driven greedy dispatcher.
///
/// # Example
///
/// ```
/// use u_courier::dispatcher::Dispatcher;
/// use u_courier::models::{Courier, Store};
///
/// let stores = vec![Store::new("Store 1", vec![50.0], 0.05)];
/// let mut couriers = vec![Courier::new("Motoboy 1", 2.0, ["Store 1"])];
///
/// let log = Dispatcher::new().run(&stores, &mut couriers).unwrap();
/// assert_eq!(log.delivery_count(), 1);
/// assert_eq!(couriers[0].profit, 4.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    rule_engine: RuleEngine,
}

impl Dispatcher {
    /// Creates a dispatcher with the standard ranking.
    pub fn new() -> Self {
        Self {
            rule_engine: RuleEngine::standard(),
        }
    }

    /// Replaces the ranking used to pick a courier per job.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = engine;
        self
    }

    /// The ranking in use.
    pub fn rule_engine(&self) -> &RuleEngine {
        &self.rule_engine
    }

    /// Dispatches every job of every store.
    ///
    /// Stores are read-only; only courier running totals change. Fails with
    /// [`DispatchError::InvalidInput`] before any commit if the batch is
    /// invalid, e.g. a store with pending jobs has no eligible courier.
    pub fn run(&self, stores: &[Store], couriers: &mut [Courier]) -> Result<DispatchLog> {
        validate_input(stores, couriers).map_err(DispatchError::InvalidInput)?;

        let total_jobs: usize = stores.iter().map(Store::delivery_count).sum();
        info!(
            stores = stores.len(),
            couriers = couriers.len(),
            jobs = total_jobs,
            "dispatch started"
        );

        let mut log = DispatchLog::new();

        for store in stores {
            let eligible: Vec<usize> = couriers
                .iter()
                .enumerate()
                .filter(|(_, c)| c.is_eligible(store))
                .map(|(i, _)| i)
                .collect();

            for (job_index, &price) in store.deliveries.iter().enumerate() {
                let chosen = {
                    let candidates: Vec<&Courier> =
                        eligible.iter().map(|&i| &couriers[i]).collect();
                    match self.rule_engine.select_best(&candidates) {
                        Some(pos) => eligible[pos],
                        None => {
                            return Err(DispatchError::InvalidInput(vec![
                                ValidationError::unassignable(store),
                            ]))
                        }
                    }
                };

                let courier = &mut couriers[chosen];
                let earning = courier.earning_for(price, store);
                courier.commit_delivery(price, store);

                debug!(
                    store = %store.name,
                    job = job_index,
                    courier = %courier.name,
                    price,
                    earning,
                    "delivery committed"
                );

                let sequence = log.next_sequence();
                log.record(Delivery::new(
                    sequence,
                    &store.name,
                    job_index,
                    &courier.name,
                    price,
                    earning,
                ));
            }

            info!(
                store = %store.name,
                jobs = store.delivery_count(),
                eligible = eligible.len(),
                "store dispatched"
            );
        }

        info!(
            deliveries = log.delivery_count(),
            payout = log.total_payout(),
            "dispatch finished"
        );

        Ok(log)
    }

    /// Dispatches a batch in place.
    pub fn run_batch(&self, batch: &mut Batch) -> Result<DispatchLog> {
        self.run(&batch.stores, &mut batch.couriers)
    }
}

/// Dispatches every job with the standard ranking.
///
/// Inspect the couriers afterwards (e.g. via [`Courier::report`]) for the
/// outcome.
pub fn dispatch(stores: &[Store], couriers: &mut [Courier]) -> Result<()> {
    Dispatcher::new().run(stores, couriers).map(|_| ())
}
