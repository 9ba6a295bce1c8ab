//! Ranking rules and rule engine for courier selection.
//!
//! Provides the criteria used to order eligible couriers for the next job
//! and a composable engine that applies them in sequence.
//!
//! # Usage
//!
//! ```
//! use u_courier::dispatching::{rank_couriers, RuleEngine};
//! use u_courier::dispatching::rules;
//! use u_courier::models::Courier;
//!
//! let generalist = Courier::new("M1", 2.0, ["A", "B"]);
//! let exclusive = Courier::new("M2", 2.0, ["A"]);
//!
//! let ranked = rank_couriers(&[&generalist, &exclusive]);
//! assert_eq!(ranked[0].name, "M2");
//!
//! // Equivalent explicit engine
//! let engine = RuleEngine::new()
//!     .with_rule(rules::FewestDeliveries)
//!     .with_rule(rules::NarrowestEligibility)
//!     .with_rule(rules::LowestFee);
//! assert_eq!(engine.select_best(&[&generalist, &exclusive]), Some(1));
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod engine;
pub mod rules;

pub use engine::{RuleEngine, TieBreaker};

use crate::models::Courier;
use std::fmt::Debug;

/// Score returned by a ranking rule.
///
/// Lower scores = higher priority (picked first).
pub type RuleScore = f64;

/// A criterion that scores couriers for the next job.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for couriers that should receive the job first.
pub trait RankingRule: Send + Sync + Debug {
    /// Rule name (e.g., "LOAD", "FEE").
    fn name(&self) -> &'static str;

    /// Scores a courier given its current running state.
    fn evaluate(&self, courier: &Courier) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Orders candidate couriers for the next job.
///
/// Sorts ascending by delivery count, then eligibility-set size, then fixed
/// fee. The sort is stable: fully tied couriers keep their input order.
/// All candidates are assumed eligible for the job being placed.
pub fn rank_couriers<'a>(candidates: &[&'a Courier]) -> Vec<&'a Courier> {
    RuleEngine::standard().rank(candidates)
}
