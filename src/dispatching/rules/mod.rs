//! Built-in ranking rules.
//!
//! - **Load**: FEWEST_DELIVERIES
//! - **Exclusivity**: NARROWEST_ELIGIBILITY
//! - **Cost**: LOWEST_FEE
//!
//! # Score Convention
//! All rules return lower scores for couriers that should be picked first.

use super::{RankingRule, RuleScore};
use crate::models::Courier;

/// Fewest deliveries so far.
///
/// Spreads jobs evenly: a courier with fewer committed deliveries is
/// always preferred, whatever its other attributes.
#[derive(Debug, Clone, Copy)]
pub struct FewestDeliveries;

impl RankingRule for FewestDeliveries {
    fn name(&self) -> &'static str {
        "LOAD"
    }

    fn evaluate(&self, courier: &Courier) -> RuleScore {
        courier.delivery_count as f64
    }

    fn description(&self) -> &'static str {
        "Fewest Deliveries"
    }
}

/// Narrowest eligibility set.
///
/// Couriers tied to fewer stores (exclusive couriers first) are preferred
/// over generalists, which have more chances to pick up work elsewhere.
/// Scores the total eligibility set, which is fixed for the batch.
#[derive(Debug, Clone, Copy)]
pub struct NarrowestEligibility;

impl RankingRule for NarrowestEligibility {
    fn name(&self) -> &'static str {
        "EXCL"
    }

    fn evaluate(&self, courier: &Courier) -> RuleScore {
        courier.eligibility_size() as f64
    }

    fn description(&self) -> &'static str {
        "Narrowest Eligibility"
    }
}

/// Lowest fixed fee.
#[derive(Debug, Clone, Copy)]
pub struct LowestFee;

impl RankingRule for LowestFee {
    fn name(&self) -> &'static str {
        "FEE"
    }

    fn evaluate(&self, courier: &Courier) -> RuleScore {
        courier.fixed_fee
    }

    fn description(&self) -> &'static str {
        "Lowest Fixed Fee"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fewest_deliveries() {
        let mut busy = Courier::new("busy", 2.0, ["A"]);
        busy.delivery_count = 3;
        let idle = Courier::new("idle", 2.0, ["A"]);

        assert!(FewestDeliveries.evaluate(&idle) < FewestDeliveries.evaluate(&busy));
    }

    #[test]
    fn test_narrowest_eligibility() {
        let exclusive = Courier::new("excl", 2.0, ["A"]);
        let generalist = Courier::new("gen", 2.0, ["A", "B", "C"]);

        assert_eq!(NarrowestEligibility.evaluate(&exclusive), 1.0);
        assert_eq!(NarrowestEligibility.evaluate(&generalist), 3.0);
    }

    #[test]
    fn test_lowest_fee() {
        let cheap = Courier::new("cheap", 2.0, ["A"]);
        let pricey = Courier::new("pricey", 3.0, ["A"]);

        assert!(LowestFee.evaluate(&cheap) < LowestFee.evaluate(&pricey));
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(FewestDeliveries.name(), "LOAD");
        assert_eq!(NarrowestEligibility.name(), "EXCL");
        assert_eq!(LowestFee.name(), "FEE");
        assert_eq!(LowestFee.description(), "Lowest Fixed Fee");
    }
}
