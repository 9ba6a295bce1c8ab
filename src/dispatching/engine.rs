//! Rule engine for multi-criteria courier ranking.
//!
//! Applies ranking rules in sequence: a later rule is only consulted when
//! every earlier rule scores two couriers the same.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, RankingRule, RuleScore};
use crate::models::Courier;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep input order (stable sort).
    #[default]
    Stable,
    /// Lexicographic by courier name.
    ByName,
}

/// A composable rule engine for courier prioritization.
///
/// # Example
/// ```
/// use u_courier::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::FewestDeliveries)
///     .with_rule(rules::LowestFee);
/// assert_eq!(engine.rule_names(), vec!["LOAD", "FEE"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn RankingRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::Stable,
        }
    }

    /// The standard dispatch ordering: load, then exclusivity, then fee.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(rules::FewestDeliveries)
            .with_rule(rules::NarrowestEligibility)
            .with_rule(rules::LowestFee)
    }

    /// Appends a rule. Rules are consulted in insertion order.
    pub fn with_rule<R: RankingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts couriers by priority (highest priority first).
    ///
    /// Returns indices into the given slice.
    pub fn sort_indices(&self, couriers: &[&Courier]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..couriers.len()).collect();
        // `sort_by` is stable, so tied couriers keep their input order.
        indices.sort_by(|&a, &b| self.compare(couriers[a], couriers[b]));
        indices
    }

    /// Returns the couriers reordered by priority. The input is untouched.
    pub fn rank<'a>(&self, couriers: &[&'a Courier]) -> Vec<&'a Courier> {
        self.sort_indices(couriers)
            .into_iter()
            .map(|i| couriers[i])
            .collect()
    }

    /// Returns the index of the highest-priority courier.
    pub fn select_best(&self, couriers: &[&Courier]) -> Option<usize> {
        self.sort_indices(couriers).first().copied()
    }

    /// Scores a single courier with every rule.
    pub fn evaluate(&self, courier: &Courier) -> Vec<RuleScore> {
        self.rules.iter().map(|r| r.evaluate(courier)).collect()
    }

    fn compare(&self, a: &Courier, b: &Courier) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a);
            let score_b = rule.evaluate(b);

            // Later rules only see exactly equal scores.
            match score_a.partial_cmp(&score_b) {
                Some(Ordering::Equal) | None => continue,
                Some(order) => return order,
            }
        }

        match self.tie_breaker {
            TieBreaker::Stable => Ordering::Equal,
            TieBreaker::ByName => a.name.cmp(&b.name),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_courier(name: &str, fee: f64, stores: &[&str], deliveries: usize) -> Courier {
        let mut c = Courier::new(name, fee, stores.iter().copied());
        c.delivery_count = deliveries;
        c
    }

    fn names(ranked: &[&Courier]) -> Vec<String> {
        ranked.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_load_first() {
        let a = make_courier("A", 1.0, &["S"], 2);
        let b = make_courier("B", 9.0, &["S", "T", "U"], 0);
        let engine = RuleEngine::standard();

        assert_eq!(names(&engine.rank(&[&a, &b])), vec!["B", "A"]);
    }

    #[test]
    fn test_exclusivity_breaks_load_tie() {
        let generalist = make_courier("gen", 2.0, &["S", "T", "U"], 1);
        let exclusive = make_courier("excl", 2.0, &["S"], 1);
        let engine = RuleEngine::standard();

        assert_eq!(engine.select_best(&[&generalist, &exclusive]), Some(1));
    }

    #[test]
    fn test_fee_breaks_remaining_tie() {
        let pricey = make_courier("pricey", 3.0, &["S", "T"], 0);
        let cheap = make_courier("cheap", 2.0, &["S", "T"], 0);
        let engine = RuleEngine::standard();

        assert_eq!(names(&engine.rank(&[&pricey, &cheap])), vec!["cheap", "pricey"]);
    }

    #[test]
    fn test_near_equal_fees_strictly_ordered() {
        let c = make_courier("c", 1.2e-9, &["S"], 0);
        let b = make_courier("b", 0.6e-9, &["S"], 0);
        let a = make_courier("a", 0.0, &["S"], 0);
        let engine = RuleEngine::standard();

        assert_eq!(names(&engine.rank(&[&c, &b, &a])), vec!["a", "b", "c"]);
        assert_eq!(names(&engine.rank(&[&a, &c, &b])), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_stable_on_full_tie() {
        let c1 = make_courier("c1", 2.0, &["S"], 0);
        let c2 = make_courier("c2", 2.0, &["S"], 0);
        let c3 = make_courier("c3", 2.0, &["S"], 0);
        let engine = RuleEngine::standard();

        assert_eq!(names(&engine.rank(&[&c2, &c3, &c1])), vec!["c2", "c3", "c1"]);
    }

    #[test]
    fn test_by_name_tie_breaker() {
        let b = make_courier("B", 2.0, &["S"], 0);
        let a = make_courier("A", 2.0, &["S"], 0);
        let engine = RuleEngine::standard().with_tie_breaker(TieBreaker::ByName);

        assert_eq!(names(&engine.rank(&[&b, &a])), vec!["A", "B"]);
    }

    #[test]
    fn test_custom_rule_order() {
        // Fee before load: the cheap but busy courier wins.
        let busy_cheap = make_courier("busy_cheap", 1.0, &["S"], 5);
        let idle_pricey = make_courier("idle_pricey", 4.0, &["S"], 0);
        let engine = RuleEngine::new()
            .with_rule(rules::LowestFee)
            .with_rule(rules::FewestDeliveries);

        assert_eq!(engine.select_best(&[&idle_pricey, &busy_cheap]), Some(1));
    }

    #[test]
    fn test_empty_candidates() {
        let engine = RuleEngine::standard();
        assert!(engine.sort_indices(&[]).is_empty());
        assert!(engine.select_best(&[]).is_none());
        assert!(engine.rank(&[]).is_empty());
    }

    #[test]
    fn test_evaluate_scores() {
        let c = make_courier("M", 3.0, &["S", "T"], 4);
        let scores = RuleEngine::standard().evaluate(&c);

        assert_eq!(scores, vec![4.0, 2.0, 3.0]);
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(RuleEngine::default().rule_names(), vec!["LOAD", "EXCL", "FEE"]);
    }
}
