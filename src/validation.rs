//! Input validation for dispatch batches.
//!
//! Checks structural integrity of stores and couriers before any job is
//! assigned. Detects:
//! - Duplicate store or courier names
//! - Couriers referencing stores absent from the batch
//! - Stores with pending jobs but no eligible courier
//! - Out-of-range commission rates, prices and fees
//!
//! Every check runs; all issues are reported together.

use crate::models::{Courier, Store};
use std::collections::HashSet;
use thiserror::Error;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two stores or two couriers share the same name.
    DuplicateId,
    /// A courier lists a store that isn't part of the batch.
    InvalidStoreReference,
    /// A store has pending jobs but no courier may serve it.
    UnassignableStore,
    /// Commission rate outside (0, 1].
    InvalidCommissionRate,
    /// A job price that isn't finite and positive.
    InvalidPrice,
    /// A fixed fee that is negative or not finite.
    InvalidFee,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn unassignable(store: &Store) -> Self {
        Self::new(
            ValidationErrorKind::UnassignableStore,
            format!(
                "Store '{}' has {} pending deliveries but no eligible courier",
                store.name,
                store.delivery_count()
            ),
        )
    }
}

/// Validates a dispatch batch.
///
/// Checks:
/// 1. No duplicate store names
/// 2. No duplicate courier names
/// 3. Commission rates in (0, 1]
/// 4. Job prices finite and positive
/// 5. Fixed fees finite and non-negative
/// 6. Every store a courier lists exists in the batch
/// 7. Every store with pending jobs has at least one eligible courier
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(stores: &[Store], couriers: &[Courier]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut store_names = HashSet::new();
    for store in stores {
        if !store_names.insert(store.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate store name: {}", store.name),
            ));
        }

        let rate = store.commission_rate;
        if !(rate.is_finite() && rate > 0.0 && rate <= 1.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCommissionRate,
                format!(
                    "Store '{}' has commission rate {rate}, expected (0, 1]",
                    store.name
                ),
            ));
        }

        for (index, &price) in store.deliveries.iter().enumerate() {
            if !(price.is_finite() && price > 0.0) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidPrice,
                    format!(
                        "Store '{}' delivery #{index} has invalid price {price}",
                        store.name
                    ),
                ));
            }
        }
    }

    let mut courier_names = HashSet::new();
    for courier in couriers {
        if !courier_names.insert(courier.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate courier name: {}", courier.name),
            ));
        }

        if !(courier.fixed_fee.is_finite() && courier.fixed_fee >= 0.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidFee,
                format!(
                    "Courier '{}' has invalid fixed fee {}",
                    courier.name, courier.fixed_fee
                ),
            ));
        }

        for store_name in &courier.eligible_stores {
            if !store_names.contains(store_name.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidStoreReference,
                    format!(
                        "Courier '{}' references unknown store '{}'",
                        courier.name, store_name
                    ),
                ));
            }
        }
    }

    for store in stores.iter().filter(|s| s.has_deliveries()) {
        if !couriers.iter().any(|c| c.is_eligible(store)) {
            errors.push(ValidationError::unassignable(store));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
