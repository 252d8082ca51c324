//! Raise evaluation outcome model.
//!
//! This module defines the [`RaiseResult`] tagged outcome returned by
//! `evaluate_raise`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The outcome of a raise evaluation.
///
/// A missing employee is an expected, non-fatal outcome (`NotFound`), not
/// an error; callers routinely probe for existence. `NotFound` carries no
/// salary values -- the engine does not fabricate zeros for an employee
/// it never saw.
///
/// # Example
///
/// ```
/// use compensation_engine::models::RaiseResult;
/// use rust_decimal::Decimal;
///
/// let result = RaiseResult::Denied {
///     prior_salary: Decimal::new(8000000, 2),
///     new_salary: Decimal::new(8000000, 2),
///     applied_percentage: Decimal::ZERO,
/// };
/// assert!(!result.is_approved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RaiseResult {
    /// The employee met the eligibility threshold; the raise applies.
    Approved {
        /// The salary before the raise.
        prior_salary: Decimal,
        /// The salary after applying the percentage, rounded half-up to
        /// currency precision.
        new_salary: Decimal,
        /// The percentage that was applied.
        applied_percentage: Decimal,
    },
    /// The employee did not meet the eligibility threshold; pay is unchanged.
    Denied {
        /// The salary before the evaluation.
        prior_salary: Decimal,
        /// Always equal to `prior_salary` for a denial.
        new_salary: Decimal,
        /// Always zero for a denial; nothing was applied.
        applied_percentage: Decimal,
    },
    /// No employee record was supplied for the evaluation.
    NotFound,
}

impl RaiseResult {
    /// Returns true if the raise was approved.
    pub fn is_approved(&self) -> bool {
        matches!(self, RaiseResult::Approved { .. })
    }

    /// Returns the post-evaluation salary, if an employee was found.
    pub fn new_salary(&self) -> Option<Decimal> {
        match self {
            RaiseResult::Approved { new_salary, .. }
            | RaiseResult::Denied { new_salary, .. } => Some(*new_salary),
            RaiseResult::NotFound => None,
        }
    }
}
