//! Tiered bonus calculation.
//!
//! This module computes an annual bonus amount from the policy's tiered
//! percentage table keyed by performance rating.

use rust_decimal::Decimal;

use crate::config::CompensationPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

use super::rounding::round_currency;

/// The result of a bonus calculation, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct BonusCalculation {
    /// The bonus amount, rounded half-up to currency precision.
    pub amount: Decimal,
    /// The schedule percentage that was applied.
    pub percentage: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the annual bonus for a salary and performance rating.
///
/// A pure function of its inputs: identical inputs always yield identical
/// output. Ratings without a configured tier resolve to a percentage of
/// zero -- an unknown rating means "no bonus", never an error.
///
/// # Arguments
///
/// * `salary` - The base annual salary (must not be negative)
/// * `rating` - The performance rating (any integer accepted)
/// * `policy` - The compensation policy containing the bonus schedule
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a [`BonusCalculation`], or `InvalidArgument` if the salary is
/// negative.
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::calculate_bonus;
/// use compensation_engine::config::CompensationPolicy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let policy = CompensationPolicy::default();
/// let calculation =
///     calculate_bonus(Decimal::from_str("80000").unwrap(), 5, &policy, 1).unwrap();
/// assert_eq!(calculation.amount, Decimal::from_str("12000.00").unwrap());
/// ```
pub fn calculate_bonus(
    salary: Decimal,
    rating: i32,
    policy: &CompensationPolicy,
    step_number: u32,
) -> EngineResult<BonusCalculation> {
    if salary < Decimal::ZERO {
        return Err(EngineError::InvalidArgument {
            field: "salary".to_string(),
            message: format!("must not be negative, got {}", salary),
        });
    }

    let percentage = policy.bonus.percentage_for(rating);
    let amount = round_currency(salary * percentage);

    let audit_step = AuditStep {
        step_number,
        rule_id: "bonus_schedule".to_string(),
        rule_name: "Bonus Schedule".to_string(),
        policy_ref: "bonus.tiers".to_string(),
        input: serde_json::json!({
            "salary": salary.normalize().to_string(),
            "rating": rating
        }),
        output: serde_json::json!({
            "percentage": percentage.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: if percentage > Decimal::ZERO {
            format!(
                "${} x {} = ${}",
                salary.normalize(),
                percentage.normalize(),
                amount.normalize()
            )
        } else {
            format!("Rating {} has no bonus tier; amount is zero", rating)
        },
    };

    Ok(BonusCalculation {
        amount,
        percentage,
        audit_step,
    })
}
