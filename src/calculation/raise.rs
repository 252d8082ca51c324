//! Raise eligibility evaluation.
//!
//! This module decides whether a proposed percentage increase to an
//! employee's base salary is approved, and computes the resulting salary.

use rust_decimal::Decimal;

use crate::config::CompensationPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditWarning, EmployeeRecord, RaiseResult};

use super::rounding::round_currency;

/// The result of a raise evaluation, including the outcome and audit step.
#[derive(Debug, Clone)]
pub struct RaiseEvaluation {
    /// The tagged outcome of the evaluation.
    pub result: RaiseResult,
    /// The audit step recording this evaluation.
    pub audit_step: AuditStep,
    /// A warning attached when the requested percentage exceeds 100.
    pub warning: Option<AuditWarning>,
}

/// Evaluates a proposed raise for an employee.
///
/// The evaluation is a pure function of its inputs: it never mutates the
/// record or any store, and the caller is responsible for persisting the
/// returned salary. A missing employee (`None`) yields a `NotFound` result
/// value, not an error.
///
/// # Arguments
///
/// * `employee` - The employee record, or `None` when the lookup failed
/// * `requested_percentage` - The proposed increase (e.g., 10 for 10%)
/// * `policy` - The compensation policy containing the eligibility threshold
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a [`RaiseEvaluation`], or `InvalidArgument` if:
/// - The requested percentage is negative
/// - The employee record carries a negative salary
///
/// A requested percentage of zero is legal and, if approved, yields a
/// no-op raise still reported as `Approved`. Percentages above 100 are
/// accepted but attach a warning to the evaluation.
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::evaluate_raise;
/// use compensation_engine::config::CompensationPolicy;
/// use compensation_engine::models::{EmployeeRecord, RaiseResult};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let policy = CompensationPolicy::default();
/// let employee = EmployeeRecord {
///     id: "emp_001".to_string(),
///     department: "IT".to_string(),
///     salary: Decimal::from_str("75000.00").unwrap(),
///     performance_rating: 4,
///     years_of_service: 6,
/// };
///
/// let evaluation =
///     evaluate_raise(Some(&employee), Decimal::from_str("10").unwrap(), &policy, 1).unwrap();
/// assert_eq!(
///     evaluation.result.new_salary(),
///     Some(Decimal::from_str("82500.00").unwrap())
/// );
/// ```
pub fn evaluate_raise(
    employee: Option<&EmployeeRecord>,
    requested_percentage: Decimal,
    policy: &CompensationPolicy,
    step_number: u32,
) -> EngineResult<RaiseEvaluation> {
    if requested_percentage < Decimal::ZERO {
        return Err(EngineError::InvalidArgument {
            field: "requested_percentage".to_string(),
            message: format!("must not be negative, got {}", requested_percentage),
        });
    }

    // Legal but warning-worthy; a policy choice, not a hard limit.
    let warning = (requested_percentage > Decimal::ONE_HUNDRED).then(|| AuditWarning {
        code: "EXCESSIVE_PERCENTAGE".to_string(),
        message: format!(
            "Requested percentage {} exceeds 100",
            requested_percentage.normalize()
        ),
        severity: "medium".to_string(),
    });

    let Some(employee) = employee else {
        let audit_step = AuditStep {
            step_number,
            rule_id: "raise_eligibility".to_string(),
            rule_name: "Raise Eligibility".to_string(),
            policy_ref: "raise.minimum_rating".to_string(),
            input: serde_json::json!({
                "employee": null,
                "requested_percentage": requested_percentage.normalize().to_string()
            }),
            output: serde_json::json!({ "status": "not_found" }),
            reasoning: "No employee record supplied; reporting not_found".to_string(),
        };

        return Ok(RaiseEvaluation {
            result: RaiseResult::NotFound,
            audit_step,
            warning,
        });
    };

    if employee.salary < Decimal::ZERO {
        return Err(EngineError::InvalidArgument {
            field: "salary".to_string(),
            message: format!("must not be negative, got {}", employee.salary),
        });
    }

    let minimum_rating = policy.raise.minimum_rating;
    let eligible = employee.performance_rating >= minimum_rating;

    let result = if eligible {
        let multiplier = Decimal::ONE + requested_percentage / Decimal::ONE_HUNDRED;
        RaiseResult::Approved {
            prior_salary: employee.salary,
            new_salary: round_currency(employee.salary * multiplier),
            applied_percentage: requested_percentage,
        }
    } else {
        RaiseResult::Denied {
            prior_salary: employee.salary,
            new_salary: employee.salary,
            applied_percentage: Decimal::ZERO,
        }
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "raise_eligibility".to_string(),
        rule_name: "Raise Eligibility".to_string(),
        policy_ref: "raise.minimum_rating".to_string(),
        input: serde_json::json!({
            "employee_id": employee.id,
            "performance_rating": employee.performance_rating,
            "prior_salary": employee.salary.normalize().to_string(),
            "requested_percentage": requested_percentage.normalize().to_string()
        }),
        output: serde_json::json!({
            "eligible": eligible,
            "new_salary": result
                .new_salary()
                .unwrap_or(employee.salary)
                .normalize()
                .to_string()
        }),
        reasoning: if eligible {
            format!(
                "Rating {} meets the minimum rating {}; applied {}% to ${}",
                employee.performance_rating,
                minimum_rating,
                requested_percentage.normalize(),
                employee.salary.normalize()
            )
        } else {
            format!(
                "Rating {} is below the minimum rating {}; salary unchanged",
                employee.performance_rating, minimum_rating
            )
        },
    };

    Ok(RaiseEvaluation {
        result,
        audit_step,
        warning,
    })
}
