//! Status classification from the ordered rating/tenure rule list.
//!
//! This module evaluates the policy's status rules top-down and returns
//! the label of the first rule that matches.

use crate::config::CompensationPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of a status classification, including the label and audit step.
#[derive(Debug, Clone)]
pub struct StatusClassification {
    /// The label of the first matching rule, or the fallback label.
    pub label: String,
    /// The audit step recording this classification.
    pub audit_step: AuditStep,
}

/// Classifies an employee's status from rating and tenure.
///
/// Rules are checked strictly in configured order; a rule matches when
/// `rating >= minimum_rating` and `years_of_service >= minimum_tenure`.
/// The fallback label guarantees exactly one label for every input, so
/// classification is a total function.
///
/// # Arguments
///
/// * `rating` - The performance rating (any integer accepted)
/// * `years_of_service` - Completed years of service (must not be negative)
/// * `policy` - The compensation policy containing the rule list
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a [`StatusClassification`], or `InvalidArgument` if the tenure
/// is negative.
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::classify_status;
/// use compensation_engine::config::CompensationPolicy;
///
/// let policy = CompensationPolicy::default();
/// let classification = classify_status(5, 5, &policy, 1).unwrap();
/// assert_eq!(classification.label, "Senior Star Performer");
/// ```
pub fn classify_status(
    rating: i32,
    years_of_service: i32,
    policy: &CompensationPolicy,
    step_number: u32,
) -> EngineResult<StatusClassification> {
    if years_of_service < 0 {
        return Err(EngineError::InvalidArgument {
            field: "years_of_service".to_string(),
            message: format!("must not be negative, got {}", years_of_service),
        });
    }

    let matched = policy
        .status
        .rules
        .iter()
        .find(|rule| rating >= rule.minimum_rating && years_of_service >= rule.minimum_tenure);

    let (label, reasoning) = match matched {
        Some(rule) => (
            rule.label.clone(),
            format!(
                "Rating {} >= {} and tenure {} >= {}; first match is '{}'",
                rating, rule.minimum_rating, years_of_service, rule.minimum_tenure, rule.label
            ),
        ),
        None => (
            policy.status.fallback_label.clone(),
            format!(
                "No rule matched rating {} with tenure {}; fallback label '{}'",
                rating, years_of_service, policy.status.fallback_label
            ),
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "status_classification".to_string(),
        rule_name: "Status Classification".to_string(),
        policy_ref: "status.rules".to_string(),
        input: serde_json::json!({
            "rating": rating,
            "years_of_service": years_of_service
        }),
        output: serde_json::json!({ "label": label }),
        reasoning,
    };

    Ok(StatusClassification { label, audit_step })
}
