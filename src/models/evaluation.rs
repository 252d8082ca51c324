//! Audit trail and aggregate models for the compensation decision engine.
//!
//! This module contains the [`AuditStep`], [`AuditWarning`], and [`AuditTrace`]
//! types that document every decision the engine makes, plus the
//! [`DepartmentRollup`] aggregate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the policy section for this rule.
    pub policy_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during evaluation.
///
/// Warnings indicate outcomes that are legal under the policy but may
/// require attention, such as a raise percentage above 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for an evaluation.
///
/// Records every decision made during the evaluation for transparency.
///
/// # Example
///
/// ```
/// use compensation_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of evaluation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during evaluation.
    pub warnings: Vec<AuditWarning>,
    /// The total evaluation duration in microseconds.
    pub duration_us: u64,
}

/// Salary aggregates for a single department.
///
/// Produced by `department_rollup` over a caller-supplied collection.
/// When no records match, `count` is zero and both monetary fields are
/// zero -- the rollup never divides by zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentRollup {
    /// The department that was matched (exact, case-sensitive).
    pub department: String,
    /// The number of matching employee records.
    pub count: u64,
    /// The arithmetic mean salary of matching records, zero when empty.
    pub average_salary: Decimal,
    /// The sum of salaries of matching records.
    pub total_payroll: Decimal,
}
