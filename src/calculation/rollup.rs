//! Department salary rollup.
//!
//! This module aggregates count, average salary, and total payroll for a
//! department over a caller-supplied collection of employee records.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, DepartmentRollup, EmployeeRecord};

use super::rounding::round_currency;

/// The result of a department rollup, including the aggregate and audit step.
#[derive(Debug, Clone)]
pub struct RollupResult {
    /// The computed aggregate.
    pub rollup: DepartmentRollup,
    /// The audit step recording this aggregation.
    pub audit_step: AuditStep,
}

/// Aggregates salaries for records matching a department.
///
/// The department match is exact and case-sensitive: "it" does not match
/// "IT". When no records match, the rollup reports a count of zero with an
/// average salary of zero -- there is never a division by zero.
///
/// # Arguments
///
/// * `employees` - The caller-supplied collection to aggregate over
/// * `department` - The department label to filter by
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a [`RollupResult`], or `InvalidArgument` if a matched record
/// carries a negative salary.
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::department_rollup;
///
/// let result = department_rollup(&[], "IT", 1).unwrap();
/// assert_eq!(result.rollup.count, 0);
/// ```
pub fn department_rollup(
    employees: &[EmployeeRecord],
    department: &str,
    step_number: u32,
) -> EngineResult<RollupResult> {
    let mut count: u64 = 0;
    let mut total_payroll = Decimal::ZERO;

    for employee in employees.iter().filter(|e| e.department == department) {
        if employee.salary < Decimal::ZERO {
            return Err(EngineError::InvalidArgument {
                field: "salary".to_string(),
                message: format!(
                    "employee '{}' has a negative salary {}",
                    employee.id, employee.salary
                ),
            });
        }
        count += 1;
        total_payroll += employee.salary;
    }

    let average_salary = if count == 0 {
        Decimal::ZERO
    } else {
        round_currency(total_payroll / Decimal::from(count))
    };

    let rollup = DepartmentRollup {
        department: department.to_string(),
        count,
        average_salary,
        total_payroll,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "department_rollup".to_string(),
        rule_name: "Department Rollup".to_string(),
        policy_ref: "rollup".to_string(),
        input: serde_json::json!({
            "department": department,
            "universe_size": employees.len()
        }),
        output: serde_json::json!({
            "count": count,
            "average_salary": average_salary.normalize().to_string(),
            "total_payroll": total_payroll.normalize().to_string()
        }),
        reasoning: format!(
            "{} of {} records matched department '{}'",
            count,
            employees.len(),
            department
        ),
    };

    Ok(RollupResult { rollup, audit_step })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_employee(id: &str, department: &str, salary: &str) -> EmployeeRecord {
        EmployeeRecord {
            id: id.to_string(),
            department: department.to_string(),
            salary: dec(salary),
            performance_rating: 3,
            years_of_service: 2,
        }
    }

    /// DR-001: empty universe yields zeroes with no division by zero
    #[test]
    fn test_empty_universe_yields_zeroes() {
        let result = department_rollup(&[], "IT", 1).unwrap();

        assert_eq!(result.rollup.count, 0);
        assert_eq!(result.rollup.average_salary, Decimal::ZERO);
        assert_eq!(result.rollup.total_payroll, Decimal::ZERO);
    }

    /// DR-002: count, mean, and sum over matching records
    #[test]
    fn test_aggregates_matching_records() {
        let employees = vec![
            create_employee("emp_001", "IT", "70000.00"),
            create_employee("emp_002", "IT", "85000.00"),
            create_employee("emp_003", "Sales", "60000.00"),
        ];

        let result = department_rollup(&employees, "IT", 1).unwrap();

        assert_eq!(result.rollup.count, 2);
        assert_eq!(result.rollup.total_payroll, dec("155000.00"));
        assert_eq!(result.rollup.average_salary, dec("77500.00"));
    }

    /// DR-003: department match is case-sensitive
    #[test]
    fn test_match_is_case_sensitive() {
        let employees = vec![create_employee("emp_001", "IT", "70000.00")];

        let result = department_rollup(&employees, "it", 1).unwrap();

        assert_eq!(result.rollup.count, 0);
        assert_eq!(result.rollup.total_payroll, Decimal::ZERO);
    }

    /// DR-004: no department matches yields zeroes
    #[test]
    fn test_unmatched_department_yields_zeroes() {
        let employees = vec![create_employee("emp_001", "Sales", "60000.00")];

        let result = department_rollup(&employees, "IT", 1).unwrap();

        assert_eq!(result.rollup.count, 0);
        assert_eq!(result.rollup.average_salary, Decimal::ZERO);
    }

    /// DR-005: negative salary in a matched record fails fast
    #[test]
    fn test_negative_salary_is_invalid() {
        let employees = vec![create_employee("emp_001", "IT", "-5.00")];

        let result = department_rollup(&employees, "IT", 1);

        assert!(result.is_err());
        match result.unwrap_err() {
            EngineError::InvalidArgument { field, message } => {
                assert_eq!(field, "salary");
                assert!(message.contains("emp_001"));
            }
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_salary_outside_department_is_ignored() {
        let employees = vec![
            create_employee("emp_001", "IT", "70000.00"),
            create_employee("emp_002", "Sales", "-5.00"),
        ];

        let result = department_rollup(&employees, "IT", 1).unwrap();
        assert_eq!(result.rollup.count, 1);
    }

    #[test]
    fn test_average_rounds_to_currency_precision() {
        let employees = vec![
            create_employee("emp_001", "IT", "100.00"),
            create_employee("emp_002", "IT", "100.01"),
            create_employee("emp_003", "IT", "100.01"),
        ];

        // 300.02 / 3 = 100.00666... -> 100.01
        let result = department_rollup(&employees, "IT", 1).unwrap();
        assert_eq!(result.rollup.average_salary, dec("100.01"));
    }

    #[test]
    fn test_audit_step_records_universe_size() {
        let employees = vec![
            create_employee("emp_001", "IT", "70000.00"),
            create_employee("emp_002", "Sales", "60000.00"),
        ];

        let result = department_rollup(&employees, "IT", 3).unwrap();

        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.input["universe_size"], 2);
        assert!(result.audit_step.reasoning.contains("1 of 2"));
    }
}
