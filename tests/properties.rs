//! Property-based tests for the calculation layer.
//!
//! These exercise the pure evaluation functions over generated inputs,
//! checking the invariants the unit tests only spot-check.

use proptest::prelude::*;
use rust_decimal::Decimal;

use compensation_engine::calculation::{
    calculate_bonus, classify_status, evaluate_raise, round_currency,
};
use compensation_engine::config::CompensationPolicy;
use compensation_engine::models::{EmployeeRecord, RaiseResult};

/// Salaries as whole cents, up to $10M.
fn salary_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=1_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Raise percentages as basis points, 0.00% to 200.00%.
fn percentage_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=20_000).prop_map(|bp| Decimal::new(bp, 2))
}

fn employee(salary: Decimal, rating: i32) -> EmployeeRecord {
    EmployeeRecord {
        id: "emp_prop".to_string(),
        department: "QA".to_string(),
        salary,
        performance_rating: rating,
        years_of_service: 3,
    }
}

proptest! {
    /// A bonus never exceeds the highest configured tier percentage.
    #[test]
    fn bonus_is_bounded_by_top_tier(salary in salary_strategy(), rating in -10i32..=10) {
        let policy = CompensationPolicy::default();
        let calculation = calculate_bonus(salary, rating, &policy, 1).unwrap();

        let ceiling = round_currency(salary * Decimal::new(15, 2));
        prop_assert!(calculation.amount >= Decimal::ZERO);
        prop_assert!(calculation.amount <= ceiling);
    }

    /// Bonus amounts are already at currency precision.
    #[test]
    fn bonus_amount_is_currency_scaled(salary in salary_strategy(), rating in 1i32..=5) {
        let policy = CompensationPolicy::default();
        let calculation = calculate_bonus(salary, rating, &policy, 1).unwrap();

        prop_assert_eq!(round_currency(calculation.amount), calculation.amount);
    }

    /// Ratings with no tier always resolve to a zero bonus, never an error.
    #[test]
    fn unknown_ratings_pay_nothing(salary in salary_strategy(), rating in prop::num::i32::ANY) {
        prop_assume!(!(1..=5).contains(&rating));
        let policy = CompensationPolicy::default();
        let calculation = calculate_bonus(salary, rating, &policy, 1).unwrap();

        prop_assert_eq!(calculation.amount, Decimal::ZERO);
        prop_assert_eq!(calculation.percentage, Decimal::ZERO);
    }

    /// A non-negative percentage never lowers an approved salary.
    #[test]
    fn approved_raise_never_lowers_salary(
        salary in salary_strategy(),
        percentage in percentage_strategy(),
    ) {
        let policy = CompensationPolicy::default();
        let record = employee(salary, 5);
        let evaluation = evaluate_raise(Some(&record), percentage, &policy, 1).unwrap();

        match evaluation.result {
            RaiseResult::Approved { prior_salary, new_salary, .. } => {
                prop_assert!(new_salary >= prior_salary);
            }
            other => prop_assert!(false, "rating 5 should be approved, got {:?}", other),
        }
    }

    /// A denied raise leaves the salary untouched, whatever was requested.
    #[test]
    fn denied_raise_preserves_salary(
        salary in salary_strategy(),
        percentage in percentage_strategy(),
        rating in -10i32..=3,
    ) {
        let policy = CompensationPolicy::default();
        let record = employee(salary, rating);
        let evaluation = evaluate_raise(Some(&record), percentage, &policy, 1).unwrap();

        match evaluation.result {
            RaiseResult::Denied { prior_salary, new_salary, applied_percentage } => {
                prop_assert_eq!(new_salary, prior_salary);
                prop_assert_eq!(applied_percentage, Decimal::ZERO);
            }
            other => prop_assert!(false, "rating {} should be denied, got {:?}", rating, other),
        }
    }

    /// Eligibility is decided by the rating threshold alone.
    #[test]
    fn eligibility_matches_threshold(
        salary in salary_strategy(),
        rating in -10i32..=10,
    ) {
        let policy = CompensationPolicy::default();
        let record = employee(salary, rating);
        let evaluation = evaluate_raise(Some(&record), Decimal::TEN, &policy, 1).unwrap();

        prop_assert_eq!(
            evaluation.result.is_approved(),
            rating >= policy.raise.minimum_rating
        );
    }

    /// Classification is total: every rating/tenure pair maps to a label.
    #[test]
    fn classification_is_total(rating in -100i32..=100, years in 0i32..=60) {
        let policy = CompensationPolicy::default();
        let classification = classify_status(rating, years, &policy, 1).unwrap();

        let mut known: Vec<&str> = policy.status.rules.iter().map(|r| r.label.as_str()).collect();
        known.push(policy.status.fallback_label.as_str());
        prop_assert!(known.contains(&classification.label.as_str()));
    }

    /// Currency rounding is idempotent.
    #[test]
    fn rounding_is_idempotent(units in 0i64..=1_000_000_000, scale in 0u32..=8) {
        let amount = Decimal::new(units, scale);
        prop_assert_eq!(round_currency(round_currency(amount)), round_currency(amount));
    }
}
