//! Employee record model.
//!
//! This module defines the [`EmployeeRecord`] struct describing the
//! attributes the engine evaluates compensation decisions over.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee subject to compensation decisions.
///
/// Records are supplied per call by the caller (typically loaded from an
/// employee store); the engine never creates, caches, or mutates them.
/// Years of service are precomputed by the caller from the hire date --
/// the engine does not compute dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique identifier for the employee.
    pub id: String,
    /// The department the employee belongs to.
    pub department: String,
    /// The employee's base annual salary.
    pub salary: Decimal,
    /// The performance rating (known tiers are 1 through 5).
    pub performance_rating: i32,
    /// Completed years of service, precomputed by the caller.
    pub years_of_service: i32,
}

impl EmployeeRecord {
    /// Returns true if the rating falls inside the known 1..=5 domain.
    ///
    /// Ratings outside the domain are still accepted by every operation;
    /// they resolve to the zero bonus tier and the fallback status label.
    ///
    /// # Examples
    ///
    /// ```
    /// use compensation_engine::models::EmployeeRecord;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = EmployeeRecord {
    ///     id: "emp_001".to_string(),
    ///     department: "IT".to_string(),
    ///     salary: Decimal::new(7500000, 2),
    ///     performance_rating: 4,
    ///     years_of_service: 6,
    /// };
    /// assert!(employee.has_known_rating());
    /// ```
    pub fn has_known_rating(&self) -> bool {
        (1..=5).contains(&self.performance_rating)
    }
}
