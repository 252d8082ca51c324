//! Request types for the compensation decision engine API.
//!
//! This module defines the JSON request structures for the API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::EmployeeRecord;

/// Request body for the `POST /raise` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaiseRequest {
    /// The identifier of the employee to evaluate.
    pub employee_id: String,
    /// The proposed percentage increase (e.g., 10 for 10%).
    pub requested_percentage: Decimal,
}

/// Request body for the `POST /bonus` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusRequest {
    /// The base annual salary.
    pub salary: Decimal,
    /// The performance rating.
    pub rating: i32,
}

/// Request body for the `POST /status` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusRequest {
    /// The performance rating.
    pub rating: i32,
    /// Completed years of service.
    pub years_of_service: i32,
}

/// Request body for the `POST /rollup` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollupRequest {
    /// The department label to aggregate (exact, case-sensitive match).
    pub department: String,
}

/// Request body for the `POST /employees` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeUpsertRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The department the employee belongs to.
    pub department: String,
    /// The employee's base annual salary.
    pub salary: Decimal,
    /// The performance rating.
    pub performance_rating: i32,
    /// Completed years of service.
    pub years_of_service: i32,
}

impl From<EmployeeUpsertRequest> for EmployeeRecord {
    fn from(req: EmployeeUpsertRequest) -> Self {
        EmployeeRecord {
            id: req.id,
            department: req.department,
            salary: req.salary,
            performance_rating: req.performance_rating,
            years_of_service: req.years_of_service,
        }
    }
}
