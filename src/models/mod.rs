//! Core data models for the compensation decision engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod evaluation;
mod raise;

pub use employee::EmployeeRecord;
pub use evaluation::{AuditStep, AuditTrace, AuditWarning, DepartmentRollup};
pub use raise::RaiseResult;
