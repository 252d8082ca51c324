//! Employee store collaborator contract.
//!
//! The engine never accesses a store directly; callers orchestrate
//! lookup, evaluation, and persistence. This module defines the store
//! contract and an in-memory reference implementation used by the HTTP
//! API and the tests. Callers needing atomic read-evaluate-write
//! semantics against a real data store must provide that transactional
//! boundary themselves.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::EmployeeRecord;

/// Lookup and update operations for employee records.
pub trait EmployeeStore {
    /// Looks up an employee by identifier.
    ///
    /// Returns `None` when no record exists; absence is an expected
    /// outcome, not an error.
    fn find(&self, id: &str) -> Option<EmployeeRecord>;

    /// Replaces the stored salary for an identifier.
    ///
    /// # Returns
    ///
    /// Returns `EmployeeNotFound` when no record exists for the identifier.
    fn update_salary(&mut self, id: &str, new_salary: Decimal) -> EngineResult<()>;

    /// Returns a snapshot of all stored records.
    fn all(&self) -> Vec<EmployeeRecord>;
}

/// A HashMap-backed employee store.
///
/// # Example
///
/// ```
/// use compensation_engine::models::EmployeeRecord;
/// use compensation_engine::store::{EmployeeStore, InMemoryEmployeeStore};
/// use rust_decimal::Decimal;
///
/// let mut store = InMemoryEmployeeStore::new();
/// store.insert(EmployeeRecord {
///     id: "emp_001".to_string(),
///     department: "IT".to_string(),
///     salary: Decimal::new(7500000, 2),
///     performance_rating: 4,
///     years_of_service: 6,
/// });
/// assert!(store.find("emp_001").is_some());
/// assert!(store.find("emp_404").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeStore {
    employees: HashMap<String, EmployeeRecord>,
}

impl InMemoryEmployeeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a record, keyed by its identifier.
    pub fn insert(&mut self, employee: EmployeeRecord) {
        self.employees.insert(employee.id.clone(), employee);
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl EmployeeStore for InMemoryEmployeeStore {
    fn find(&self, id: &str) -> Option<EmployeeRecord> {
        self.employees.get(id).cloned()
    }

    fn update_salary(&mut self, id: &str, new_salary: Decimal) -> EngineResult<()> {
        match self.employees.get_mut(id) {
            Some(employee) => {
                employee.salary = new_salary;
                Ok(())
            }
            None => Err(EngineError::EmployeeNotFound { id: id.to_string() }),
        }
    }

    fn all(&self) -> Vec<EmployeeRecord> {
        self.employees.values().cloned().collect()
    }
}
