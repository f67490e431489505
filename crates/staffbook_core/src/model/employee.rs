//! Employee domain model.
//!
//! # Responsibility
//! - Define the canonical employee record and its partial-update shape.
//!
//! # Invariants
//! - `id` identifies exactly one record within a table and is never reused
//!   by an update.
//! - An `EmployeeUpdate` with all fields `None` changes nothing.

use serde::{Deserialize, Serialize};

/// Primary key for employee records.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EmployeeId = i64;

/// One employee row: the (id, name, position, salary) tuple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique within a table; assigned by the caller, never generated.
    pub id: EmployeeId,
    pub name: String,
    pub position: String,
    /// Monthly or annual figure; the store does not interpret the unit.
    pub salary: f64,
}

impl Employee {
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        position: impl Into<String>,
        salary: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position: position.into(),
            salary,
        }
    }
}

/// Partial update for a single employee record.
///
/// Each field is an explicit marker: `None` leaves the stored value
/// unchanged, `Some(value)` replaces it. `Some(String::new())` therefore
/// really sets an empty string, which the blank-means-skip convention of a
/// line-based prompt cannot express.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
}

impl EmployeeUpdate {
    /// Returns whether this patch would leave any record unchanged.
    pub fn is_noop(&self) -> bool {
        self.name.is_none() && self.position.is_none() && self.salary.is_none()
    }

    /// Applies the supplied fields to `employee` in place.
    ///
    /// # Invariants
    /// - `employee.id` is never touched.
    pub fn apply_to(&self, employee: &mut Employee) {
        if let Some(name) = &self.name {
            employee.name = name.clone();
        }
        if let Some(position) = &self.position {
            employee.position = position.clone();
        }
        if let Some(salary) = self.salary {
            employee.salary = salary;
        }
    }
}
