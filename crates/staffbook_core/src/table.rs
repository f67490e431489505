//! In-memory employee table.
//!
//! # Responsibility
//! - Own the ordered sequence of employee records between load and save.
//! - Enforce id uniqueness at insertion time.
//!
//! # Invariants
//! - `id` values are unique across all records at every observable point.
//! - Insertion order is preserved; delete keeps the relative order of the
//!   remaining records.
//! - A failed operation leaves the table observably unchanged.

use crate::model::employee::{Employee, EmployeeId, EmployeeUpdate};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type TableResult<T> = Result<T, TableError>;

/// Non-fatal table operation errors.
///
/// Both variants signal that the table was not modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// Create attempted with an id that is already present.
    DuplicateKey(EmployeeId),
    /// Update/delete/lookup referenced an unknown id.
    NotFound(EmployeeId),
}

impl Display for TableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateKey(id) => write!(f, "employee id {id} already exists"),
            Self::NotFound(id) => write!(f, "employee id {id} not found"),
        }
    }
}

impl Error for TableError {}

/// Ordered collection of all current employee records.
///
/// Operations are linear scans; the table is small by design and carries
/// no secondary indexes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeTable {
    rows: Vec<Employee>,
}

impl EmployeeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from already-ordered rows, e.g. a storage load.
    ///
    /// # Invariants
    /// - Duplicate ids in `rows` are rejected rather than silently kept.
    pub fn from_rows(rows: Vec<Employee>) -> TableResult<Self> {
        let mut table = Self::new();
        for employee in rows {
            table.create(employee)?;
        }
        Ok(table)
    }

    /// Appends a new record at the end of the table.
    ///
    /// Signals `DuplicateKey` and leaves the table unchanged when the id is
    /// already present.
    pub fn create(&mut self, employee: Employee) -> TableResult<()> {
        if self.contains(employee.id) {
            return Err(TableError::DuplicateKey(employee.id));
        }
        debug!(
            "event=table_create module=table status=ok id={} rows={}",
            employee.id,
            self.rows.len() + 1
        );
        self.rows.push(employee);
        Ok(())
    }

    /// Applies `patch` to the record with the given id, in place.
    ///
    /// Unsupplied fields keep their prior values; the id itself is never
    /// changed. Signals `NotFound` when the id is absent.
    pub fn update(&mut self, id: EmployeeId, patch: &EmployeeUpdate) -> TableResult<()> {
        let employee = self
            .rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(TableError::NotFound(id))?;
        patch.apply_to(employee);
        debug!("event=table_update module=table status=ok id={id}");
        Ok(())
    }

    /// Removes the record with the given id.
    ///
    /// Signals `NotFound` when the id is absent.
    pub fn delete(&mut self, id: EmployeeId) -> TableResult<()> {
        let index = self
            .rows
            .iter()
            .position(|row| row.id == id)
            .ok_or(TableError::NotFound(id))?;
        self.rows.remove(index);
        debug!(
            "event=table_delete module=table status=ok id={id} rows={}",
            self.rows.len()
        );
        Ok(())
    }

    /// Returns the single record with the given id.
    pub fn lookup(&self, id: EmployeeId) -> TableResult<&Employee> {
        self.rows
            .iter()
            .find(|row| row.id == id)
            .ok_or(TableError::NotFound(id))
    }

    pub fn contains(&self, id: EmployeeId) -> bool {
        self.rows.iter().any(|row| row.id == id)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
