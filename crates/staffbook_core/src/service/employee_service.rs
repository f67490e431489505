//! Employee record use-case service.
//!
//! # Responsibility
//! - Load the table wholesale at startup and own it for the session.
//! - Persist the table wholesale after every successful mutation.
//!
//! # Invariants
//! - No batching, no deferred writes: one mutation, one save.
//! - A rejected mutation (`DuplicateKey`, `NotFound`) never triggers a
//!   save; the durable mirror stays byte-for-byte what it was.

use crate::model::employee::{Employee, EmployeeId, EmployeeUpdate};
use crate::store::{StoreError, TableStore};
use crate::table::{EmployeeTable, TableError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by store-backed employee operations.
#[derive(Debug)]
pub enum ServiceError {
    Table(TableError),
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Table(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<TableError> for ServiceError {
    fn from(value: TableError) -> Self {
        Self::Table(value)
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Session-scoped owner of the employee table and its durable mirror.
pub struct EmployeeService<S: TableStore> {
    store: S,
    table: EmployeeTable,
}

impl<S: TableStore> EmployeeService<S> {
    /// Loads the table from the store and takes ownership of both.
    pub fn load(store: S) -> ServiceResult<Self> {
        let table = store.load()?;
        info!(
            "event=service_load module=service status=ok rows={}",
            table.len()
        );
        Ok(Self { store, table })
    }

    /// Appends a new record and persists the table.
    ///
    /// `DuplicateKey` is reported without touching memory or disk.
    pub fn add_employee(&mut self, employee: Employee) -> ServiceResult<()> {
        let id = employee.id;
        self.table.create(employee)?;
        self.persist("add", id)
    }

    /// Applies a partial update to an existing record and persists.
    ///
    /// An all-`None` patch still verifies the id exists; it saves the
    /// unchanged table, which is observably idempotent.
    pub fn update_employee(
        &mut self,
        id: EmployeeId,
        patch: &EmployeeUpdate,
    ) -> ServiceResult<()> {
        self.table.update(id, patch)?;
        self.persist("update", id)
    }

    /// Removes a record and persists the table.
    pub fn delete_employee(&mut self, id: EmployeeId) -> ServiceResult<()> {
        self.table.delete(id)?;
        self.persist("delete", id)
    }

    /// Returns the single record with the given id. Read-only.
    pub fn employee_details(&self, id: EmployeeId) -> ServiceResult<&Employee> {
        Ok(self.table.lookup(id)?)
    }

    /// All records in insertion order. Read-only.
    pub fn list_employees(&self) -> impl Iterator<Item = &Employee> {
        self.table.iter()
    }

    /// Direct view of the owned table, mainly for assertions in tests.
    pub fn table(&self) -> &EmployeeTable {
        &self.table
    }

    fn persist(&mut self, op: &str, id: EmployeeId) -> ServiceResult<()> {
        match self.store.save(&self.table) {
            Ok(()) => {
                info!("event=service_{op} module=service status=ok id={id}");
                Ok(())
            }
            Err(err) => {
                // Memory already holds the new state; only the mirror is stale.
                warn!("event=service_{op} module=service status=error id={id} error={err}");
                Err(err.into())
            }
        }
    }
}
