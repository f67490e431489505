//! SQLite-backed table store.
//!
//! # Responsibility
//! - Mirror the in-memory table into the `employees` table wholesale.
//! - Keep SQL details inside the storage boundary.
//!
//! # Invariants
//! - `save` replaces all rows inside one transaction; a reader never
//!   observes a half-written table.
//! - `load` returns rows in the order they were saved (`seq` order), not
//!   id order.

use crate::db::{open_db, open_db_in_memory};
use crate::model::employee::Employee;
use crate::store::{StoreError, StoreResult, TableStore};
use crate::table::EmployeeTable;
use log::info;
use rusqlite::{params, Connection};
use std::path::Path;

/// Default backend: the table lives in a single SQLite file.
pub struct SqliteTableStore {
    conn: Connection,
}

impl SqliteTableStore {
    /// Opens (or creates) the database file and applies the schema.
    ///
    /// A fresh file loads as an empty table, matching the
    /// missing-storage-is-not-an-error contract.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    /// In-memory database, used by tests and throwaway sessions.
    pub fn in_memory() -> StoreResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }
}

impl TableStore for SqliteTableStore {
    fn load(&self) -> StoreResult<EmployeeTable> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, position, salary FROM employees ORDER BY seq;")?;
        let mut rows = stmt.query([])?;

        let mut employees = Vec::new();
        while let Some(row) = rows.next()? {
            employees.push(Employee {
                id: row.get(0)?,
                name: row.get(1)?,
                position: row.get(2)?,
                salary: row.get(3)?,
            });
        }

        let table = EmployeeTable::from_rows(employees)
            .map_err(|err| StoreError::InvalidData(err.to_string()))?;
        info!(
            "event=store_load module=store status=ok backend=sqlite rows={}",
            table.len()
        );
        Ok(table)
    }

    fn save(&mut self, table: &EmployeeTable) -> StoreResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM employees;", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO employees (id, name, position, salary) VALUES (?1, ?2, ?3, ?4);",
            )?;
            for employee in table.iter() {
                stmt.execute(params![
                    employee.id,
                    employee.name.as_str(),
                    employee.position.as_str(),
                    employee.salary,
                ])?;
            }
        }
        tx.commit()?;

        info!(
            "event=store_save module=store status=ok backend=sqlite rows={}",
            table.len()
        );
        Ok(())
    }
}
