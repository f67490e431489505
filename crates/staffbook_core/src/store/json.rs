//! JSON snapshot table store.
//!
//! # Responsibility
//! - Persist the table as one human-readable snapshot file.
//! - Demonstrate the storage seam: swapping backends never touches table
//!   or service code.
//!
//! # Invariants
//! - The snapshot carries the fixed column header; a snapshot with a
//!   different column set is rejected on load.
//! - `save` writes a sibling temp file and renames it over the target, so
//!   a crash mid-write leaves the previous snapshot intact.

use crate::model::employee::Employee;
use crate::store::{StoreError, StoreResult, TableStore, COLUMNS};
use crate::table::EmployeeTable;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
struct TableSnapshot {
    columns: Vec<String>,
    employees: Vec<Employee>,
}

/// File-per-table backend storing a serde_json snapshot.
pub struct JsonTableStore {
    path: PathBuf,
}

impl JsonTableStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl TableStore for JsonTableStore {
    fn load(&self) -> StoreResult<EmployeeTable> {
        if !self.path.exists() {
            info!("event=store_load module=store status=ok backend=json rows=0 reason=missing_file");
            return Ok(EmployeeTable::new());
        }

        let raw = fs::read_to_string(&self.path).map_err(|err| self.io_error(err))?;
        let snapshot: TableSnapshot = serde_json::from_str(&raw)?;

        if snapshot.columns != COLUMNS {
            return Err(StoreError::InvalidData(format!(
                "unexpected column set {:?}, expected {:?}",
                snapshot.columns, COLUMNS
            )));
        }

        let table = EmployeeTable::from_rows(snapshot.employees)
            .map_err(|err| StoreError::InvalidData(err.to_string()))?;
        info!(
            "event=store_load module=store status=ok backend=json rows={}",
            table.len()
        );
        Ok(table)
    }

    fn save(&mut self, table: &EmployeeTable) -> StoreResult<()> {
        let snapshot = TableSnapshot {
            columns: COLUMNS.iter().map(|column| column.to_string()).collect(),
            employees: table.iter().cloned().collect(),
        };
        let serialized = serde_json::to_string_pretty(&snapshot)?;

        let tmp_path = tmp_sibling(&self.path);
        fs::write(&tmp_path, serialized).map_err(|err| self.io_error(err))?;
        fs::rename(&tmp_path, &self.path).map_err(|err| self.io_error(err))?;

        info!(
            "event=store_save module=store status=ok backend=json rows={}",
            table.len()
        );
        Ok(())
    }
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(|| "snapshot".into(), |name| name.to_os_string());
    name.push(".tmp");
    path.with_file_name(name)
}
