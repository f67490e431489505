//! Core domain logic for staffbook.
//! This crate is the single source of truth for record-store invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod table;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::employee::{Employee, EmployeeId, EmployeeUpdate};
pub use service::employee_service::{EmployeeService, ServiceError, ServiceResult};
pub use store::{JsonTableStore, SqliteTableStore, StoreError, StoreResult, TableStore};
pub use table::{EmployeeTable, TableError, TableResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
