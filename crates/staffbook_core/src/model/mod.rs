//! Domain model for the employee record store.
//!
//! # Responsibility
//! - Define the canonical record shape shared by table, storage and CLI.
//!
//! # Invariants
//! - `id` is the primary key; it never changes after the record is created.
//! - The column set (`id`, `name`, `position`, `salary`) is fixed.

pub mod employee;
