//! Core use-case services.
//!
//! # Responsibility
//! - Tie the in-memory table to its durable mirror.
//! - Keep the CLI decoupled from table and storage details.

pub mod employee_service;
