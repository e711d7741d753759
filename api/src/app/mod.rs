//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod expense_service;

pub use expense_service::ExpenseService;
