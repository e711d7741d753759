//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod expenses;

pub use expenses::{create_expense, delete_expense, get_expense, list_expenses, update_expense};
