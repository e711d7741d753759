//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod expense_repo;


pub use expense_repo::PostgresExpenseRepository;
