//! SeaORM table models
//!
//! Mirrors the schema created by the `migration` crate.

pub mod expenses;
