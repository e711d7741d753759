//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Expense, ExpenseFields, ExpenseId};
use crate::error::DomainError;

/// Repository for Expense entities
///
/// Only primary-key operations exist; the store owns id assignment.
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// List every stored expense, ordered by id
    async fn find_all(&self) -> Result<Vec<Expense>, DomainError>;

    /// Find an expense by ID
    async fn find_by_id(&self, id: ExpenseId) -> Result<Option<Expense>, DomainError>;

    /// Insert when `id` is `None`, otherwise overwrite the fields of the row with that id.
    ///
    /// Overwriting a row that no longer exists returns `DomainError::NotFound`.
    async fn save(
        &self,
        id: Option<ExpenseId>,
        fields: &ExpenseFields,
    ) -> Result<Expense, DomainError>;

    /// Delete an expense by ID. Deleting a missing row is a no-op.
    async fn delete_by_id(&self, id: ExpenseId) -> Result<(), DomainError>;
}
