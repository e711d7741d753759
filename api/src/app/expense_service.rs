//! Expense service
//!
//! Mediates between the HTTP handlers and the expense repository. Apart from
//! delegation, the only rule here is the field copy on update.

use std::sync::Arc;

use crate::domain::entities::{Expense, ExpenseFields, ExpenseId};
use crate::domain::ports::ExpenseRepository;
use crate::error::AppError;

/// Service for managing expenses
pub struct ExpenseService<ER>
where
    ER: ExpenseRepository + ?Sized,
{
    expenses: Arc<ER>,
}

impl<ER> ExpenseService<ER>
where
    ER: ExpenseRepository + ?Sized,
{
    pub fn new(expenses: Arc<ER>) -> Self {
        Self { expenses }
    }

    /// List every stored expense
    pub async fn list_expenses(&self) -> Result<Vec<Expense>, AppError> {
        Ok(self.expenses.find_all().await?)
    }

    /// Find an expense by ID
    pub async fn get_expense(&self, id: ExpenseId) -> Result<Option<Expense>, AppError> {
        Ok(self.expenses.find_by_id(id).await?)
    }

    /// Store a new expense and return it with its assigned id
    pub async fn create_expense(&self, fields: ExpenseFields) -> Result<Expense, AppError> {
        let expense = self.expenses.save(None, &fields).await?;
        tracing::debug!(id = %expense.id, "Created expense");
        Ok(expense)
    }

    /// Overwrite description, amount and date of an existing expense.
    ///
    /// Returns `None` when no expense has this id; nothing is created in that case.
    /// The read and the write are separate store calls, so a concurrent update
    /// to the same id may win or lose silently.
    pub async fn update_expense(
        &self,
        id: ExpenseId,
        fields: ExpenseFields,
    ) -> Result<Option<Expense>, AppError> {
        let Some(mut expense) = self.expenses.find_by_id(id).await? else {
            return Ok(None);
        };

        expense.apply(fields);
        let saved = self.expenses.save(Some(expense.id), &expense.fields()).await?;
        tracing::debug!(id = %saved.id, "Updated expense");

        Ok(Some(saved))
    }

    /// Delete an expense. Returns `false` when no expense has this id.
    pub async fn delete_expense(&self, id: ExpenseId) -> Result<bool, AppError> {
        if self.expenses.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        self.expenses.delete_by_id(id).await?;
        tracing::debug!(id = %id, "Deleted expense");

        Ok(true)
    }
}
