//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::domain::entities::{Expense, ExpenseFields, ExpenseId};
use crate::domain::ports::ExpenseRepository;
use crate::error::DomainError;

// ============================================================================
// In-Memory Expense Repository
// ============================================================================

/// Assigns ids from 1 upwards, like a fresh `BIGSERIAL` column
pub struct InMemoryExpenseRepository {
    expenses: RwLock<BTreeMap<ExpenseId, Expense>>,
    next_id: AtomicI64,
    saves: AtomicUsize,
}

impl Default for InMemoryExpenseRepository {
    fn default() -> Self {
        Self {
            expenses: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
            saves: AtomicUsize::new(0),
        }
    }
}

impl InMemoryExpenseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an expense for testing
    pub fn with_expense(self, expense: Expense) -> Self {
        self.next_id.fetch_max(expense.id.0 + 1, Ordering::SeqCst);
        self.expenses.write().unwrap().insert(expense.id, expense);
        self
    }

    /// Number of `save` calls seen so far
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ExpenseRepository for InMemoryExpenseRepository {
    async fn find_all(&self) -> Result<Vec<Expense>, DomainError> {
        let expenses = self.expenses.read().unwrap();
        Ok(expenses.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ExpenseId) -> Result<Option<Expense>, DomainError> {
        let expenses = self.expenses.read().unwrap();
        Ok(expenses.get(&id).cloned())
    }

    async fn save(
        &self,
        id: Option<ExpenseId>,
        fields: &ExpenseFields,
    ) -> Result<Expense, DomainError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        let mut expenses = self.expenses.write().unwrap();

        match id {
            None => {
                let id = ExpenseId(self.next_id.fetch_add(1, Ordering::SeqCst));
                let expense = Expense::with_id(id, fields.clone());
                expenses.insert(id, expense.clone());
                Ok(expense)
            }
            Some(id) => match expenses.get_mut(&id) {
                Some(expense) => {
                    expense.apply(fields.clone());
                    Ok(expense.clone())
                }
                None => Err(DomainError::NotFound(format!("Expense {} not found", id))),
            },
        }
    }

    async fn delete_by_id(&self, id: ExpenseId) -> Result<(), DomainError> {
        self.expenses.write().unwrap().remove(&id);
        Ok(())
    }
}

// ============================================================================
// Failing Expense Repository
// ============================================================================

/// Every call fails as if the database were unreachable
pub struct FailingExpenseRepository;

fn unreachable_db() -> DomainError {
    DomainError::Database("connection refused".to_string())
}

#[async_trait]
impl ExpenseRepository for FailingExpenseRepository {
    async fn find_all(&self) -> Result<Vec<Expense>, DomainError> {
        Err(unreachable_db())
    }

    async fn find_by_id(&self, _id: ExpenseId) -> Result<Option<Expense>, DomainError> {
        Err(unreachable_db())
    }

    async fn save(
        &self,
        _id: Option<ExpenseId>,
        _fields: &ExpenseFields,
    ) -> Result<Expense, DomainError> {
        Err(unreachable_db())
    }

    async fn delete_by_id(&self, _id: ExpenseId) -> Result<(), DomainError> {
        Err(unreachable_db())
    }
}

// ============================================================================
// Vanishing Expense Repository
// ============================================================================

/// Finds every id, but the row is gone by the time it is written back,
/// as when a delete lands between the read and the write of an update
pub struct VanishingExpenseRepository;

#[async_trait]
impl ExpenseRepository for VanishingExpenseRepository {
    async fn find_all(&self) -> Result<Vec<Expense>, DomainError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, id: ExpenseId) -> Result<Option<Expense>, DomainError> {
        Ok(Some(super::fixtures::test_expense(id.0)))
    }

    async fn save(
        &self,
        id: Option<ExpenseId>,
        _fields: &ExpenseFields,
    ) -> Result<Expense, DomainError> {
        Err(DomainError::NotFound(format!(
            "Expense {} not found",
            id.map(|id| id.to_string()).unwrap_or_default()
        )))
    }

    async fn delete_by_id(&self, _id: ExpenseId) -> Result<(), DomainError> {
        Ok(())
    }
}
