//! Expense domain entity
//!
//! A dated, described, amount-bearing financial record. The store assigns the
//! id on first save; afterwards only the description, amount and date change.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Unique identifier for an expense, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpenseId(pub i64);

impl std::fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The mutable part of an expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseFields {
    pub description: String,
    /// Signed currency amount; no range is enforced
    pub amount: Decimal,
    pub date: NaiveDate,
}

/// A stored expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}

impl Expense {
    /// Build the stored form of `fields` under `id`
    pub fn with_id(id: ExpenseId, fields: ExpenseFields) -> Self {
        Self {
            id,
            description: fields.description,
            amount: fields.amount,
            date: fields.date,
        }
    }

    /// Overwrite description, amount and date. The id is left untouched.
    pub fn apply(&mut self, fields: ExpenseFields) {
        self.description = fields.description;
        self.amount = fields.amount;
        self.date = fields.date;
    }

    /// Copy out the mutable fields
    pub fn fields(&self) -> ExpenseFields {
        ExpenseFields {
            description: self.description.clone(),
            amount: self.amount,
            date: self.date,
        }
    }
}
