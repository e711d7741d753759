//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::entities::{Expense, ExpenseFields, ExpenseId};

/// `{"description": "Coffee", "amount": 4.50, "date": "2024-01-01"}`
pub fn coffee() -> ExpenseFields {
    ExpenseFields {
        description: "Coffee".to_string(),
        amount: Decimal::from_str("4.50").unwrap(),
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    }
}

/// `{"description": "Tea", "amount": 3.00, "date": "2024-01-02"}`
pub fn tea() -> ExpenseFields {
    ExpenseFields {
        description: "Tea".to_string(),
        amount: Decimal::from_str("3.00").unwrap(),
        date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
    }
}

/// Create a stored expense with the given id and the `coffee` fields
pub fn test_expense(id: i64) -> Expense {
    Expense::with_id(ExpenseId(id), coffee())
}
