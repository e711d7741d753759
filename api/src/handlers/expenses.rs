//! Expense handlers
//!
//! CRUD endpoints under `/expenses`.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Expense, ExpenseFields, ExpenseId};
use crate::error::AppError;
use crate::AppState;

/// Request body for creating or replacing an expense
///
/// Any `id` in the body is ignored; the path or the store decides it.
#[derive(Debug, Deserialize)]
pub struct ExpenseRequest {
    pub description: String,
    pub amount: Decimal,
    /// Calendar date, `YYYY-MM-DD`
    pub date: NaiveDate,
}

impl From<ExpenseRequest> for ExpenseFields {
    fn from(request: ExpenseRequest) -> Self {
        ExpenseFields {
            description: request.description,
            amount: request.amount,
            date: request.date,
        }
    }
}

/// Response body for a stored expense
#[derive(Debug, Serialize)]
pub struct ExpenseResponse {
    pub id: i64,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}

impl From<Expense> for ExpenseResponse {
    fn from(expense: Expense) -> Self {
        ExpenseResponse {
            id: expense.id.0,
            description: expense.description,
            amount: expense.amount,
            date: expense.date,
        }
    }
}

/// GET /expenses
///
/// List all expenses.
pub async fn list_expenses(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExpenseResponse>>, AppError> {
    let expenses = state.expense_service.list_expenses().await?;
    Ok(Json(expenses.into_iter().map(Into::into).collect()))
}

/// GET /expenses/:id
pub async fn get_expense(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<ExpenseResponse>, AppError> {
    let Path(id) = path?;

    let expense = state
        .expense_service
        .get_expense(ExpenseId(id))
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(expense.into()))
}

/// POST /expenses
///
/// Store a new expense. The response carries the assigned id.
pub async fn create_expense(
    State(state): State<AppState>,
    payload: Result<Json<ExpenseRequest>, JsonRejection>,
) -> Result<Json<ExpenseResponse>, AppError> {
    let Json(request) = payload?;

    let expense = state.expense_service.create_expense(request.into()).await?;

    Ok(Json(expense.into()))
}

/// PUT /expenses/:id
///
/// Replace description, amount and date of an existing expense.
pub async fn update_expense(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ExpenseRequest>, JsonRejection>,
) -> Result<Json<ExpenseResponse>, AppError> {
    let Path(id) = path?;
    let Json(request) = payload?;

    let expense = state
        .expense_service
        .update_expense(ExpenseId(id), request.into())
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(expense.into()))
}

/// DELETE /expenses/:id
pub async fn delete_expense(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;

    if state.expense_service.delete_expense(ExpenseId(id)).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}
