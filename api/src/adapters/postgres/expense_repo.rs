//! PostgreSQL adapter for ExpenseRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    Set,
};

use crate::domain::entities::{Expense, ExpenseFields, ExpenseId};
use crate::domain::ports::ExpenseRepository;
use crate::entity::expenses;
use crate::error::DomainError;

/// PostgreSQL implementation of ExpenseRepository
pub struct PostgresExpenseRepository {
    db: DatabaseConnection,
}

impl PostgresExpenseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExpenseRepository for PostgresExpenseRepository {
    async fn find_all(&self) -> Result<Vec<Expense>, DomainError> {
        let results = expenses::Entity::find()
            .order_by_asc(expenses::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: ExpenseId) -> Result<Option<Expense>, DomainError> {
        let result = expenses::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn save(
        &self,
        id: Option<ExpenseId>,
        fields: &ExpenseFields,
    ) -> Result<Expense, DomainError> {
        let model = expenses::ActiveModel {
            id: NotSet,
            description: Set(fields.description.clone()),
            amount: Set(fields.amount),
            date: Set(fields.date),
        };

        let result = match id {
            None => model.insert(&self.db).await,
            Some(id) => {
                expenses::ActiveModel {
                    id: Set(id.0),
                    ..model
                }
                .update(&self.db)
                .await
            }
        };

        match result {
            Ok(saved) => Ok(saved.into()),
            Err(DbErr::RecordNotUpdated) => Err(DomainError::NotFound(format!(
                "Expense {} not found",
                id.map(|id| id.to_string()).unwrap_or_default()
            ))),
            Err(e) => Err(DomainError::Database(e.to_string())),
        }
    }

    async fn delete_by_id(&self, id: ExpenseId) -> Result<(), DomainError> {
        expenses::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<expenses::Model> for Expense {
    fn from(model: expenses::Model) -> Self {
        Expense {
            id: ExpenseId(model.id),
            description: model.description,
            amount: model.amount,
            date: model.date,
        }
    }
}
