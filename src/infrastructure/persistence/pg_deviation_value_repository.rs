//! PostgreSQL implementation of the deviation value repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::DeviationValue;
use crate::domain::repositories::DeviationValueRepository;
use crate::domain::values::Id;
use crate::error::AppError;
use crate::infrastructure::persistence::db_error;

/// PostgreSQL repository for faculty deviation values.
pub struct PgDeviationValueRepository {
    pool: Arc<PgPool>,
}

impl PgDeviationValueRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct DeviationValueRow {
    id: String,
    faculty_id: String,
    value: i32,
    created_at: DateTime<Utc>,
    created_by: String,
    updated_at: DateTime<Utc>,
    updated_by: String,
}

impl DeviationValueRow {
    fn into_entity(self) -> Result<DeviationValue, AppError> {
        DeviationValue::restore(
            &self.id,
            &self.faculty_id,
            self.value,
            self.created_at,
            &self.created_by,
            self.updated_at,
            &self.updated_by,
        )
        .map_err(|e| db_error::corrupted_row("deviation value", e))
    }
}

#[async_trait]
impl DeviationValueRepository for PgDeviationValueRepository {
    async fn create(&self, deviation_value: DeviationValue) -> Result<DeviationValue, AppError> {
        sqlx::query(
            r#"
            INSERT INTO deviation_values
                (id, faculty_id, value, created_at, created_by, updated_at, updated_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(deviation_value.id().as_str())
        .bind(deviation_value.faculty_id().as_str())
        .bind(deviation_value.value().value())
        .bind(deviation_value.created_at())
        .bind(deviation_value.created_by().as_str())
        .bind(deviation_value.updated_at())
        .bind(deviation_value.updated_by().as_str())
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| {
            if db_error::is_unique_violation(&e) {
                AppError::duplicate(
                    "A deviation value is already registered for this faculty",
                    json!({ "faculty_id": deviation_value.faculty_id().as_str() }),
                )
            } else if db_error::is_foreign_key_violation(&e) {
                AppError::not_found(
                    "Faculty not found",
                    json!({ "faculty_id": deviation_value.faculty_id().as_str() }),
                )
            } else {
                db_error::unexpected(e)
            }
        })?;

        Ok(deviation_value)
    }

    async fn update(&self, deviation_value: DeviationValue) -> Result<DeviationValue, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE deviation_values
            SET value = $2, updated_at = $3, updated_by = $4
            WHERE id = $1
            "#,
        )
        .bind(deviation_value.id().as_str())
        .bind(deviation_value.value().value())
        .bind(deviation_value.updated_at())
        .bind(deviation_value.updated_by().as_str())
        .execute(self.pool.as_ref())
        .await
        .map_err(db_error::unexpected)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Deviation value not found",
                json!({ "id": deviation_value.id().as_str() }),
            ));
        }

        Ok(deviation_value)
    }

    async fn delete(&self, id: &Id) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM deviation_values WHERE id = $1")
            .bind(id.as_str())
            .execute(self.pool.as_ref())
            .await
            .map_err(db_error::unexpected)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Deviation value not found",
                json!({ "id": id.as_str() }),
            ));
        }

        Ok(())
    }

    async fn find_by_faculty_id(
        &self,
        faculty_id: &Id,
    ) -> Result<Option<DeviationValue>, AppError> {
        let row = sqlx::query_as::<_, DeviationValueRow>(
            r#"
            SELECT id, faculty_id, value, created_at, created_by, updated_at, updated_by
            FROM deviation_values
            WHERE faculty_id = $1
            "#,
        )
        .bind(faculty_id.as_str())
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(db_error::unexpected)?;

        row.map(DeviationValueRow::into_entity).transpose()
    }
}
