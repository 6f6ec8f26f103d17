//! PostgreSQL implementation of the department repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Department;
use crate::domain::repositories::DepartmentRepository;
use crate::domain::values::Id;
use crate::error::AppError;
use crate::infrastructure::persistence::db_error;

/// PostgreSQL repository for departments.
pub struct PgDepartmentRepository {
    pool: Arc<PgPool>,
}

impl PgDepartmentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct DepartmentRow {
    id: String,
    name: String,
    created_at: DateTime<Utc>,
    created_by: String,
    updated_at: DateTime<Utc>,
    updated_by: String,
}

impl DepartmentRow {
    fn into_entity(self) -> Result<Department, AppError> {
        Department::restore(
            &self.id,
            &self.name,
            self.created_at,
            &self.created_by,
            self.updated_at,
            &self.updated_by,
        )
        .map_err(|e| db_error::corrupted_row("department", e))
    }
}

#[async_trait]
impl DepartmentRepository for PgDepartmentRepository {
    async fn create(&self, department: Department) -> Result<Department, AppError> {
        sqlx::query(
            r#"
            INSERT INTO departments (id, name, created_at, created_by, updated_at, updated_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(department.id().as_str())
        .bind(department.name().as_str())
        .bind(department.created_at())
        .bind(department.created_by().as_str())
        .bind(department.updated_at())
        .bind(department.updated_by().as_str())
        .execute(self.pool.as_ref())
        .await
        .map_err(db_error::unexpected)?;

        Ok(department)
    }

    async fn update(&self, department: Department) -> Result<Department, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE departments
            SET name = $2, updated_at = $3, updated_by = $4
            WHERE id = $1
            "#,
        )
        .bind(department.id().as_str())
        .bind(department.name().as_str())
        .bind(department.updated_at())
        .bind(department.updated_by().as_str())
        .execute(self.pool.as_ref())
        .await
        .map_err(db_error::unexpected)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Department not found",
                json!({ "id": department.id().as_str() }),
            ));
        }

        Ok(department)
    }

    async fn delete(&self, id: &Id) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id.as_str())
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                if db_error::is_foreign_key_violation(&e) {
                    AppError::dependents_exist(
                        "Department is still referenced by users",
                        json!({ "id": id.as_str() }),
                    )
                } else {
                    db_error::unexpected(e)
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Department not found",
                json!({ "id": id.as_str() }),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &Id) -> Result<Option<Department>, AppError> {
        let row = sqlx::query_as::<_, DepartmentRow>(
            r#"
            SELECT id, name, created_at, created_by, updated_at, updated_by
            FROM departments
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(db_error::unexpected)?;

        row.map(DepartmentRow::into_entity).transpose()
    }
}
