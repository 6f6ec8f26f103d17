//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Gender, User};
use crate::domain::repositories::UserRepository;
use crate::domain::values::Id;
use crate::error::AppError;
use crate::infrastructure::persistence::db_error;

/// PostgreSQL repository for user accounts.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    email: String,
    role: String,
    first_name: String,
    last_name: String,
    gender: Option<String>,
    department_id: String,
    created_at: DateTime<Utc>,
    created_by: String,
    updated_at: DateTime<Utc>,
    updated_by: String,
}

impl UserRow {
    fn into_entity(self) -> Result<User, AppError> {
        User::restore(
            &self.id,
            &self.email,
            &self.role,
            &self.first_name,
            &self.last_name,
            self.gender.as_deref(),
            &self.department_id,
            self.created_at,
            &self.created_by,
            self.updated_at,
            &self.updated_by,
        )
        .map_err(|e| db_error::corrupted_row("user", e))
    }
}

fn translate_write_error(e: sqlx::Error, user: &User) -> AppError {
    if db_error::is_unique_violation(&e) {
        return AppError::duplicate(
            "This email address is already registered",
            json!({ "email": user.email().as_str() }),
        );
    }
    if db_error::is_foreign_key_violation(&e) {
        return AppError::not_found(
            "Department not found",
            json!({ "department_id": user.department_id().as_str() }),
        );
    }
    db_error::unexpected(e)
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: User) -> Result<User, AppError> {
        sqlx::query(
            r#"
            INSERT INTO users
                (id, email, role, first_name, last_name, gender, department_id,
                 created_at, created_by, updated_at, updated_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(user.id().as_str())
        .bind(user.email().as_str())
        .bind(user.role().as_str())
        .bind(user.first_name().as_str())
        .bind(user.last_name().as_str())
        .bind(user.gender().map(Gender::as_str))
        .bind(user.department_id().as_str())
        .bind(user.created_at())
        .bind(user.created_by().as_str())
        .bind(user.updated_at())
        .bind(user.updated_by().as_str())
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| translate_write_error(e, &user))?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET email = $2, role = $3, first_name = $4, last_name = $5,
                gender = $6, department_id = $7, updated_at = $8, updated_by = $9
            WHERE id = $1
            "#,
        )
        .bind(user.id().as_str())
        .bind(user.email().as_str())
        .bind(user.role().as_str())
        .bind(user.first_name().as_str())
        .bind(user.last_name().as_str())
        .bind(user.gender().map(Gender::as_str))
        .bind(user.department_id().as_str())
        .bind(user.updated_at())
        .bind(user.updated_by().as_str())
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| translate_write_error(e, &user))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "User not found",
                json!({ "id": user.id().as_str() }),
            ));
        }

        Ok(user)
    }

    async fn delete(&self, id: &Id) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.as_str())
            .execute(self.pool.as_ref())
            .await
            .map_err(db_error::unexpected)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "User not found",
                json!({ "id": id.as_str() }),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &Id) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, role, first_name, last_name, gender, department_id,
                   created_at, created_by, updated_at, updated_by
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(db_error::unexpected)?;

        row.map(UserRow::into_entity).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, role, first_name, last_name, gender, department_id,
                   created_at, created_by, updated_at, updated_by
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(db_error::unexpected)?;

        row.map(UserRow::into_entity).transpose()
    }
}
