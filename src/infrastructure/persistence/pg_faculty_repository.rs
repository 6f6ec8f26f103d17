//! PostgreSQL implementation of the faculty repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Faculty;
use crate::domain::repositories::FacultyRepository;
use crate::domain::values::Id;
use crate::error::AppError;
use crate::infrastructure::persistence::db_error;

/// PostgreSQL repository for faculties.
pub struct PgFacultyRepository {
    pool: Arc<PgPool>,
}

impl PgFacultyRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct FacultyRow {
    id: String,
    university_id: String,
    name: String,
    created_at: DateTime<Utc>,
    created_by: String,
    updated_at: DateTime<Utc>,
    updated_by: String,
}

impl FacultyRow {
    fn into_entity(self) -> Result<Faculty, AppError> {
        Faculty::restore(
            &self.id,
            &self.university_id,
            &self.name,
            self.created_at,
            &self.created_by,
            self.updated_at,
            &self.updated_by,
        )
        .map_err(|e| db_error::corrupted_row("faculty", e))
    }
}

fn translate_write_error(e: sqlx::Error, faculty: &Faculty) -> AppError {
    if db_error::is_unique_violation(&e) {
        return AppError::duplicate(
            "This faculty name is already registered for the university",
            json!({
                "university_id": faculty.university_id().as_str(),
                "name": faculty.name().as_str(),
            }),
        );
    }
    if db_error::is_foreign_key_violation(&e) {
        return AppError::not_found(
            "University not found",
            json!({ "university_id": faculty.university_id().as_str() }),
        );
    }
    db_error::unexpected(e)
}

#[async_trait]
impl FacultyRepository for PgFacultyRepository {
    async fn create(&self, faculty: Faculty) -> Result<Faculty, AppError> {
        sqlx::query(
            r#"
            INSERT INTO faculties
                (id, university_id, name, created_at, created_by, updated_at, updated_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(faculty.id().as_str())
        .bind(faculty.university_id().as_str())
        .bind(faculty.name().as_str())
        .bind(faculty.created_at())
        .bind(faculty.created_by().as_str())
        .bind(faculty.updated_at())
        .bind(faculty.updated_by().as_str())
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| translate_write_error(e, &faculty))?;

        Ok(faculty)
    }

    async fn update(&self, faculty: Faculty) -> Result<Faculty, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE faculties
            SET name = $2, updated_at = $3, updated_by = $4
            WHERE id = $1
            "#,
        )
        .bind(faculty.id().as_str())
        .bind(faculty.name().as_str())
        .bind(faculty.updated_at())
        .bind(faculty.updated_by().as_str())
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| translate_write_error(e, &faculty))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Faculty not found",
                json!({ "id": faculty.id().as_str() }),
            ));
        }

        Ok(faculty)
    }

    async fn delete(&self, id: &Id) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM faculties WHERE id = $1")
            .bind(id.as_str())
            .execute(self.pool.as_ref())
            .await
            .map_err(db_error::unexpected)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Faculty not found",
                json!({ "id": id.as_str() }),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &Id) -> Result<Option<Faculty>, AppError> {
        let row = sqlx::query_as::<_, FacultyRow>(
            r#"
            SELECT id, university_id, name, created_at, created_by, updated_at, updated_by
            FROM faculties
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(db_error::unexpected)?;

        row.map(FacultyRow::into_entity).transpose()
    }

    async fn find_by_university_and_name(
        &self,
        university_id: &Id,
        name: &str,
    ) -> Result<Option<Faculty>, AppError> {
        let row = sqlx::query_as::<_, FacultyRow>(
            r#"
            SELECT id, university_id, name, created_at, created_by, updated_at, updated_by
            FROM faculties
            WHERE university_id = $1 AND name = $2
            "#,
        )
        .bind(university_id.as_str())
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(db_error::unexpected)?;

        row.map(FacultyRow::into_entity).transpose()
    }
}
