//! PostgreSQL implementation of the university repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{University, UniversityRank};
use crate::domain::repositories::UniversityRepository;
use crate::domain::values::Id;
use crate::error::AppError;
use crate::infrastructure::persistence::db_error;
use crate::infrastructure::persistence::pg_university_rank_repository::insert_rank;

/// PostgreSQL repository for universities.
pub struct PgUniversityRepository {
    pool: Arc<PgPool>,
}

impl PgUniversityRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UniversityRow {
    id: String,
    name: String,
    created_at: DateTime<Utc>,
    created_by: String,
    updated_at: DateTime<Utc>,
    updated_by: String,
}

impl UniversityRow {
    fn into_entity(self) -> Result<University, AppError> {
        University::restore(
            &self.id,
            &self.name,
            self.created_at,
            &self.created_by,
            self.updated_at,
            &self.updated_by,
        )
        .map_err(|e| db_error::corrupted_row("university", e))
    }
}

fn translate_create_error(e: sqlx::Error, name: &str) -> AppError {
    if db_error::is_unique_violation(&e) {
        return AppError::duplicate(
            "This university name is already registered",
            json!({ "name": name }),
        );
    }
    db_error::unexpected(e)
}

#[async_trait]
impl UniversityRepository for PgUniversityRepository {
    async fn create(&self, university: University) -> Result<University, AppError> {
        sqlx::query(
            r#"
            INSERT INTO universities (id, name, created_at, created_by, updated_at, updated_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(university.id().as_str())
        .bind(university.name().as_str())
        .bind(university.created_at())
        .bind(university.created_by().as_str())
        .bind(university.updated_at())
        .bind(university.updated_by().as_str())
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| translate_create_error(e, university.name().as_str()))?;

        Ok(university)
    }

    async fn create_with_rank(
        &self,
        university: University,
        rank: UniversityRank,
    ) -> Result<(University, UniversityRank), AppError> {
        let mut tx = self.pool.begin().await.map_err(db_error::unexpected)?;

        sqlx::query(
            r#"
            INSERT INTO universities (id, name, created_at, created_by, updated_at, updated_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(university.id().as_str())
        .bind(university.name().as_str())
        .bind(university.created_at())
        .bind(university.created_by().as_str())
        .bind(university.updated_at())
        .bind(university.updated_by().as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| translate_create_error(e, university.name().as_str()))?;

        insert_rank(&mut tx, &rank).await?;

        tx.commit().await.map_err(db_error::unexpected)?;
        Ok((university, rank))
    }

    async fn update(&self, university: University) -> Result<University, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE universities
            SET name = $2, updated_at = $3, updated_by = $4
            WHERE id = $1
            "#,
        )
        .bind(university.id().as_str())
        .bind(university.name().as_str())
        .bind(university.updated_at())
        .bind(university.updated_by().as_str())
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| translate_create_error(e, university.name().as_str()))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "University not found",
                json!({ "id": university.id().as_str() }),
            ));
        }

        Ok(university)
    }

    async fn delete(&self, id: &Id) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM universities WHERE id = $1")
            .bind(id.as_str())
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                if db_error::is_foreign_key_violation(&e) {
                    AppError::dependents_exist(
                        "University is still referenced by faculties",
                        json!({ "id": id.as_str() }),
                    )
                } else {
                    db_error::unexpected(e)
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "University not found",
                json!({ "id": id.as_str() }),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &Id) -> Result<Option<University>, AppError> {
        let row = sqlx::query_as::<_, UniversityRow>(
            r#"
            SELECT id, name, created_at, created_by, updated_at, updated_by
            FROM universities
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(db_error::unexpected)?;

        row.map(UniversityRow::into_entity).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<University>, AppError> {
        let row = sqlx::query_as::<_, UniversityRow>(
            r#"
            SELECT id, name, created_at, created_by, updated_at, updated_by
            FROM universities
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(db_error::unexpected)?;

        row.map(UniversityRow::into_entity).transpose()
    }
}
