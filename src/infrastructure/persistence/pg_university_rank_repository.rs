//! PostgreSQL implementation of the university rank repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{PgPool, Postgres, Transaction};
use std::sync::Arc;

use crate::domain::entities::UniversityRank;
use crate::domain::repositories::UniversityRankRepository;
use crate::domain::values::Id;
use crate::error::AppError;
use crate::infrastructure::persistence::db_error;

/// PostgreSQL repository for university rank rows.
pub struct PgUniversityRankRepository {
    pool: Arc<PgPool>,
}

impl PgUniversityRankRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UniversityRankRow {
    id: String,
    university_id: String,
    rank: String,
    created_at: DateTime<Utc>,
    created_by: String,
    updated_at: DateTime<Utc>,
    updated_by: String,
}

impl UniversityRankRow {
    fn into_entity(self) -> Result<UniversityRank, AppError> {
        UniversityRank::restore(
            &self.id,
            &self.university_id,
            &self.rank,
            self.created_at,
            &self.created_by,
            self.updated_at,
            &self.updated_by,
        )
        .map_err(|e| db_error::corrupted_row("university rank", e))
    }
}

/// Inserts a rank row within an open transaction.
///
/// Shared with [`super::PgUniversityRepository::create_with_rank`], which
/// commits the university and its rank together.
pub(super) async fn insert_rank(
    tx: &mut Transaction<'_, Postgres>,
    rank: &UniversityRank,
) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO university_ranks
            (id, university_id, rank, created_at, created_by, updated_at, updated_by)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(rank.id().as_str())
    .bind(rank.university_id().as_str())
    .bind(rank.rank().as_str())
    .bind(rank.created_at())
    .bind(rank.created_by().as_str())
    .bind(rank.updated_at())
    .bind(rank.updated_by().as_str())
    .execute(&mut **tx)
    .await
    .map_err(|e| translate_write_error(e, rank))?;

    Ok(())
}

fn translate_write_error(e: sqlx::Error, rank: &UniversityRank) -> AppError {
    if db_error::is_foreign_key_violation(&e) {
        return AppError::not_found(
            "University not found",
            json!({ "university_id": rank.university_id().as_str() }),
        );
    }
    db_error::unexpected(e)
}

#[async_trait]
impl UniversityRankRepository for PgUniversityRankRepository {
    async fn create(&self, rank: UniversityRank) -> Result<UniversityRank, AppError> {
        sqlx::query(
            r#"
            INSERT INTO university_ranks
                (id, university_id, rank, created_at, created_by, updated_at, updated_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(rank.id().as_str())
        .bind(rank.university_id().as_str())
        .bind(rank.rank().as_str())
        .bind(rank.created_at())
        .bind(rank.created_by().as_str())
        .bind(rank.updated_at())
        .bind(rank.updated_by().as_str())
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| translate_write_error(e, &rank))?;

        Ok(rank)
    }

    async fn update(&self, rank: UniversityRank) -> Result<UniversityRank, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE university_ranks
            SET rank = $2, updated_at = $3, updated_by = $4
            WHERE id = $1
            "#,
        )
        .bind(rank.id().as_str())
        .bind(rank.rank().as_str())
        .bind(rank.updated_at())
        .bind(rank.updated_by().as_str())
        .execute(self.pool.as_ref())
        .await
        .map_err(db_error::unexpected)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "University rank not found",
                json!({ "id": rank.id().as_str() }),
            ));
        }

        Ok(rank)
    }

    async fn delete(&self, id: &Id) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM university_ranks WHERE id = $1")
            .bind(id.as_str())
            .execute(self.pool.as_ref())
            .await
            .map_err(db_error::unexpected)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "University rank not found",
                json!({ "id": id.as_str() }),
            ));
        }

        Ok(())
    }

    async fn find_by_university_id(
        &self,
        university_id: &Id,
    ) -> Result<Option<UniversityRank>, AppError> {
        // The oldest row wins; the relationship is one-to-zero-or-one.
        let row = sqlx::query_as::<_, UniversityRankRow>(
            r#"
            SELECT id, university_id, rank, created_at, created_by, updated_at, updated_by
            FROM university_ranks
            WHERE university_id = $1
            ORDER BY created_at ASC
            LIMIT 1
            "#,
        )
        .bind(university_id.as_str())
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(db_error::unexpected)?;

        row.map(UniversityRankRow::into_entity).transpose()
    }
}
