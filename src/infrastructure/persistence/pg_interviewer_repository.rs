//! PostgreSQL implementation of the interviewer repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{PgPool, Postgres, Transaction};
use std::sync::Arc;

use crate::domain::entities::Interviewer;
use crate::domain::repositories::InterviewerRepository;
use crate::domain::values::Id;
use crate::error::AppError;
use crate::infrastructure::persistence::db_error;

/// PostgreSQL repository for interviewers.
///
/// Batch operations run inside one transaction; a failing row rolls back
/// the whole batch.
pub struct PgInterviewerRepository {
    pool: Arc<PgPool>,
}

impl PgInterviewerRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct InterviewerRow {
    user_id: String,
    category: String,
    university_id: Option<String>,
    faculty_id: Option<String>,
    created_at: DateTime<Utc>,
    created_by: String,
    updated_at: DateTime<Utc>,
    updated_by: String,
}

impl InterviewerRow {
    fn into_entity(self) -> Result<Interviewer, AppError> {
        Interviewer::restore(
            &self.user_id,
            &self.category,
            self.university_id.as_deref(),
            self.faculty_id.as_deref(),
            self.created_at,
            &self.created_by,
            self.updated_at,
            &self.updated_by,
        )
        .map_err(|e| db_error::corrupted_row("interviewer", e))
    }
}

fn translate_insert_error(e: sqlx::Error, interviewer: &Interviewer) -> AppError {
    if db_error::is_unique_violation(&e) {
        return AppError::duplicate(
            "This user is already registered as an interviewer",
            json!({ "user_id": interviewer.user_id().as_str() }),
        );
    }
    if db_error::is_foreign_key_violation(&e) {
        // Which parent is missing depends on the violated constraint.
        return match db_error::constraint_name(&e) {
            Some("interviewers_university_id_fkey") => AppError::not_found(
                "University not found",
                json!({ "university_id": interviewer.university_id().map(Id::as_str) }),
            ),
            Some("interviewers_faculty_id_fkey") => AppError::not_found(
                "Faculty not found",
                json!({ "faculty_id": interviewer.faculty_id().map(Id::as_str) }),
            ),
            _ => AppError::not_found(
                "User not found",
                json!({ "user_id": interviewer.user_id().as_str() }),
            ),
        };
    }
    db_error::unexpected(e)
}

async fn insert_interviewer(
    tx: &mut Transaction<'_, Postgres>,
    interviewer: &Interviewer,
) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO interviewers
            (user_id, category, university_id, faculty_id,
             created_at, created_by, updated_at, updated_by)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(interviewer.user_id().as_str())
    .bind(interviewer.category().as_str())
    .bind(interviewer.university_id().map(Id::as_str))
    .bind(interviewer.faculty_id().map(Id::as_str))
    .bind(interviewer.created_at())
    .bind(interviewer.created_by().as_str())
    .bind(interviewer.updated_at())
    .bind(interviewer.updated_by().as_str())
    .execute(&mut **tx)
    .await
    .map_err(|e| translate_insert_error(e, interviewer))?;

    Ok(())
}

async fn update_interviewer(
    tx: &mut Transaction<'_, Postgres>,
    interviewer: &Interviewer,
) -> Result<u64, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE interviewers
        SET category = $2, university_id = $3, faculty_id = $4,
            updated_at = $5, updated_by = $6
        WHERE user_id = $1
        "#,
    )
    .bind(interviewer.user_id().as_str())
    .bind(interviewer.category().as_str())
    .bind(interviewer.university_id().map(Id::as_str))
    .bind(interviewer.faculty_id().map(Id::as_str))
    .bind(interviewer.updated_at())
    .bind(interviewer.updated_by().as_str())
    .execute(&mut **tx)
    .await
    .map_err(|e| translate_insert_error(e, interviewer))?;

    Ok(result.rows_affected())
}

#[async_trait]
impl InterviewerRepository for PgInterviewerRepository {
    async fn create(&self, interviewer: Interviewer) -> Result<Interviewer, AppError> {
        let mut tx = self.pool.begin().await.map_err(db_error::unexpected)?;
        insert_interviewer(&mut tx, &interviewer).await?;
        tx.commit().await.map_err(db_error::unexpected)?;
        Ok(interviewer)
    }

    async fn create_all(
        &self,
        interviewers: Vec<Interviewer>,
    ) -> Result<Vec<Interviewer>, AppError> {
        let mut tx = self.pool.begin().await.map_err(db_error::unexpected)?;

        for interviewer in &interviewers {
            insert_interviewer(&mut tx, interviewer).await?;
        }

        tx.commit().await.map_err(db_error::unexpected)?;
        Ok(interviewers)
    }

    async fn update(&self, interviewer: Interviewer) -> Result<Interviewer, AppError> {
        let mut tx = self.pool.begin().await.map_err(db_error::unexpected)?;

        if update_interviewer(&mut tx, &interviewer).await? == 0 {
            tx.rollback().await.map_err(db_error::unexpected)?;
            return Err(AppError::not_found(
                "Interviewer not found",
                json!({ "user_id": interviewer.user_id().as_str() }),
            ));
        }

        tx.commit().await.map_err(db_error::unexpected)?;
        Ok(interviewer)
    }

    async fn update_all(
        &self,
        interviewers: Vec<Interviewer>,
    ) -> Result<Vec<Interviewer>, AppError> {
        let mut tx = self.pool.begin().await.map_err(db_error::unexpected)?;

        for interviewer in &interviewers {
            if update_interviewer(&mut tx, interviewer).await? == 0 {
                tx.rollback().await.map_err(db_error::unexpected)?;
                return Err(AppError::not_found(
                    "Interviewer not found",
                    json!({ "user_id": interviewer.user_id().as_str() }),
                ));
            }
        }

        tx.commit().await.map_err(db_error::unexpected)?;
        Ok(interviewers)
    }

    async fn delete(&self, user_id: &Id) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM interviewers WHERE user_id = $1")
            .bind(user_id.as_str())
            .execute(self.pool.as_ref())
            .await
            .map_err(db_error::unexpected)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Interviewer not found",
                json!({ "user_id": user_id.as_str() }),
            ));
        }

        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &Id) -> Result<Option<Interviewer>, AppError> {
        let row = sqlx::query_as::<_, InterviewerRow>(
            r#"
            SELECT user_id, category, university_id, faculty_id,
                   created_at, created_by, updated_at, updated_by
            FROM interviewers
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(db_error::unexpected)?;

        row.map(InterviewerRow::into_entity).transpose()
    }
}
