//! Best-effort user batch creation.

use std::sync::Arc;

use crate::application::require_operator;
use crate::domain::entities::{Gender, User, UserRole};
use crate::domain::repositories::UserRepository;
use crate::domain::values::Id;
use crate::error::AppError;

/// One user row in a batch request.
#[derive(Debug, Clone)]
pub struct UserBulkItem {
    pub email: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<Gender>,
    pub department_id: String,
}

/// A row that could not be created, with the reason.
#[derive(Debug, Clone)]
pub struct UserBulkFailure {
    pub email: String,
    pub reason: String,
}

/// The outcome of a best-effort batch: what was created, what failed.
#[derive(Debug, Clone)]
pub struct UserBulkOutcome {
    pub created: Vec<User>,
    pub failed: Vec<UserBulkFailure>,
}

/// Best-effort batch creation of users.
///
/// User batches come from CSV imports where one bad row must not block the
/// hundreds of good ones. Each row is attempted independently: a failure
/// (validation or duplicate email) is recorded and skipped, and only
/// successfully created users are fetched back and returned. Every failure
/// is counted — nothing is silently dropped.
pub struct UserBulkService<U: UserRepository> {
    repository: Arc<U>,
}

impl<U: UserRepository> UserBulkService<U> {
    /// Creates a new user bulk service.
    pub fn new(repository: Arc<U>) -> Self {
        Self { repository }
    }

    /// Creates a batch of users, skipping failing rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] only when the operator id itself is
    /// missing. Per-row failures never abort the batch; they are reported in
    /// the outcome.
    pub async fn create(
        &self,
        operator: Option<&str>,
        items: Vec<UserBulkItem>,
    ) -> Result<UserBulkOutcome, AppError> {
        let by = require_operator(operator)?;

        let mut created_ids: Vec<Id> = Vec::new();
        let mut failed: Vec<UserBulkFailure> = Vec::new();

        for item in items {
            match self.try_create(&item, &by).await {
                Ok(id) => created_ids.push(id),
                Err(e) => {
                    tracing::warn!(email = %item.email, error = ?e, "skipping user row");
                    failed.push(UserBulkFailure {
                        email: item.email,
                        reason: failure_reason(&e),
                    });
                }
            }
        }

        // Only rows that actually landed are fetched back and returned.
        let mut created = Vec::with_capacity(created_ids.len());
        for id in created_ids {
            if let Some(user) = self.repository.find_by_id(&id).await? {
                created.push(user);
            }
        }

        metrics::counter!("user_bulk_created_total").increment(created.len() as u64);
        metrics::counter!("user_bulk_skipped_total").increment(failed.len() as u64);

        Ok(UserBulkOutcome { created, failed })
    }

    async fn try_create(&self, item: &UserBulkItem, by: &Id) -> Result<Id, AppError> {
        let user = User::create(
            &item.email,
            item.role,
            &item.first_name,
            &item.last_name,
            item.gender,
            &item.department_id,
            by,
        )?;
        let created = self.repository.create(user).await?;
        Ok(created.id().clone())
    }
}

/// A short reason safe to echo back in the batch summary.
fn failure_reason(e: &AppError) -> String {
    match e {
        AppError::Validation { message, .. }
        | AppError::NotFound { message, .. }
        | AppError::Conflict { message, .. } => message.clone(),
        AppError::Internal { .. } => "internal error".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;
    use serde_json::json;

    fn item(email: &str) -> UserBulkItem {
        UserBulkItem {
            email: email.to_string(),
            role: UserRole::User,
            first_name: "太郎".to_string(),
            last_name: "山田".to_string(),
            gender: None,
            department_id: "dept-1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_row_is_skipped_not_fatal() {
        let mut repo = MockUserRepository::new();

        repo.expect_create()
            .withf(|u: &User| u.email().as_str() == "b@example.com")
            .times(1)
            .returning(|_| {
                Err(AppError::duplicate(
                    "This email address is already registered",
                    json!({}),
                ))
            });
        repo.expect_create()
            .withf(|u: &User| u.email().as_str() != "b@example.com")
            .times(2)
            .returning(|u| Ok(u));
        repo.expect_find_by_id().times(2).returning(|id| {
            let now = chrono::Utc::now();
            Ok(Some(
                User::restore(
                    id.as_str(),
                    "a@example.com",
                    "user",
                    "太郎",
                    "山田",
                    None,
                    "dept-1",
                    now,
                    "op-1",
                    now,
                    "op-1",
                )
                .unwrap(),
            ))
        });

        let service = UserBulkService::new(Arc::new(repo));

        let outcome = service
            .create(
                Some("op-1"),
                vec![
                    item("a@example.com"),
                    item("b@example.com"),
                    item("c@example.com"),
                ],
            )
            .await
            .unwrap();

        assert_eq!(outcome.created.len(), 2);
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].email, "b@example.com");
    }

    #[tokio::test]
    async fn test_validation_failure_is_counted_per_row() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|u| Ok(u));
        repo.expect_find_by_id().times(1).returning(|id| {
            let now = chrono::Utc::now();
            Ok(Some(
                User::restore(
                    id.as_str(),
                    "a@example.com",
                    "user",
                    "太郎",
                    "山田",
                    None,
                    "dept-1",
                    now,
                    "op-1",
                    now,
                    "op-1",
                )
                .unwrap(),
            ))
        });

        let service = UserBulkService::new(Arc::new(repo));

        let outcome = service
            .create(
                Some("op-1"),
                vec![item("a@example.com"), item("not-an-email")],
            )
            .await
            .unwrap();

        assert_eq!(outcome.created.len(), 1);
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].email, "not-an-email");
    }

    #[tokio::test]
    async fn test_empty_batch_returns_empty_outcome() {
        let service = UserBulkService::new(Arc::new(MockUserRepository::new()));

        let outcome = service.create(Some("op-1"), vec![]).await.unwrap();

        assert!(outcome.created.is_empty());
        assert!(outcome.failed.is_empty());
    }

    #[tokio::test]
    async fn test_requires_operator() {
        let service = UserBulkService::new(Arc::new(MockUserRepository::new()));

        let result = service.create(None, vec![item("a@example.com")]).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }
}
