//! Single-record user management service.

use std::sync::Arc;

use serde_json::json;

use crate::application::require_operator;
use crate::domain::entities::{Gender, User, UserRole};
use crate::domain::repositories::UserRepository;
use crate::domain::values::Id;
use crate::error::AppError;

/// Service for creating and maintaining single user accounts.
pub struct UserService<U: UserRepository> {
    repository: Arc<U>,
}

impl<U: UserRepository> UserService<U> {
    /// Creates a new user service.
    pub fn new(repository: Arc<U>) -> Self {
        Self { repository }
    }

    /// Creates a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the email is already registered,
    /// [`AppError::NotFound`] when the department does not exist.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        operator: Option<&str>,
        email: &str,
        role: UserRole,
        first_name: &str,
        last_name: &str,
        gender: Option<Gender>,
        department_id: &str,
    ) -> Result<User, AppError> {
        let by = require_operator(operator)?;
        let user = User::create(email, role, first_name, last_name, gender, department_id, &by)?;
        self.repository.create(user).await
    }

    /// Updates a user's account fields and profile.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the user does not exist.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        operator: Option<&str>,
        id: &str,
        email: &str,
        role: UserRole,
        first_name: &str,
        last_name: &str,
        gender: Option<Gender>,
        department_id: &str,
    ) -> Result<User, AppError> {
        let by = require_operator(operator)?;
        let id = Id::required(id, "user id")?;

        let mut user = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "id": id.as_str() })))?;

        user.change_email(email, &by)?;
        user.change_role(role, &by);
        user.update_profile(first_name, last_name, gender, &by)?;
        user.change_department(department_id, &by)?;
        self.repository.update(user).await
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the user does not exist.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = Id::required(id, "user id")?;
        self.repository.delete(&id).await
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the user does not exist.
    pub async fn get(&self, id: &str) -> Result<User, AppError> {
        let id = Id::required(id, "user id")?;
        self.repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "id": id.as_str() })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;
    use chrono::Utc;

    fn restored_user(id: &str, email: &str) -> User {
        let now = Utc::now();
        User::restore(
            id, email, "user", "太郎", "山田", None, "dept-1", now, "op-1", now, "op-1",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .withf(|u| u.email().as_str() == "taro@example.com" && u.role() == UserRole::User)
            .times(1)
            .returning(|u| Ok(u));

        let service = UserService::new(Arc::new(repo));

        let user = service
            .create(
                Some("op-1"),
                "taro@example.com",
                UserRole::User,
                "太郎",
                "山田",
                None,
                "dept-1",
            )
            .await
            .unwrap();

        assert_eq!(user.department_id().as_str(), "dept-1");
    }

    #[tokio::test]
    async fn test_create_invalid_email_fails_before_repository() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().times(0);

        let service = UserService::new(Arc::new(repo));

        let result = service
            .create(
                Some("op-1"),
                "not-an-email",
                UserRole::User,
                "太郎",
                "山田",
                None,
                "dept-1",
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_applies_all_behavior_methods() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(restored_user("user-1", "taro@example.com"))));
        repo.expect_update()
            .withf(|u| {
                u.email().as_str() == "jiro@example.com"
                    && u.role() == UserRole::Admin
                    && u.first_name().as_str() == "次郎"
                    && u.department_id().as_str() == "dept-2"
            })
            .times(1)
            .returning(|u| Ok(u));

        let service = UserService::new(Arc::new(repo));

        let user = service
            .update(
                Some("op-1"),
                "user-1",
                "jiro@example.com",
                UserRole::Admin,
                "次郎",
                "山田",
                Some(Gender::Male),
                "dept-2",
            )
            .await
            .unwrap();

        assert_eq!(user.role(), UserRole::Admin);
    }

    #[tokio::test]
    async fn test_update_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repo));

        let result = service
            .update(
                Some("op-1"),
                "user-404",
                "taro@example.com",
                UserRole::User,
                "太郎",
                "山田",
                None,
                "dept-1",
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
