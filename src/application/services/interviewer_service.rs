//! Single-record interviewer management service.

use std::sync::Arc;

use serde_json::json;

use crate::application::require_operator;
use crate::domain::entities::{Interviewer, InterviewerCategory};
use crate::domain::repositories::InterviewerRepository;
use crate::domain::values::Id;
use crate::error::AppError;

/// Service for registering and maintaining single interviewers.
pub struct InterviewerService<I: InterviewerRepository> {
    repository: Arc<I>,
}

impl<I: InterviewerRepository> InterviewerService<I> {
    /// Creates a new interviewer service.
    pub fn new(repository: Arc<I>) -> Self {
        Self { repository }
    }

    /// Registers an existing user as an interviewer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the user is already an
    /// interviewer, [`AppError::NotFound`] when the user does not exist.
    pub async fn create(
        &self,
        operator: Option<&str>,
        user_id: &str,
        category: InterviewerCategory,
        university_id: Option<&str>,
        faculty_id: Option<&str>,
    ) -> Result<Interviewer, AppError> {
        let by = require_operator(operator)?;
        let interviewer = Interviewer::create(user_id, category, university_id, faculty_id, &by)?;
        self.repository.create(interviewer).await
    }

    /// Updates an interviewer's category and educational background.
    ///
    /// The background pair is replaced from the request as a whole; omitting
    /// a side clears it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the user is not an interviewer.
    pub async fn update(
        &self,
        operator: Option<&str>,
        user_id: &str,
        category: InterviewerCategory,
        university_id: Option<&str>,
        faculty_id: Option<&str>,
    ) -> Result<Interviewer, AppError> {
        let by = require_operator(operator)?;
        let user_id = Id::required(user_id, "user id")?;

        let mut interviewer = self
            .repository
            .find_by_user_id(&user_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Interviewer not found",
                    json!({ "user_id": user_id.as_str() }),
                )
            })?;

        interviewer.change_category(category, &by);
        interviewer.change_educational_background(university_id, faculty_id, &by)?;
        self.repository.update(interviewer).await
    }

    /// Removes an interviewer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the user is not an interviewer.
    pub async fn delete(&self, user_id: &str) -> Result<(), AppError> {
        let user_id = Id::required(user_id, "user id")?;
        self.repository.delete(&user_id).await
    }

    /// Retrieves an interviewer by user id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the user is not an interviewer.
    pub async fn get(&self, user_id: &str) -> Result<Interviewer, AppError> {
        let user_id = Id::required(user_id, "user id")?;
        self.repository
            .find_by_user_id(&user_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Interviewer not found",
                    json!({ "user_id": user_id.as_str() }),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockInterviewerRepository;
    use chrono::Utc;

    fn restored(user_id: &str, category: &str) -> Interviewer {
        let now = Utc::now();
        Interviewer::restore(user_id, category, None, None, now, "op-1", now, "op-1").unwrap()
    }

    #[tokio::test]
    async fn test_create_success() {
        let mut repo = MockInterviewerRepository::new();
        repo.expect_create()
            .withf(|i| i.user_id().as_str() == "user-1")
            .times(1)
            .returning(|i| Ok(i));

        let service = InterviewerService::new(Arc::new(repo));

        let interviewer = service
            .create(
                Some("op-1"),
                "user-1",
                InterviewerCategory::Front,
                None,
                None,
            )
            .await
            .unwrap();

        assert_eq!(interviewer.category(), InterviewerCategory::Front);
    }

    #[tokio::test]
    async fn test_update_replaces_background() {
        let mut repo = MockInterviewerRepository::new();
        repo.expect_find_by_user_id()
            .times(1)
            .returning(|_| Ok(Some(restored("user-1", "フロント"))));
        repo.expect_update()
            .withf(|i| {
                i.category() == InterviewerCategory::FieldStaff
                    && i.university_id().map(Id::as_str) == Some("u-1")
            })
            .times(1)
            .returning(|i| Ok(i));

        let service = InterviewerService::new(Arc::new(repo));

        let interviewer = service
            .update(
                Some("op-1"),
                "user-1",
                InterviewerCategory::FieldStaff,
                Some("u-1"),
                Some("f-1"),
            )
            .await
            .unwrap();

        assert_eq!(interviewer.faculty_id().unwrap().as_str(), "f-1");
    }

    #[tokio::test]
    async fn test_update_not_found() {
        let mut repo = MockInterviewerRepository::new();
        repo.expect_find_by_user_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = InterviewerService::new(Arc::new(repo));

        let result = service
            .update(
                Some("op-1"),
                "user-404",
                InterviewerCategory::Front,
                None,
                None,
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
