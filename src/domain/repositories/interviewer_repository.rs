//! Repository trait for interviewer data access.

use crate::domain::entities::Interviewer;
use crate::domain::values::Id;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for interviewers.
///
/// The batch methods commit all rows in one transaction; interviewer batches
/// are small and curated, so the whole group succeeds or fails together.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InterviewerRepository: Send + Sync {
    /// Registers a single interviewer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] with the `Duplicate` kind when the
    /// user is already registered as an interviewer.
    /// Returns [`AppError::NotFound`] when the referenced user does not
    /// exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, interviewer: Interviewer) -> Result<Interviewer, AppError>;

    /// Registers a batch of interviewers in one transaction.
    ///
    /// Any failing row rolls back the whole batch.
    ///
    /// # Errors
    ///
    /// Same classification as [`Self::create`], applied to the first failing
    /// row.
    async fn create_all(
        &self,
        interviewers: Vec<Interviewer>,
    ) -> Result<Vec<Interviewer>, AppError>;

    /// Updates a single interviewer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no row matches the user id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, interviewer: Interviewer) -> Result<Interviewer, AppError>;

    /// Updates a batch of interviewers in one transaction.
    ///
    /// Any failing row rolls back the whole batch.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when any row is missing.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_all(
        &self,
        interviewers: Vec<Interviewer>,
    ) -> Result<Vec<Interviewer>, AppError>;

    /// Removes an interviewer by user id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no row matches the user id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, user_id: &Id) -> Result<(), AppError>;

    /// Finds an interviewer by user id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_user_id(&self, user_id: &Id) -> Result<Option<Interviewer>, AppError>;
}
