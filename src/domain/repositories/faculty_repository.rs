//! Repository trait for faculty data access.

use crate::domain::entities::Faculty;
use crate::domain::values::Id;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for faculties.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FacultyRepository: Send + Sync {
    /// Creates a new faculty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] with the `Duplicate` kind when the
    /// `(university, name)` pair is already registered.
    /// Returns [`AppError::NotFound`] when the referenced university does
    /// not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, faculty: Faculty) -> Result<Faculty, AppError>;

    /// Updates an existing faculty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no row matches the id.
    /// Returns [`AppError::Conflict`] with the `Duplicate` kind when the new
    /// name collides within the university.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, faculty: Faculty) -> Result<Faculty, AppError>;

    /// Deletes a faculty by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no row matches the id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: &Id) -> Result<(), AppError>;

    /// Finds a faculty by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: &Id) -> Result<Option<Faculty>, AppError>;

    /// Finds a faculty by its natural key `(university_id, name)`.
    ///
    /// Used by bulk creation to adopt the existing row after a duplicate
    /// conflict.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_university_and_name(
        &self,
        university_id: &Id,
        name: &str,
    ) -> Result<Option<Faculty>, AppError>;
}
