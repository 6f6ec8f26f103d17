//! Repository trait for university data access.

use crate::domain::entities::{University, UniversityRank};
use crate::domain::values::Id;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for universities.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUniversityRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UniversityRepository: Send + Sync {
    /// Creates a new university.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] with the `Duplicate` kind when the
    /// name is already registered.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, university: University) -> Result<University, AppError>;

    /// Creates a university together with its rank row in one transaction.
    ///
    /// Either both rows are committed or neither is.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] with the `Duplicate` kind when the
    /// name is already registered.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create_with_rank(
        &self,
        university: University,
        rank: UniversityRank,
    ) -> Result<(University, UniversityRank), AppError>;

    /// Updates an existing university.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no row matches the id.
    /// Returns [`AppError::Conflict`] with the `Duplicate` kind when the new
    /// name collides with another university.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, university: University) -> Result<University, AppError>;

    /// Deletes a university by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no row matches the id.
    /// Returns [`AppError::Conflict`] with the `DependentsExist` kind when
    /// faculties still reference the university.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: &Id) -> Result<(), AppError>;

    /// Finds a university by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: &Id) -> Result<Option<University>, AppError>;

    /// Finds a university by its exact name.
    ///
    /// Used by bulk creation to adopt the existing row after a duplicate
    /// conflict.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<University>, AppError>;
}
