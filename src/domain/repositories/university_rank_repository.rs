//! Repository trait for university rank data access.

use crate::domain::entities::UniversityRank;
use crate::domain::values::Id;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for university rank rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UniversityRankRepository: Send + Sync {
    /// Creates a new rank row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the referenced university does
    /// not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, rank: UniversityRank) -> Result<UniversityRank, AppError>;

    /// Updates an existing rank row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no row matches the id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, rank: UniversityRank) -> Result<UniversityRank, AppError>;

    /// Deletes a rank row by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no row matches the id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: &Id) -> Result<(), AppError>;

    /// Finds the authoritative rank row for a university.
    ///
    /// When several rows exist the oldest one wins; the relationship is
    /// one-to-zero-or-one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_university_id(
        &self,
        university_id: &Id,
    ) -> Result<Option<UniversityRank>, AppError>;
}
