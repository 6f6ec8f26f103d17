//! Repository trait for deviation value data access.

use crate::domain::entities::DeviationValue;
use crate::domain::values::Id;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for faculty deviation values.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeviationValueRepository: Send + Sync {
    /// Creates a new deviation value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] with the `Duplicate` kind when the
    /// faculty already has a deviation value.
    /// Returns [`AppError::NotFound`] when the referenced faculty does not
    /// exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, deviation_value: DeviationValue) -> Result<DeviationValue, AppError>;

    /// Updates an existing deviation value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no row matches the id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, deviation_value: DeviationValue) -> Result<DeviationValue, AppError>;

    /// Deletes a deviation value by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no row matches the id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: &Id) -> Result<(), AppError>;

    /// Finds the deviation value recorded for a faculty, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_faculty_id(
        &self,
        faculty_id: &Id,
    ) -> Result<Option<DeviationValue>, AppError>;
}
