//! Repository trait for department data access.

use crate::domain::entities::Department;
use crate::domain::values::Id;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for departments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Creates a new department.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, department: Department) -> Result<Department, AppError>;

    /// Updates an existing department.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no row matches the id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, department: Department) -> Result<Department, AppError>;

    /// Deletes a department by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no row matches the id.
    /// Returns [`AppError::Conflict`] with the `DependentsExist` kind when
    /// users still belong to the department.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: &Id) -> Result<(), AppError>;

    /// Finds a department by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: &Id) -> Result<Option<Department>, AppError>;
}
