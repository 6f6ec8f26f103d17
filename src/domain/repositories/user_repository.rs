//! Repository trait for user data access.

use crate::domain::entities::User;
use crate::domain::values::Id;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for user accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] with the `Duplicate` kind when the
    /// email address is already registered.
    /// Returns [`AppError::NotFound`] when the referenced department does
    /// not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, user: User) -> Result<User, AppError>;

    /// Updates an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no row matches the id, or when a
    /// changed department does not exist.
    /// Returns [`AppError::Conflict`] with the `Duplicate` kind when a
    /// changed email collides with another user.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, user: User) -> Result<User, AppError>;

    /// Deletes a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no row matches the id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: &Id) -> Result<(), AppError>;

    /// Finds a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: &Id) -> Result<Option<User>, AppError>;

    /// Finds a user by email address.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
}
