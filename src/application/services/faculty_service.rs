//! Single-record faculty management service.

use std::sync::Arc;

use serde_json::json;

use crate::application::require_operator;
use crate::domain::entities::Faculty;
use crate::domain::repositories::FacultyRepository;
use crate::domain::values::Id;
use crate::error::AppError;

/// Service for creating, updating, and deleting single faculties.
pub struct FacultyService<F: FacultyRepository> {
    repository: Arc<F>,
}

impl<F: FacultyRepository> FacultyService<F> {
    /// Creates a new faculty service.
    pub fn new(repository: Arc<F>) -> Self {
        Self { repository }
    }

    /// Creates a faculty under a university.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the name is already registered
    /// for the university, [`AppError::NotFound`] when the university does
    /// not exist.
    pub async fn create(
        &self,
        operator: Option<&str>,
        university_id: &str,
        name: &str,
    ) -> Result<Faculty, AppError> {
        let by = require_operator(operator)?;
        let faculty = Faculty::create(university_id, name, &by)?;
        self.repository.create(faculty).await
    }

    /// Renames a faculty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the faculty does not exist.
    pub async fn update(
        &self,
        operator: Option<&str>,
        id: &str,
        name: &str,
    ) -> Result<Faculty, AppError> {
        let by = require_operator(operator)?;
        let id = Id::required(id, "faculty id")?;

        let mut faculty = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Faculty not found", json!({ "id": id.as_str() }))
            })?;

        faculty.change_name(name, &by)?;
        self.repository.update(faculty).await
    }

    /// Deletes a faculty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the faculty does not exist.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = Id::required(id, "faculty id")?;
        self.repository.delete(&id).await
    }

    /// Retrieves a faculty by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the faculty does not exist.
    pub async fn get(&self, id: &str) -> Result<Faculty, AppError> {
        let id = Id::required(id, "faculty id")?;
        self.repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::not_found("Faculty not found", json!({ "id": id.as_str() })))
    }
}
