//! Single-record deviation value management service.

use std::sync::Arc;

use serde_json::json;

use crate::application::require_operator;
use crate::domain::entities::DeviationValue;
use crate::domain::repositories::DeviationValueRepository;
use crate::domain::values::Id;
use crate::error::AppError;

/// Service for the deviation value attached to a faculty.
///
/// At most one value exists per faculty. The create path checks existence
/// before inserting and rejects a second value with a validation error —
/// unlike the faculty bulk path, which silently updates the existing row.
/// The two entry points deliberately follow different policies.
pub struct DeviationValueService<D: DeviationValueRepository> {
    repository: Arc<D>,
}

impl<D: DeviationValueRepository> DeviationValueService<D> {
    /// Creates a new deviation value service.
    pub fn new(repository: Arc<D>) -> Self {
        Self { repository }
    }

    /// Records a deviation value for a faculty that has none yet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the faculty already has a
    /// deviation value, or when `value` is outside `[0, 100]`.
    /// Returns [`AppError::NotFound`] when the faculty does not exist.
    pub async fn create(
        &self,
        operator: Option<&str>,
        faculty_id: &str,
        value: i32,
    ) -> Result<DeviationValue, AppError> {
        let by = require_operator(operator)?;
        let faculty_id = Id::required(faculty_id, "faculty id")?;

        if self
            .repository
            .find_by_faculty_id(&faculty_id)
            .await?
            .is_some()
        {
            return Err(AppError::bad_request(
                "A deviation value is already registered for this faculty",
                json!({ "faculty_id": faculty_id.as_str() }),
            ));
        }

        let deviation_value = DeviationValue::create(faculty_id.as_str(), value, &by)?;
        self.repository.create(deviation_value).await
    }

    /// Updates the deviation value of a faculty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the faculty has no deviation
    /// value, [`AppError::Validation`] when `value` is outside `[0, 100]`.
    pub async fn update(
        &self,
        operator: Option<&str>,
        faculty_id: &str,
        value: i32,
    ) -> Result<DeviationValue, AppError> {
        let by = require_operator(operator)?;
        let faculty_id = Id::required(faculty_id, "faculty id")?;

        let mut deviation_value = self
            .repository
            .find_by_faculty_id(&faculty_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Deviation value not found",
                    json!({ "faculty_id": faculty_id.as_str() }),
                )
            })?;

        deviation_value.change_value(value, &by)?;
        self.repository.update(deviation_value).await
    }

    /// Removes the deviation value of a faculty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the faculty has no deviation
    /// value.
    pub async fn delete(&self, faculty_id: &str) -> Result<(), AppError> {
        let faculty_id = Id::required(faculty_id, "faculty id")?;

        let deviation_value = self
            .repository
            .find_by_faculty_id(&faculty_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Deviation value not found",
                    json!({ "faculty_id": faculty_id.as_str() }),
                )
            })?;

        self.repository.delete(deviation_value.id()).await
    }
}
