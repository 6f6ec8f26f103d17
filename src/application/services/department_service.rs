//! Single-record department management service.

use std::sync::Arc;

use serde_json::json;

use crate::application::require_operator;
use crate::domain::entities::Department;
use crate::domain::repositories::DepartmentRepository;
use crate::domain::values::Id;
use crate::error::AppError;

/// Service for creating and maintaining departments.
pub struct DepartmentService<D: DepartmentRepository> {
    repository: Arc<D>,
}

impl<D: DepartmentRepository> DepartmentService<D> {
    /// Creates a new department service.
    pub fn new(repository: Arc<D>) -> Self {
        Self { repository }
    }

    /// Creates a department.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the operator or name is missing.
    pub async fn create(
        &self,
        operator: Option<&str>,
        name: &str,
    ) -> Result<Department, AppError> {
        let by = require_operator(operator)?;
        let department = Department::create(name, &by)?;
        self.repository.create(department).await
    }

    /// Renames a department.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the department does not exist.
    pub async fn update(
        &self,
        operator: Option<&str>,
        id: &str,
        name: &str,
    ) -> Result<Department, AppError> {
        let by = require_operator(operator)?;
        let id = Id::required(id, "department id")?;

        let mut department = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Department not found", json!({ "id": id.as_str() }))
            })?;

        department.change_name(name, &by)?;
        self.repository.update(department).await
    }

    /// Deletes a department.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the department does not exist.
    /// Returns [`AppError::Conflict`] with the `DependentsExist` kind while
    /// users still belong to it.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = Id::required(id, "department id")?;
        self.repository.delete(&id).await
    }

    /// Retrieves a department by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the department does not exist.
    pub async fn get(&self, id: &str) -> Result<Department, AppError> {
        let id = Id::required(id, "department id")?;
        self.repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Department not found", json!({ "id": id.as_str() }))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConflictKind;
    use crate::domain::repositories::MockDepartmentRepository;

    #[tokio::test]
    async fn test_create_success() {
        let mut repo = MockDepartmentRepository::new();
        repo.expect_create()
            .withf(|d| d.name().as_str() == "人事部")
            .times(1)
            .returning(|d| Ok(d));

        let service = DepartmentService::new(Arc::new(repo));

        let department = service.create(Some("op-1"), "人事部").await.unwrap();

        assert_eq!(department.name().as_str(), "人事部");
    }

    #[tokio::test]
    async fn test_delete_with_dependent_users_surfaces_conflict() {
        let mut repo = MockDepartmentRepository::new();
        repo.expect_delete().times(1).returning(|_| {
            Err(AppError::dependents_exist(
                "Department is still referenced by users",
                serde_json::json!({}),
            ))
        });

        let service = DepartmentService::new(Arc::new(repo));

        let result = service.delete("dept-1").await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::Conflict {
                kind: ConflictKind::DependentsExist,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_delete_without_dependents_succeeds() {
        let mut repo = MockDepartmentRepository::new();
        repo.expect_delete().times(1).returning(|_| Ok(()));

        let service = DepartmentService::new(Arc::new(repo));

        assert!(service.delete("dept-1").await.is_ok());
    }
}
