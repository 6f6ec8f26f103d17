//! Faculty bulk creation with duplicate recovery.

use std::sync::Arc;

use serde_json::json;

use crate::application::require_operator;
use crate::domain::entities::{DeviationValue, Faculty};
use crate::domain::repositories::{DeviationValueRepository, FacultyRepository};
use crate::domain::values::Id;
use crate::error::AppError;

/// One faculty to create, with an optional deviation value.
#[derive(Debug, Clone)]
pub struct FacultyBulkItem {
    pub name: String,
    pub deviation_value: Option<i32>,
}

/// A faculty together with its deviation value, freshly re-read.
#[derive(Debug, Clone)]
pub struct FacultyWithDeviation {
    pub faculty: Faculty,
    pub deviation_value: Option<DeviationValue>,
}

/// Bulk creation of faculties under one university.
///
/// Items are attempted sequentially, each as its own write — there is no
/// shared transaction. A duplicate `(university, name)` conflict is benign:
/// the existing faculty is adopted by re-reading the authoritative row, and
/// a supplied deviation value is upserted onto it. Any other error aborts
/// the remaining items.
pub struct FacultyBulkService<F: FacultyRepository, D: DeviationValueRepository> {
    faculty_repository: Arc<F>,
    deviation_value_repository: Arc<D>,
}

impl<F: FacultyRepository, D: DeviationValueRepository> FacultyBulkService<F, D> {
    /// Creates a new faculty bulk service.
    pub fn new(faculty_repository: Arc<F>, deviation_value_repository: Arc<D>) -> Self {
        Self {
            faculty_repository,
            deviation_value_repository,
        }
    }

    /// Creates a batch of faculties, recovering from duplicate names.
    ///
    /// Results are returned in iteration order, each re-read together with
    /// its deviation value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the operator is missing or an
    /// item fails value validation. Any non-duplicate repository error for
    /// an item propagates and aborts the whole call.
    pub async fn create(
        &self,
        operator: Option<&str>,
        university_id: &str,
        items: Vec<FacultyBulkItem>,
    ) -> Result<Vec<FacultyWithDeviation>, AppError> {
        let by = require_operator(operator)?;
        let university_id = Id::required(university_id, "university id")?;

        let mut results = Vec::with_capacity(items.len());
        for item in items {
            let faculty = Faculty::create(university_id.as_str(), &item.name, &by)?;
            // The entity is consumed by the create attempt; keep the
            // normalized name for the recovery lookup.
            let lookup_name = faculty.name().as_str().to_string();

            let resolved = match self.faculty_repository.create(faculty).await {
                Ok(created) => {
                    metrics::counter!("faculty_bulk_created_total").increment(1);
                    created
                }
                Err(e) if e.is_duplicate() => {
                    tracing::warn!(
                        university_id = %university_id,
                        name = %lookup_name,
                        "faculty already registered, adopting existing row"
                    );
                    metrics::counter!("faculty_bulk_recovered_total").increment(1);
                    self.adopt_existing(&university_id, &lookup_name).await?
                }
                Err(e) => return Err(e),
            };

            let deviation_value = match item.deviation_value {
                Some(value) => Some(self.upsert_deviation(&resolved, value, &by).await?),
                None => {
                    self.deviation_value_repository
                        .find_by_faculty_id(resolved.id())
                        .await?
                }
            };

            results.push(FacultyWithDeviation {
                faculty: resolved,
                deviation_value,
            });
        }

        Ok(results)
    }

    /// Re-reads the authoritative row after a duplicate conflict.
    ///
    /// The conflicting writer may have changed other fields concurrently, so
    /// the row is always re-fetched rather than reconstructed locally.
    async fn adopt_existing(
        &self,
        university_id: &Id,
        name: &str,
    ) -> Result<Faculty, AppError> {
        self.faculty_repository
            .find_by_university_and_name(university_id, name)
            .await?
            .ok_or_else(|| {
                AppError::internal(
                    "Conflicting faculty row disappeared during recovery",
                    json!({ "university_id": university_id.as_str(), "name": name }),
                )
            })
    }

    /// Creates or updates the deviation value of a faculty.
    async fn upsert_deviation(
        &self,
        faculty: &Faculty,
        value: i32,
        by: &Id,
    ) -> Result<DeviationValue, AppError> {
        match self
            .deviation_value_repository
            .find_by_faculty_id(faculty.id())
            .await?
        {
            Some(mut existing) => {
                existing.change_value(value, by)?;
                self.deviation_value_repository.update(existing).await
            }
            None => {
                let created = DeviationValue::create(faculty.id().as_str(), value, by)?;
                self.deviation_value_repository.create(created).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockDeviationValueRepository, MockFacultyRepository};
    use chrono::Utc;

    fn restored_faculty(id: &str, university_id: &str, name: &str) -> Faculty {
        let now = Utc::now();
        Faculty::restore(id, university_id, name, now, "op-1", now, "op-1").unwrap()
    }

    fn restored_deviation(id: &str, faculty_id: &str, value: i32) -> DeviationValue {
        let now = Utc::now();
        DeviationValue::restore(id, faculty_id, value, now, "op-1", now, "op-1").unwrap()
    }

    fn item(name: &str, deviation_value: Option<i32>) -> FacultyBulkItem {
        FacultyBulkItem {
            name: name.to_string(),
            deviation_value,
        }
    }

    #[tokio::test]
    async fn test_create_all_fresh_items() {
        let mut faculty_repo = MockFacultyRepository::new();
        let mut deviation_repo = MockDeviationValueRepository::new();

        faculty_repo.expect_create().times(2).returning(|f| Ok(f));
        deviation_repo
            .expect_find_by_faculty_id()
            .times(2)
            .returning(|_| Ok(None));
        deviation_repo
            .expect_create()
            .withf(|dv| dv.value().value() == 60)
            .times(1)
            .returning(|dv| Ok(dv));

        let service = FacultyBulkService::new(Arc::new(faculty_repo), Arc::new(deviation_repo));

        let results = service
            .create(
                Some("op-1"),
                "u-1",
                vec![item("法学部", Some(60)), item("文学部", None)],
            )
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].faculty.name().as_str(), "法学部");
        assert_eq!(results[0].deviation_value.as_ref().unwrap().value().value(), 60);
        assert!(results[1].deviation_value.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_item_adopts_existing_row_and_updates_deviation() {
        let mut faculty_repo = MockFacultyRepository::new();
        let mut deviation_repo = MockDeviationValueRepository::new();

        // Items 1 and 3 create fresh rows; item 2 hits the unique constraint.
        faculty_repo
            .expect_create()
            .withf(|f: &Faculty| f.name().as_str() != "法学部")
            .times(2)
            .returning(|f| Ok(f));
        faculty_repo
            .expect_create()
            .withf(|f: &Faculty| f.name().as_str() == "法学部")
            .times(1)
            .returning(|_| {
                Err(AppError::duplicate(
                    "This faculty name is already registered",
                    json!({}),
                ))
            });
        faculty_repo
            .expect_find_by_university_and_name()
            .withf(|_, name| name == "法学部")
            .times(1)
            .returning(|_, _| Ok(Some(restored_faculty("f-existing", "u-1", "法学部"))));

        // Existing faculty already has a deviation value: updated in place.
        deviation_repo
            .expect_find_by_faculty_id()
            .withf(|id: &Id| id.as_str() == "f-existing")
            .times(1)
            .returning(|_| Ok(Some(restored_deviation("dv-1", "f-existing", 55))));
        deviation_repo
            .expect_update()
            .withf(|dv| dv.id().as_str() == "dv-1" && dv.value().value() == 62)
            .times(1)
            .returning(|dv| Ok(dv));
        deviation_repo.expect_create().times(0);
        deviation_repo
            .expect_find_by_faculty_id()
            .withf(|id: &Id| id.as_str() != "f-existing")
            .times(2)
            .returning(|_| Ok(None));

        let service = FacultyBulkService::new(Arc::new(faculty_repo), Arc::new(deviation_repo));

        let results = service
            .create(
                Some("op-1"),
                "u-1",
                vec![
                    item("経済学部", None),
                    item("法学部", Some(62)),
                    item("文学部", None),
                ],
            )
            .await
            .unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[1].faculty.id().as_str(), "f-existing");
        assert_eq!(results[1].deviation_value.as_ref().unwrap().value().value(), 62);
    }

    #[tokio::test]
    async fn test_non_recoverable_error_aborts_whole_call() {
        let mut faculty_repo = MockFacultyRepository::new();
        let deviation_repo = MockDeviationValueRepository::new();

        // Missing parent university is a NotFound, not a duplicate — no
        // recovery, no further items attempted.
        faculty_repo.expect_create().times(1).returning(|_| {
            Err(AppError::not_found(
                "University not found",
                json!({ "id": "u-404" }),
            ))
        });
        faculty_repo.expect_find_by_university_and_name().times(0);

        let service = FacultyBulkService::new(Arc::new(faculty_repo), Arc::new(deviation_repo));

        let result = service
            .create(
                Some("op-1"),
                "u-404",
                vec![item("法学部", None), item("文学部", None)],
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_recovery_with_vanished_row_is_internal_error() {
        let mut faculty_repo = MockFacultyRepository::new();
        let deviation_repo = MockDeviationValueRepository::new();

        faculty_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::duplicate("already registered", json!({}))));
        faculty_repo
            .expect_find_by_university_and_name()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = FacultyBulkService::new(Arc::new(faculty_repo), Arc::new(deviation_repo));

        let result = service
            .create(Some("op-1"), "u-1", vec![item("法学部", None)])
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_requires_operator() {
        let service = FacultyBulkService::new(
            Arc::new(MockFacultyRepository::new()),
            Arc::new(MockDeviationValueRepository::new()),
        );

        let result = service.create(None, "u-1", vec![item("法学部", None)]).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }
}
