//! University bulk creation with duplicate recovery.

use std::sync::Arc;

use serde_json::json;

use crate::application::bulk::{FacultyBulkItem, FacultyBulkService, FacultyWithDeviation};
use crate::application::require_operator;
use crate::domain::entities::{RankLevel, University, UniversityRank};
use crate::domain::repositories::{
    DeviationValueRepository, FacultyRepository, UniversityRankRepository, UniversityRepository,
};
use crate::domain::values::Id;
use crate::error::AppError;

/// Input for one bulk university creation.
#[derive(Debug, Clone)]
pub struct UniversityBulkInput {
    pub name: String,
    pub rank: Option<RankLevel>,
    pub faculties: Vec<FacultyBulkItem>,
}

/// The university, its resolved rank, and the faculty results.
#[derive(Debug, Clone)]
pub struct UniversityBulkResult {
    pub university: University,
    pub rank: Option<UniversityRank>,
    pub faculties: Vec<FacultyWithDeviation>,
}

/// Bulk creation of a university with its rank and faculties.
///
/// The university is found-or-created by name: a duplicate conflict adopts
/// the existing row instead of failing, which makes re-running a partially
/// imported batch safe. When both the university and a rank are new they are
/// committed in one storage transaction. When `rank` is omitted an existing
/// rank row is left untouched — unlike the single-record update path, which
/// deletes it. Faculties are delegated to [`FacultyBulkService`].
pub struct UniversityBulkService<U, R, F, D>
where
    U: UniversityRepository,
    R: UniversityRankRepository,
    F: FacultyRepository,
    D: DeviationValueRepository,
{
    university_repository: Arc<U>,
    rank_repository: Arc<R>,
    faculty_bulk_service: Arc<FacultyBulkService<F, D>>,
}

impl<U, R, F, D> UniversityBulkService<U, R, F, D>
where
    U: UniversityRepository,
    R: UniversityRankRepository,
    F: FacultyRepository,
    D: DeviationValueRepository,
{
    /// Creates a new university bulk service.
    pub fn new(
        university_repository: Arc<U>,
        rank_repository: Arc<R>,
        faculty_bulk_service: Arc<FacultyBulkService<F, D>>,
    ) -> Self {
        Self {
            university_repository,
            rank_repository,
            faculty_bulk_service,
        }
    }

    /// Creates a university with rank and faculties as one logical unit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the operator or name is
    /// missing. Any non-duplicate repository error aborts the call.
    pub async fn create(
        &self,
        operator: Option<&str>,
        input: UniversityBulkInput,
    ) -> Result<UniversityBulkResult, AppError> {
        let by = require_operator(operator)?;

        let candidate = University::create(&input.name, &by)?;
        let lookup_name = candidate.name().as_str().to_string();

        let (university, rank) = match input.rank {
            Some(level) => {
                let rank_row = UniversityRank::create(candidate.id().as_str(), level, &by)?;
                match self
                    .university_repository
                    .create_with_rank(candidate, rank_row)
                    .await
                {
                    Ok((university, rank_row)) => {
                        metrics::counter!("university_bulk_created_total").increment(1);
                        (university, Some(rank_row))
                    }
                    Err(e) if e.is_duplicate() => {
                        let existing = self.adopt_existing(&lookup_name).await?;
                        let rank_row = self.upsert_rank(&existing, level, &by).await?;
                        (existing, Some(rank_row))
                    }
                    Err(e) => return Err(e),
                }
            }
            None => {
                let (university, adopted) =
                    match self.university_repository.create(candidate).await {
                        Ok(university) => {
                            metrics::counter!("university_bulk_created_total").increment(1);
                            (university, false)
                        }
                        Err(e) if e.is_duplicate() => {
                            (self.adopt_existing(&lookup_name).await?, true)
                        }
                        Err(e) => return Err(e),
                    };
                // Rank omitted: never delete, only report what is there.
                let rank = if adopted {
                    self.rank_repository
                        .find_by_university_id(university.id())
                        .await?
                } else {
                    None
                };
                (university, rank)
            }
        };

        let faculties = self
            .faculty_bulk_service
            .create(Some(by.as_str()), university.id().as_str(), input.faculties)
            .await?;

        Ok(UniversityBulkResult {
            university,
            rank,
            faculties,
        })
    }

    /// Re-reads the authoritative row after a duplicate-name conflict.
    async fn adopt_existing(&self, name: &str) -> Result<University, AppError> {
        tracing::warn!(%name, "university already registered, adopting existing row");
        metrics::counter!("university_bulk_recovered_total").increment(1);
        self.university_repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| {
                AppError::internal(
                    "Conflicting university row disappeared during recovery",
                    json!({ "name": name }),
                )
            })
    }

    /// Creates or updates the rank row of a university.
    async fn upsert_rank(
        &self,
        university: &University,
        level: RankLevel,
        by: &Id,
    ) -> Result<UniversityRank, AppError> {
        match self
            .rank_repository
            .find_by_university_id(university.id())
            .await?
        {
            Some(mut existing) => {
                existing.change_rank(level, by);
                self.rank_repository.update(existing).await
            }
            None => {
                let created = UniversityRank::create(university.id().as_str(), level, by)?;
                self.rank_repository.create(created).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{
        MockDeviationValueRepository, MockFacultyRepository, MockUniversityRankRepository,
        MockUniversityRepository,
    };
    use chrono::Utc;

    fn restored_university(id: &str, name: &str) -> University {
        let now = Utc::now();
        University::restore(id, name, now, "op-1", now, "op-1").unwrap()
    }

    fn restored_rank(id: &str, university_id: &str, rank: &str) -> UniversityRank {
        let now = Utc::now();
        UniversityRank::restore(id, university_id, rank, now, "op-1", now, "op-1").unwrap()
    }

    fn service(
        university_repo: MockUniversityRepository,
        rank_repo: MockUniversityRankRepository,
        faculty_repo: MockFacultyRepository,
        deviation_repo: MockDeviationValueRepository,
    ) -> UniversityBulkService<
        MockUniversityRepository,
        MockUniversityRankRepository,
        MockFacultyRepository,
        MockDeviationValueRepository,
    > {
        UniversityBulkService::new(
            Arc::new(university_repo),
            Arc::new(rank_repo),
            Arc::new(FacultyBulkService::new(
                Arc::new(faculty_repo),
                Arc::new(deviation_repo),
            )),
        )
    }

    fn input(
        name: &str,
        rank: Option<RankLevel>,
        faculties: Vec<FacultyBulkItem>,
    ) -> UniversityBulkInput {
        UniversityBulkInput {
            name: name.to_string(),
            rank,
            faculties,
        }
    }

    #[tokio::test]
    async fn test_create_new_university_with_rank_is_transactional() {
        let mut university_repo = MockUniversityRepository::new();
        let rank_repo = MockUniversityRankRepository::new();

        university_repo
            .expect_create_with_rank()
            .withf(|u, r| u.name().as_str() == "東京大学" && r.rank() == RankLevel::S)
            .times(1)
            .returning(|u, r| Ok((u, r)));
        university_repo.expect_create().times(0);

        let service = service(
            university_repo,
            rank_repo,
            MockFacultyRepository::new(),
            MockDeviationValueRepository::new(),
        );

        let result = service
            .create(Some("op-1"), input("東京大学", Some(RankLevel::S), vec![]))
            .await
            .unwrap();

        assert_eq!(result.university.name().as_str(), "東京大学");
        assert_eq!(result.rank.unwrap().rank(), RankLevel::S);
        assert!(result.faculties.is_empty());
    }

    #[tokio::test]
    async fn test_existing_name_adopts_existing_university() {
        let mut university_repo = MockUniversityRepository::new();
        let mut rank_repo = MockUniversityRankRepository::new();

        university_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::duplicate("already registered", json!({}))));
        university_repo
            .expect_find_by_name()
            .withf(|name| name == "東京大学")
            .times(1)
            .returning(|_| Ok(Some(restored_university("u-existing", "東京大学"))));

        rank_repo
            .expect_find_by_university_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(
            university_repo,
            rank_repo,
            MockFacultyRepository::new(),
            MockDeviationValueRepository::new(),
        );

        let result = service
            .create(Some("op-1"), input("東京大学", None, vec![]))
            .await
            .unwrap();

        // The existing row's id is adopted; no duplicate is created.
        assert_eq!(result.university.id().as_str(), "u-existing");
    }

    #[tokio::test]
    async fn test_rank_provided_for_adopted_university_updates_in_place() {
        let mut university_repo = MockUniversityRepository::new();
        let mut rank_repo = MockUniversityRankRepository::new();

        university_repo
            .expect_create_with_rank()
            .times(1)
            .returning(|_, _| Err(AppError::duplicate("already registered", json!({}))));
        university_repo
            .expect_find_by_name()
            .times(1)
            .returning(|_| Ok(Some(restored_university("u-existing", "東京大学"))));

        rank_repo
            .expect_find_by_university_id()
            .times(1)
            .returning(|_| Ok(Some(restored_rank("r-1", "u-existing", "B"))));
        rank_repo
            .expect_update()
            .withf(|r| r.id().as_str() == "r-1" && r.rank() == RankLevel::A)
            .times(1)
            .returning(|r| Ok(r));
        rank_repo.expect_create().times(0);

        let service = service(
            university_repo,
            rank_repo,
            MockFacultyRepository::new(),
            MockDeviationValueRepository::new(),
        );

        let result = service
            .create(Some("op-1"), input("東京大学", Some(RankLevel::A), vec![]))
            .await
            .unwrap();

        assert_eq!(result.rank.unwrap().rank(), RankLevel::A);
    }

    #[tokio::test]
    async fn test_rank_omitted_leaves_existing_rank_untouched() {
        let mut university_repo = MockUniversityRepository::new();
        let mut rank_repo = MockUniversityRankRepository::new();

        university_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::duplicate("already registered", json!({}))));
        university_repo
            .expect_find_by_name()
            .times(1)
            .returning(|_| Ok(Some(restored_university("u-existing", "東京大学"))));

        // The existing rank is only read back, never updated or deleted.
        rank_repo
            .expect_find_by_university_id()
            .times(1)
            .returning(|_| Ok(Some(restored_rank("r-1", "u-existing", "B"))));
        rank_repo.expect_update().times(0);
        rank_repo.expect_delete().times(0);

        let service = service(
            university_repo,
            rank_repo,
            MockFacultyRepository::new(),
            MockDeviationValueRepository::new(),
        );

        let result = service
            .create(Some("op-1"), input("東京大学", None, vec![]))
            .await
            .unwrap();

        assert_eq!(result.rank.unwrap().rank(), RankLevel::B);
    }

    #[tokio::test]
    async fn test_faculties_are_created_under_resolved_university() {
        let mut university_repo = MockUniversityRepository::new();
        let rank_repo = MockUniversityRankRepository::new();
        let mut faculty_repo = MockFacultyRepository::new();
        let mut deviation_repo = MockDeviationValueRepository::new();

        university_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::duplicate("already registered", json!({}))));
        university_repo
            .expect_find_by_name()
            .times(1)
            .returning(|_| Ok(Some(restored_university("u-existing", "東京大学"))));

        let mut rank_repo_mock = rank_repo;
        rank_repo_mock
            .expect_find_by_university_id()
            .times(1)
            .returning(|_| Ok(None));

        faculty_repo
            .expect_create()
            .withf(|f| f.university_id().as_str() == "u-existing")
            .times(1)
            .returning(|f| Ok(f));
        deviation_repo
            .expect_find_by_faculty_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(
            university_repo,
            rank_repo_mock,
            faculty_repo,
            deviation_repo,
        );

        let result = service
            .create(
                Some("op-1"),
                input(
                    "東京大学",
                    None,
                    vec![FacultyBulkItem {
                        name: "法学部".to_string(),
                        deviation_value: None,
                    }],
                ),
            )
            .await
            .unwrap();

        assert_eq!(result.faculties.len(), 1);
        assert_eq!(
            result.faculties[0].faculty.university_id().as_str(),
            "u-existing"
        );
    }

    #[tokio::test]
    async fn test_non_duplicate_error_aborts() {
        let mut university_repo = MockUniversityRepository::new();

        university_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));
        university_repo.expect_find_by_name().times(0);

        let service = service(
            university_repo,
            MockUniversityRankRepository::new(),
            MockFacultyRepository::new(),
            MockDeviationValueRepository::new(),
        );

        let result = service
            .create(Some("op-1"), input("東京大学", None, vec![]))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_requires_operator() {
        let service = service(
            MockUniversityRepository::new(),
            MockUniversityRankRepository::new(),
            MockFacultyRepository::new(),
            MockDeviationValueRepository::new(),
        );

        let result = service.create(None, input("東京大学", None, vec![])).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }
}
