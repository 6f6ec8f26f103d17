//! Single-record university management service.

use std::sync::Arc;

use serde_json::json;

use crate::application::require_operator;
use crate::domain::entities::{RankLevel, University, UniversityRank};
use crate::domain::repositories::{UniversityRankRepository, UniversityRepository};
use crate::domain::values::Id;
use crate::error::AppError;

/// Service for creating, updating, and deleting single universities.
///
/// The optional rank travels with the university on this path: an update
/// that omits the rank DELETES the existing rank row. The bulk path
/// deliberately behaves differently (it never deletes ranks); both behaviors
/// are pinned by tests so a future change is a decision, not an accident.
pub struct UniversityService<U: UniversityRepository, R: UniversityRankRepository> {
    university_repository: Arc<U>,
    rank_repository: Arc<R>,
}

impl<U: UniversityRepository, R: UniversityRankRepository> UniversityService<U, R> {
    /// Creates a new university service.
    pub fn new(university_repository: Arc<U>, rank_repository: Arc<R>) -> Self {
        Self {
            university_repository,
            rank_repository,
        }
    }

    /// Creates a university, optionally with a rank.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the operator or name is missing.
    /// Returns [`AppError::Conflict`] when the name is already registered —
    /// the single-record path surfaces the duplicate instead of adopting it.
    pub async fn create(
        &self,
        operator: Option<&str>,
        name: &str,
        rank: Option<RankLevel>,
    ) -> Result<(University, Option<UniversityRank>), AppError> {
        let by = require_operator(operator)?;
        let university = University::create(name, &by)?;

        match rank {
            Some(level) => {
                let rank_row = UniversityRank::create(university.id().as_str(), level, &by)?;
                let (university, rank_row) = self
                    .university_repository
                    .create_with_rank(university, rank_row)
                    .await?;
                Ok((university, Some(rank_row)))
            }
            None => {
                let university = self.university_repository.create(university).await?;
                Ok((university, None))
            }
        }
    }

    /// Updates a university's name and rank.
    ///
    /// When `rank` is `None` any existing rank row is deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the university does not exist.
    /// Returns [`AppError::Conflict`] when the new name is already taken.
    pub async fn update(
        &self,
        operator: Option<&str>,
        id: &str,
        name: &str,
        rank: Option<RankLevel>,
    ) -> Result<(University, Option<UniversityRank>), AppError> {
        let by = require_operator(operator)?;
        let id = Id::required(id, "university id")?;

        let mut university = self
            .university_repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("University not found", json!({ "id": id.as_str() }))
            })?;

        university.change_name(name, &by)?;
        let university = self.university_repository.update(university).await?;

        let existing_rank = self.rank_repository.find_by_university_id(&id).await?;
        let rank_row = match (rank, existing_rank) {
            (Some(level), Some(mut current)) => {
                current.change_rank(level, &by);
                Some(self.rank_repository.update(current).await?)
            }
            (Some(level), None) => {
                let created = UniversityRank::create(id.as_str(), level, &by)?;
                Some(self.rank_repository.create(created).await?)
            }
            (None, Some(current)) => {
                self.rank_repository.delete(current.id()).await?;
                None
            }
            (None, None) => None,
        };

        Ok((university, rank_row))
    }

    /// Deletes a university.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the university does not exist.
    /// Returns [`AppError::Conflict`] when faculties still reference it.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = Id::required(id, "university id")?;
        self.university_repository.delete(&id).await
    }

    /// Retrieves a university together with its rank.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the university does not exist.
    pub async fn get(
        &self,
        id: &str,
    ) -> Result<(University, Option<UniversityRank>), AppError> {
        let id = Id::required(id, "university id")?;
        let university = self
            .university_repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("University not found", json!({ "id": id.as_str() }))
            })?;
        let rank = self.rank_repository.find_by_university_id(&id).await?;
        Ok((university, rank))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockUniversityRankRepository, MockUniversityRepository};
    use chrono::Utc;

    fn restored_university(id: &str, name: &str) -> University {
        let now = Utc::now();
        University::restore(id, name, now, "op-1", now, "op-1").unwrap()
    }

    fn restored_rank(id: &str, university_id: &str, rank: &str) -> UniversityRank {
        let now = Utc::now();
        UniversityRank::restore(id, university_id, rank, now, "op-1", now, "op-1").unwrap()
    }

    #[tokio::test]
    async fn test_create_without_rank() {
        let mut university_repo = MockUniversityRepository::new();
        let rank_repo = MockUniversityRankRepository::new();

        university_repo
            .expect_create()
            .withf(|u| u.name().as_str() == "東京大学")
            .times(1)
            .returning(|u| Ok(u));
        university_repo.expect_create_with_rank().times(0);

        let service = UniversityService::new(Arc::new(university_repo), Arc::new(rank_repo));

        let (university, rank) = service
            .create(Some("op-1"), "東京大学", None)
            .await
            .unwrap();

        assert_eq!(university.name().as_str(), "東京大学");
        assert!(rank.is_none());
    }

    #[tokio::test]
    async fn test_create_with_rank_uses_transactional_write() {
        let mut university_repo = MockUniversityRepository::new();
        let rank_repo = MockUniversityRankRepository::new();

        university_repo
            .expect_create_with_rank()
            .withf(|u, r| r.university_id() == u.id() && r.rank() == RankLevel::A)
            .times(1)
            .returning(|u, r| Ok((u, r)));
        university_repo.expect_create().times(0);

        let service = UniversityService::new(Arc::new(university_repo), Arc::new(rank_repo));

        let (_, rank) = service
            .create(Some("op-1"), "東京大学", Some(RankLevel::A))
            .await
            .unwrap();

        assert_eq!(rank.unwrap().rank(), RankLevel::A);
    }

    #[tokio::test]
    async fn test_create_requires_operator() {
        let service = UniversityService::new(
            Arc::new(MockUniversityRepository::new()),
            Arc::new(MockUniversityRankRepository::new()),
        );

        let result = service.create(None, "東京大学", None).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_not_found() {
        let mut university_repo = MockUniversityRepository::new();
        university_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UniversityService::new(
            Arc::new(university_repo),
            Arc::new(MockUniversityRankRepository::new()),
        );

        let result = service.update(Some("op-1"), "u-404", "新名称", None).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_with_rank_updates_existing_row_in_place() {
        let mut university_repo = MockUniversityRepository::new();
        let mut rank_repo = MockUniversityRankRepository::new();

        university_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(restored_university("u-1", "東京大学"))));
        university_repo.expect_update().times(1).returning(|u| Ok(u));

        rank_repo
            .expect_find_by_university_id()
            .times(1)
            .returning(|_| Ok(Some(restored_rank("r-1", "u-1", "B"))));
        rank_repo
            .expect_update()
            .withf(|r| r.id().as_str() == "r-1" && r.rank() == RankLevel::S)
            .times(1)
            .returning(|r| Ok(r));
        rank_repo.expect_create().times(0);
        rank_repo.expect_delete().times(0);

        let service = UniversityService::new(Arc::new(university_repo), Arc::new(rank_repo));

        let (_, rank) = service
            .update(Some("op-1"), "u-1", "東京大学", Some(RankLevel::S))
            .await
            .unwrap();

        assert_eq!(rank.unwrap().rank(), RankLevel::S);
    }

    #[tokio::test]
    async fn test_update_omitting_rank_deletes_existing_rank() {
        let mut university_repo = MockUniversityRepository::new();
        let mut rank_repo = MockUniversityRankRepository::new();

        university_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(restored_university("u-1", "東京大学"))));
        university_repo.expect_update().times(1).returning(|u| Ok(u));

        rank_repo
            .expect_find_by_university_id()
            .times(1)
            .returning(|_| Ok(Some(restored_rank("r-1", "u-1", "B"))));
        rank_repo
            .expect_delete()
            .withf(|id| id.as_str() == "r-1")
            .times(1)
            .returning(|_| Ok(()));
        rank_repo.expect_update().times(0);

        let service = UniversityService::new(Arc::new(university_repo), Arc::new(rank_repo));

        let (_, rank) = service
            .update(Some("op-1"), "u-1", "東京大学", None)
            .await
            .unwrap();

        assert!(rank.is_none());
    }

    #[tokio::test]
    async fn test_update_omitting_rank_with_no_existing_rank_is_noop() {
        let mut university_repo = MockUniversityRepository::new();
        let mut rank_repo = MockUniversityRankRepository::new();

        university_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(restored_university("u-1", "東京大学"))));
        university_repo.expect_update().times(1).returning(|u| Ok(u));

        rank_repo
            .expect_find_by_university_id()
            .times(1)
            .returning(|_| Ok(None));
        rank_repo.expect_delete().times(0);
        rank_repo.expect_create().times(0);

        let service = UniversityService::new(Arc::new(university_repo), Arc::new(rank_repo));

        let (_, rank) = service
            .update(Some("op-1"), "u-1", "東京大学", None)
            .await
            .unwrap();

        assert!(rank.is_none());
    }

    #[tokio::test]
    async fn test_create_duplicate_name_surfaces_conflict() {
        let mut university_repo = MockUniversityRepository::new();
        university_repo.expect_create().times(1).returning(|_| {
            Err(AppError::duplicate(
                "This university name is already registered",
                serde_json::json!({}),
            ))
        });

        let service = UniversityService::new(
            Arc::new(university_repo),
            Arc::new(MockUniversityRankRepository::new()),
        );

        let result = service.create(Some("op-1"), "東京大学", None).await;

        assert!(result.unwrap_err().is_duplicate());
    }
}
