//! University rank entity and rank level enum.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::values::{Id, ValueError};

/// Recruitment priority band assigned to a university.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankLevel {
    S,
    A,
    B,
    C,
    D,
}

impl RankLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    /// Parses a persisted rank level.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Format`] for unknown values.
    pub fn parse(raw: &str) -> Result<Self, ValueError> {
        match raw {
            "S" => Ok(Self::S),
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            _ => Err(ValueError::Format("university rank")),
        }
    }
}

/// Rank row attached to a university.
///
/// One-to-zero-or-one with [`crate::domain::entities::University`]: the
/// first (and only) row per `university_id` is authoritative. Created,
/// updated, and deleted independently of the university itself.
#[derive(Debug, Clone)]
pub struct UniversityRank {
    id: Id,
    university_id: Id,
    rank: RankLevel,
    created_at: DateTime<Utc>,
    created_by: Id,
    updated_at: DateTime<Utc>,
    updated_by: Id,
}

impl UniversityRank {
    /// Creates a new rank row for a university.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Required`] when `university_id` is empty.
    pub fn create(university_id: &str, rank: RankLevel, by: &Id) -> Result<Self, ValueError> {
        let now = Utc::now();
        Ok(Self {
            id: Id::generate(),
            university_id: Id::required(university_id, "university id")?,
            rank,
            created_at: now,
            created_by: by.clone(),
            updated_at: now,
            updated_by: by.clone(),
        })
    }

    /// Rehydrates a rank row from persisted state.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] when any persisted field fails validation,
    /// including an unknown rank value.
    pub fn restore(
        id: &str,
        university_id: &str,
        rank: &str,
        created_at: DateTime<Utc>,
        created_by: &str,
        updated_at: DateTime<Utc>,
        updated_by: &str,
    ) -> Result<Self, ValueError> {
        Ok(Self {
            id: Id::required(id, "university rank id")?,
            university_id: Id::required(university_id, "university id")?,
            rank: RankLevel::parse(rank)?,
            created_at,
            created_by: Id::required(created_by, "created by")?,
            updated_at,
            updated_by: Id::required(updated_by, "updated by")?,
        })
    }

    /// Changes the rank level; no-op when unchanged.
    pub fn change_rank(&mut self, rank: RankLevel, by: &Id) {
        if rank == self.rank {
            return;
        }
        self.rank = rank;
        self.mark_as_updated(by);
    }

    fn mark_as_updated(&mut self, by: &Id) {
        self.updated_at = Utc::now();
        self.updated_by = by.clone();
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn university_id(&self) -> &Id {
        &self.university_id
    }

    pub fn rank(&self) -> RankLevel {
        self.rank
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn created_by(&self) -> &Id {
        &self.created_by
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn updated_by(&self) -> &Id {
        &self.updated_by
    }
}

impl PartialEq for UniversityRank {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for UniversityRank {}

#[cfg(test)]
mod tests {
    use super::*;

    fn operator() -> Id {
        Id::required("operator-1", "user id").unwrap()
    }

    #[test]
    fn test_rank_level_round_trip() {
        for raw in ["S", "A", "B", "C", "D"] {
            assert_eq!(RankLevel::parse(raw).unwrap().as_str(), raw);
        }
    }

    #[test]
    fn test_rank_level_rejects_unknown() {
        assert_eq!(
            RankLevel::parse("E").unwrap_err(),
            ValueError::Format("university rank")
        );
    }

    #[test]
    fn test_create_requires_university_id() {
        assert_eq!(
            UniversityRank::create("", RankLevel::A, &operator()).unwrap_err(),
            ValueError::Required("university id")
        );
    }

    #[test]
    fn test_change_rank_same_value_is_noop() {
        let by = operator();
        let mut rank = UniversityRank::create("u-1", RankLevel::B, &by).unwrap();
        let stamped_at = rank.updated_at();

        let editor = Id::required("operator-2", "user id").unwrap();
        rank.change_rank(RankLevel::B, &editor);

        assert_eq!(rank.updated_at(), stamped_at);
        assert_eq!(rank.updated_by(), &by);
    }

    #[test]
    fn test_change_rank_stamps_audit_metadata() {
        let by = operator();
        let mut rank = UniversityRank::create("u-1", RankLevel::B, &by).unwrap();

        let editor = Id::required("operator-2", "user id").unwrap();
        rank.change_rank(RankLevel::S, &editor);

        assert_eq!(rank.rank(), RankLevel::S);
        assert_eq!(rank.updated_by(), &editor);
    }

    #[test]
    fn test_restore_rejects_corrupted_rank() {
        let now = Utc::now();
        assert!(
            UniversityRank::restore("r-1", "u-1", "X", now, "op", now, "op").is_err()
        );
    }
}
