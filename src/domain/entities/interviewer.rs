//! Interviewer entity and category enum.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::values::{Id, ValueError};

/// Where an interviewer sits in the hiring funnel.
///
/// Persisted and serialized with the Japanese labels the admin UI displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterviewerCategory {
    /// First-contact interviewer (recruiting staff).
    #[serde(rename = "フロント")]
    Front,
    /// On-site employee interviewer.
    #[serde(rename = "現場社員")]
    FieldStaff,
}

impl InterviewerCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Front => "フロント",
            Self::FieldStaff => "現場社員",
        }
    }

    /// Parses a persisted category label.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Format`] for unknown labels.
    pub fn parse(raw: &str) -> Result<Self, ValueError> {
        match raw {
            "フロント" => Ok(Self::Front),
            "現場社員" => Ok(Self::FieldStaff),
            _ => Err(ValueError::Format("interviewer category")),
        }
    }
}

/// An employee who conducts interviews.
///
/// One-to-one with a user: `user_id` is both primary key and foreign key.
/// The optional university/faculty pair records the interviewer's own
/// educational background, used for alma-mater matching.
#[derive(Debug, Clone)]
pub struct Interviewer {
    user_id: Id,
    category: InterviewerCategory,
    university_id: Option<Id>,
    faculty_id: Option<Id>,
    created_at: DateTime<Utc>,
    created_by: Id,
    updated_at: DateTime<Utc>,
    updated_by: Id,
}

impl Interviewer {
    /// Registers an existing user as an interviewer.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Required`] when `user_id` or a supplied
    /// background id is empty.
    pub fn create(
        user_id: &str,
        category: InterviewerCategory,
        university_id: Option<&str>,
        faculty_id: Option<&str>,
        by: &Id,
    ) -> Result<Self, ValueError> {
        let now = Utc::now();
        Ok(Self {
            user_id: Id::required(user_id, "user id")?,
            category,
            university_id: Self::optional_id(university_id, "university id")?,
            faculty_id: Self::optional_id(faculty_id, "faculty id")?,
            created_at: now,
            created_by: by.clone(),
            updated_at: now,
            updated_by: by.clone(),
        })
    }

    /// Rehydrates an interviewer from persisted state.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] when any persisted field fails validation.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        user_id: &str,
        category: &str,
        university_id: Option<&str>,
        faculty_id: Option<&str>,
        created_at: DateTime<Utc>,
        created_by: &str,
        updated_at: DateTime<Utc>,
        updated_by: &str,
    ) -> Result<Self, ValueError> {
        Ok(Self {
            user_id: Id::required(user_id, "user id")?,
            category: InterviewerCategory::parse(category)?,
            university_id: Self::optional_id(university_id, "university id")?,
            faculty_id: Self::optional_id(faculty_id, "faculty id")?,
            created_at,
            created_by: Id::required(created_by, "created by")?,
            updated_at,
            updated_by: Id::required(updated_by, "updated by")?,
        })
    }

    /// Changes the funnel category; no-op when unchanged.
    pub fn change_category(&mut self, category: InterviewerCategory, by: &Id) {
        if category == self.category {
            return;
        }
        self.category = category;
        self.mark_as_updated(by);
    }

    /// Replaces the educational background pair; `None` clears a side.
    ///
    /// A no-op when both sides already match.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Required`] when a supplied id is empty; no
    /// field is mutated on failure.
    pub fn change_educational_background(
        &mut self,
        university_id: Option<&str>,
        faculty_id: Option<&str>,
        by: &Id,
    ) -> Result<(), ValueError> {
        let university_id = Self::optional_id(university_id, "university id")?;
        let faculty_id = Self::optional_id(faculty_id, "faculty id")?;
        if university_id == self.university_id && faculty_id == self.faculty_id {
            return Ok(());
        }
        self.university_id = university_id;
        self.faculty_id = faculty_id;
        self.mark_as_updated(by);
        Ok(())
    }

    fn optional_id(raw: Option<&str>, field: &'static str) -> Result<Option<Id>, ValueError> {
        raw.map(|value| Id::required(value, field)).transpose()
    }

    fn mark_as_updated(&mut self, by: &Id) {
        self.updated_at = Utc::now();
        self.updated_by = by.clone();
    }

    pub fn user_id(&self) -> &Id {
        &self.user_id
    }

    pub fn category(&self) -> InterviewerCategory {
        self.category
    }

    pub fn university_id(&self) -> Option<&Id> {
        self.university_id.as_ref()
    }

    pub fn faculty_id(&self) -> Option<&Id> {
        self.faculty_id.as_ref()
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

impl PartialEq for Interviewer {
    fn eq(&self, other: &Self) -> bool {
        self.user_id == other.user_id
    }
}

impl Eq for Interviewer {}

#[cfg(test)]
mod tests {
    use super::*;

    fn operator() -> Id {
        Id::required("operator-1", "user id").unwrap()
    }

    #[test]
    fn test_category_round_trip() {
        for raw in ["フロント", "現場社員"] {
            assert_eq!(InterviewerCategory::parse(raw).unwrap().as_str(), raw);
        }
        assert!(InterviewerCategory::parse("人事").is_err());
    }

    #[test]
    fn test_create_requires_user_id() {
        assert_eq!(
            Interviewer::create("", InterviewerCategory::Front, None, None, &operator())
                .unwrap_err(),
            ValueError::Required("user id")
        );
    }

    #[test]
    fn test_create_validates_supplied_background_ids() {
        assert_eq!(
            Interviewer::create(
                "user-1",
                InterviewerCategory::Front,
                Some("  "),
                None,
                &operator()
            )
            .unwrap_err(),
            ValueError::Required("university id")
        );
    }

    #[test]
    fn test_change_category_same_value_is_noop() {
        let by = operator();
        let mut interviewer =
            Interviewer::create("user-1", InterviewerCategory::Front, None, None, &by).unwrap();
        let stamped_at = interviewer.updated_at();

        interviewer.change_category(
            InterviewerCategory::Front,
            &Id::required("operator-2", "user id").unwrap(),
        );

        assert_eq!(interviewer.updated_at(), stamped_at);
        assert_eq!(interviewer.updated_by(), &by);
    }

    #[test]
    fn test_change_educational_background_noop_when_unchanged() {
        let by = operator();
        let mut interviewer = Interviewer::create(
            "user-1",
            InterviewerCategory::FieldStaff,
            Some("u-1"),
            Some("f-1"),
            &by,
        )
        .unwrap();
        let stamped_at = interviewer.updated_at();

        interviewer
            .change_educational_background(Some("u-1"), Some("f-1"), &by)
            .unwrap();

        assert_eq!(interviewer.updated_at(), stamped_at);
    }

    #[test]
    fn test_change_educational_background_clears_with_none() {
        let by = operator();
        let mut interviewer = Interviewer::create(
            "user-1",
            InterviewerCategory::FieldStaff,
            Some("u-1"),
            Some("f-1"),
            &by,
        )
        .unwrap();

        interviewer
            .change_educational_background(None, None, &by)
            .unwrap();

        assert!(interviewer.university_id().is_none());
        assert!(interviewer.faculty_id().is_none());
    }

    #[test]
    fn test_change_educational_background_invalid_input_mutates_nothing() {
        let by = operator();
        let mut interviewer = Interviewer::create(
            "user-1",
            InterviewerCategory::FieldStaff,
            Some("u-1"),
            None,
            &by,
        )
        .unwrap();
        let stamped_at = interviewer.updated_at();

        assert!(
            interviewer
                .change_educational_background(Some("u-2"), Some(""), &by)
                .is_err()
        );

        assert_eq!(interviewer.university_id().unwrap().as_str(), "u-1");
        assert_eq!(interviewer.updated_at(), stamped_at);
    }
}
