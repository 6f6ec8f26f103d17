//! University entity.

use chrono::{DateTime, Utc};

use crate::domain::values::{Id, Name, ValueError};

/// A university registered in the recruitment database.
///
/// The university name is unique system-wide; the unique constraint lives in
/// storage and duplicate conflicts are recovered in the bulk orchestration
/// layer. All mutations go through behavior methods that revalidate input and
/// stamp the audit columns.
#[derive(Debug, Clone)]
pub struct University {
    id: Id,
    name: Name,
    created_at: DateTime<Utc>,
    created_by: Id,
    updated_at: DateTime<Utc>,
    updated_by: Id,
}

impl University {
    /// Creates a new university with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Required`] when `name` is empty.
    pub fn create(name: &str, by: &Id) -> Result<Self, ValueError> {
        let name = Name::required(name, "university name")?;
        let now = Utc::now();
        Ok(Self {
            id: Id::generate(),
            name,
            created_at: now,
            created_by: by.clone(),
            updated_at: now,
            updated_by: by.clone(),
        })
    }

    /// Rehydrates a university from persisted state.
    ///
    /// Runs the same validation as [`University::create`], so corrupted rows
    /// are caught on read instead of propagating silently.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] when any persisted field fails validation.
    pub fn restore(
        id: &str,
        name: &str,
        created_at: DateTime<Utc>,
        created_by: &str,
        updated_at: DateTime<Utc>,
        updated_by: &str,
    ) -> Result<Self, ValueError> {
        Ok(Self {
            id: Id::required(id, "university id")?,
            name: Name::required(name, "university name")?,
            created_at,
            created_by: Id::required(created_by, "created by")?,
            updated_at,
            updated_by: Id::required(updated_by, "updated by")?,
        })
    }

    /// Renames the university.
    ///
    /// A no-op when the new name equals the current one, so an unchanged
    /// submit does not churn the audit columns.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Required`] when `name` is empty; no field is
    /// mutated on failure.
    pub fn change_name(&mut self, name: &str, by: &Id) -> Result<(), ValueError> {
        let name = Name::required(name, "university name")?;
        if name == self.name {
            return Ok(());
        }
        self.name = name;
        self.mark_as_updated(by);
        Ok(())
    }

    fn mark_as_updated(&mut self, by: &Id) {
        self.updated_at = Utc::now();
        self.updated_by = by.clone();
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
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

// Entity identity: two universities are the same entity when their primary
// keys match, regardless of field values.
impl PartialEq for University {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for University {}

#[cfg(test)]
mod tests {
    use super::*;

    fn operator() -> Id {
        Id::required("operator-1", "user id").unwrap()
    }

    #[test]
    fn test_create_stamps_audit_metadata() {
        let by = operator();
        let university = University::create("東北大学", &by).unwrap();

        assert!(!university.id().as_str().is_empty());
        assert_eq!(university.name().as_str(), "東北大学");
        assert_eq!(university.created_by(), &by);
        assert_eq!(university.updated_by(), &by);
        assert_eq!(university.created_at(), university.updated_at());
    }

    #[test]
    fn test_create_rejects_empty_name() {
        assert_eq!(
            University::create("  ", &operator()).unwrap_err(),
            ValueError::Required("university name")
        );
    }

    #[test]
    fn test_restore_validates_persisted_state() {
        let now = Utc::now();
        assert!(University::restore("u-1", "京都大学", now, "op-1", now, "op-2").is_ok());
        assert_eq!(
            University::restore("u-1", "", now, "op-1", now, "op-2").unwrap_err(),
            ValueError::Required("university name")
        );
        assert_eq!(
            University::restore("", "京都大学", now, "op-1", now, "op-2").unwrap_err(),
            ValueError::Required("university id")
        );
    }

    #[test]
    fn test_change_name_updates_audit_metadata() {
        let by = operator();
        let mut university = University::create("東北大学", &by).unwrap();
        let before = university.updated_at();

        let editor = Id::required("operator-2", "user id").unwrap();
        university.change_name("東北学院大学", &editor).unwrap();

        assert_eq!(university.name().as_str(), "東北学院大学");
        assert_eq!(university.updated_by(), &editor);
        assert!(university.updated_at() >= before);
    }

    #[test]
    fn test_change_name_same_value_is_noop() {
        let by = operator();
        let mut university = University::create("東北大学", &by).unwrap();
        let stamped_at = university.updated_at();

        let editor = Id::required("operator-2", "user id").unwrap();
        university.change_name("東北大学", &editor).unwrap();

        assert_eq!(university.updated_at(), stamped_at);
        assert_eq!(university.updated_by(), &by);
    }

    #[test]
    fn test_change_name_invalid_input_mutates_nothing() {
        let by = operator();
        let mut university = University::create("東北大学", &by).unwrap();
        let stamped_at = university.updated_at();

        assert!(university.change_name("", &by).is_err());

        assert_eq!(university.name().as_str(), "東北大学");
        assert_eq!(university.updated_at(), stamped_at);
    }

    #[test]
    fn test_equality_is_by_id_only() {
        let now = Utc::now();
        let a = University::restore("u-1", "東京大学", now, "op", now, "op").unwrap();
        let b = University::restore("u-1", "京都大学", now, "op", now, "op").unwrap();
        let c = University::restore("u-2", "東京大学", now, "op", now, "op").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
