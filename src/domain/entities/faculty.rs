//! Faculty entity.

use chrono::{DateTime, Utc};

use crate::domain::values::{Id, Name, ValueError};

/// A faculty belonging to exactly one university.
///
/// `(university_id, name)` is unique in storage; duplicate conflicts on that
/// pair are the recoverable case in faculty bulk creation.
#[derive(Debug, Clone)]
pub struct Faculty {
    id: Id,
    university_id: Id,
    name: Name,
    created_at: DateTime<Utc>,
    created_by: Id,
    updated_at: DateTime<Utc>,
    updated_by: Id,
}

impl Faculty {
    /// Creates a new faculty under a university.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Required`] when `university_id` or `name` is
    /// empty.
    pub fn create(university_id: &str, name: &str, by: &Id) -> Result<Self, ValueError> {
        let now = Utc::now();
        Ok(Self {
            id: Id::generate(),
            university_id: Id::required(university_id, "university id")?,
            name: Name::required(name, "faculty name")?,
            created_at: now,
            created_by: by.clone(),
            updated_at: now,
            updated_by: by.clone(),
        })
    }

    /// Rehydrates a faculty from persisted state.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] when any persisted field fails validation.
    pub fn restore(
        id: &str,
        university_id: &str,
        name: &str,
        created_at: DateTime<Utc>,
        created_by: &str,
        updated_at: DateTime<Utc>,
        updated_by: &str,
    ) -> Result<Self, ValueError> {
        Ok(Self {
            id: Id::required(id, "faculty id")?,
            university_id: Id::required(university_id, "university id")?,
            name: Name::required(name, "faculty name")?,
            created_at,
            created_by: Id::required(created_by, "created by")?,
            updated_at,
            updated_by: Id::required(updated_by, "updated by")?,
        })
    }

    /// Renames the faculty; no-op when the name is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Required`] when `name` is empty; no field is
    /// mutated on failure.
    pub fn change_name(&mut self, name: &str, by: &Id) -> Result<(), ValueError> {
        let name = Name::required(name, "faculty name")?;
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

    pub fn university_id(&self) -> &Id {
        &self.university_id
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

impl PartialEq for Faculty {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Faculty {}

#[cfg(test)]
mod tests {
    use super::*;

    fn operator() -> Id {
        Id::required("operator-1", "user id").unwrap()
    }

    #[test]
    fn test_create_requires_name() {
        assert_eq!(
            Faculty::create("u-1", "", &operator()).unwrap_err(),
            ValueError::Required("faculty name")
        );
    }

    #[test]
    fn test_create_requires_university_id() {
        assert_eq!(
            Faculty::create(" ", "法学部", &operator()).unwrap_err(),
            ValueError::Required("university id")
        );
    }

    #[test]
    fn test_change_name_same_value_is_noop() {
        let by = operator();
        let mut faculty = Faculty::create("u-1", "法学部", &by).unwrap();
        let stamped_at = faculty.updated_at();

        faculty
            .change_name("法学部", &Id::required("operator-2", "user id").unwrap())
            .unwrap();

        assert_eq!(faculty.updated_at(), stamped_at);
        assert_eq!(faculty.updated_by(), &by);
    }

    #[test]
    fn test_change_name_stamps_audit_metadata() {
        let by = operator();
        let mut faculty = Faculty::create("u-1", "法学部", &by).unwrap();

        let editor = Id::required("operator-2", "user id").unwrap();
        faculty.change_name("経済学部", &editor).unwrap();

        assert_eq!(faculty.name().as_str(), "経済学部");
        assert_eq!(faculty.updated_by(), &editor);
    }
}
