//! Department entity.

use chrono::{DateTime, Utc};

use crate::domain::values::{Id, Name, ValueError};

/// An organizational department users belong to.
///
/// Cannot be deleted while any user references it; the foreign-key rejection
/// is surfaced by the repository as a dependents-exist conflict.
#[derive(Debug, Clone)]
pub struct Department {
    id: Id,
    name: Name,
    created_at: DateTime<Utc>,
    created_by: Id,
    updated_at: DateTime<Utc>,
    updated_by: Id,
}

impl Department {
    /// Creates a new department with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Required`] when `name` is empty.
    pub fn create(name: &str, by: &Id) -> Result<Self, ValueError> {
        let now = Utc::now();
        Ok(Self {
            id: Id::generate(),
            name: Name::required(name, "department name")?,
            created_at: now,
            created_by: by.clone(),
            updated_at: now,
            updated_by: by.clone(),
        })
    }

    /// Rehydrates a department from persisted state.
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
            id: Id::required(id, "department id")?,
            name: Name::required(name, "department name")?,
            created_at,
            created_by: Id::required(created_by, "created by")?,
            updated_at,
            updated_by: Id::required(updated_by, "updated by")?,
        })
    }

    /// Renames the department; no-op when unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Required`] when `name` is empty; no field is
    /// mutated on failure.
    pub fn change_name(&mut self, name: &str, by: &Id) -> Result<(), ValueError> {
        let name = Name::required(name, "department name")?;
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

impl PartialEq for Department {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Department {}

#[cfg(test)]
mod tests {
    use super::*;

    fn operator() -> Id {
        Id::required("operator-1", "user id").unwrap()
    }

    #[test]
    fn test_create_rejects_empty_name() {
        assert_eq!(
            Department::create("", &operator()).unwrap_err(),
            ValueError::Required("department name")
        );
    }

    #[test]
    fn test_change_name_same_value_is_noop() {
        let by = operator();
        let mut department = Department::create("人事部", &by).unwrap();
        let stamped_at = department.updated_at();

        department
            .change_name("人事部", &Id::required("operator-2", "user id").unwrap())
            .unwrap();

        assert_eq!(department.updated_at(), stamped_at);
        assert_eq!(department.updated_by(), &by);
    }

    #[test]
    fn test_change_name_applies_and_stamps() {
        let by = operator();
        let mut department = Department::create("人事部", &by).unwrap();

        let editor = Id::required("operator-2", "user id").unwrap();
        department.change_name("採用企画部", &editor).unwrap();

        assert_eq!(department.name().as_str(), "採用企画部");
        assert_eq!(department.updated_by(), &editor);
    }
}
