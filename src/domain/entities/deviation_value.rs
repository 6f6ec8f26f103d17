//! Deviation value entity.

use chrono::{DateTime, Utc};

use crate::domain::values::{DeviationScore, Id, ValueError};

/// The deviation value (hensachi) recorded for a faculty.
///
/// At most one row exists per faculty — storage enforces a unique constraint
/// on `faculty_id`, and the single-record create path additionally checks
/// existence before insert so the violation never surfaces as a generic
/// error.
#[derive(Debug, Clone)]
pub struct DeviationValue {
    id: Id,
    faculty_id: Id,
    value: DeviationScore,
    created_at: DateTime<Utc>,
    created_by: Id,
    updated_at: DateTime<Utc>,
    updated_by: Id,
}

impl DeviationValue {
    /// Creates a new deviation value for a faculty.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Required`] when `faculty_id` is empty and
    /// [`ValueError::OutOfRange`] when `value` is outside `[0, 100]`.
    pub fn create(faculty_id: &str, value: i32, by: &Id) -> Result<Self, ValueError> {
        let now = Utc::now();
        Ok(Self {
            id: Id::generate(),
            faculty_id: Id::required(faculty_id, "faculty id")?,
            value: DeviationScore::required(value, "deviation value")?,
            created_at: now,
            created_by: by.clone(),
            updated_at: now,
            updated_by: by.clone(),
        })
    }

    /// Rehydrates a deviation value from persisted state.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] when any persisted field fails validation,
    /// including an out-of-range stored value.
    pub fn restore(
        id: &str,
        faculty_id: &str,
        value: i32,
        created_at: DateTime<Utc>,
        created_by: &str,
        updated_at: DateTime<Utc>,
        updated_by: &str,
    ) -> Result<Self, ValueError> {
        Ok(Self {
            id: Id::required(id, "deviation value id")?,
            faculty_id: Id::required(faculty_id, "faculty id")?,
            value: DeviationScore::required(value, "deviation value")?,
            created_at,
            created_by: Id::required(created_by, "created by")?,
            updated_at,
            updated_by: Id::required(updated_by, "updated by")?,
        })
    }

    /// Changes the value; no-op when unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::OutOfRange`] for values outside `[0, 100]`; no
    /// field is mutated on failure.
    pub fn change_value(&mut self, value: i32, by: &Id) -> Result<(), ValueError> {
        let value = DeviationScore::required(value, "deviation value")?;
        if value == self.value {
            return Ok(());
        }
        self.value = value;
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

    pub fn faculty_id(&self) -> &Id {
        &self.faculty_id
    }

    pub fn value(&self) -> DeviationScore {
        self.value
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

impl PartialEq for DeviationValue {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for DeviationValue {}

#[cfg(test)]
mod tests {
    use super::*;

    fn operator() -> Id {
        Id::required("operator-1", "user id").unwrap()
    }

    #[test]
    fn test_create_rejects_out_of_range_value() {
        assert!(DeviationValue::create("f-1", -1, &operator()).is_err());
        assert!(DeviationValue::create("f-1", 101, &operator()).is_err());
        assert!(DeviationValue::create("f-1", 0, &operator()).is_ok());
        assert!(DeviationValue::create("f-1", 100, &operator()).is_ok());
    }

    #[test]
    fn test_change_value_same_value_is_noop() {
        let by = operator();
        let mut dv = DeviationValue::create("f-1", 55, &by).unwrap();
        let stamped_at = dv.updated_at();

        dv.change_value(55, &Id::required("operator-2", "user id").unwrap())
            .unwrap();

        assert_eq!(dv.updated_at(), stamped_at);
        assert_eq!(dv.updated_by(), &by);
    }

    #[test]
    fn test_change_value_invalid_input_mutates_nothing() {
        let by = operator();
        let mut dv = DeviationValue::create("f-1", 55, &by).unwrap();
        let stamped_at = dv.updated_at();

        assert!(dv.change_value(150, &by).is_err());

        assert_eq!(dv.value().value(), 55);
        assert_eq!(dv.updated_at(), stamped_at);
    }

    #[test]
    fn test_change_value_stamps_audit_metadata() {
        let by = operator();
        let mut dv = DeviationValue::create("f-1", 55, &by).unwrap();

        let editor = Id::required("operator-2", "user id").unwrap();
        dv.change_value(60, &editor).unwrap();

        assert_eq!(dv.value().value(), 60);
        assert_eq!(dv.updated_by(), &editor);
    }
}
