//! User entity, role and gender enums.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::values::{EmailAddress, Id, Name, ValueError};

/// Authorization role of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
    Master,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Master => "master",
        }
    }

    /// Parses a persisted role.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Format`] for unknown values.
    pub fn parse(raw: &str) -> Result<Self, ValueError> {
        match raw {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            "master" => Ok(Self::Master),
            _ => Err(ValueError::Format("user role")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    /// Parses a persisted gender.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Format`] for unknown values.
    pub fn parse(raw: &str) -> Result<Self, ValueError> {
        match raw {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(ValueError::Format("gender")),
        }
    }
}

/// A user account belonging to one department.
#[derive(Debug, Clone)]
pub struct User {
    id: Id,
    email: EmailAddress,
    role: UserRole,
    first_name: Name,
    last_name: Name,
    gender: Option<Gender>,
    department_id: Id,
    created_at: DateTime<Utc>,
    created_by: Id,
    updated_at: DateTime<Utc>,
    updated_by: Id,
}

impl User {
    /// Creates a new user with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] when the email, either name, or the
    /// department id fails validation.
    pub fn create(
        email: &str,
        role: UserRole,
        first_name: &str,
        last_name: &str,
        gender: Option<Gender>,
        department_id: &str,
        by: &Id,
    ) -> Result<Self, ValueError> {
        let now = Utc::now();
        Ok(Self {
            id: Id::generate(),
            email: EmailAddress::required(email, "email address")?,
            role,
            first_name: Name::required(first_name, "first name")?,
            last_name: Name::required(last_name, "last name")?,
            gender,
            department_id: Id::required(department_id, "department id")?,
            created_at: now,
            created_by: by.clone(),
            updated_at: now,
            updated_by: by.clone(),
        })
    }

    /// Rehydrates a user from persisted state.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] when any persisted field fails validation.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: &str,
        email: &str,
        role: &str,
        first_name: &str,
        last_name: &str,
        gender: Option<&str>,
        department_id: &str,
        created_at: DateTime<Utc>,
        created_by: &str,
        updated_at: DateTime<Utc>,
        updated_by: &str,
    ) -> Result<Self, ValueError> {
        Ok(Self {
            id: Id::required(id, "user id")?,
            email: EmailAddress::required(email, "email address")?,
            role: UserRole::parse(role)?,
            first_name: Name::required(first_name, "first name")?,
            last_name: Name::required(last_name, "last name")?,
            gender: gender.map(Gender::parse).transpose()?,
            department_id: Id::required(department_id, "department id")?,
            created_at,
            created_by: Id::required(created_by, "created by")?,
            updated_at,
            updated_by: Id::required(updated_by, "updated by")?,
        })
    }

    /// Changes the email address; no-op when unchanged.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] for an invalid address; no field is mutated
    /// on failure.
    pub fn change_email(&mut self, email: &str, by: &Id) -> Result<(), ValueError> {
        let email = EmailAddress::required(email, "email address")?;
        if email == self.email {
            return Ok(());
        }
        self.email = email;
        self.mark_as_updated(by);
        Ok(())
    }

    /// Changes the role; no-op when unchanged.
    pub fn change_role(&mut self, role: UserRole, by: &Id) {
        if role == self.role {
            return;
        }
        self.role = role;
        self.mark_as_updated(by);
    }

    /// Moves the user to another department; no-op when unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Required`] when `department_id` is empty.
    pub fn change_department(&mut self, department_id: &str, by: &Id) -> Result<(), ValueError> {
        let department_id = Id::required(department_id, "department id")?;
        if department_id == self.department_id {
            return Ok(());
        }
        self.department_id = department_id;
        self.mark_as_updated(by);
        Ok(())
    }

    /// Updates name and gender together; no-op when nothing changes.
    ///
    /// Both names are validated before any field is assigned, so a bad last
    /// name cannot leave a half-applied first name behind.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] when either name is empty.
    pub fn update_profile(
        &mut self,
        first_name: &str,
        last_name: &str,
        gender: Option<Gender>,
        by: &Id,
    ) -> Result<(), ValueError> {
        let first_name = Name::required(first_name, "first name")?;
        let last_name = Name::required(last_name, "last name")?;
        if first_name == self.first_name
            && last_name == self.last_name
            && gender == self.gender
        {
            return Ok(());
        }
        self.first_name = first_name;
        self.last_name = last_name;
        self.gender = gender;
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

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn first_name(&self) -> &Name {
        &self.first_name
    }

    pub fn last_name(&self) -> &Name {
        &self.last_name
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn department_id(&self) -> &Id {
        &self.department_id
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

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

#[cfg(test)]
mod tests {
    use super::*;

    fn operator() -> Id {
        Id::required("operator-1", "user id").unwrap()
    }

    fn sample_user() -> User {
        User::create(
            "taro@example.com",
            UserRole::User,
            "太郎",
            "山田",
            Some(Gender::Male),
            "dept-1",
            &operator(),
        )
        .unwrap()
    }

    #[test]
    fn test_create_rejects_empty_names() {
        let result = User::create(
            "taro@example.com",
            UserRole::User,
            "",
            "山田",
            None,
            "dept-1",
            &operator(),
        );
        assert_eq!(result.unwrap_err(), ValueError::Required("first name"));
    }

    #[test]
    fn test_create_rejects_bad_email() {
        let result = User::create(
            "not-an-email",
            UserRole::User,
            "太郎",
            "山田",
            None,
            "dept-1",
            &operator(),
        );
        assert_eq!(result.unwrap_err(), ValueError::Format("email address"));
    }

    #[test]
    fn test_change_email_same_value_is_noop() {
        let mut user = sample_user();
        let stamped_at = user.updated_at();

        user.change_email(
            "taro@example.com",
            &Id::required("operator-2", "user id").unwrap(),
        )
        .unwrap();

        assert_eq!(user.updated_at(), stamped_at);
        assert_eq!(user.updated_by(), &operator());
    }

    #[test]
    fn test_change_role_same_value_is_noop() {
        let mut user = sample_user();
        let stamped_at = user.updated_at();

        user.change_role(UserRole::User, &Id::required("operator-2", "user id").unwrap());

        assert_eq!(user.updated_at(), stamped_at);
        assert_eq!(user.updated_by(), &operator());
    }

    #[test]
    fn test_change_role_stamps_audit_metadata() {
        let mut user = sample_user();

        let editor = Id::required("operator-2", "user id").unwrap();
        user.change_role(UserRole::Admin, &editor);

        assert_eq!(user.role(), UserRole::Admin);
        assert_eq!(user.updated_by(), &editor);
    }

    #[test]
    fn test_update_profile_noop_when_unchanged() {
        let mut user = sample_user();
        let stamped_at = user.updated_at();

        user.update_profile("太郎", "山田", Some(Gender::Male), &operator())
            .unwrap();

        assert_eq!(user.updated_at(), stamped_at);
    }

    #[test]
    fn test_update_profile_invalid_last_name_leaves_first_name_untouched() {
        let mut user = sample_user();

        assert!(user.update_profile("次郎", "", None, &operator()).is_err());

        assert_eq!(user.first_name().as_str(), "太郎");
        assert_eq!(user.last_name().as_str(), "山田");
        assert_eq!(user.gender(), Some(Gender::Male));
    }

    #[test]
    fn test_change_department_applies_and_stamps() {
        let mut user = sample_user();

        let editor = Id::required("operator-2", "user id").unwrap();
        user.change_department("dept-2", &editor).unwrap();

        assert_eq!(user.department_id().as_str(), "dept-2");
        assert_eq!(user.updated_by(), &editor);
    }

    #[test]
    fn test_role_and_gender_round_trip() {
        for raw in ["user", "admin", "master"] {
            assert_eq!(UserRole::parse(raw).unwrap().as_str(), raw);
        }
        assert!(UserRole::parse("root").is_err());

        for raw in ["male", "female", "other"] {
            assert_eq!(Gender::parse(raw).unwrap().as_str(), raw);
        }
        assert!(Gender::parse("unknown").is_err());
    }
}
