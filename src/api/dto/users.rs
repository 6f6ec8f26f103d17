//! DTOs for user management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Gender, UserRole};

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<Gender>,
    pub department_id: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<Gender>,
    pub department_id: String,
}

/// Best-effort batch payload, typically sourced from a CSV import.
#[derive(Debug, Deserialize, Validate)]
pub struct UserBulkRequest {
    #[validate(length(min = 1, message = "at least one user is required"))]
    pub users: Vec<UserBulkRequestItem>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UserBulkRequestItem {
    pub email: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<Gender>,
    pub department_id: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<Gender>,
    pub department_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Mixed-outcome summary: created rows and counted failures.
#[derive(Debug, Serialize)]
pub struct UserBulkResponse {
    pub created: Vec<UserResponse>,
    pub failed: Vec<UserBulkFailureItem>,
    pub created_count: usize,
    pub failed_count: usize,
}

#[derive(Debug, Serialize)]
pub struct UserBulkFailureItem {
    pub email: String,
    pub reason: String,
}
