//! DTOs for faculty and deviation value management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct CreateFacultyRequest {
    pub university_id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFacultyRequest {
    pub name: String,
}

/// Bulk creation payload: faculties under one university.
#[derive(Debug, Deserialize, Validate)]
pub struct FacultyBulkRequest {
    pub university_id: String,
    #[validate(length(min = 1, message = "at least one faculty is required"))]
    pub faculties: Vec<FacultyBulkRequestItem>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct FacultyBulkRequestItem {
    pub name: String,
    pub deviation_value: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct DeviationValueRequest {
    pub value: i32,
}

#[derive(Debug, Serialize)]
pub struct FacultyResponse {
    pub id: String,
    pub university_id: String,
    pub name: String,
    pub deviation_value: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct FacultyBulkResponse {
    pub faculties: Vec<FacultyResponse>,
}

#[derive(Debug, Serialize)]
pub struct DeviationValueResponse {
    pub id: String,
    pub faculty_id: String,
    pub value: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
