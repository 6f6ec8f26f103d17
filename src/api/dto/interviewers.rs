//! DTOs for interviewer management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::InterviewerCategory;

#[derive(Debug, Deserialize)]
pub struct CreateInterviewerRequest {
    pub user_id: String,
    pub category: InterviewerCategory,
    pub university_id: Option<String>,
    pub faculty_id: Option<String>,
}

/// Full-replace update: the educational background pair is taken from the
/// request as a whole; omitting a side clears it.
#[derive(Debug, Deserialize)]
pub struct UpdateInterviewerRequest {
    pub category: InterviewerCategory,
    pub university_id: Option<String>,
    pub faculty_id: Option<String>,
}

/// All-or-nothing batch payload.
#[derive(Debug, Deserialize, Validate)]
pub struct InterviewerBulkRequest {
    #[validate(length(min = 1, message = "at least one interviewer is required"))]
    pub interviewers: Vec<InterviewerBulkRequestItem>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct InterviewerBulkRequestItem {
    pub user_id: String,
    pub category: InterviewerCategory,
    pub university_id: Option<String>,
    pub faculty_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InterviewerResponse {
    pub user_id: String,
    pub category: InterviewerCategory,
    pub university_id: Option<String>,
    pub faculty_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct InterviewerBulkResponse {
    pub interviewers: Vec<InterviewerResponse>,
}
