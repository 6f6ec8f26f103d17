//! DTOs for university management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::RankLevel;

#[derive(Debug, Deserialize)]
pub struct CreateUniversityRequest {
    pub name: String,
    pub rank: Option<RankLevel>,
}

/// Full-replace update. Omitting `rank` deletes an existing rank row on this
/// path.
#[derive(Debug, Deserialize)]
pub struct UpdateUniversityRequest {
    pub name: String,
    pub rank: Option<RankLevel>,
}

/// Bulk creation payload: one university with its rank and faculties.
///
/// Omitting `rank` here leaves an existing rank untouched, unlike the
/// single-record update.
#[derive(Debug, Deserialize)]
pub struct UniversityBulkRequest {
    pub name: String,
    pub rank: Option<RankLevel>,
    #[serde(default)]
    pub faculties: Vec<UniversityBulkFacultyItem>,
}

#[derive(Debug, Deserialize)]
pub struct UniversityBulkFacultyItem {
    pub name: String,
    pub deviation_value: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct UniversityResponse {
    pub id: String,
    pub name: String,
    pub rank: Option<RankLevel>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct UniversityBulkResponse {
    pub university: UniversityResponse,
    pub faculties: Vec<super::faculties::FacultyResponse>,
}
