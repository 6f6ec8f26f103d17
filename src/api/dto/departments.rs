//! DTOs for department management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateDepartmentRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateDepartmentRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct DepartmentResponse {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
