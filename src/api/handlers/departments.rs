//! Handlers for department management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::departments::{
    CreateDepartmentRequest, DepartmentResponse, UpdateDepartmentRequest,
};
use crate::api::extract::OperatorId;
use crate::domain::entities::Department;
use crate::error::AppError;
use crate::state::AppState;

fn department_to_response(department: Department) -> DepartmentResponse {
    DepartmentResponse {
        id: department.id().as_str().to_string(),
        name: department.name().as_str().to_string(),
        created_at: department.created_at(),
        updated_at: department.updated_at(),
    }
}

/// Creates a department.
///
/// # Endpoint
///
/// `POST /api/departments`
pub async fn create_department_handler(
    State(state): State<AppState>,
    operator: OperatorId,
    Json(payload): Json<CreateDepartmentRequest>,
) -> Result<(StatusCode, Json<DepartmentResponse>), AppError> {
    let department = state
        .department_service
        .create(operator.as_deref(), &payload.name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(department_to_response(department)),
    ))
}

/// Renames a department.
///
/// # Endpoint
///
/// `PUT /api/departments/{id}`
pub async fn update_department_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    operator: OperatorId,
    Json(payload): Json<UpdateDepartmentRequest>,
) -> Result<Json<DepartmentResponse>, AppError> {
    let department = state
        .department_service
        .update(operator.as_deref(), &id, &payload.name)
        .await?;

    Ok(Json(department_to_response(department)))
}

/// Deletes a department.
///
/// # Endpoint
///
/// `DELETE /api/departments/{id}`
///
/// # Errors
///
/// Returns 400 while users still belong to the department.
/// Returns 404 if the department does not exist.
pub async fn delete_department_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.department_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Retrieves a department.
///
/// # Endpoint
///
/// `GET /api/departments/{id}`
pub async fn get_department_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DepartmentResponse>, AppError> {
    let department = state.department_service.get(&id).await?;
    Ok(Json(department_to_response(department)))
}
