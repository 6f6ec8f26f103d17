//! Handlers for user management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::users::{
    CreateUserRequest, UpdateUserRequest, UserBulkFailureItem, UserBulkRequest, UserBulkResponse,
    UserResponse,
};
use crate::api::extract::OperatorId;
use crate::application::bulk::UserBulkItem;
use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;

fn user_to_response(user: User) -> UserResponse {
    UserResponse {
        id: user.id().as_str().to_string(),
        email: user.email().as_str().to_string(),
        role: user.role(),
        first_name: user.first_name().as_str().to_string(),
        last_name: user.last_name().as_str().to_string(),
        gender: user.gender(),
        department_id: user.department_id().as_str().to_string(),
        created_at: user.created_at(),
        updated_at: user.updated_at(),
    }
}

/// Creates a user.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Errors
///
/// Returns 400 if the email is already registered.
/// Returns 404 if the department does not exist.
pub async fn create_user_handler(
    State(state): State<AppState>,
    operator: OperatorId,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = state
        .user_service
        .create(
            operator.as_deref(),
            &payload.email,
            payload.role,
            &payload.first_name,
            &payload.last_name,
            payload.gender,
            &payload.department_id,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(user_to_response(user))))
}

/// Updates a user.
///
/// # Endpoint
///
/// `PUT /api/users/{id}`
pub async fn update_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    operator: OperatorId,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .user_service
        .update(
            operator.as_deref(),
            &id,
            &payload.email,
            payload.role,
            &payload.first_name,
            &payload.last_name,
            payload.gender,
            &payload.department_id,
        )
        .await?;

    Ok(Json(user_to_response(user)))
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /api/users/{id}`
pub async fn delete_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Retrieves a user.
///
/// # Endpoint
///
/// `GET /api/users/{id}`
pub async fn get_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.get(&id).await?;
    Ok(Json(user_to_response(user)))
}

/// Creates a batch of users, best-effort.
///
/// Rows that fail (bad values, duplicate email) are skipped and counted;
/// the rest are created. The response reports both sides.
///
/// # Endpoint
///
/// `POST /api/users/bulk`
pub async fn bulk_create_user_handler(
    State(state): State<AppState>,
    operator: OperatorId,
    Json(payload): Json<UserBulkRequest>,
) -> Result<(StatusCode, Json<UserBulkResponse>), AppError> {
    payload
        .validate()
        .map_err(|e| AppError::bad_request("Invalid request", json!({ "errors": e.to_string() })))?;

    let items = payload
        .users
        .into_iter()
        .map(|u| UserBulkItem {
            email: u.email,
            role: u.role,
            first_name: u.first_name,
            last_name: u.last_name,
            gender: u.gender,
            department_id: u.department_id,
        })
        .collect();

    let outcome = state
        .user_bulk_service
        .create(operator.as_deref(), items)
        .await?;

    let created: Vec<UserResponse> = outcome.created.into_iter().map(user_to_response).collect();
    let failed: Vec<UserBulkFailureItem> = outcome
        .failed
        .into_iter()
        .map(|f| UserBulkFailureItem {
            email: f.email,
            reason: f.reason,
        })
        .collect();

    Ok((
        StatusCode::CREATED,
        Json(UserBulkResponse {
            created_count: created.len(),
            failed_count: failed.len(),
            created,
            failed,
        }),
    ))
}
