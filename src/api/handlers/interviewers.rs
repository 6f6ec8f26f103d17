//! Handlers for interviewer management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::interviewers::{
    CreateInterviewerRequest, InterviewerBulkRequest, InterviewerBulkRequestItem,
    InterviewerBulkResponse, InterviewerResponse, UpdateInterviewerRequest,
};
use crate::api::extract::OperatorId;
use crate::application::bulk::InterviewerBulkItem;
use crate::domain::entities::Interviewer;
use crate::domain::values::Id;
use crate::error::AppError;
use crate::state::AppState;

fn interviewer_to_response(interviewer: Interviewer) -> InterviewerResponse {
    InterviewerResponse {
        user_id: interviewer.user_id().as_str().to_string(),
        category: interviewer.category(),
        university_id: interviewer.university_id().map(Id::as_str).map(str::to_string),
        faculty_id: interviewer.faculty_id().map(Id::as_str).map(str::to_string),
        created_at: interviewer.created_at(),
        updated_at: interviewer.updated_at(),
    }
}

fn to_bulk_item(item: InterviewerBulkRequestItem) -> InterviewerBulkItem {
    InterviewerBulkItem {
        user_id: item.user_id,
        category: item.category,
        university_id: item.university_id,
        faculty_id: item.faculty_id,
    }
}

/// Registers an existing user as an interviewer.
///
/// # Endpoint
///
/// `POST /api/interviewers`
///
/// # Errors
///
/// Returns 400 if the user is already an interviewer.
/// Returns 404 if the user does not exist.
pub async fn create_interviewer_handler(
    State(state): State<AppState>,
    operator: OperatorId,
    Json(payload): Json<CreateInterviewerRequest>,
) -> Result<(StatusCode, Json<InterviewerResponse>), AppError> {
    let interviewer = state
        .interviewer_service
        .create(
            operator.as_deref(),
            &payload.user_id,
            payload.category,
            payload.university_id.as_deref(),
            payload.faculty_id.as_deref(),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(interviewer_to_response(interviewer)),
    ))
}

/// Updates an interviewer's category and educational background.
///
/// # Endpoint
///
/// `PUT /api/interviewers/{user_id}`
pub async fn update_interviewer_handler(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
    operator: OperatorId,
    Json(payload): Json<UpdateInterviewerRequest>,
) -> Result<Json<InterviewerResponse>, AppError> {
    let interviewer = state
        .interviewer_service
        .update(
            operator.as_deref(),
            &user_id,
            payload.category,
            payload.university_id.as_deref(),
            payload.faculty_id.as_deref(),
        )
        .await?;

    Ok(Json(interviewer_to_response(interviewer)))
}

/// Removes an interviewer.
///
/// # Endpoint
///
/// `DELETE /api/interviewers/{user_id}`
pub async fn delete_interviewer_handler(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.interviewer_service.delete(&user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Retrieves an interviewer.
///
/// # Endpoint
///
/// `GET /api/interviewers/{user_id}`
pub async fn get_interviewer_handler(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<InterviewerResponse>, AppError> {
    let interviewer = state.interviewer_service.get(&user_id).await?;
    Ok(Json(interviewer_to_response(interviewer)))
}

/// Registers a batch of interviewers, all-or-nothing.
///
/// # Endpoint
///
/// `POST /api/interviewers/bulk`
///
/// # Errors
///
/// Any failing row rejects the whole batch.
pub async fn bulk_create_interviewer_handler(
    State(state): State<AppState>,
    operator: OperatorId,
    Json(payload): Json<InterviewerBulkRequest>,
) -> Result<(StatusCode, Json<InterviewerBulkResponse>), AppError> {
    payload
        .validate()
        .map_err(|e| AppError::bad_request("Invalid request", json!({ "errors": e.to_string() })))?;

    let created = state
        .interviewer_bulk_service
        .create(
            operator.as_deref(),
            payload.interviewers.into_iter().map(to_bulk_item).collect(),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(InterviewerBulkResponse {
            interviewers: created.into_iter().map(interviewer_to_response).collect(),
        }),
    ))
}

/// Updates a batch of interviewers, all-or-nothing.
///
/// Every user in the batch must already be an interviewer, otherwise the
/// whole batch is rejected and nothing is written.
///
/// # Endpoint
///
/// `PUT /api/interviewers/bulk`
pub async fn bulk_update_interviewer_handler(
    State(state): State<AppState>,
    operator: OperatorId,
    Json(payload): Json<InterviewerBulkRequest>,
) -> Result<Json<InterviewerBulkResponse>, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::bad_request("Invalid request", json!({ "errors": e.to_string() })))?;

    let updated = state
        .interviewer_bulk_service
        .update(
            operator.as_deref(),
            payload.interviewers.into_iter().map(to_bulk_item).collect(),
        )
        .await?;

    Ok(Json(InterviewerBulkResponse {
        interviewers: updated.into_iter().map(interviewer_to_response).collect(),
    }))
}
