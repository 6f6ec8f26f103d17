//! Handlers for faculty and deviation value endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::faculties::{
    CreateFacultyRequest, DeviationValueRequest, DeviationValueResponse, FacultyBulkRequest,
    FacultyBulkResponse, FacultyResponse, UpdateFacultyRequest,
};
use crate::api::extract::OperatorId;
use crate::application::bulk::{FacultyBulkItem, FacultyWithDeviation};
use crate::domain::entities::{DeviationValue, Faculty};
use crate::error::AppError;
use crate::state::AppState;

pub(super) fn faculty_to_response(result: FacultyWithDeviation) -> FacultyResponse {
    let FacultyWithDeviation {
        faculty,
        deviation_value,
    } = result;
    FacultyResponse {
        id: faculty.id().as_str().to_string(),
        university_id: faculty.university_id().as_str().to_string(),
        name: faculty.name().as_str().to_string(),
        deviation_value: deviation_value.map(|dv| dv.value().value()),
        created_at: faculty.created_at(),
        updated_at: faculty.updated_at(),
    }
}

fn bare_faculty_to_response(faculty: Faculty) -> FacultyResponse {
    faculty_to_response(FacultyWithDeviation {
        faculty,
        deviation_value: None,
    })
}

fn deviation_value_to_response(dv: DeviationValue) -> DeviationValueResponse {
    DeviationValueResponse {
        id: dv.id().as_str().to_string(),
        faculty_id: dv.faculty_id().as_str().to_string(),
        value: dv.value().value(),
        created_at: dv.created_at(),
        updated_at: dv.updated_at(),
    }
}

/// Creates a faculty under a university.
///
/// # Endpoint
///
/// `POST /api/faculties`
///
/// # Errors
///
/// Returns 400 if the name is already registered for the university.
/// Returns 404 if the university does not exist.
pub async fn create_faculty_handler(
    State(state): State<AppState>,
    operator: OperatorId,
    Json(payload): Json<CreateFacultyRequest>,
) -> Result<(StatusCode, Json<FacultyResponse>), AppError> {
    let faculty = state
        .faculty_service
        .create(operator.as_deref(), &payload.university_id, &payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(bare_faculty_to_response(faculty))))
}

/// Renames a faculty.
///
/// # Endpoint
///
/// `PUT /api/faculties/{id}`
pub async fn update_faculty_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    operator: OperatorId,
    Json(payload): Json<UpdateFacultyRequest>,
) -> Result<Json<FacultyResponse>, AppError> {
    let faculty = state
        .faculty_service
        .update(operator.as_deref(), &id, &payload.name)
        .await?;

    Ok(Json(bare_faculty_to_response(faculty)))
}

/// Deletes a faculty.
///
/// # Endpoint
///
/// `DELETE /api/faculties/{id}`
pub async fn delete_faculty_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.faculty_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Retrieves a faculty.
///
/// # Endpoint
///
/// `GET /api/faculties/{id}`
pub async fn get_faculty_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<FacultyResponse>, AppError> {
    let faculty = state.faculty_service.get(&id).await?;
    Ok(Json(bare_faculty_to_response(faculty)))
}

/// Creates a batch of faculties, adopting rows whose names already exist.
///
/// # Endpoint
///
/// `POST /api/faculties/bulk`
///
/// # Errors
///
/// Returns 400 for an empty batch. A non-recoverable item error aborts the
/// whole call.
pub async fn bulk_create_faculty_handler(
    State(state): State<AppState>,
    operator: OperatorId,
    Json(payload): Json<FacultyBulkRequest>,
) -> Result<(StatusCode, Json<FacultyBulkResponse>), AppError> {
    payload
        .validate()
        .map_err(|e| AppError::bad_request("Invalid request", json!({ "errors": e.to_string() })))?;

    let items = payload
        .faculties
        .into_iter()
        .map(|f| FacultyBulkItem {
            name: f.name,
            deviation_value: f.deviation_value,
        })
        .collect();

    let results = state
        .faculty_bulk_service
        .create(operator.as_deref(), &payload.university_id, items)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(FacultyBulkResponse {
            faculties: results.into_iter().map(faculty_to_response).collect(),
        }),
    ))
}

/// Records a deviation value for a faculty that has none yet.
///
/// # Endpoint
///
/// `POST /api/faculties/{id}/deviation-value`
///
/// # Errors
///
/// Returns 400 if the faculty already has a deviation value — unlike the
/// faculty bulk endpoint, which updates it in place.
pub async fn create_deviation_value_handler(
    Path(faculty_id): Path<String>,
    State(state): State<AppState>,
    operator: OperatorId,
    Json(payload): Json<DeviationValueRequest>,
) -> Result<(StatusCode, Json<DeviationValueResponse>), AppError> {
    let dv = state
        .deviation_value_service
        .create(operator.as_deref(), &faculty_id, payload.value)
        .await?;

    Ok((StatusCode::CREATED, Json(deviation_value_to_response(dv))))
}

/// Updates the deviation value of a faculty.
///
/// # Endpoint
///
/// `PUT /api/faculties/{id}/deviation-value`
pub async fn update_deviation_value_handler(
    Path(faculty_id): Path<String>,
    State(state): State<AppState>,
    operator: OperatorId,
    Json(payload): Json<DeviationValueRequest>,
) -> Result<Json<DeviationValueResponse>, AppError> {
    let dv = state
        .deviation_value_service
        .update(operator.as_deref(), &faculty_id, payload.value)
        .await?;

    Ok(Json(deviation_value_to_response(dv)))
}

/// Removes the deviation value of a faculty.
///
/// # Endpoint
///
/// `DELETE /api/faculties/{id}/deviation-value`
pub async fn delete_deviation_value_handler(
    Path(faculty_id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.deviation_value_service.delete(&faculty_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
