//! Handlers for university management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::universities::{
    CreateUniversityRequest, UniversityBulkRequest, UniversityBulkResponse, UniversityResponse,
    UpdateUniversityRequest,
};
use crate::api::extract::OperatorId;
use crate::api::handlers::faculties::faculty_to_response;
use crate::application::bulk::{FacultyBulkItem, UniversityBulkInput};
use crate::domain::entities::{University, UniversityRank};
use crate::error::AppError;
use crate::state::AppState;

pub(super) fn university_to_response(
    university: University,
    rank: Option<UniversityRank>,
) -> UniversityResponse {
    UniversityResponse {
        id: university.id().as_str().to_string(),
        name: university.name().as_str().to_string(),
        rank: rank.map(|r| r.rank()),
        created_at: university.created_at(),
        updated_at: university.updated_at(),
    }
}

/// Creates a university, optionally with a rank.
///
/// # Endpoint
///
/// `POST /api/universities`
///
/// # Errors
///
/// Returns 400 if the name is missing or already registered.
pub async fn create_university_handler(
    State(state): State<AppState>,
    operator: OperatorId,
    Json(payload): Json<CreateUniversityRequest>,
) -> Result<(StatusCode, Json<UniversityResponse>), AppError> {
    let (university, rank) = state
        .university_service
        .create(operator.as_deref(), &payload.name, payload.rank)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(university_to_response(university, rank)),
    ))
}

/// Updates a university's name and rank.
///
/// Omitting `rank` deletes an existing rank row — this single-record path
/// differs from bulk creation, which leaves an omitted rank untouched.
///
/// # Endpoint
///
/// `PUT /api/universities/{id}`
///
/// # Errors
///
/// Returns 404 if the university does not exist.
pub async fn update_university_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    operator: OperatorId,
    Json(payload): Json<UpdateUniversityRequest>,
) -> Result<Json<UniversityResponse>, AppError> {
    let (university, rank) = state
        .university_service
        .update(operator.as_deref(), &id, &payload.name, payload.rank)
        .await?;

    Ok(Json(university_to_response(university, rank)))
}

/// Deletes a university.
///
/// # Endpoint
///
/// `DELETE /api/universities/{id}`
///
/// # Errors
///
/// Returns 404 if the university does not exist.
/// Returns 400 if faculties still reference it.
pub async fn delete_university_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.university_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Retrieves a university with its rank.
///
/// # Endpoint
///
/// `GET /api/universities/{id}`
pub async fn get_university_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UniversityResponse>, AppError> {
    let (university, rank) = state.university_service.get(&id).await?;
    Ok(Json(university_to_response(university, rank)))
}

/// Creates a university with rank and faculties as one logical unit.
///
/// An already-registered name adopts the existing university instead of
/// failing, so re-running a partial import is safe.
///
/// # Endpoint
///
/// `POST /api/universities/bulk`
pub async fn bulk_create_university_handler(
    State(state): State<AppState>,
    operator: OperatorId,
    Json(payload): Json<UniversityBulkRequest>,
) -> Result<(StatusCode, Json<UniversityBulkResponse>), AppError> {
    let input = UniversityBulkInput {
        name: payload.name,
        rank: payload.rank,
        faculties: payload
            .faculties
            .into_iter()
            .map(|f| FacultyBulkItem {
                name: f.name,
                deviation_value: f.deviation_value,
            })
            .collect(),
    };

    let result = state
        .university_bulk_service
        .create(operator.as_deref(), input)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UniversityBulkResponse {
            university: university_to_response(result.university, result.rank),
            faculties: result.faculties.into_iter().map(faculty_to_response).collect(),
        }),
    ))
}
