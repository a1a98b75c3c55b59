//! HTTP handlers.

use crate::error::ApiError;
use crate::AppState;
use api_shared::{ErrorRes, HealthRes, HealthService, PatientRes, ValidationErrorRes};
use axum::{
    extract::{Path as AxumPath, State},
    response::Json,
};
use patients_core::Outcome;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used by monitoring and load balancer health checks.
#[axum::debug_handler]
pub async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/patients/{id}",
    params(
        ("id" = i32, Path, description = "Patient identifier, must be greater than 0")
    ),
    responses(
        (status = 200, description = "Patient found", body = PatientRes),
        (status = 400, description = "Invalid patient identifier", body = ValidationErrorRes),
        (status = 404, description = "No patient with this identifier", body = ErrorRes)
    )
)]
/// Retrieve demographic data for one patient
///
/// Runs the get-patient pipeline and translates its result:
/// a successful outcome becomes `200` with the patient, a failed outcome becomes
/// `404` carrying `{ "message": ... }`.
///
/// # Errors
/// Returns:
/// - `400 Bad Request` if the identifier is not greater than zero,
/// - `404 Not Found` if no patient has the identifier.
#[axum::debug_handler]
pub async fn get_patient(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<i32>,
) -> Result<Json<PatientRes>, ApiError> {
    tracing::info!(patient_id = id, "HTTP GET request received for patient");

    match state.patient_service.get_patient(id)? {
        Outcome::Success(patient) => {
            tracing::info!(patient_id = id, "patient retrieved successfully");
            Ok(Json(PatientRes::from(patient)))
        }
        Outcome::Failure(message) => {
            tracing::warn!(patient_id = id, error = %message, "patient retrieval failed");
            Err(ApiError::NotFound(message))
        }
    }
}
