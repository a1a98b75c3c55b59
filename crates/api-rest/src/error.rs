//! Mapping from core outcomes and errors to HTTP responses.

use api_shared::{ErrorRes, ValidationErrorRes};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use patients_core::{PatientError, ValidationErrors};

/// Errors a REST handler can return.
#[derive(Debug)]
pub enum ApiError {
    /// The request was valid but named nothing that exists.
    NotFound(String),
    /// The request was rejected before any data access.
    Validation(ValidationErrors),
    Internal,
}

impl From<PatientError> for ApiError {
    fn from(err: PatientError) -> Self {
        match err {
            PatientError::Validation(errors) => ApiError::Validation(errors),
            other => {
                tracing::error!("patient service error: {:?}", other);
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(ErrorRes::new(message))).into_response()
            }
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorRes::from(&errors)),
            )
                .into_response(),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorRes::new("Internal error")),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patients_core::ValidationFailure;

    #[test]
    fn status_codes_follow_error_kind() {
        let not_found = ApiError::NotFound("Patient with ID 6 not found.".into()).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let errors = ValidationErrors::from_failures(vec![ValidationFailure::new("patientId", "bad")])
            .expect("non-empty");
        let invalid = ApiError::Validation(errors).into_response();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let internal = ApiError::from(PatientError::InvalidInput("boom".into())).into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
