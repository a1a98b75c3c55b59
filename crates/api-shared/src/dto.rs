//! Wire types returned by the APIs.
//!
//! Field names are camelCase on the wire. Dates are ISO 8601 calendar dates
//! (`YYYY-MM-DD`).

use chrono::NaiveDate;
use patients_core::{GetPatientResponse, ValidationErrors};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Demographic data for one patient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientRes {
    /// Ten-digit NHS number.
    #[schema(example = "1234567890")]
    pub nhs_number: String,
    #[schema(example = "John Smith")]
    pub name: String,
    #[schema(value_type = String, format = Date, example = "1980-05-15")]
    pub date_of_birth: NaiveDate,
    /// Registered GP practice.
    #[schema(example = "Central Medical Practice")]
    pub gp_practice: String,
}

impl From<GetPatientResponse> for PatientRes {
    fn from(res: GetPatientResponse) -> Self {
        Self {
            nhs_number: res.nhs_number,
            name: res.name,
            date_of_birth: res.date_of_birth,
            gp_practice: res.gp_practice,
        }
    }
}

/// Body of a not-found or internal error response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    #[schema(example = "Patient with ID 999 not found.")]
    pub message: String,
}

impl ErrorRes {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorRes {
    #[schema(example = "patientId")]
    pub field: String,
    #[schema(example = "Patient ID must be greater than 0")]
    pub message: String,
}

/// Body of a rejected request: a summary message plus one entry per broken rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorRes {
    #[schema(example = "Patient ID must be greater than 0")]
    pub message: String,
    pub errors: Vec<FieldErrorRes>,
}

impl From<&ValidationErrors> for ValidationErrorRes {
    fn from(errors: &ValidationErrors) -> Self {
        Self {
            message: errors.to_string(),
            errors: errors
                .failures()
                .iter()
                .map(|f| FieldErrorRes {
                    field: f.field.clone(),
                    message: f.message.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patients_core::ValidationFailure;

    #[test]
    fn patient_res_uses_camel_case_and_iso_date() {
        let res = PatientRes {
            nhs_number: "0987654321".into(),
            name: "Jane Doe".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1975, 8, 22).expect("valid date"),
            gp_practice: "Westside Health Centre".into(),
        };
        let json = serde_json::to_value(&res).expect("json");
        assert_eq!(json["nhsNumber"], "0987654321");
        assert_eq!(json["dateOfBirth"], "1975-08-22");
        assert_eq!(json["gpPractice"], "Westside Health Centre");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn validation_error_res_lists_each_failure() {
        let errors = ValidationErrors::from_failures(vec![ValidationFailure::new(
            "patientId",
            "Patient ID must be greater than 0",
        )])
        .expect("non-empty");

        let res = ValidationErrorRes::from(&errors);

        assert_eq!(res.message, "Patient ID must be greater than 0");
        assert_eq!(res.errors.len(), 1);
        assert_eq!(res.errors[0].field, "patientId");
    }
}
