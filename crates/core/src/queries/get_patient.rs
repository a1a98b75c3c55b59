//! Retrieve a single patient by identifier.

use crate::constants::{PATIENT_ID_FIELD, PATIENT_ID_MUST_BE_POSITIVE};
use crate::outcome::Outcome;
use crate::patient::Patient;
use crate::pipeline::{Query, QueryHandler};
use crate::repositories::PatientRepository;
use crate::validation::{ValidationFailure, Validator};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

/// Request for one patient. Any integer is accepted here; only positive values
/// pass [`GetPatientQueryValidator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GetPatientQuery {
    pub patient_id: i32,
}

impl GetPatientQuery {
    pub fn new(patient_id: i32) -> Self {
        Self { patient_id }
    }
}

impl Query for GetPatientQuery {
    const NAME: &'static str = "GetPatientQuery";
}

/// The displayable fields of a patient. The internal identifier is not exposed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPatientResponse {
    pub nhs_number: String,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub gp_practice: String,
}

impl From<Patient> for GetPatientResponse {
    fn from(patient: Patient) -> Self {
        Self {
            nhs_number: patient.nhs_number,
            name: patient.name,
            date_of_birth: patient.date_of_birth,
            gp_practice: patient.gp_practice,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GetPatientQueryValidator;

impl Validator<GetPatientQuery> for GetPatientQueryValidator {
    fn validate(&self, item: &GetPatientQuery) -> Vec<ValidationFailure> {
        if item.patient_id > 0 {
            Vec::new()
        } else {
            vec![ValidationFailure::new(
                PATIENT_ID_FIELD,
                PATIENT_ID_MUST_BE_POSITIVE,
            )]
        }
    }
}

/// Looks the patient up in the store and projects it into a response.
///
/// An unknown identifier produces `Outcome::Failure` with a message that embeds
/// the requested id; it is never an error.
#[derive(Clone)]
pub struct GetPatientQueryHandler {
    repository: Arc<dyn PatientRepository>,
}

impl GetPatientQueryHandler {
    pub fn new(repository: Arc<dyn PatientRepository>) -> Self {
        Self { repository }
    }
}

impl QueryHandler<GetPatientQuery> for GetPatientQueryHandler {
    type Output = Outcome<GetPatientResponse>;

    fn handle(&self, query: &GetPatientQuery) -> Self::Output {
        let patient_id = query.patient_id;
        tracing::info!(patient_id, "processing GetPatientQuery");

        match self.repository.get_by_id(patient_id) {
            Some(patient) => {
                tracing::info!(
                    patient_id,
                    nhs_number = %patient.nhs_number,
                    "patient found"
                );
                Outcome::success(GetPatientResponse::from(patient))
            }
            None => {
                tracing::warn!(patient_id, "patient not found");
                Outcome::failure(format!("Patient with ID {patient_id} not found."))
            }
        }
    }
}
