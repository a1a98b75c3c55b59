//! Patient service facade.
//!
//! Wires the data store, query handler and validation pipeline together by plain
//! constructor injection. Transports hold a `PatientService` and call it once per
//! request.

use crate::error::PatientResult;
use crate::outcome::Outcome;
use crate::pipeline::ValidationBehavior;
use crate::queries::{
    GetPatientQuery, GetPatientQueryHandler, GetPatientQueryValidator, GetPatientResponse,
};
use crate::repositories::{InMemoryPatientRepository, PatientRepository};
use std::sync::Arc;

/// Pure patient data operations - no API concerns
#[derive(Clone)]
pub struct PatientService {
    get_patient: Arc<ValidationBehavior<GetPatientQuery, GetPatientQueryHandler>>,
}

impl PatientService {
    /// Creates a service reading from `repository`.
    pub fn new(repository: Arc<dyn PatientRepository>) -> Self {
        let handler = GetPatientQueryHandler::new(repository);
        let pipeline = ValidationBehavior::new(handler).with_validator(GetPatientQueryValidator);
        Self {
            get_patient: Arc::new(pipeline),
        }
    }

    /// Creates a service over the five seed patients.
    ///
    /// # Errors
    ///
    /// Returns a `PatientError` if the seed data cannot be built.
    pub fn with_seed_data() -> PatientResult<Self> {
        Ok(Self::new(Arc::new(InMemoryPatientRepository::seeded()?)))
    }

    /// Retrieves the displayable fields of one patient.
    ///
    /// # Returns
    ///
    /// `Outcome::Success` with the patient, or `Outcome::Failure` when no patient has
    /// the given id.
    ///
    /// # Errors
    ///
    /// Returns `PatientError::Validation` if `patient_id` is not greater than zero.
    /// The data store is not consulted in that case.
    pub fn get_patient(&self, patient_id: i32) -> PatientResult<Outcome<GetPatientResponse>> {
        self.get_patient.send(&GetPatientQuery::new(patient_id))
    }
}
