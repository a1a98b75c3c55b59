//! Read-only requests and their handlers.

pub mod get_patient;

pub use get_patient::{
    GetPatientQuery, GetPatientQueryHandler, GetPatientQueryValidator, GetPatientResponse,
};
