//! # Patients Core
//!
//! Core business logic for the patient lookup service.
//!
//! This crate contains pure data operations:
//! - The [`Patient`] entity and the fixed in-memory seed store
//! - Request validation and the validate-then-handle pipeline
//! - The get-patient query handler and its [`Outcome`] result
//!
//! **No API concerns**: HTTP servers, routing, and wire formats belong in `api-rest` or
//! `api-shared`.

pub mod constants;
pub mod error;
pub mod outcome;
pub mod patient;
pub mod pipeline;
pub mod queries;
pub mod repositories;
pub mod service;
pub mod validation;

pub use error::{PatientError, PatientResult};
pub use outcome::Outcome;
pub use patient::Patient;
pub use queries::{GetPatientQuery, GetPatientResponse};
pub use repositories::{InMemoryPatientRepository, PatientRepository};
pub use service::PatientService;
pub use validation::{PatientValidator, ValidationErrors, ValidationFailure, Validator};
