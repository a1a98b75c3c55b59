//! Constants used throughout the core crate.
//!
//! Validation limits and user-facing messages live here so that the validators,
//! the handler and the tests agree on the exact wording.

/// Maximum number of characters in a patient's full name.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum number of characters in a GP practice name.
pub const MAX_GP_PRACTICE_LEN: usize = 200;

/// Message reported when a patient identifier is zero or negative.
pub const PATIENT_ID_MUST_BE_POSITIVE: &str = "Patient ID must be greater than 0";

/// Field name used when reporting violations on the requested patient identifier.
pub const PATIENT_ID_FIELD: &str = "patientId";
