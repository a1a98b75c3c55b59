use crate::validation::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum PatientError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// One or more validators rejected the request before it reached its handler.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
}

pub type PatientResult<T> = std::result::Result<T, PatientError>;
