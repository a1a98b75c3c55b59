//! Request pipeline.
//!
//! A query travels through an explicit, ordered chain: validators first, then the
//! handler. Any validation failure ends the request before the handler (and so the
//! data store) is reached.
//!
//! ```text
//! caller -> ValidationBehavior -> QueryHandler -> PatientRepository
//! ```

use crate::error::{PatientError, PatientResult};
use crate::validation::{ValidationErrors, Validator};

/// A read-only request.
pub trait Query: Send + Sync {
    /// Name used to identify the request in logs.
    const NAME: &'static str;
}

/// Handles one kind of query.
pub trait QueryHandler<Q: Query>: Send + Sync {
    type Output;

    fn handle(&self, query: &Q) -> Self::Output;
}

/// Runs every registered validator before delegating to the wrapped handler.
pub struct ValidationBehavior<Q, H> {
    validators: Vec<Box<dyn Validator<Q>>>,
    handler: H,
}

impl<Q: Query, H: QueryHandler<Q>> ValidationBehavior<Q, H> {
    /// Wraps `handler` with no validators.
    pub fn new(handler: H) -> Self {
        Self {
            validators: Vec::new(),
            handler,
        }
    }

    /// Appends a validator. Validators run in the order they were added.
    pub fn with_validator(mut self, validator: impl Validator<Q> + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Validates `query` and, if it passes, hands it to the handler.
    ///
    /// # Errors
    ///
    /// Returns `PatientError::Validation` with every collected failure when any
    /// validator rejects the query. The handler is not called in that case.
    pub fn send(&self, query: &Q) -> PatientResult<H::Output> {
        let request_name = Q::NAME;
        tracing::info!(request = request_name, "validating request");

        if self.validators.is_empty() {
            tracing::debug!(request = request_name, "no validators registered");
            return Ok(self.handler.handle(query));
        }

        let failures = self
            .validators
            .iter()
            .flat_map(|v| v.validate(query))
            .collect();

        if let Some(errors) = ValidationErrors::from_failures(failures) {
            tracing::warn!(request = request_name, errors = %errors, "validation failed");
            return Err(PatientError::Validation(errors));
        }

        tracing::info!(request = request_name, "validation passed");
        Ok(self.handler.handle(query))
    }
}

impl<Q: Query, H: QueryHandler<Q>> QueryHandler<Q> for ValidationBehavior<Q, H> {
    type Output = PatientResult<H::Output>;

    fn handle(&self, query: &Q) -> Self::Output {
        self.send(query)
    }
}
