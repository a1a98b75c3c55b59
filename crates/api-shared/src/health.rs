use crate::dto::HealthRes;

/// Simple health service that can be used by every API surface
///
/// This service provides a standardised way to check the health status of the
/// patient lookup service.
#[derive(Clone, Copy, Debug, Default)]
pub struct HealthService;

impl HealthService {
    /// Check health without creating an instance.
    ///
    /// The data store is in memory and cannot fail, so the service is healthy
    /// whenever it is able to answer.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Patients API is alive".into(),
        }
    }
}
