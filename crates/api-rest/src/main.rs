//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! Useful during development when only the HTTP surface is wanted. The workspace's
//! main `patients-run` binary serves the same router.

use api_rest::RestConfig;
use patients_core::PatientService;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the patients REST API server
///
/// # Environment Variables
/// - `PATIENTS_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `PATIENTS_ENABLE_SWAGGER`: Mount the Swagger UI (default: "true")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("patients_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = RestConfig::from_env()?;
    tracing::info!("-- Starting patients REST API on {}", cfg.addr());

    let patient_service = PatientService::with_seed_data()?;
    api_rest::serve(cfg, patient_service).await
}
