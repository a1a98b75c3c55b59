use api_rest::RestConfig;
use patients_core::PatientService;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the patients service
///
/// Builds the seed data store, wires it into the request pipeline and serves the
/// REST API.
///
/// # Environment Variables
/// - `PATIENTS_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `PATIENTS_ENABLE_SWAGGER`: Mount the Swagger UI (default: "true")
/// - `RUST_LOG`: Extra tracing directives
///
/// # Returns
/// * `Ok(())` - If the server starts and shuts down cleanly
/// * `Err(anyhow::Error)` - If configuration, startup or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("patients_run=info".parse()?)
                .add_directive("patients_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = RestConfig::from_env()?;
    tracing::info!("++ Starting patients REST on {}", cfg.addr());

    let patient_service = PatientService::with_seed_data()?;
    api_rest::serve(cfg, patient_service).await
}
