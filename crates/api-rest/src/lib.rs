//! # API REST
//!
//! REST API implementation for the patient lookup service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (status codes, JSON bodies, CORS, request tracing)
//!
//! Uses `api-shared` for wire types and `patients-core` for the request pipeline.

#![warn(rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod handlers;

use axum::{routing::get, Router};
use patients_core::PatientService;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::{ConfigError, RestConfig};
pub use error::ApiError;

/// Application state for the REST API server
///
/// Holds the patient service shared by every request handler. The service reads
/// from an immutable store, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub patient_service: PatientService,
}

impl AppState {
    pub fn new(patient_service: PatientService) -> Self {
        Self { patient_service }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(handlers::health, handlers::get_patient),
    components(schemas(
        api_shared::HealthRes,
        api_shared::PatientRes,
        api_shared::ErrorRes,
        api_shared::FieldErrorRes,
        api_shared::ValidationErrorRes,
    ))
)]
pub struct ApiDoc;

/// Build the REST router.
///
/// The Swagger UI (`/swagger-ui`) and the OpenAPI document
/// (`/api-docs/openapi.json`) are only mounted when `cfg` enables them.
pub fn router(state: AppState, cfg: &RestConfig) -> Router {
    let mut app = Router::new()
        .route("/health", get(handlers::health))
        .route("/api/patients/:id", get(handlers::get_patient));

    if cfg.enable_swagger() {
        app = app.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
    }

    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C.
///
/// # Errors
/// Returns an error if:
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
pub async fn serve(cfg: RestConfig, patient_service: PatientService) -> anyhow::Result<()> {
    let app = router(AppState::new(patient_service), &cfg);

    let listener = tokio::net::TcpListener::bind(cfg.addr()).await?;
    tracing::info!("++ Patients REST listening on {}", listener.local_addr()?);
    if cfg.enable_swagger() {
        tracing::info!("Swagger UI enabled at /swagger-ui");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- Patients REST stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
