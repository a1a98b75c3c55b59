//! # API Shared
//!
//! Shared utilities and definitions for the patient lookup APIs.
//!
//! Contains:
//! - Wire types (`dto` module) with serde and OpenAPI schema derives
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the CLI so every surface renders the same JSON.

pub mod dto;
pub mod health;

pub use dto::{ErrorRes, FieldErrorRes, HealthRes, PatientRes, ValidationErrorRes};
pub use health::HealthService;
