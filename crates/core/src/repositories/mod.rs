//! Data store modules.
//!
//! A repository answers lookups for one entity type. Callers depend on the trait,
//! so the in-memory seed store can be replaced by a keyed or persistent store
//! without touching the query handlers.

pub mod patient;

pub use patient::{seed_patients, InMemoryPatientRepository, PatientRepository};
