//! Patient data store.
//!
//! The store holds a fixed collection of patients built once at startup. There is
//! no write path, so concurrent reads need no coordination.

use crate::error::{PatientError, PatientResult};
use crate::patient::Patient;
use chrono::NaiveDate;

/// Lookup of patients by identifier.
///
/// A missing identifier is a normal answer (`None`), never an error.
pub trait PatientRepository: Send + Sync {
    fn get_by_id(&self, id: i32) -> Option<Patient>;
}

/// (id, NHS number, name, date of birth, GP practice)
const SEED: [(i32, &str, &str, (i32, u32, u32), &str); 5] = [
    (1, "1234567890", "John Smith", (1980, 5, 15), "Central Medical Practice"),
    (2, "0987654321", "Jane Doe", (1975, 8, 22), "Westside Health Centre"),
    (3, "5678901234", "Michael Johnson", (1990, 12, 3), "North Street Surgery"),
    (4, "1122334455", "Sarah Williams", (1985, 3, 27), "Springfield Medical Clinic"),
    (5, "5544332211", "David Brown", (1972, 11, 10), "Riverside Health Practice"),
];

/// Builds the fixed seed records, identifiers 1 to 5.
///
/// # Errors
///
/// Returns `PatientError::InvalidInput` if a seed date of birth is not a real
/// calendar date.
pub fn seed_patients() -> PatientResult<Vec<Patient>> {
    SEED.iter()
        .map(|&(id, nhs_number, name, (y, m, d), gp_practice)| {
            let date_of_birth = NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| {
                PatientError::InvalidInput(format!("invalid seed date of birth for patient {id}"))
            })?;
            Ok(Patient::new(id, nhs_number, name, date_of_birth, gp_practice))
        })
        .collect()
}

/// In-memory store backed by an immutable list and a linear scan.
#[derive(Clone, Debug)]
pub struct InMemoryPatientRepository {
    patients: Vec<Patient>,
}

impl InMemoryPatientRepository {
    /// Creates a store over the given patients.
    ///
    /// Identifiers are expected to be unique; if they are not, the first match wins.
    pub fn new(patients: Vec<Patient>) -> Self {
        Self { patients }
    }

    /// Creates a store holding the five seed patients.
    pub fn seeded() -> PatientResult<Self> {
        Ok(Self::new(seed_patients()?))
    }

    pub fn all(&self) -> &[Patient] {
        &self.patients
    }
}

impl PatientRepository for InMemoryPatientRepository {
    fn get_by_id(&self, id: i32) -> Option<Patient> {
        tracing::debug!(patient_id = id, "querying patient repository");
        let patient = self.patients.iter().find(|p| p.id == id).cloned();

        if patient.is_some() {
            tracing::debug!(patient_id = id, "patient record found in repository");
        } else {
            tracing::debug!(patient_id = id, "no patient record found in repository");
        }

        patient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> InMemoryPatientRepository {
        InMemoryPatientRepository::seeded().expect("seed data is valid")
    }

    #[test]
    fn existing_id_returns_patient() {
        let patient = repo().get_by_id(1).expect("patient 1 exists");
        assert_eq!(patient.id, 1);
        assert_eq!(patient.name, "John Smith");
    }

    #[test]
    fn unknown_ids_return_none() {
        let repo = repo();
        for id in [0, -1, 6, 999, i32::MIN, i32::MAX] {
            assert!(repo.get_by_id(id).is_none(), "id {id}");
        }
    }

    #[test]
    fn seed_ids_map_to_expected_nhs_numbers() {
        let repo = repo();
        for (id, nhs) in [(1, "1234567890"), (2, "0987654321"), (3, "5678901234")] {
            let patient = repo.get_by_id(id).expect("seed patient exists");
            assert_eq!(patient.nhs_number, nhs);
        }
    }

    #[test]
    fn distinct_ids_return_distinct_patients() {
        let repo = repo();
        let names: Vec<String> = (1..=5)
            .map(|id| repo.get_by_id(id).expect("seed patient exists").name)
            .collect();
        assert_eq!(
            names,
            vec![
                "John Smith",
                "Jane Doe",
                "Michael Johnson",
                "Sarah Williams",
                "David Brown"
            ]
        );
    }

    #[test]
    fn repeated_lookups_are_equal() {
        let repo = repo();
        assert_eq!(repo.get_by_id(2), repo.get_by_id(2));
        assert_eq!(repo.all().len(), 5);
    }

    #[test]
    fn seed_identifier_space_is_one_to_five() {
        let ids: Vec<i32> = repo().all().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn first_match_wins_for_duplicate_ids() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date");
        let repo = InMemoryPatientRepository::new(vec![
            Patient::new(9, "1111111111", "First", date, "A"),
            Patient::new(9, "2222222222", "Second", date, "B"),
        ]);
        assert_eq!(repo.get_by_id(9).expect("found").name, "First");
    }
}
