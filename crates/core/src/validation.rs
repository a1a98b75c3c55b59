//! Input and entity validation.
//!
//! Validators inspect a value and report every rule it breaks without acting on it.
//! An empty list of failures means the value is valid.

use crate::constants::{MAX_GP_PRACTICE_LEN, MAX_NAME_LEN, PATIENT_ID_MUST_BE_POSITIVE};
use crate::patient::Patient;
use chrono::{DateTime, NaiveTime, Utc};
use patients_types::{NhsNumber, NonEmptyText, TextError};

/// A single broken rule, attributed to the field it concerns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationFailure {
    pub field: String,
    pub message: String,
}

impl ValidationFailure {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A non-empty set of validation failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationFailure>);

impl ValidationErrors {
    /// Wraps the failures, or returns `None` when there are none.
    pub fn from_failures(failures: Vec<ValidationFailure>) -> Option<Self> {
        if failures.is_empty() {
            None
        } else {
            Some(Self(failures))
        }
    }

    pub fn failures(&self) -> &[ValidationFailure] {
        &self.0
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|f| f.message.as_str())
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self.messages().collect::<Vec<_>>().join("; ");
        write!(f, "{joined}")
    }
}

/// Checks a value against a set of rules.
pub trait Validator<T>: Send + Sync {
    fn validate(&self, item: &T) -> Vec<ValidationFailure>;
}

/// Business rules for the [`Patient`] entity.
///
/// Nothing on the read path runs this validator; records are only created as seed
/// data. It is used to check the seed set and is ready for a future write path.
#[derive(Clone, Copy, Debug, Default)]
pub struct PatientValidator;

impl PatientValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validates `patient` treating `now` as the current moment.
    ///
    /// A date of birth counts as the start of that day, so a patient born today is
    /// valid and one born tomorrow is not.
    pub fn validate_at(&self, patient: &Patient, now: DateTime<Utc>) -> Vec<ValidationFailure> {
        let mut failures = Vec::new();

        if patient.id <= 0 {
            failures.push(ValidationFailure::new("id", PATIENT_ID_MUST_BE_POSITIVE));
        }

        if let Err(errors) = NhsNumber::parse(&patient.nhs_number) {
            failures.extend(errors.iter().map(|e| {
                let message = match e {
                    TextError::Empty => "NHS Number is required",
                    TextError::InvalidLength { .. } | TextError::TooLong { .. } => {
                        "NHS Number must be exactly 10 digits long"
                    }
                    TextError::NonDigit => "NHS Number must contain only digits",
                };
                ValidationFailure::new("nhsNumber", message)
            }));
        }

        failures.extend(bounded_text_failures(
            "name",
            &patient.name,
            MAX_NAME_LEN,
            "Patient name is required",
            "Patient name",
        ));

        let born_at = patient.date_of_birth.and_time(NaiveTime::MIN).and_utc();
        if born_at >= now {
            failures.push(ValidationFailure::new(
                "dateOfBirth",
                "Date of birth must be in the past",
            ));
        }

        failures.extend(bounded_text_failures(
            "gpPractice",
            &patient.gp_practice,
            MAX_GP_PRACTICE_LEN,
            "GP Practice is required",
            "GP Practice name",
        ));

        failures
    }
}

/// Required and maximum-length rules for a free-text field, each reported on its own.
fn bounded_text_failures(
    field: &str,
    value: &str,
    max: usize,
    required: &str,
    label: &str,
) -> Vec<ValidationFailure> {
    match NonEmptyText::bounded(value, max) {
        Ok(_) => Vec::new(),
        Err(errors) => errors
            .iter()
            .map(|e| match e {
                TextError::TooLong { max } => {
                    ValidationFailure::new(field, format!("{label} cannot exceed {max} characters"))
                }
                _ => ValidationFailure::new(field, required),
            })
            .collect(),
    }
}

impl Validator<Patient> for PatientValidator {
    fn validate(&self, item: &Patient) -> Vec<ValidationFailure> {
        self.validate_at(item, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn john_smith() -> Patient {
        Patient::new(
            1,
            "1234567890",
            "John Smith",
            NaiveDate::from_ymd_opt(1980, 5, 15).expect("valid date"),
            "Central Medical Practice",
        )
    }

    fn fields(failures: &[ValidationFailure]) -> Vec<&str> {
        failures.iter().map(|f| f.field.as_str()).collect()
    }

    fn messages(failures: &[ValidationFailure]) -> Vec<&str> {
        failures.iter().map(|f| f.message.as_str()).collect()
    }

    #[test]
    fn valid_patient_passes() {
        assert!(PatientValidator::new().validate(&john_smith()).is_empty());
    }

    #[test]
    fn several_valid_patients_pass() {
        let validator = PatientValidator::new();
        for (id, nhs, year) in [(1, "1111111111", 1980), (2, "2222222222", 1990), (3, "3333333333", 2000)] {
            let patient = Patient::new(
                id,
                nhs,
                format!("Patient {id}"),
                NaiveDate::from_ymd_opt(year, 1, 1).expect("valid date"),
                "Practice A",
            );
            assert!(validator.validate(&patient).is_empty(), "patient {id}");
        }
    }

    #[test]
    fn invalid_nhs_numbers_are_attributed_to_nhs_field() {
        let validator = PatientValidator::new();
        for nhs in ["", "123", "12345", "123456789", "12345678901", "123456789A"] {
            let mut patient = john_smith();
            patient.nhs_number = nhs.to_string();
            let failures = validator.validate(&patient);
            assert!(!failures.is_empty(), "nhs number {nhs:?}");
            assert!(
                fields(&failures).iter().all(|f| *f == "nhsNumber"),
                "nhs number {nhs:?}"
            );
        }
    }

    #[test]
    fn empty_nhs_number_reports_every_rule() {
        let mut patient = john_smith();
        patient.nhs_number = String::new();
        assert_eq!(
            messages(&PatientValidator::new().validate(&patient)),
            vec![
                "NHS Number is required",
                "NHS Number must be exactly 10 digits long",
                "NHS Number must contain only digits",
            ]
        );
    }

    #[test]
    fn short_nhs_number_with_letters_reports_length_and_digits() {
        let mut patient = john_smith();
        patient.nhs_number = "12AB".into();
        assert_eq!(
            messages(&PatientValidator::new().validate(&patient)),
            vec![
                "NHS Number must be exactly 10 digits long",
                "NHS Number must contain only digits",
            ]
        );
    }

    #[test]
    fn nhs_number_of_right_length_with_letter_reports_digits_only() {
        let mut patient = john_smith();
        patient.nhs_number = "123456789A".into();
        assert_eq!(
            messages(&PatientValidator::new().validate(&patient)),
            vec!["NHS Number must contain only digits"]
        );
    }

    #[test]
    fn empty_name_fails() {
        let mut patient = john_smith();
        patient.name = "  ".into();
        let failures = PatientValidator::new().validate(&patient);
        assert_eq!(failures, vec![ValidationFailure::new("name", "Patient name is required")]);
    }

    #[test]
    fn overlong_name_and_practice_fail() {
        let mut patient = john_smith();
        patient.name = "a".repeat(201);
        patient.gp_practice = "b".repeat(201);
        let failures = PatientValidator::new().validate(&patient);
        assert_eq!(fields(&failures), vec!["name", "gpPractice"]);
        assert_eq!(failures[0].message, "Patient name cannot exceed 200 characters");
        assert_eq!(failures[1].message, "GP Practice name cannot exceed 200 characters");
    }

    #[test]
    fn name_length_includes_surrounding_whitespace() {
        let mut patient = john_smith();
        patient.name = format!(" {}", "a".repeat(200));
        let failures = PatientValidator::new().validate(&patient);
        assert_eq!(
            failures,
            vec![ValidationFailure::new(
                "name",
                "Patient name cannot exceed 200 characters"
            )]
        );
    }

    #[test]
    fn future_date_of_birth_fails() {
        let now = Utc::now();
        let mut patient = john_smith();
        patient.date_of_birth = (now + Duration::days(1)).date_naive();
        let failures = PatientValidator::new().validate_at(&patient, now);
        assert_eq!(fields(&failures), vec!["dateOfBirth"]);
    }

    #[test]
    fn born_today_is_in_the_past() {
        let now = NaiveDate::from_ymd_opt(2024, 6, 1)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .expect("valid datetime")
            .and_utc();
        let mut patient = john_smith();
        patient.date_of_birth = now.date_naive();
        assert!(PatientValidator::new().validate_at(&patient, now).is_empty());
    }

    #[test]
    fn non_positive_id_fails() {
        let mut patient = john_smith();
        patient.id = 0;
        let failures = PatientValidator::new().validate(&patient);
        assert_eq!(
            failures,
            vec![ValidationFailure::new("id", PATIENT_ID_MUST_BE_POSITIVE)]
        );
    }

    #[test]
    fn validation_errors_require_at_least_one_failure() {
        assert!(ValidationErrors::from_failures(Vec::new()).is_none());

        let errors = ValidationErrors::from_failures(vec![
            ValidationFailure::new("a", "first"),
            ValidationFailure::new("b", "second"),
        ])
        .expect("non-empty");
        assert_eq!(errors.to_string(), "first; second");
        assert_eq!(errors.failures().len(), 2);
    }
}
