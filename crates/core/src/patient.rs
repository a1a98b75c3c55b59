//! Patient domain entity.

use chrono::NaiveDate;

/// A registered patient as held by the data store.
///
/// Instances are created once as seed data and never mutated. The entity rules
/// (NHS number format, name and practice lengths, date of birth in the past) are
/// enforced by [`crate::validation::PatientValidator`], not by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Patient {
    pub id: i32,
    pub nhs_number: String,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub gp_practice: String,
}

impl Patient {
    pub fn new(
        id: i32,
        nhs_number: impl Into<String>,
        name: impl Into<String>,
        date_of_birth: NaiveDate,
        gp_practice: impl Into<String>,
    ) -> Self {
        Self {
            id,
            nhs_number: nhs_number.into(),
            name: name.into(),
            date_of_birth,
            gp_practice: gp_practice.into(),
        }
    }
}
