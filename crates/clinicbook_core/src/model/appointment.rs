//! Appointment entity owned by a person.
//!
//! # Responsibility
//! - Bind a description and a date-time to an owning person.
//! - Define the duplicate-detection identity of an appointment.
//!
//! # Invariants
//! - `patient` is a non-owning back-reference; the owner's appointment list is
//!   the only place an appointment lives.
//! - Two appointments are the same appointment iff owner, description and
//!   date-time all match.
//! - `description` is never blank.

use crate::model::fields::ValidationError;
use crate::model::person::PersonId;
use crate::model::timeslot::Timeslot;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Day-first date-time layout used for display and for typed input.
pub const DATE_TIME_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Parses a `dd-MM-yyyy HH:mm` date-time.
pub fn parse_date_time(raw: &str) -> Result<NaiveDateTime, ValidationError> {
    NaiveDateTime::parse_from_str(raw.trim(), DATE_TIME_FORMAT)
        .map_err(|_| ValidationError::InvalidDateTime(raw.to_string()))
}

/// Rejects blank descriptions; returns the trimmed text otherwise.
pub fn validate_description(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidDescription(raw.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Replace-by-value appointment record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAppointment")]
pub struct Appointment {
    patient: PersonId,
    description: String,
    date_time: NaiveDateTime,
}

#[derive(Deserialize)]
struct RawAppointment {
    patient: PersonId,
    description: String,
    date_time: NaiveDateTime,
}

impl TryFrom<RawAppointment> for Appointment {
    type Error = ValidationError;

    fn try_from(value: RawAppointment) -> Result<Self, Self::Error> {
        Self::new(value.patient, value.description, value.date_time)
    }
}

impl Appointment {
    /// Creates an appointment for `patient`.
    ///
    /// # Errors
    /// - `InvalidDescription` when `description` is blank.
    pub fn new(
        patient: PersonId,
        description: impl Into<String>,
        date_time: NaiveDateTime,
    ) -> Result<Self, ValidationError> {
        let description = validate_description(&description.into())?;
        Ok(Self {
            patient,
            description,
            date_time,
        })
    }

    /// Builds an appointment from parts already validated by the caller.
    pub(crate) fn from_validated(
        patient: PersonId,
        description: String,
        date_time: NaiveDateTime,
    ) -> Self {
        Self {
            patient,
            description,
            date_time,
        }
    }

    /// Same appointment owned by `patient`.
    pub(crate) fn with_patient(mut self, patient: PersonId) -> Self {
        self.patient = patient;
        self
    }

    pub fn patient(&self) -> PersonId {
        self.patient
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.date_time
    }

    /// Hour slot this appointment starts in.
    pub fn timeslot(&self) -> Timeslot {
        Timeslot::of(self.date_time)
    }

    /// Duplicate-detection identity check.
    pub fn is_same_appointment(&self, other: &Appointment) -> bool {
        self == other
    }
}

impl Display for Appointment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}",
            self.description,
            self.date_time.format(DATE_TIME_FORMAT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_date_time, Appointment};
    use crate::model::fields::ValidationError;
    use uuid::Uuid;

    #[test]
    fn parse_date_time_uses_day_first_layout() {
        let parsed = parse_date_time("02-01-2024 12:00").unwrap();
        assert_eq!(parsed.to_string(), "2024-01-02 12:00:00");
        assert!(matches!(
            parse_date_time("2024-01-02 12:00"),
            Err(ValidationError::InvalidDateTime(_))
        ));
    }

    #[test]
    fn identity_includes_owner() {
        let at = parse_date_time("02-01-2024 12:00").unwrap();
        let first = Appointment::new(Uuid::new_v4(), "checkup", at).unwrap();
        let same_owner = Appointment::new(first.patient(), "checkup", at).unwrap();
        let other_owner = Appointment::new(Uuid::new_v4(), "checkup", at).unwrap();

        assert!(first.is_same_appointment(&same_owner));
        assert!(!first.is_same_appointment(&other_owner));
    }

    #[test]
    fn blank_description_is_rejected() {
        let at = parse_date_time("02-01-2024 12:00").unwrap();
        let err = Appointment::new(Uuid::new_v4(), "  ", at).unwrap_err();
        assert_eq!(err, ValidationError::InvalidDescription("  ".to_string()));
    }

    #[test]
    fn display_renders_description_and_time() {
        let at = parse_date_time("02-01-2024 12:00").unwrap();
        let appointment = Appointment::new(Uuid::new_v4(), "one", at).unwrap();
        assert_eq!(appointment.to_string(), "one at 02-01-2024 12:00");
    }
}
