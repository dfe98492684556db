//! Hour-granular calendar slot.

use crate::model::fields::ValidationError;
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

const MAX_HOUR: u8 = 23;

/// Immutable `(date, hour)` pair.
///
/// Equality and hashing are structural over both components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawTimeslot")]
pub struct Timeslot {
    date: NaiveDate,
    hour: u8,
}

#[derive(Deserialize)]
struct RawTimeslot {
    date: NaiveDate,
    hour: u8,
}

impl TryFrom<RawTimeslot> for Timeslot {
    type Error = ValidationError;

    fn try_from(value: RawTimeslot) -> Result<Self, Self::Error> {
        Self::new(value.date, value.hour)
    }
}

impl Timeslot {
    /// Creates a slot, rejecting hours outside `0..=23`.
    pub fn new(date: NaiveDate, hour: u8) -> Result<Self, ValidationError> {
        if hour > MAX_HOUR {
            return Err(ValidationError::InvalidTimeslotHour(hour));
        }
        Ok(Self { date, hour })
    }

    /// Floors a date-time to the slot containing it.
    pub fn of(date_time: NaiveDateTime) -> Self {
        Self {
            date: date_time.date(),
            // Timelike::hour is always < 24.
            hour: date_time.hour() as u8,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Same-slot check. Identical to `==` for timeslots.
    pub fn is_same_timeslot(&self, other: &Timeslot) -> bool {
        self == other
    }
}

impl Display for Timeslot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:02}:00", self.date.format("%d-%m-%Y"), self.hour)
    }
}
