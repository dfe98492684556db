//! Self-validating scalar values carried by person records.
//!
//! # Responsibility
//! - Validate raw input exactly once, at construction.
//! - Provide value-based equality and hashing for identity comparisons.
//!
//! # Invariants
//! - A constructed value always satisfies its format rule.
//! - Deserialization goes through the same validation path as `new`.
//! - Surrounding whitespace is trimmed before validation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[[:alnum:]][[:alnum:] ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[[:alnum:]]+([+_.\-][[:alnum:]]+)*@([[:alnum:]]+(-[[:alnum:]]+)*\.)*[[:alnum:]]{2,}(-[[:alnum:]]+)*$",
    )
    .expect("valid email regex")
});
static NRIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[STFGM][0-9]{7}[A-Z]$").expect("valid nric regex"));
static ADDRESS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)^\S.*$").expect("valid address regex"));
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[[:alnum:]]+$").expect("valid tag regex"));

/// Rejected raw input for a value object, carrying the offending value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidName(String),
    InvalidPhone(String),
    InvalidEmail(String),
    InvalidNric(String),
    InvalidAddress(String),
    InvalidTag(String),
    InvalidDescription(String),
    InvalidDateTime(String),
    InvalidTimeslotHour(u8),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(_) => write!(
                f,
                "Names should only contain alphanumeric characters and spaces, and it should not be blank"
            ),
            Self::InvalidPhone(_) => write!(
                f,
                "Phone numbers should only contain numbers, and it should be at least 3 digits long"
            ),
            Self::InvalidEmail(value) => write!(
                f,
                "Emails should be of the format local-part@domain, got `{value}`"
            ),
            Self::InvalidNric(_) => write!(
                f,
                "NRIC should start with S, T, F, G or M, followed by 7 digits and end with a letter"
            ),
            Self::InvalidAddress(_) => {
                write!(f, "Addresses can take any values, and it should not be blank")
            }
            Self::InvalidTag(value) => write!(f, "Tag names should be alphanumeric, got `{value}`"),
            Self::InvalidDescription(_) => {
                write!(f, "Appointment descriptions should not be blank")
            }
            Self::InvalidDateTime(value) => write!(
                f,
                "Date-time should be of the format dd-MM-yyyy HH:mm, got `{value}`"
            ),
            Self::InvalidTimeslotHour(hour) => {
                write!(f, "Timeslot hour must be between 0 and 23, got {hour}")
            }
        }
    }
}

impl Error for ValidationError {}

/// Implements the shared string-newtype surface: accessors, `Display`, and the
/// `String` conversions serde uses to route deserialization through `new`.
macro_rules! string_value {
    ($ty:ident) => {
        impl $ty {
            /// Returns the validated value.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }
    };
}

/// A person's display name; also the weak-sameness key of a person.
///
/// Equality is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if !NAME_RE.is_match(trimmed) {
            return Err(ValidationError::InvalidName(raw));
        }
        Ok(Self(trimmed.to_string()))
    }
}

string_value!(Name);

/// Contact phone number, digits only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if !PHONE_RE.is_match(trimmed) {
            return Err(ValidationError::InvalidPhone(raw));
        }
        Ok(Self(trimmed.to_string()))
    }
}

string_value!(Phone);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if !EMAIL_RE.is_match(trimmed) {
            return Err(ValidationError::InvalidEmail(raw));
        }
        Ok(Self(trimmed.to_string()))
    }
}

string_value!(Email);

/// National registration identifier.
///
/// Accepted case-insensitively; always stored upper-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nric(String);

impl Nric {
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let normalized = raw.trim().to_ascii_uppercase();
        if !NRIC_RE.is_match(&normalized) {
            return Err(ValidationError::InvalidNric(raw));
        }
        Ok(Self(normalized))
    }
}

string_value!(Nric);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if !ADDRESS_RE.is_match(trimmed) {
            return Err(ValidationError::InvalidAddress(raw));
        }
        Ok(Self(trimmed.to_string()))
    }
}

string_value!(Address);

/// Free-form label attached to a person.
///
/// Ordered so tag sets iterate deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if !TAG_RE.is_match(trimmed) {
            return Err(ValidationError::InvalidTag(raw));
        }
        Ok(Self(trimmed.to_string()))
    }
}

string_value!(Tag);
