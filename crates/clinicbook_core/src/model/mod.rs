//! Domain model for patients and their appointments.
//!
//! # Responsibility
//! - Define self-validating value objects and the person/appointment entities.
//! - Own the identity rules used by duplicate detection.
//!
//! # Invariants
//! - Values are validated once, at construction.
//! - A person exclusively owns its appointments; there is no second index.

pub mod appointment;
pub mod fields;
pub mod person;
pub mod timeslot;
