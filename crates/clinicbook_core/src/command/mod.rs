//! Single-shot mutation commands.
//!
//! # Responsibility
//! - Validate typed arguments against current model state.
//! - Apply one mutation and report a user-facing message.
//!
//! # Invariants
//! - A command either applies fully or leaves the model untouched.
//! - Commands never raise `ValidationError`; malformed values are rejected
//!   when arguments are constructed.
//! - Logged events carry metadata only, never person details.

use crate::model::appointment::Appointment;
use crate::model::person::Person;
use crate::registry::address_book::RegistryError;
use crate::service::model_manager::Model;
use log::{info, warn};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

mod appointment_commands;
mod edit_appointment;
mod index;
pub mod messages;
mod person_commands;
mod view_commands;

pub use appointment_commands::{AddAppointmentCommand, DeleteAppointmentCommand};
pub use edit_appointment::{EditAppointmentCommand, EditAppointmentDescriptor};
pub use index::Index;
pub use person_commands::{AddPersonCommand, DeletePersonCommand, EditPersonCommand, EditPersonDescriptor};
pub use view_commands::{ClearCommand, FindCommand, ListCommand};

pub type CommandResult<T> = Result<T, CommandError>;

/// Success case of a command run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Shown verbatim by presentation.
    pub message: String,
}

impl CommandOutput {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Stable, machine-readable failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandErrorKind {
    InvalidPersonIndex,
    InvalidAppointmentIndex,
    DuplicatePerson,
    DuplicateAppointment,
    PersonNotFound,
}

impl CommandErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidPersonIndex => "invalid_person_index",
            Self::InvalidAppointmentIndex => "invalid_appointment_index",
            Self::DuplicatePerson => "duplicate_person",
            Self::DuplicateAppointment => "duplicate_appointment",
            Self::PersonNotFound => "person_not_found",
        }
    }
}

/// Failure case of a command run. `Display` is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    InvalidPersonIndex,
    InvalidAppointmentIndex,
    DuplicatePerson,
    DuplicateAppointment,
    PersonNotFound,
}

impl CommandError {
    pub fn kind(&self) -> CommandErrorKind {
        match self {
            Self::InvalidPersonIndex => CommandErrorKind::InvalidPersonIndex,
            Self::InvalidAppointmentIndex => CommandErrorKind::InvalidAppointmentIndex,
            Self::DuplicatePerson => CommandErrorKind::DuplicatePerson,
            Self::DuplicateAppointment => CommandErrorKind::DuplicateAppointment,
            Self::PersonNotFound => CommandErrorKind::PersonNotFound,
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::InvalidPersonIndex => messages::MESSAGE_INVALID_PERSON_DISPLAYED_INDEX,
            Self::InvalidAppointmentIndex => messages::MESSAGE_INVALID_APPOINTMENT_DISPLAYED_INDEX,
            Self::DuplicatePerson => messages::MESSAGE_DUPLICATE_PERSON,
            Self::DuplicateAppointment => messages::MESSAGE_DUPLICATE_APPOINTMENT,
            Self::PersonNotFound => messages::MESSAGE_PERSON_NOT_FOUND,
        };
        f.write_str(message)
    }
}

impl Error for CommandError {}

impl From<RegistryError> for CommandError {
    fn from(value: RegistryError) -> Self {
        match value {
            RegistryError::DuplicatePerson => Self::DuplicatePerson,
            RegistryError::PersonNotFound => Self::PersonNotFound,
        }
    }
}

/// One executable user intent with already-typed arguments.
pub trait Command {
    /// Short stable name used in log events.
    fn name(&self) -> &'static str;

    fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutput>;
}

/// Executes `command` and emits one `command_execute` log event.
pub fn run_command(command: &dyn Command, model: &mut dyn Model) -> CommandResult<CommandOutput> {
    let started_at = Instant::now();
    let result = command.execute(model);
    match &result {
        Ok(_) => info!(
            "event=command_execute module=command command={} status=ok duration_ms={}",
            command.name(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => warn!(
            "event=command_execute module=command command={} status=error error_kind={} duration_ms={}",
            command.name(),
            err.kind().as_str(),
            started_at.elapsed().as_millis()
        ),
    }
    result
}

/// Clones the person at `index` of the current filtered list.
fn resolve_person(model: &dyn Model, index: Index) -> CommandResult<Person> {
    model
        .filtered_person_list()
        .get(index.zero_based())
        .map(|person| (*person).clone())
        .ok_or(CommandError::InvalidPersonIndex)
}

/// Clones the appointment at `index` of `person`'s insertion-ordered list.
fn resolve_appointment(person: &Person, index: Index) -> CommandResult<Appointment> {
    person
        .appointments()
        .get(index.zero_based())
        .cloned()
        .ok_or(CommandError::InvalidAppointmentIndex)
}
