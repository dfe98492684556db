//! Add/delete appointment commands.

use super::messages::{format_appointment, format_person};
use super::{
    resolve_appointment, resolve_person, Command, CommandError, CommandOutput, CommandResult, Index,
};
use crate::model::appointment::{validate_description, Appointment};
use crate::model::fields::ValidationError;
use crate::service::model_manager::Model;
use chrono::NaiveDateTime;

/// Attaches a new appointment to the person at `person_index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAppointmentCommand {
    person_index: Index,
    description: String,
    date_time: NaiveDateTime,
}

impl AddAppointmentCommand {
    pub const MESSAGE_SUCCESS: &'static str = "New appointment added";

    /// # Errors
    /// - `InvalidDescription` when `description` is blank.
    pub fn new(
        person_index: Index,
        description: impl AsRef<str>,
        date_time: NaiveDateTime,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            person_index,
            description: validate_description(description.as_ref())?,
            date_time,
        })
    }
}

impl Command for AddAppointmentCommand {
    fn name(&self) -> &'static str {
        "add_appointment"
    }

    fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutput> {
        let person = resolve_person(model, self.person_index)?;
        let appointment =
            Appointment::from_validated(person.id(), self.description.clone(), self.date_time);
        if person.has_appointment(&appointment) {
            return Err(CommandError::DuplicateAppointment);
        }

        let mut edited_person = person.clone();
        edited_person.add_appointment(appointment.clone());
        model.set_person(&person, edited_person)?;

        Ok(CommandOutput::new(format!(
            "{}: {}; Patient: {}",
            Self::MESSAGE_SUCCESS,
            format_appointment(&appointment),
            format_person(&person)
        )))
    }
}

/// Removes one appointment from the person at `person_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteAppointmentCommand {
    person_index: Index,
    appointment_index: Index,
}

impl DeleteAppointmentCommand {
    pub const MESSAGE_SUCCESS: &'static str = "Deleted Appointment";

    pub fn new(person_index: Index, appointment_index: Index) -> Self {
        Self {
            person_index,
            appointment_index,
        }
    }
}

impl Command for DeleteAppointmentCommand {
    fn name(&self) -> &'static str {
        "delete_appointment"
    }

    fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutput> {
        let person = resolve_person(model, self.person_index)?;
        let target = resolve_appointment(&person, self.appointment_index)?;

        let mut edited_person = person.clone();
        edited_person.remove_appointment(&target);
        model.set_person(&person, edited_person)?;

        Ok(CommandOutput::new(format!(
            "{}: {}; Patient: {}",
            Self::MESSAGE_SUCCESS,
            format_appointment(&target),
            format_person(&person)
        )))
    }
}
