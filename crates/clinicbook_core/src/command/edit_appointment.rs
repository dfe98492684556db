//! Edit one appointment of one displayed person.
//!
//! # Contract
//! 1. `person_index` must address the current filtered person list.
//! 2. `appointment_index` must address that person's appointment list.
//! 3. Unset descriptor fields keep the appointment's current values.
//! 4. The edited appointment must differ from every appointment the person
//!    owns, including the one being edited. An empty descriptor therefore
//!    fails with `DuplicateAppointment` instead of succeeding as a no-op.
//! 5. The replacement is committed through `Model::set_person`, which also
//!    refreshes the views; failure at any step leaves the model untouched.

use super::messages::{format_appointment, format_person};
use super::{
    resolve_appointment, resolve_person, Command, CommandError, CommandOutput, CommandResult, Index,
};
use crate::model::appointment::{validate_description, Appointment};
use crate::model::fields::ValidationError;
use crate::service::model_manager::Model;
use chrono::NaiveDateTime;

/// Partial update for an appointment. `None` means "keep current value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditAppointmentDescriptor {
    description: Option<String>,
    date_time: Option<NaiveDateTime>,
}

impl EditAppointmentDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a new description.
    ///
    /// # Errors
    /// - `InvalidDescription` when `description` is blank.
    pub fn with_description(mut self, description: impl AsRef<str>) -> Result<Self, ValidationError> {
        self.description = Some(validate_description(description.as_ref())?);
        Ok(self)
    }

    pub fn with_date_time(mut self, date_time: NaiveDateTime) -> Self {
        self.date_time = Some(date_time);
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn date_time(&self) -> Option<NaiveDateTime> {
        self.date_time
    }

    pub fn is_any_field_edited(&self) -> bool {
        self.description.is_some() || self.date_time.is_some()
    }

    /// Overlays set fields onto `appointment`, keeping the owner.
    pub fn apply_to(&self, appointment: &Appointment) -> Appointment {
        let description = self
            .description
            .clone()
            .unwrap_or_else(|| appointment.description().to_string());
        let date_time = self.date_time.unwrap_or_else(|| appointment.date_time());
        Appointment::from_validated(appointment.patient(), description, date_time)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditAppointmentCommand {
    person_index: Index,
    appointment_index: Index,
    descriptor: EditAppointmentDescriptor,
}

impl EditAppointmentCommand {
    pub const MESSAGE_EDIT_APPOINTMENT_SUCCESS: &'static str = "Edited Appointment";

    pub fn new(
        person_index: Index,
        appointment_index: Index,
        descriptor: EditAppointmentDescriptor,
    ) -> Self {
        Self {
            person_index,
            appointment_index,
            descriptor,
        }
    }

    pub fn person_index(&self) -> Index {
        self.person_index
    }

    pub fn appointment_index(&self) -> Index {
        self.appointment_index
    }

    pub fn descriptor(&self) -> &EditAppointmentDescriptor {
        &self.descriptor
    }
}

impl Command for EditAppointmentCommand {
    fn name(&self) -> &'static str {
        "edit_appointment"
    }

    fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutput> {
        let person = resolve_person(model, self.person_index)?;
        let target = resolve_appointment(&person, self.appointment_index)?;
        let edited = self.descriptor.apply_to(&target);

        // `target` itself counts: re-deriving its own values is a duplicate.
        if person
            .appointments()
            .iter()
            .any(|owned| owned.is_same_appointment(&edited))
        {
            return Err(CommandError::DuplicateAppointment);
        }

        let mut edited_person = person.clone();
        edited_person.replace_appointment(&target, edited.clone());
        model.set_person(&person, edited_person.clone())?;

        Ok(CommandOutput::new(format!(
            "{}: {}; Patient: {}",
            Self::MESSAGE_EDIT_APPOINTMENT_SUCCESS,
            format_appointment(&edited),
            format_person(&edited_person)
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::EditAppointmentDescriptor;
    use crate::model::appointment::{parse_date_time, Appointment};
    use crate::model::fields::ValidationError;
    use uuid::Uuid;

    #[test]
    fn empty_descriptor_reproduces_current_values() {
        let at = parse_date_time("02-01-2024 12:00").unwrap();
        let appointment = Appointment::new(Uuid::new_v4(), "one", at).unwrap();
        let descriptor = EditAppointmentDescriptor::new();

        assert!(!descriptor.is_any_field_edited());
        assert_eq!(descriptor.apply_to(&appointment), appointment);
    }

    #[test]
    fn set_fields_override_and_unset_fields_are_kept() {
        let at = parse_date_time("02-01-2024 12:00").unwrap();
        let appointment = Appointment::new(Uuid::new_v4(), "one", at).unwrap();
        let descriptor = EditAppointmentDescriptor::new()
            .with_description("two")
            .unwrap();

        let edited = descriptor.apply_to(&appointment);
        assert_eq!(edited.description(), "two");
        assert_eq!(edited.date_time(), at);
        assert_eq!(edited.patient(), appointment.patient());
    }

    #[test]
    fn blank_description_is_rejected_at_construction() {
        let err = EditAppointmentDescriptor::new()
            .with_description(" ")
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidDescription(" ".to_string()));
    }
}
