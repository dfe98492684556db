//! User-facing message constants and single-line renderers.

use crate::model::appointment::Appointment;
use crate::model::person::Person;

pub const MESSAGE_INVALID_PERSON_DISPLAYED_INDEX: &str = "The person index provided is invalid";
pub const MESSAGE_INVALID_APPOINTMENT_DISPLAYED_INDEX: &str =
    "The appointment index provided is invalid";
pub const MESSAGE_DUPLICATE_PERSON: &str = "This person already exists in the address book";
pub const MESSAGE_DUPLICATE_APPOINTMENT: &str = "This appointment already exists for this patient";
pub const MESSAGE_PERSON_NOT_FOUND: &str = "The target person is no longer in the address book";

/// Renders every person field except appointments on one line.
pub fn format_person(person: &Person) -> String {
    let tags = person
        .tags()
        .iter()
        .map(|tag| format!("[{tag}]"))
        .collect::<String>();
    format!(
        "{}; Phone: {}; Email: {}; Nric: {}; Address: {}; Tags: {}",
        person.name(),
        person.phone(),
        person.email(),
        person.nric(),
        person.address(),
        tags
    )
}

pub fn format_appointment(appointment: &Appointment) -> String {
    appointment.to_string()
}
