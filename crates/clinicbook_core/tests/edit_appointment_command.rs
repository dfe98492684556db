mod common;

use clinicbook_core::command::messages::{format_person, MESSAGE_DUPLICATE_APPOINTMENT};
use clinicbook_core::{
    run_command, AddressBook, Appointment, Command, CommandError, CommandErrorKind,
    EditAppointmentCommand, EditAppointmentDescriptor, Index, Model, ModelManager,
    NameContainsKeywords,
};
use common::{appointment_for, at, model_with_alice_appointment};

fn first() -> Index {
    Index::from_one_based(1).unwrap()
}

fn second() -> Index {
    Index::from_one_based(2).unwrap()
}

/// Persons plus every owned appointment; person equality alone ignores appointments.
fn snapshot(model: &ModelManager) -> (AddressBook, Vec<Appointment>) {
    let book = model.address_book().clone();
    let appointments = book.appointments().cloned().collect();
    (book, appointments)
}

#[test]
fn editing_with_identical_values_is_a_duplicate() {
    let mut model = model_with_alice_appointment();
    let before = snapshot(&model);
    let descriptor = EditAppointmentDescriptor::new()
        .with_description("one")
        .unwrap()
        .with_date_time(at("02-01-2024 12:00"));

    let err = EditAppointmentCommand::new(first(), first(), descriptor)
        .execute(&mut model)
        .unwrap_err();

    assert_eq!(err, CommandError::DuplicateAppointment);
    assert_eq!(err.to_string(), MESSAGE_DUPLICATE_APPOINTMENT);
    assert_eq!(snapshot(&model), before);
}

#[test]
fn editing_with_empty_descriptor_is_a_duplicate_not_a_no_op() {
    let mut model = model_with_alice_appointment();
    let before_revision = model.view_revision();

    let err = EditAppointmentCommand::new(first(), first(), EditAppointmentDescriptor::new())
        .execute(&mut model)
        .unwrap_err();

    assert_eq!(err.kind(), CommandErrorKind::DuplicateAppointment);
    assert_eq!(model.view_revision(), before_revision);
}

#[test]
fn editing_only_description_keeps_date_time() {
    let mut model = model_with_alice_appointment();
    let descriptor = EditAppointmentDescriptor::new()
        .with_description("two")
        .unwrap();

    let output = EditAppointmentCommand::new(first(), first(), descriptor)
        .execute(&mut model)
        .unwrap();

    let owner = model.filtered_person_list()[0].clone();
    let expected = appointment_for(&owner, "two", "02-01-2024 12:00");
    assert_eq!(owner.appointments(), &[expected.clone()]);
    assert!(!owner.has_appointment(&appointment_for(&owner, "one", "02-01-2024 12:00")));
    assert_eq!(
        output.message,
        format!(
            "Edited Appointment: two at 02-01-2024 12:00; Patient: {}",
            format_person(&owner)
        )
    );
    assert_eq!(model.filtered_appointment_list(), &[expected]);
}

#[test]
fn editing_both_fields_replaces_appointment() {
    let mut model = model_with_alice_appointment();
    let descriptor = EditAppointmentDescriptor::new()
        .with_description("follow-up")
        .unwrap()
        .with_date_time(at("05-01-2024 09:30"));

    EditAppointmentCommand::new(first(), first(), descriptor)
        .execute(&mut model)
        .unwrap();

    let owner = &model.address_book().persons()[0];
    assert_eq!(owner.appointments().len(), 1);
    assert_eq!(owner.appointments()[0].description(), "follow-up");
    assert_eq!(owner.appointments()[0].date_time(), at("05-01-2024 09:30"));
}

#[test]
fn editing_into_another_owned_appointment_is_a_duplicate() {
    let mut model = model_with_alice_appointment();
    let owner = model.address_book().persons()[0].clone();
    let mut edited_owner = owner.clone();
    edited_owner.add_appointment(appointment_for(&owner, "two", "03-01-2024 10:00"));
    model.set_person(&owner, edited_owner).unwrap();
    let before = snapshot(&model);

    let descriptor = EditAppointmentDescriptor::new()
        .with_description("two")
        .unwrap()
        .with_date_time(at("03-01-2024 10:00"));
    let err = EditAppointmentCommand::new(first(), first(), descriptor)
        .execute(&mut model)
        .unwrap_err();

    assert_eq!(err, CommandError::DuplicateAppointment);
    assert_eq!(snapshot(&model), before);
}

#[test]
fn person_index_past_filtered_list_is_invalid() {
    let mut model = model_with_alice_appointment();
    let out_of_bounds = Index::from_one_based(model.filtered_person_list().len() + 1).unwrap();
    let appointments_before = model.address_book().appointment_count();
    let descriptor = EditAppointmentDescriptor::new()
        .with_description("two")
        .unwrap();

    let err = EditAppointmentCommand::new(out_of_bounds, first(), descriptor)
        .execute(&mut model)
        .unwrap_err();

    assert_eq!(err, CommandError::InvalidPersonIndex);
    assert_eq!(err.to_string(), "The person index provided is invalid");
    assert_eq!(model.address_book().appointment_count(), appointments_before);
}

#[test]
fn person_index_is_resolved_against_filtered_list() {
    let mut model = model_with_alice_appointment();
    model.update_filtered_person_list(NameContainsKeywords::new(["benson"]).into_predicate());
    let descriptor = EditAppointmentDescriptor::new()
        .with_description("two")
        .unwrap();

    // Benson is the only visible person and owns no appointments.
    let err = EditAppointmentCommand::new(first(), first(), descriptor.clone())
        .execute(&mut model)
        .unwrap_err();
    assert_eq!(err, CommandError::InvalidAppointmentIndex);

    let err = EditAppointmentCommand::new(second(), first(), descriptor)
        .execute(&mut model)
        .unwrap_err();
    assert_eq!(err, CommandError::InvalidPersonIndex);
}

#[test]
fn appointment_index_past_owned_list_is_invalid() {
    let mut model = model_with_alice_appointment();
    let before = snapshot(&model);
    let descriptor = EditAppointmentDescriptor::new()
        .with_description("two")
        .unwrap();

    let err = EditAppointmentCommand::new(first(), second(), descriptor)
        .execute(&mut model)
        .unwrap_err();

    assert_eq!(err, CommandError::InvalidAppointmentIndex);
    assert_eq!(err.to_string(), "The appointment index provided is invalid");
    assert_eq!(snapshot(&model), before);
}

#[test]
fn successful_edit_refreshes_views() {
    let mut model = model_with_alice_appointment();
    let before_revision = model.view_revision();
    let descriptor = EditAppointmentDescriptor::new().with_date_time(at("02-01-2024 15:00"));

    let command = EditAppointmentCommand::new(first(), first(), descriptor);
    run_command(&command, &mut model).unwrap();

    assert_eq!(model.view_revision(), before_revision + 1);
    assert_eq!(
        model.filtered_appointment_list()[0].date_time(),
        at("02-01-2024 15:00")
    );
}
