mod common;

use clinicbook_core::{
    show_all, AddressBook, Model, ModelManager, NameContainsKeywords, RegistryError,
};
use common::{alice, appointment_for, benson, carl, person, typical_address_book};

#[test]
fn default_predicate_shows_everyone_in_registry_order() {
    let model = ModelManager::new(typical_address_book());
    let names: Vec<&str> = model
        .filtered_person_list()
        .iter()
        .map(|p| p.name().as_str())
        .collect();
    assert_eq!(names, vec!["Alice Pauline", "Benson Meier", "Carl Kurz"]);
}

#[test]
fn filter_does_not_mutate_registry() {
    let mut model = ModelManager::new(typical_address_book());
    model.update_filtered_person_list(NameContainsKeywords::new(["carl"]).into_predicate());

    assert_eq!(model.filtered_person_list().len(), 1);
    assert_eq!(model.address_book().len(), 3);

    model.update_filtered_person_list(show_all());
    assert_eq!(model.filtered_person_list().len(), 3);
}

#[test]
fn appointment_view_is_person_then_insertion_ordered() {
    let mut first = alice();
    let mut second = benson();
    let a1 = appointment_for(&first, "a1", "02-01-2024 12:00");
    let a2 = appointment_for(&first, "a2", "01-01-2024 08:00");
    let b1 = appointment_for(&second, "b1", "01-01-2023 08:00");
    first.add_appointment(a1.clone());
    first.add_appointment(a2.clone());
    second.add_appointment(b1.clone());
    let model =
        ModelManager::new(AddressBook::from_persons(vec![first, second, carl()]).unwrap());

    assert_eq!(model.filtered_appointment_list(), &[a1, a2, b1]);
}

#[test]
fn appointment_view_follows_predicate() {
    let mut first = alice();
    let appointment = appointment_for(&first, "one", "02-01-2024 12:00");
    first.add_appointment(appointment.clone());
    let mut model = ModelManager::new(AddressBook::from_persons(vec![first, benson()]).unwrap());

    model.update_filtered_person_list(NameContainsKeywords::new(["benson"]).into_predicate());
    assert!(model.filtered_appointment_list().is_empty());

    model.update_filtered_person_list(show_all());
    assert_eq!(model.filtered_appointment_list(), &[appointment]);
}

#[test]
fn mutations_propagate_registry_errors_unchanged() {
    let mut model = ModelManager::new(typical_address_book());
    let revision = model.view_revision();

    assert_eq!(
        model.add_person(person("Alice Pauline", "11111111")),
        Err(RegistryError::DuplicatePerson)
    );
    assert_eq!(
        model.delete_person(&person("Nobody", "11111111")),
        Err(RegistryError::PersonNotFound)
    );
    assert_eq!(
        model.set_person(&person("Nobody", "11111111"), person("Someone", "222")),
        Err(RegistryError::PersonNotFound)
    );
    assert_eq!(model.view_revision(), revision);
    assert_eq!(model.address_book().len(), 3);
}

#[test]
fn set_address_book_replaces_content_and_refreshes() {
    let mut model = ModelManager::default();
    let revision = model.view_revision();
    model.set_address_book(typical_address_book());

    assert_eq!(model.filtered_person_list().len(), 3);
    assert!(model.view_revision() > revision);
}
