#![allow(dead_code)]

use clinicbook_core::{
    parse_date_time, Address, AddressBook, Appointment, Email, ModelManager, Name, Nric, Person,
    Phone, Tag,
};
use chrono::NaiveDateTime;

pub fn person(name: &str, phone: &str) -> Person {
    Person::new(
        Name::new(name).unwrap(),
        Phone::new(phone).unwrap(),
        Email::new(format!("{}@example.com", name.split_whitespace().next().unwrap().to_lowercase()))
            .unwrap(),
        Nric::new("S1234567A").unwrap(),
        Address::new("123, Jurong West Ave 6, #08-111").unwrap(),
        [Tag::new("friends").unwrap()],
    )
}

pub fn alice() -> Person {
    person("Alice Pauline", "94351253")
}

pub fn benson() -> Person {
    person("Benson Meier", "98765432")
}

pub fn carl() -> Person {
    person("Carl Kurz", "95352563")
}

pub fn at(raw: &str) -> NaiveDateTime {
    parse_date_time(raw).unwrap()
}

pub fn appointment_for(owner: &Person, description: &str, raw_date_time: &str) -> Appointment {
    Appointment::new(owner.id(), description, at(raw_date_time)).unwrap()
}

/// Alice, Benson and Carl, in that order, without appointments.
pub fn typical_address_book() -> AddressBook {
    AddressBook::from_persons(vec![alice(), benson(), carl()]).unwrap()
}

/// Typical book where the first person owns ("one", 02-01-2024 12:00).
pub fn model_with_alice_appointment() -> ModelManager {
    let mut first = alice();
    let appointment = appointment_for(&first, "one", "02-01-2024 12:00");
    first.add_appointment(appointment);
    let book = AddressBook::from_persons(vec![first, benson(), carl()]).unwrap();
    ModelManager::new(book)
}
