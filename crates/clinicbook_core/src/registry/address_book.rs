//! Insertion-ordered person registry.
//!
//! # Invariants
//! - Persons are unique under weak sameness after every successful call.
//! - Failed calls leave the book unchanged.
//! - Lookups for replacement/removal use strong equality.
//!
//! Duplicate detection is a linear scan; a name-keyed index would replace it
//! if registries stop being small.

use crate::model::appointment::Appointment;
use crate::model::person::Person;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry invariant violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// Mutation would store two persons with the same name.
    DuplicatePerson,
    /// Target person is not in the registry.
    PersonNotFound,
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePerson => write!(f, "operation would result in duplicate persons"),
            Self::PersonNotFound => write!(f, "person not found in registry"),
        }
    }
}

impl Error for RegistryError {}

/// `==` compares the persons' strong identity (name, phone, nric) in order;
/// other details and appointments are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from a snapshot, rejecting snapshots with duplicates.
    pub fn from_persons(persons: Vec<Person>) -> RegistryResult<Self> {
        let mut book = Self::new();
        book.set_persons(persons)?;
        Ok(book)
    }

    /// All persons in insertion order.
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Total appointments across all persons.
    pub fn appointment_count(&self) -> usize {
        self.persons
            .iter()
            .map(|person| person.appointments().len())
            .sum()
    }

    /// Iterates every owned appointment, person-then-insertion order.
    pub fn appointments(&self) -> impl Iterator<Item = &Appointment> {
        self.persons
            .iter()
            .flat_map(|person| person.appointments().iter())
    }

    /// Returns whether a weakly-same person is already stored.
    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|stored| stored.is_same_person(person))
    }

    /// Appends `person`.
    ///
    /// # Errors
    /// - `DuplicatePerson` when a weakly-same person is already stored.
    pub fn add_person(&mut self, person: Person) -> RegistryResult<()> {
        if self.has_person(&person) {
            return Err(RegistryError::DuplicatePerson);
        }
        self.persons.push(person);
        Ok(())
    }

    /// Replaces `target` with `edited` at the same position.
    ///
    /// # Errors
    /// - `PersonNotFound` when no stored person equals `target`.
    /// - `DuplicatePerson` when `edited` is weakly-same as another stored person.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> RegistryResult<()> {
        let position = self.position_of(target)?;
        let collides = self
            .persons
            .iter()
            .enumerate()
            .any(|(index, stored)| index != position && stored.is_same_person(&edited));
        if collides {
            return Err(RegistryError::DuplicatePerson);
        }
        self.persons[position] = edited;
        Ok(())
    }

    /// Removes `target` together with its appointments.
    ///
    /// # Errors
    /// - `PersonNotFound` when no stored person equals `target`.
    pub fn remove_person(&mut self, target: &Person) -> RegistryResult<Person> {
        let position = self.position_of(target)?;
        Ok(self.persons.remove(position))
    }

    /// Replaces the whole content with `persons`.
    ///
    /// # Errors
    /// - `DuplicatePerson` when the snapshot holds weakly-same persons; the
    ///   book keeps its previous content.
    pub fn set_persons(&mut self, persons: Vec<Person>) -> RegistryResult<()> {
        let has_duplicates = persons.iter().enumerate().any(|(index, person)| {
            persons[index + 1..]
                .iter()
                .any(|later| later.is_same_person(person))
        });
        if has_duplicates {
            return Err(RegistryError::DuplicatePerson);
        }
        self.persons = persons;
        Ok(())
    }

    /// Replaces the whole content with another (already valid) book.
    pub fn reset_data(&mut self, other: AddressBook) {
        self.persons = other.persons;
    }

    fn position_of(&self, target: &Person) -> RegistryResult<usize> {
        self.persons
            .iter()
            .position(|stored| stored == target)
            .ok_or(RegistryError::PersonNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::{AddressBook, RegistryError};
    use crate::model::fields::{Address, Email, Name, Nric, Phone};
    use crate::model::person::Person;

    fn person(name: &str, phone: &str) -> Person {
        Person::new(
            Name::new(name).unwrap(),
            Phone::new(phone).unwrap(),
            Email::new("someone@example.com").unwrap(),
            Nric::new("S1234567A").unwrap(),
            Address::new("somewhere").unwrap(),
            [],
        )
    }

    #[test]
    fn set_person_allows_weakly_same_self_replacement() {
        let alice = person("Alice", "111");
        let mut book = AddressBook::new();
        book.add_person(alice.clone()).unwrap();

        let edited = person("Alice", "222");
        book.set_person(&alice, edited.clone()).unwrap();
        assert_eq!(book.persons(), &[edited]);
    }

    #[test]
    fn set_person_preserves_position() {
        let mut book = AddressBook::new();
        let alice = person("Alice", "111");
        book.add_person(alice.clone()).unwrap();
        book.add_person(person("Bob", "222")).unwrap();

        book.set_person(&alice, person("Carl", "333")).unwrap();
        assert_eq!(book.persons()[0].name().as_str(), "Carl");
        assert_eq!(book.persons()[1].name().as_str(), "Bob");
    }

    #[test]
    fn equality_compares_person_identity_only() {
        let alice = person("Alice", "111");
        let moved = alice.with_details(
            alice.name().clone(),
            alice.phone().clone(),
            Email::new("moved@example.com").unwrap(),
            alice.nric().clone(),
            Address::new("elsewhere").unwrap(),
            Default::default(),
        );

        let book = AddressBook::from_persons(vec![alice]).unwrap();
        let other = AddressBook::from_persons(vec![moved]).unwrap();
        assert_eq!(book, other);
        assert_ne!(book, AddressBook::from_persons(vec![person("Alice", "222")]).unwrap());
    }

    #[test]
    fn set_persons_rejects_duplicate_snapshot_and_keeps_content() {
        let mut book = AddressBook::new();
        book.add_person(person("Alice", "111")).unwrap();

        let err = book
            .set_persons(vec![person("Bob", "111"), person("Bob", "222")])
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicatePerson);
        assert_eq!(book.len(), 1);
    }
}
