//! Model contract and in-memory implementation.
//!
//! # Responsibility
//! - Expose filtered person/appointment views over the registry.
//! - Route mutations to the registry, propagating its errors unchanged.
//!
//! # Invariants
//! - The model adds no invariant beyond the registry's.
//! - Changing the predicate never mutates the registry.
//! - The appointment view is refreshed after every mutation or predicate
//!   change; `view_revision` increases on each refresh.

use crate::model::appointment::Appointment;
use crate::model::person::Person;
use crate::registry::address_book::{AddressBook, RegistryResult};
use crate::service::predicate::{show_all, PersonPredicate};
use log::debug;

/// State container commands execute against.
pub trait Model {
    /// Read-only registry access, used by persistence adapters.
    fn address_book(&self) -> &AddressBook;
    /// Replaces all registry content (load path / clear).
    fn set_address_book(&mut self, address_book: AddressBook);

    fn has_person(&self, person: &Person) -> bool;
    fn add_person(&mut self, person: Person) -> RegistryResult<()>;
    fn set_person(&mut self, target: &Person, edited: Person) -> RegistryResult<()>;
    fn delete_person(&mut self, target: &Person) -> RegistryResult<()>;

    /// Persons matching the active predicate, in registry order.
    fn filtered_person_list(&self) -> Vec<&Person>;
    /// Appointments of matching persons, person-then-insertion order.
    fn filtered_appointment_list(&self) -> &[Appointment];
    /// Replaces the active predicate.
    fn update_filtered_person_list(&mut self, predicate: PersonPredicate);
    /// Recomputes the appointment view from the registry.
    fn update_filtered_appointment_list(&mut self);
    /// Counter bumped every time the views are refreshed.
    fn view_revision(&self) -> u64;
}

/// Default in-memory model.
pub struct ModelManager {
    address_book: AddressBook,
    predicate: PersonPredicate,
    appointment_view: Vec<Appointment>,
    revision: u64,
}

impl ModelManager {
    pub fn new(address_book: AddressBook) -> Self {
        let mut manager = Self {
            address_book,
            predicate: show_all(),
            appointment_view: Vec::new(),
            revision: 0,
        };
        manager.update_filtered_appointment_list();
        manager
    }
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new(AddressBook::new())
    }
}

impl Model for ModelManager {
    fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    fn set_address_book(&mut self, address_book: AddressBook) {
        self.address_book.reset_data(address_book);
        self.update_filtered_appointment_list();
    }

    fn has_person(&self, person: &Person) -> bool {
        self.address_book.has_person(person)
    }

    fn add_person(&mut self, person: Person) -> RegistryResult<()> {
        self.address_book.add_person(person)?;
        self.update_filtered_appointment_list();
        Ok(())
    }

    fn set_person(&mut self, target: &Person, edited: Person) -> RegistryResult<()> {
        self.address_book.set_person(target, edited)?;
        self.update_filtered_appointment_list();
        Ok(())
    }

    fn delete_person(&mut self, target: &Person) -> RegistryResult<()> {
        self.address_book.remove_person(target)?;
        self.update_filtered_appointment_list();
        Ok(())
    }

    fn filtered_person_list(&self) -> Vec<&Person> {
        self.address_book
            .persons()
            .iter()
            .filter(|person| (self.predicate)(*person))
            .collect()
    }

    fn filtered_appointment_list(&self) -> &[Appointment] {
        &self.appointment_view
    }

    fn update_filtered_person_list(&mut self, predicate: PersonPredicate) {
        self.predicate = predicate;
        self.update_filtered_appointment_list();
    }

    fn update_filtered_appointment_list(&mut self) {
        let view = self
            .address_book
            .persons()
            .iter()
            .filter(|person| (self.predicate)(*person))
            .flat_map(|person| person.appointments().iter().cloned())
            .collect();
        self.appointment_view = view;
        self.revision += 1;
        debug!(
            "event=view_refresh module=model status=ok revision={} appointments={}",
            self.revision,
            self.appointment_view.len()
        );
    }

    fn view_revision(&self) -> u64 {
        self.revision
    }
}
