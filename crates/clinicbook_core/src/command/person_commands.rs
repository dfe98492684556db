//! Person-level add/edit/delete commands.

use super::messages::format_person;
use super::{resolve_person, Command, CommandError, CommandOutput, CommandResult, Index};
use crate::model::fields::{Address, Email, Name, Nric, Phone, Tag};
use crate::model::person::Person;
use crate::service::model_manager::Model;
use std::collections::BTreeSet;

/// Adds a new person to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPersonCommand {
    person: Person,
}

impl AddPersonCommand {
    pub const MESSAGE_SUCCESS: &'static str = "New person added";

    pub fn new(person: Person) -> Self {
        Self { person }
    }
}

impl Command for AddPersonCommand {
    fn name(&self) -> &'static str {
        "add_person"
    }

    fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutput> {
        if model.has_person(&self.person) {
            return Err(CommandError::DuplicatePerson);
        }
        model.add_person(self.person.clone())?;
        Ok(CommandOutput::new(format!(
            "{}: {}",
            Self::MESSAGE_SUCCESS,
            format_person(&self.person)
        )))
    }
}

/// Partial update for person details. `None` means "keep current value".
///
/// Appointments are never touched by a person edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub nric: Option<Nric>,
    pub address: Option<Address>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.nric.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }

    pub fn apply_to(&self, person: &Person) -> Person {
        person.with_details(
            self.name.clone().unwrap_or_else(|| person.name().clone()),
            self.phone.clone().unwrap_or_else(|| person.phone().clone()),
            self.email.clone().unwrap_or_else(|| person.email().clone()),
            self.nric.clone().unwrap_or_else(|| person.nric().clone()),
            self.address.clone().unwrap_or_else(|| person.address().clone()),
            self.tags.clone().unwrap_or_else(|| person.tags().clone()),
        )
    }
}

/// Edits the details of the person at `index` in the filtered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPersonCommand {
    index: Index,
    descriptor: EditPersonDescriptor,
}

impl EditPersonCommand {
    pub const MESSAGE_SUCCESS: &'static str = "Edited Person";

    pub fn new(index: Index, descriptor: EditPersonDescriptor) -> Self {
        Self { index, descriptor }
    }
}

impl Command for EditPersonCommand {
    fn name(&self) -> &'static str {
        "edit_person"
    }

    fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutput> {
        let person = resolve_person(model, self.index)?;
        let edited = self.descriptor.apply_to(&person);
        model.set_person(&person, edited.clone())?;
        Ok(CommandOutput::new(format!(
            "{}: {}",
            Self::MESSAGE_SUCCESS,
            format_person(&edited)
        )))
    }
}

/// Deletes the person at `index` together with their appointments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletePersonCommand {
    index: Index,
}

impl DeletePersonCommand {
    pub const MESSAGE_SUCCESS: &'static str = "Deleted Person";

    pub fn new(index: Index) -> Self {
        Self { index }
    }
}

impl Command for DeletePersonCommand {
    fn name(&self) -> &'static str {
        "delete_person"
    }

    fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutput> {
        let person = resolve_person(model, self.index)?;
        model.delete_person(&person)?;
        Ok(CommandOutput::new(format!(
            "{}: {}",
            Self::MESSAGE_SUCCESS,
            format_person(&person)
        )))
    }
}
