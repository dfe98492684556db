//! Filter and reset commands.

use super::{Command, CommandOutput, CommandResult};
use crate::registry::address_book::AddressBook;
use crate::service::model_manager::Model;
use crate::service::predicate::{show_all, NameContainsKeywords};

/// Narrows the displayed persons to name keyword matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    predicate: NameContainsKeywords,
}

impl FindCommand {
    pub fn new(predicate: NameContainsKeywords) -> Self {
        Self { predicate }
    }
}

impl Command for FindCommand {
    fn name(&self) -> &'static str {
        "find"
    }

    fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutput> {
        model.update_filtered_person_list(self.predicate.clone().into_predicate());
        let listed = model.filtered_person_list().len();
        Ok(CommandOutput::new(format!("{listed} persons listed!")))
    }
}

/// Shows every person again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const MESSAGE_SUCCESS: &'static str = "Listed all persons";
}

impl Command for ListCommand {
    fn name(&self) -> &'static str {
        "list"
    }

    fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutput> {
        model.update_filtered_person_list(show_all());
        Ok(CommandOutput::new(Self::MESSAGE_SUCCESS))
    }
}

/// Empties the registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const MESSAGE_SUCCESS: &'static str = "Address book has been cleared!";
}

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutput> {
        model.set_address_book(AddressBook::new());
        Ok(CommandOutput::new(Self::MESSAGE_SUCCESS))
    }
}
