//! Core domain logic for ClinicBook.
//! This crate is the single source of truth for registry invariants.

pub mod command;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod registry;
pub mod service;
pub mod storage;

pub use command::{
    run_command, AddAppointmentCommand, AddPersonCommand, ClearCommand, Command, CommandError,
    CommandErrorKind, CommandOutput, CommandResult, DeleteAppointmentCommand, DeletePersonCommand,
    EditAppointmentCommand, EditAppointmentDescriptor, EditPersonCommand, EditPersonDescriptor,
    FindCommand, Index, ListCommand,
};
pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::appointment::{parse_date_time, Appointment, DATE_TIME_FORMAT};
pub use model::fields::{Address, Email, Name, Nric, Phone, Tag, ValidationError};
pub use model::person::{Person, PersonId};
pub use model::timeslot::Timeslot;
pub use registry::address_book::{AddressBook, RegistryError, RegistryResult};
pub use service::model_manager::{Model, ModelManager};
pub use service::predicate::{show_all, NameContainsKeywords, PersonPredicate};
pub use storage::{RegistryStorage, SqliteRegistryStorage, StorageError, StorageResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
