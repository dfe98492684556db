//! Persistence boundary for the registry.
//!
//! # Responsibility
//! - Define the full-snapshot load/save contract used by adapters.
//! - Keep SQL details out of the model and command layers.
//!
//! # Invariants
//! - Saves replace the stored snapshot entirely; there is no partial write.
//! - Loads re-validate every stored field and the duplicate-person invariant.

use crate::db::DbError;
use crate::registry::address_book::AddressBook;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod sqlite_storage;

pub use sqlite_storage::SqliteRegistryStorage;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    /// Stored rows violate a value or registry invariant.
    InvalidData(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid stored registry data: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Snapshot store for a whole registry.
pub trait RegistryStorage {
    /// Returns `None` when no snapshot has ever been saved.
    fn read_address_book(&self) -> StorageResult<Option<AddressBook>>;
    /// Replaces the stored snapshot with `address_book`.
    fn save_address_book(&mut self, address_book: &AddressBook) -> StorageResult<()>;
}
