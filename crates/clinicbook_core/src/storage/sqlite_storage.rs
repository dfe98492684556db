//! SQLite snapshot adapter.
//!
//! # Invariants
//! - `save_address_book` rewrites every table inside one transaction.
//! - Row order is kept through explicit `position` columns.
//! - Read paths reject invalid stored state instead of masking it.

use super::{RegistryStorage, StorageError, StorageResult};
use crate::db::{open_db, open_db_in_memory};
use crate::model::appointment::Appointment;
use crate::model::fields::{Address, Email, Name, Nric, Phone, Tag, ValidationError};
use crate::model::person::{Person, PersonId};
use crate::registry::address_book::AddressBook;
use chrono::{NaiveDateTime, Utc};
use log::{error, info};
use rusqlite::{params, Connection};
use std::path::Path;
use std::time::Instant;
use uuid::Uuid;

/// Fractional seconds are written only when non-zero.
const STORED_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const SAVED_AT_KEY: &str = "saved_at";

struct PersonRow {
    id: String,
    name: String,
    phone: String,
    email: String,
    nric: String,
    address: String,
}

/// Registry snapshot store backed by one SQLite connection.
pub struct SqliteRegistryStorage {
    conn: Connection,
}

impl SqliteRegistryStorage {
    /// Opens (creating if needed) the database at `path`.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        Ok(Self::new(open_db(path)?))
    }

    pub fn open_in_memory() -> StorageResult<Self> {
        Ok(Self::new(open_db_in_memory()?))
    }

    /// Wraps a connection already bootstrapped by `crate::db`.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn load_person(&self, row: PersonRow) -> StorageResult<Person> {
        let id = Uuid::parse_str(&row.id).map_err(|_| {
            StorageError::InvalidData(format!("invalid uuid value `{}` in persons.id", row.id))
        })?;
        let tags = self.load_tags(&row.id)?;
        let mut person = Person::with_id(
            id,
            stored(Name::new(row.name), "persons.name")?,
            stored(Phone::new(row.phone), "persons.phone")?,
            stored(Email::new(row.email), "persons.email")?,
            stored(Nric::new(row.nric), "persons.nric")?,
            stored(Address::new(row.address), "persons.address")?,
            tags,
        );
        for appointment in self.load_appointments(id, &row.id)? {
            person.add_appointment(appointment);
        }
        Ok(person)
    }

    fn load_tags(&self, person_id: &str) -> StorageResult<Vec<Tag>> {
        let mut stmt = self
            .conn
            .prepare("SELECT tag FROM person_tags WHERE person_id = ?1 ORDER BY tag ASC;")?;
        let raw = stmt
            .query_map([person_id], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        raw.into_iter()
            .map(|tag| stored(Tag::new(tag), "person_tags.tag"))
            .collect()
    }

    fn load_appointments(&self, owner: PersonId, person_id: &str) -> StorageResult<Vec<Appointment>> {
        let mut stmt = self.conn.prepare(
            "SELECT description, date_time
             FROM appointments
             WHERE person_id = ?1
             ORDER BY position ASC;",
        )?;
        let raw = stmt
            .query_map([person_id], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        raw.into_iter()
            .map(|(description, date_time)| {
                let date_time = NaiveDateTime::parse_from_str(&date_time, STORED_DATE_TIME_FORMAT)
                    .map_err(|_| {
                        StorageError::InvalidData(format!(
                            "invalid date_time `{date_time}` in appointments.date_time"
                        ))
                    })?;
                stored(
                    Appointment::new(owner, description, date_time),
                    "appointments.description",
                )
            })
            .collect()
    }

    fn write_snapshot(&mut self, address_book: &AddressBook) -> StorageResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute_batch(
            "DELETE FROM appointments;
             DELETE FROM person_tags;
             DELETE FROM persons;",
        )?;
        {
            let mut insert_person = tx.prepare(
                "INSERT INTO persons (id, position, name, phone, email, nric, address)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            )?;
            let mut insert_tag =
                tx.prepare("INSERT INTO person_tags (person_id, tag) VALUES (?1, ?2);")?;
            let mut insert_appointment = tx.prepare(
                "INSERT INTO appointments (person_id, position, description, date_time)
                 VALUES (?1, ?2, ?3, ?4);",
            )?;

            for (position, person) in address_book.persons().iter().enumerate() {
                let person_id = person.id().to_string();
                insert_person.execute(params![
                    person_id,
                    position as i64,
                    person.name().as_str(),
                    person.phone().as_str(),
                    person.email().as_str(),
                    person.nric().as_str(),
                    person.address().as_str(),
                ])?;
                for tag in person.tags() {
                    insert_tag.execute(params![person_id, tag.as_str()])?;
                }
                for (position, appointment) in person.appointments().iter().enumerate() {
                    insert_appointment.execute(params![
                        person_id,
                        position as i64,
                        appointment.description(),
                        appointment
                            .date_time()
                            .format(STORED_DATE_TIME_FORMAT)
                            .to_string(),
                    ])?;
                }
            }
        }
        tx.execute(
            "INSERT INTO registry_meta (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![SAVED_AT_KEY, Utc::now().to_rfc3339()],
        )?;
        tx.commit()?;
        Ok(())
    }
}

impl RegistryStorage for SqliteRegistryStorage {
    fn read_address_book(&self) -> StorageResult<Option<AddressBook>> {
        let saved: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM registry_meta WHERE key = ?1);",
            [SAVED_AT_KEY],
            |row| row.get(0),
        )?;
        if !saved {
            return Ok(None);
        }

        let mut stmt = self.conn.prepare(
            "SELECT id, name, phone, email, nric, address
             FROM persons
             ORDER BY position ASC;",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(PersonRow {
                    id: row.get("id")?,
                    name: row.get("name")?,
                    phone: row.get("phone")?,
                    email: row.get("email")?,
                    nric: row.get("nric")?,
                    address: row.get("address")?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let persons = rows
            .into_iter()
            .map(|row| self.load_person(row))
            .collect::<StorageResult<Vec<_>>>()?;
        let address_book = AddressBook::from_persons(persons)
            .map_err(|err| StorageError::InvalidData(err.to_string()))?;

        info!(
            "event=registry_load module=storage status=ok persons={} appointments={}",
            address_book.len(),
            address_book.appointment_count()
        );
        Ok(Some(address_book))
    }

    fn save_address_book(&mut self, address_book: &AddressBook) -> StorageResult<()> {
        let started_at = Instant::now();
        match self.write_snapshot(address_book) {
            Ok(()) => {
                info!(
                    "event=registry_save module=storage status=ok persons={} appointments={} duration_ms={}",
                    address_book.len(),
                    address_book.appointment_count(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=registry_save module=storage status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}

fn stored<T>(value: Result<T, ValidationError>, column: &str) -> StorageResult<T> {
    value.map_err(|err| StorageError::InvalidData(format!("{column}: {err}")))
}
