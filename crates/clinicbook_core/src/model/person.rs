//! Person aggregate.
//!
//! # Responsibility
//! - Hold identity fields, data fields, tags and owned appointments.
//! - Define weak sameness (`is_same_person`) and strong equality (`==`).
//!
//! # Invariants
//! - Every field is present after construction; there is no partial state.
//! - `id` is stable across edits and is not part of either equality notion.
//! - Tags and appointments are exposed read-only; appointments only change
//!   through the explicit mutation methods below.
//! - The appointment list never holds two structurally equal entries.

use crate::model::appointment::Appointment;
use crate::model::fields::{Address, Email, Name, Nric, Phone, Tag};
use serde::Serialize;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Stable identifier of a person, referenced by owned appointments.
pub type PersonId = Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct Person {
    id: PersonId,
    name: Name,
    phone: Phone,
    email: Email,
    nric: Nric,
    address: Address,
    tags: BTreeSet<Tag>,
    appointments: Vec<Appointment>,
}

impl Person {
    /// Creates a person with a generated id and no appointments.
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        nric: Nric,
        address: Address,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, phone, email, nric, address, tags)
    }

    /// Creates a person with a caller-provided id.
    ///
    /// Used by load paths where identity already exists in storage.
    pub fn with_id(
        id: PersonId,
        name: Name,
        phone: Phone,
        email: Email,
        nric: Nric,
        address: Address,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            id,
            name,
            phone,
            email,
            nric,
            address,
            tags: tags.into_iter().collect(),
            appointments: Vec::new(),
        }
    }

    /// Returns a copy with replaced details, keeping `id` and appointments.
    pub fn with_details(
        &self,
        name: Name,
        phone: Phone,
        email: Email,
        nric: Nric,
        address: Address,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            id: self.id,
            name,
            phone,
            email,
            nric,
            address,
            tags,
            appointments: self.appointments.clone(),
        }
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn nric(&self) -> &Nric {
        &self.nric
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Owned appointments in insertion order.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Appends `appointment`; a structurally equal repeat is a no-op.
    ///
    /// The appointment is re-keyed to this person's id before the check.
    /// Callers that need a duplicate error must check `has_appointment` first.
    pub fn add_appointment(&mut self, appointment: Appointment) {
        let appointment = appointment.with_patient(self.id);
        if !self.has_appointment(&appointment) {
            self.appointments.push(appointment);
        }
    }

    pub fn has_appointment(&self, appointment: &Appointment) -> bool {
        self.appointments.contains(appointment)
    }

    /// Removes `appointment`. Returns `false` when it was not owned.
    pub fn remove_appointment(&mut self, appointment: &Appointment) -> bool {
        let before = self.appointments.len();
        self.appointments.retain(|owned| owned != appointment);
        self.appointments.len() != before
    }

    /// Swaps `target` for `edited`. The edited entry moves to the end.
    ///
    /// Returns `false` and leaves the list untouched when `target` is absent.
    pub fn replace_appointment(&mut self, target: &Appointment, edited: Appointment) -> bool {
        if !self.remove_appointment(target) {
            return false;
        }
        self.add_appointment(edited);
        true
    }

    /// Weak sameness: both persons have the same name.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }
}

/// Strong equality: name, phone and nric all match.
impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.phone == other.phone && self.nric == other.nric
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.phone.hash(state);
        self.nric.hash(state);
    }
}
