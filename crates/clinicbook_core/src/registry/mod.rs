//! Authoritative person collection.
//!
//! # Responsibility
//! - Enforce the global duplicate-person invariant on every mutation.
//! - Offer full enumeration and replacement for persistence adapters.
//!
//! # Invariants
//! - No two stored persons are weakly the same (equal names).

pub mod address_book;
