//! Stateful facade over the registry.
//!
//! # Responsibility
//! - Own the registry and the active person filter.
//! - Derive the filtered person/appointment views read by presentation.
//! - Delegate every mutation to the registry unchanged.
//!
//! # See also
//! - `crate::registry::address_book`

pub mod model_manager;
pub mod predicate;
