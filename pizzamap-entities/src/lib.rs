#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # pizzamap-entities
//!
//! Reusable, agnostic domain entities for the pizza map.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod category;
pub mod geo;
pub mod hours;
pub mod id;
pub mod place;
pub mod region;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
