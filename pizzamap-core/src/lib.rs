//! # pizzamap-core
//!
//! Business logic of the pizza map: resolving addresses,
//! validating submissions, and the view state that every
//! rendering surface reads from.

pub mod gateways;
pub mod repositories;
pub mod store;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use pizzamap_entities::{
        category::*, geo::*, hours::*, id::*, place::*, region::*, time::*,
    };
}

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;
