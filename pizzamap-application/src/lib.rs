#[macro_use]
extern crate log;

mod load_places;
mod state;
mod submit_place;

pub mod prelude {
    pub use super::{load_places::*, state::*, submit_place::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use pizzamap_core::{
    entities::*, gateways::geocode::GeoCodingGateway, repositories::*, store::*, usecases,
};

#[cfg(test)]
pub(crate) mod tests;
