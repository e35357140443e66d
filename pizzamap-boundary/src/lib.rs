use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[cfg(feature = "entity-conversions")]
mod conv;

/// A row of the `pizzerias` table, optionally with its
/// joined style links.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "extra-derive", derive(PartialEq))]
pub struct Pizzeria {
    pub id              : String,
    pub city_id         : String,
    pub name            : String,
    pub address         : String,
    pub lat             : Option<f64>,
    pub lng             : Option<f64>,
    pub phone           : Option<String>,
    pub website         : Option<String>,
    /// Free-text hours keyed by `mon`..`sun`.
    pub hours           : Option<HashMap<String, String>>,
    pub description     : Option<String>,
    pub image_url       : Option<String>,
    pub google_maps_url : Option<String>,
    pub created_at      : Option<String>,
    pub updated_at      : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pizzeria_styles : Option<Vec<PizzeriaStyle>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "extra-derive", derive(PartialEq))]
pub struct PizzaStyle {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "extra-derive", derive(PartialEq))]
pub struct PizzeriaStyle {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pizzeria_id: Option<String>,
    pub style_id: String,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pizza_styles: Option<PizzaStyle>,
}

/// Body of an insert into `pizzerias`.
///
/// Missing coordinates are written as `null`.
#[derive(Serialize, Debug, Clone)]
#[cfg_attr(feature = "extra-derive", derive(PartialEq))]
pub struct NewPizzeria {
    pub city_id: String,
    pub name: String,
    pub address: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub google_maps_url: Option<String>,
}

/// Body of an update of `pizzerias`.
///
/// Missing coordinates are omitted and keep their stored values.
#[derive(Serialize, Debug, Clone)]
#[cfg_attr(feature = "extra-derive", derive(PartialEq))]
pub struct PizzeriaUpdate {
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub google_maps_url: Option<String>,
    pub updated_at: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "extra-derive", derive(PartialEq))]
pub struct NewPizzeriaStyle {
    pub pizzeria_id: String,
    pub style_id: String,
    pub is_primary: bool,
}

/// Representation returned by an insert with `select=id`.
#[derive(Deserialize, Debug, Clone)]
pub struct InsertedId {
    pub id: String,
}

/// Error body of the REST backend.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[cfg_attr(feature = "extra-derive", derive(PartialEq))]
pub struct Error {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}
