use crate::{category::*, geo::MapPoint, hours::OpeningHours, id::Id, time::Timestamp};

/// Optional ways to get in touch or learn more.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    pub phone: Option<String>,
    pub website: Option<String>,
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.website.is_none()
    }
}

// Mutable part of a place, i.e. everything a submission may write.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceFields {
    pub region_id: Id,
    pub name: String,
    pub address: String,
    pub pos: Option<MapPoint>,
    pub contact: Contact,
    pub description: Option<String>,
    pub map_url: Option<String>,
}

/// A pizzeria.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: Id,
    pub region_id: Id,
    pub name: String,
    pub address: String,
    /// Places may exist without coordinates.
    pub pos: Option<MapPoint>,
    pub contact: Contact,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Link to the place at an external map provider.
    pub map_url: Option<String>,
    pub opening_hours: Option<OpeningHours>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub categories: Vec<CategoryLink>,
}

impl Place {
    /// The link that determines the style of this place.
    ///
    /// Although modelled as a list only the first
    /// link is relevant.
    pub fn primary_link(&self) -> Option<&CategoryLink> {
        self.categories.first()
    }

    pub fn primary_category_id(&self) -> Option<&Id> {
        self.primary_link().map(|l| &l.category_id)
    }

    pub fn primary_category(&self) -> Option<&Category> {
        self.primary_link().and_then(|l| l.category.as_ref())
    }
}
