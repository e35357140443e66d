//! In-memory test doubles that record every invocation.

use crate::{entities::*, gateways::geocode::GeoCodingGateway, repositories::*};
use std::cell::{Cell, RefCell};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    AllPlaces,
    AllCategories,
    CreatePlace(PlaceFields),
    UpdatePlace(Id, PlaceFields),
    CreateCategoryLink(Id, Id),
    DeleteCategoryLinks(Id),
}

#[derive(Debug, Default)]
pub struct MockBackend {
    pub places: RefCell<Vec<Place>>,
    pub categories: Vec<Category>,
    pub calls: RefCell<Vec<Call>>,
    pub fail_place_reads: Cell<bool>,
    pub fail_category_reads: Cell<bool>,
    /// Fail writes of places with the given backend message.
    pub fail_place_writes: RefCell<Option<Option<String>>>,
    pub fail_category_links: Cell<bool>,
}

impl MockBackend {
    pub fn new(places: Vec<Place>, categories: Vec<Category>) -> Self {
        Self {
            places: RefCell::new(places),
            categories,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn write_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, Call::AllPlaces | Call::AllCategories))
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    /// Fail all reads.
    pub fn fail_reads(&self) {
        self.fail_place_reads.set(true);
        self.fail_category_reads.set(true);
    }

    fn check_read(fail: &Cell<bool>) -> Result<()> {
        if fail.get() {
            return Err(Error::Backend {
                message: Some("connection refused".into()),
            });
        }
        Ok(())
    }

    fn check_place_writes(&self) -> Result<()> {
        match &*self.fail_place_writes.borrow() {
            Some(message) => Err(Error::Backend {
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

fn apply_fields(place: &mut Place, fields: &PlaceFields) {
    let PlaceFields {
        region_id,
        name,
        address,
        pos,
        contact,
        description,
        map_url,
    } = fields.clone();
    place.region_id = region_id;
    place.name = name;
    place.address = address;
    if pos.is_some() {
        place.pos = pos;
    }
    place.contact = contact;
    place.description = description;
    place.map_url = map_url;
}

impl PlaceRepo for MockBackend {
    async fn all_places(&self) -> Result<Vec<Place>> {
        self.record(Call::AllPlaces);
        Self::check_read(&self.fail_place_reads)?;
        Ok(self.places.borrow().clone())
    }

    async fn create_place(&self, fields: &PlaceFields) -> Result<Id> {
        self.record(Call::CreatePlace(fields.clone()));
        self.check_place_writes()?;
        let mut place = Place {
            id: Id::new(),
            region_id: fields.region_id.clone(),
            name: String::new(),
            address: String::new(),
            pos: None,
            contact: Contact::default(),
            description: None,
            image_url: None,
            map_url: None,
            opening_hours: None,
            created_at: Some(Timestamp::now()),
            updated_at: None,
            categories: vec![],
        };
        apply_fields(&mut place, fields);
        let id = place.id.clone();
        self.places.borrow_mut().push(place);
        Ok(id)
    }

    async fn update_place(
        &self,
        id: &Id,
        fields: &PlaceFields,
        updated_at: Timestamp,
    ) -> Result<()> {
        self.record(Call::UpdatePlace(id.clone(), fields.clone()));
        self.check_place_writes()?;
        let mut places = self.places.borrow_mut();
        let place = places
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or(Error::NotFound)?;
        apply_fields(place, fields);
        place.updated_at = Some(updated_at);
        Ok(())
    }
}

impl CategoryRepo for MockBackend {
    async fn all_categories(&self) -> Result<Vec<Category>> {
        self.record(Call::AllCategories);
        Self::check_read(&self.fail_category_reads)?;
        Ok(self.categories.clone())
    }
}

impl CategoryLinkRepo for MockBackend {
    async fn create_category_link(&self, place_id: &Id, category_id: &Id) -> Result<()> {
        self.record(Call::CreateCategoryLink(
            place_id.clone(),
            category_id.clone(),
        ));
        if self.fail_category_links.get() {
            return Err(Error::Backend {
                message: Some("insert or update violates foreign key constraint".into()),
            });
        }
        let category = self
            .categories
            .iter()
            .find(|c| c.id == *category_id)
            .cloned();
        if let Some(place) = self
            .places
            .borrow_mut()
            .iter_mut()
            .find(|p| p.id == *place_id)
        {
            place.categories.push(CategoryLink {
                id: Id::new(),
                place_id: Some(place_id.clone()),
                category_id: category_id.clone(),
                is_primary: true,
                category,
            });
        }
        Ok(())
    }

    async fn delete_category_links(&self, place_id: &Id) -> Result<()> {
        self.record(Call::DeleteCategoryLinks(place_id.clone()));
        if let Some(place) = self
            .places
            .borrow_mut()
            .iter_mut()
            .find(|p| p.id == *place_id)
        {
            place.categories.clear();
        }
        Ok(())
    }
}

/// Answers every lookup with the same result.
#[derive(Debug, Default)]
pub struct MockGeoCoder {
    pub result: Option<(f64, f64)>,
    pub queries: RefCell<Vec<String>>,
}

impl MockGeoCoder {
    pub fn resolving_to(lat: f64, lng: f64) -> Self {
        Self {
            result: Some((lat, lng)),
            ..Default::default()
        }
    }

    pub fn without_match() -> Self {
        Self::default()
    }

    pub fn invocations(&self) -> usize {
        self.queries.borrow().len()
    }
}

impl GeoCodingGateway for MockGeoCoder {
    async fn resolve_address_lat_lng(&self, address: &str) -> Option<(f64, f64)> {
        self.queries.borrow_mut().push(address.to_string());
        self.result
    }
}

pub fn category(slug: &str, name: &str) -> Category {
    Category {
        id: format!("id-{slug}").into(),
        name: name.into(),
        slug: slug.into(),
        description: None,
    }
}
