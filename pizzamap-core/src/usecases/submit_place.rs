use super::prelude::*;
use crate::{
    gateways::geocode::GeoCodingGateway,
    util::{
        geo_fence::in_bounds_of,
        map_url::{parse_map_url, ParsedMapUrl},
        validate::{AutoCorrect, Validate},
    },
};

const CREATE_FAILED: &str = "Failed to submit. Please try again.";
const UPDATE_FAILED: &str = "Failed to update. Please try again.";

/// A not yet persisted place as entered into the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmitPlace {
    /// Set when editing an existing place.
    pub id: Option<Id>,
    pub name: String,
    pub address: String,
    pub map_url: String,
    pub phone: String,
    pub website: String,
    pub category_id: Option<Id>,
    pub description: String,
    /// Optional contact of the submitter; not persisted.
    pub contact_email: String,
}

impl SubmitPlace {
    /// Prefill a draft for editing an existing place.
    pub fn from_place(place: &Place) -> Self {
        Self {
            id: Some(place.id.clone()),
            name: place.name.clone(),
            address: place.address.clone(),
            map_url: place.map_url.clone().unwrap_or_default(),
            phone: place.contact.phone.clone().unwrap_or_default(),
            website: place.contact.website.clone().unwrap_or_default(),
            category_id: place.primary_category_id().cloned(),
            description: place.description.clone().unwrap_or_default(),
            contact_email: String::new(),
        }
    }

    /// Store the map link and fill name and address from it
    /// if they have not been entered yet.
    pub fn apply_map_url(&mut self, url: &str) -> ParsedMapUrl {
        self.map_url = url.to_string();
        let parsed = parse_map_url(url);
        if self.name.trim().is_empty() {
            if let Some(name) = &parsed.name {
                self.name = name.clone();
            }
        }
        if self.address.trim().is_empty() {
            if let Some(address) = &parsed.address {
                self.address = address.clone();
            }
        }
        parsed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub place_id: Id,
    pub updated: bool,
    /// `false` if the place was stored but linking its
    /// category failed.
    pub category_linked: bool,
}

pub fn validate_submission(draft: SubmitPlace) -> Result<SubmitPlace> {
    let draft = draft.auto_correct();
    draft.validate()?;
    Ok(draft)
}

pub fn validate_update(draft: SubmitPlace) -> Result<SubmitPlace> {
    let draft = validate_submission(draft)?;
    if draft.id.is_none() {
        return Err(Error::MissingId);
    }
    Ok(draft)
}

/// An edited place keeps its coordinates as long as the
/// address text is exactly the same as the stored one.
///
/// Compares the draft as entered, before any correction.
pub fn needs_geocoding(draft: &SubmitPlace, stored: Option<&Place>) -> bool {
    match (&draft.id, stored) {
        (Some(id), Some(place)) if *id == place.id => draft.address != place.address,
        _ => true,
    }
}

/// Where the coordinates of a submission come from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionSource {
    /// Keep the coordinates of the stored place.
    Stored(Option<MapPoint>),
    Geocoder,
}

impl PositionSource {
    /// Must be decided on the uncorrected draft.
    pub fn of(draft: &SubmitPlace, stored: Option<&Place>) -> Self {
        match stored.filter(|place| !needs_geocoding(draft, Some(place))) {
            Some(place) => Self::Stored(place.pos),
            None => Self::Geocoder,
        }
    }
}

/// Determine the coordinates to store for a validated address.
///
/// An address without any match is stored without coordinates,
/// a match outside of the region is rejected.
pub async fn resolve_position<G>(
    geo: &G,
    region: &Region,
    address: &str,
    source: PositionSource,
) -> Result<Option<MapPoint>>
where
    G: GeoCodingGateway,
{
    if let PositionSource::Stored(pos) = source {
        log::debug!("Address unchanged, keeping the stored position");
        return Ok(pos);
    }
    let Some((lat, lng)) = geo.resolve_address_lat_lng(address).await else {
        log::info!("No coordinates found for '{address}', storing the place without position");
        return Ok(None);
    };
    if !in_bounds_of(region, lat, lng) {
        log::info!(
            "Address '{address}' resolved to ({lat}, {lng}) outside of {}",
            region.city
        );
        return Err(Error::OutOfRegion(region.city));
    }
    Ok(Some(MapPoint::from_lat_lng_deg(lat, lng)))
}

fn non_empty(s: String) -> Option<String> {
    Some(s).filter(|s| !s.is_empty())
}

fn persistence_error(err: RepoError, fallback: &str) -> Error {
    log::warn!("Failed to store place: {err}");
    let message = err.backend_message().unwrap_or(fallback).to_string();
    Error::Persistence(message)
}

type RepoError = crate::repositories::Error;

/// Write the place and link it with its category.
///
/// Only the place itself must be written successfully. A failure
/// while linking the category is logged and reported through
/// [`SubmissionOutcome::category_linked`].
pub async fn store_submission<R>(
    repo: &R,
    region: &Region,
    draft: SubmitPlace,
    pos: Option<MapPoint>,
) -> Result<SubmissionOutcome>
where
    R: PlaceRepo + CategoryLinkRepo,
{
    let SubmitPlace {
        id,
        name,
        address,
        map_url,
        phone,
        website,
        category_id,
        description,
        contact_email: _,
    } = draft;
    let fields = PlaceFields {
        region_id: region.id(),
        name,
        address,
        pos,
        contact: Contact {
            phone: non_empty(phone),
            website: non_empty(website),
        },
        description: non_empty(description),
        map_url: non_empty(map_url),
    };
    let (place_id, updated) = match id {
        Some(id) => {
            repo.update_place(&id, &fields, Timestamp::now())
                .await
                .map_err(|err| persistence_error(err, UPDATE_FAILED))?;
            log::debug!("Updated place {id}");
            (id, true)
        }
        None => {
            let id = repo
                .create_place(&fields)
                .await
                .map_err(|err| persistence_error(err, CREATE_FAILED))?;
            log::debug!("Created place {id}");
            (id, false)
        }
    };
    let category_linked = match category_id {
        Some(category_id) => link_category(repo, &place_id, &category_id, updated).await,
        None => false,
    };
    Ok(SubmissionOutcome {
        place_id,
        updated,
        category_linked,
    })
}

async fn link_category<R>(repo: &R, place_id: &Id, category_id: &Id, replace: bool) -> bool
where
    R: CategoryLinkRepo,
{
    if replace {
        if let Err(err) = repo.delete_category_links(place_id).await {
            log::warn!("Failed to remove the category links of place {place_id}: {err}");
        }
    }
    match repo.create_category_link(place_id, category_id).await {
        Ok(()) => true,
        Err(err) => {
            log::error!("Failed to link place {place_id} with category {category_id}: {err}");
            false
        }
    }
}

/// Validate, geocode and store a submission in one go.
///
/// Passing the `stored` place selects the edit flow.
pub async fn submit_place<R, G>(
    repo: &R,
    geo: &G,
    region: &Region,
    draft: SubmitPlace,
    stored: Option<&Place>,
) -> Result<SubmissionOutcome>
where
    R: PlaceRepo + CategoryLinkRepo,
    G: GeoCodingGateway,
{
    let source = PositionSource::of(&draft, stored);
    let draft = if stored.is_some() {
        validate_update(draft)?
    } else {
        validate_submission(draft)?
    };
    let pos = resolve_position(geo, region, &draft.address, source).await?;
    store_submission(repo, region, draft, pos).await
}
