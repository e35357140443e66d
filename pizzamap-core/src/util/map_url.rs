//! Extract place details from map provider links.
//!
//! A link like `https://www.google.com/maps/place/Ken%27s+Pizza/@45.512,-122.65,15z`
//! is taken apart by a fixed sequence of independent rules. Each rule
//! only looks at the parsed URL and may overwrite the fields set by
//! an earlier rule.

use crate::entities::MapPoint;
use lazy_static::lazy_static;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use url::Url;

lazy_static! {
    // Leading `<lat>,<lng>` after an `@` in a path segment, e.g. `45.512,-122.65,15z`.
    static ref COORD_PREFIX: Regex = Regex::new(r"^(-?\d+\.?\d*),(-?\d+\.?\d*)").unwrap();
    // A query value that consists of nothing but `<lat>,<lng>`.
    static ref COORD_PAIR: Regex =
        Regex::new(r"^\s*(-?\d+\.?\d*)\s*,\s*(-?\d+\.?\d*)\s*$").unwrap();
}

// Characters left untouched by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const MAP_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedMapUrl {
    pub name: Option<String>,
    pub address: Option<String>,
    pub pos: Option<MapPoint>,
    /// Opaque place identifier of the provider (informational).
    pub place_id: Option<String>,
}

impl ParsedMapUrl {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.address.is_none() && self.pos.is_none() && self.place_id.is_none()
    }
}

type Rule = fn(&Url, &mut ParsedMapUrl);

const RULES: [Rule; 4] = [at_coordinates, place_name, query, place_id];

/// Best effort extraction, never fails.
///
/// Input that is not an absolute URL yields an empty result.
pub fn parse_map_url(url: &str) -> ParsedMapUrl {
    let mut parsed = ParsedMapUrl::default();
    let url = match Url::parse(url.trim()) {
        Ok(url) => url,
        Err(err) => {
            if !url.trim().is_empty() {
                log::debug!("Ignoring unparsable map URL '{url}': {err}");
            }
            return parsed;
        }
    };
    for rule in RULES {
        rule(&url, &mut parsed);
    }
    parsed
}

fn path_segments(url: &Url) -> impl Iterator<Item = &str> {
    url.path_segments().into_iter().flatten()
}

fn parse_pair(captures: regex::Captures) -> Option<MapPoint> {
    let lat = captures.get(1)?.as_str().parse::<f64>().ok()?;
    let lng = captures.get(2)?.as_str().parse::<f64>().ok()?;
    MapPoint::try_from_lat_lng_deg(lat, lng)
}

fn at_coordinates(url: &Url, parsed: &mut ParsedMapUrl) {
    let pos = path_segments(url)
        .flat_map(|segment| segment.split('@').skip(1))
        .filter_map(|s| COORD_PREFIX.captures(s))
        .find_map(parse_pair);
    if pos.is_some() {
        parsed.pos = pos;
    }
}

fn place_name(url: &Url, parsed: &mut ParsedMapUrl) {
    let name = path_segments(url)
        .skip_while(|segment| *segment != "place")
        .nth(1)
        .and_then(|segment| segment.split('@').next())
        .filter(|segment| !segment.is_empty())
        .and_then(|segment| {
            percent_decode_str(&segment.replace('+', " "))
                .decode_utf8()
                .ok()
                .map(|name| name.into_owned())
        });
    if name.is_some() {
        parsed.name = name;
    }
}

fn query(url: &Url, parsed: &mut ParsedMapUrl) {
    let Some((_, value)) = url.query_pairs().find(|(key, _)| key == "q") else {
        return;
    };
    if value.is_empty() {
        return;
    }
    if let Some(captures) = COORD_PAIR.captures(&value) {
        if let Some(pos) = parse_pair(captures) {
            parsed.pos = Some(pos);
        }
    } else {
        parsed.address = Some(value.into_owned());
    }
}

fn place_id(url: &Url, parsed: &mut ParsedMapUrl) {
    if let Some((_, value)) = url
        .query_pairs()
        .find(|(key, value)| key == "ftid" && !value.is_empty())
    {
        parsed.place_id = Some(value.into_owned());
    }
}

/// Link to the place at the map provider, preferring a known link.
pub fn map_link(address: &str, existing_url: Option<&str>) -> String {
    match existing_url.filter(|url| !url.is_empty()) {
        Some(url) => url.to_string(),
        None => format!("{MAP_SEARCH_URL}{}", utf8_percent_encode(address, COMPONENT)),
    }
}
