use crate::entities::{MapPoint, Region};

/// Check whether the coordinates lie within the Portland metro area.
///
/// Non-finite coordinates are never inside.
pub fn in_region(lat: f64, lng: f64) -> bool {
    in_bounds_of(&Region::PORTLAND, lat, lng)
}

pub fn in_bounds_of(region: &Region, lat: f64, lng: f64) -> bool {
    MapPoint::try_from_lat_lng_deg(lat, lng).is_some_and(|pos| region.contains(pos))
}
