use crate::{
    geo::{MapBbox, MapPoint},
    id::Id,
};

/// Rectangular bounds in degrees.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub north : f64,
    pub south : f64,
    pub east  : f64,
    pub west  : f64,
}

/// The city a place belongs to.
///
/// This build serves a single city, so the region is
/// a compile-time constant rather than a loaded record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub id: &'static str,
    pub slug: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom_level: u8,
    pub bounds: Bounds,
}

impl Region {
    pub const PORTLAND: Self = Self {
        id: "5f835ff7-1600-4979-9688-1935bfb98c2c",
        slug: "portland",
        city: "Portland",
        state: "OR",
        center_lat: 45.5152,
        center_lng: -122.6784,
        zoom_level: 12,
        // Portland metro area (approximate)
        bounds: Bounds {
            north: 45.75,
            south: 45.35,
            east: -122.35,
            west: -123.0,
        },
    };

    pub fn id(&self) -> Id {
        self.id.into()
    }

    pub fn center(&self) -> MapPoint {
        MapPoint::from_lat_lng_deg(self.center_lat, self.center_lng)
    }

    pub fn bbox(&self) -> MapBbox {
        let Bounds {
            north,
            south,
            east,
            west,
        } = self.bounds;
        MapBbox::new(
            MapPoint::from_lat_lng_deg(south, west),
            MapPoint::from_lat_lng_deg(north, east),
        )
    }

    pub fn contains(&self, pos: MapPoint) -> bool {
        pos.is_valid() && self.bbox().contains_point(pos)
    }
}
