pub mod geo_fence;
pub mod hours;
pub mod map_url;
pub mod validate;
