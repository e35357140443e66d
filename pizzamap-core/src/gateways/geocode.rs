use crate::entities::Region;

#[allow(async_fn_in_trait)]
pub trait GeoCodingGateway {
    /// Resolve a free-text address into `(lat, lng)` degrees.
    ///
    /// Any failure of the lookup (network, malformed response,
    /// no match) is reported as `None`.
    async fn resolve_address_lat_lng(&self, address: &str) -> Option<(f64, f64)>;
}

/// Bias a lookup towards the region by appending city and state
/// unless the address already mentions the city.
pub fn localized_query(region: &Region, address: &str) -> String {
    let address = address.trim();
    if address
        .to_lowercase()
        .contains(&region.city.to_lowercase())
    {
        address.to_string()
    } else {
        format!("{address}, {}, {}", region.city, region.state)
    }
}
