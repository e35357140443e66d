use crate::{encode, Error};
use pizzamap_core::{
    entities::Region,
    gateways::geocode::{localized_query, GeoCodingGateway},
};
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_USER_AGENT: &str = "PizzaDiscoveryApp/1.0";

#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

/// Address lookup backed by a Nominatim instance.
///
/// Politeness limits of the provider are not enforced here.
#[derive(Debug, Clone)]
pub struct Nominatim {
    client: Client,
    url: String,
    region: Region,
}

impl Nominatim {
    pub fn new(url: &str, user_agent: &str, region: Region) -> Result<Self, Error> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self {
            client,
            url: url.trim().trim_end_matches('/').to_string(),
            region,
        })
    }

    fn search_url(&self, address: &str) -> String {
        let query = localized_query(&self.region, address);
        format!("{}/search?format=json&q={}&limit=1", self.url, encode(&query))
    }

    async fn search(&self, address: &str) -> Result<Option<(f64, f64)>, Error> {
        let response = self.client.get(self.search_url(address)).send().await?;
        if !response.status().is_success() {
            return Err(Error::Fetch(format!(
                "Unexpected response status: {}",
                response.status()
            )));
        }
        let results: Vec<SearchResult> = response.json().await?;
        Ok(first_match(results))
    }
}

fn first_match(results: Vec<SearchResult>) -> Option<(f64, f64)> {
    let SearchResult { lat, lon } = results.into_iter().next()?;
    let lat = lat.trim().parse::<f64>().ok()?;
    let lng = lon.trim().parse::<f64>().ok()?;
    (lat.is_finite() && lng.is_finite()).then_some((lat, lng))
}

impl GeoCodingGateway for Nominatim {
    async fn resolve_address_lat_lng(&self, address: &str) -> Option<(f64, f64)> {
        match self.search(address).await {
            Ok(res) => {
                if res.is_none() {
                    log::debug!("No match for address '{address}'");
                }
                res
            }
            Err(err) => {
                log::warn!("Could not geocode address '{address}': {err}");
                None
            }
        }
    }
}
