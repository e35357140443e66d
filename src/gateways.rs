use crate::cfg::Cfg;
use pizzamap_core::entities::Region;
use pizzamap_gateways::{nominatim::Nominatim, postgrest::Postgrest, Error};

pub fn backend(cfg: &Cfg) -> Result<Postgrest, Error> {
    log::info!("Use backend at {}", cfg.supabase_url);
    Postgrest::new(&cfg.supabase_url, &cfg.supabase_anon_key)
}

pub fn geocoding_gateway(cfg: &Cfg, region: Region) -> Result<Nominatim, Error> {
    log::info!("Use geocoder at {}", cfg.geocoder_url);
    Nominatim::new(&cfg.geocoder_url, &cfg.geocoder_user_agent, region)
}
