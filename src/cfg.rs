use pizzamap_gateways::nominatim;
use std::env;
use thiserror::Error;

const ENV_NAME_SUPABASE_URL: &str = "SUPABASE_URL";
const ENV_NAME_SUPABASE_ANON_KEY: &str = "SUPABASE_ANON_KEY";
const ENV_NAME_GEOCODER_URL: &str = "GEOCODER_URL";
const ENV_NAME_GEOCODER_USER_AGENT: &str = "GEOCODER_USER_AGENT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Missing environment variable {0}")]
    Missing(&'static str),
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub geocoder_url: String,
    pub geocoder_user_agent: String,
}

impl Cfg {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|v: &String| !v.trim().is_empty());
        let required = |name: &'static str| lookup(name).ok_or(Error::Missing(name));
        let supabase_url = required(ENV_NAME_SUPABASE_URL)?;
        let supabase_anon_key = required(ENV_NAME_SUPABASE_ANON_KEY)?;
        let geocoder_url = lookup(ENV_NAME_GEOCODER_URL).unwrap_or_else(|| {
            log::debug!("No geocoder URL configured, using {}", nominatim::DEFAULT_URL);
            nominatim::DEFAULT_URL.to_string()
        });
        let geocoder_user_agent = lookup(ENV_NAME_GEOCODER_USER_AGENT)
            .unwrap_or_else(|| nominatim::DEFAULT_USER_AGENT.to_string());
        Ok(Self {
            supabase_url,
            supabase_anon_key,
            geocoder_url,
            geocoder_user_agent,
        })
    }
}
