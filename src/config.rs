use crate::search::RefreshPolicy;
use std::env;

pub const DEFAULT_ELASTICSEARCH_URL: &str = "http://localhost:9200";
pub const DEFAULT_INDEX: &str = "user";

/// Process configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub elasticsearch_url: String,
    pub index: String,
    pub refresh: RefreshPolicy,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| format!("PORT must be a valid port number ('{}'): {}", raw, e))?,
            None => 8080,
        };
        let elasticsearch_url =
            lookup("ELASTICSEARCH_URL").unwrap_or_else(|| DEFAULT_ELASTICSEARCH_URL.to_string());
        let index = lookup("SEARCH_INDEX")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_INDEX.to_string());
        let refresh = match lookup("REFRESH_POLICY") {
            Some(raw) => raw.parse::<RefreshPolicy>()?,
            None => RefreshPolicy::default(),
        };

        Ok(Self {
            host,
            port,
            elasticsearch_url,
            index,
            refresh,
        })
    }
}
