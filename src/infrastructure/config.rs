use std::env;
use std::time::Duration;

use crate::models::surveillant::SurveillantType;

const DEFAULT_REFERENTIAL_API_URL: &str = "http://localhost:5001";
const DEFAULT_PORT_OPS_API_URL: &str = "http://localhost:5002";
const DEFAULT_SURVEILLANT_TYPES: &str = "1:Société de surveillance,2:Surveillant indépendant";

#[derive(Clone, Debug)]
pub struct Config {
    pub referential_api_url: String,
    pub port_ops_api_url: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub http_timeout: Duration,
    pub retry_max_retries: u32,
    pub retry_backoff: Duration,
    pub reference_cache_ttl: Duration,
    /// Page size used to pull a whole reference table for enrichment
    pub reference_page_size: u32,
    pub default_page_size: u32,
    pub surveillant_types: Vec<SurveillantType>,
}

fn parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Self {
        let surveillant_types = env::var("SURVEILLANT_TYPES")
            .ok()
            .map(|raw| parse_surveillant_types(&raw))
            .filter(|types| !types.is_empty())
            .unwrap_or_else(|| parse_surveillant_types(DEFAULT_SURVEILLANT_TYPES));

        Self {
            referential_api_url: env::var("REFERENTIAL_API_URL")
                .unwrap_or_else(|_| DEFAULT_REFERENTIAL_API_URL.to_string()),
            port_ops_api_url: env::var("PORT_OPS_API_URL")
                .unwrap_or_else(|_| DEFAULT_PORT_OPS_API_URL.to_string()),
            port: parsed("PORT", 8000),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_else(Vec::new),
            http_timeout: Duration::from_secs(parsed("HTTP_TIMEOUT_SECS", 30)),
            retry_max_retries: parsed("RETRY_MAX_RETRIES", 2),
            retry_backoff: Duration::from_millis(parsed("RETRY_BACKOFF_MS", 1000)),
            reference_cache_ttl: Duration::from_secs(parsed("REFERENCE_CACHE_TTL_SECS", 60)),
            reference_page_size: parsed("REFERENCE_PAGE_SIZE", 1000),
            default_page_size: parsed("DEFAULT_PAGE_SIZE", 10),
            surveillant_types,
        }
    }
}

/// Parse `id:label` pairs separated by commas. Malformed entries are skipped.
pub fn parse_surveillant_types(raw: &str) -> Vec<SurveillantType> {
    raw.split(',')
        .filter_map(|entry| {
            let (id, label) = entry.split_once(':')?;
            let id = id.trim().parse().ok()?;
            let label = label.trim();
            if label.is_empty() {
                return None;
            }
            Some(SurveillantType {
                id,
                label: label.to_string(),
            })
        })
        .collect()
}
