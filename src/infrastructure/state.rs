//! Application state containing both backend gateways and shared resources

use std::sync::Arc;

use crate::domain::{Backend, DomainError, EntityGateway};
use crate::infrastructure::cache::ReferenceCache;
use crate::infrastructure::config::Config;
use crate::infrastructure::rest_client::RestClient;
use crate::infrastructure::retry::RetryPolicy;
use crate::models::SurveillantType;
use crate::services::PaymentStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Countries, cities, ports, companies, ships, surveillants, sites, zones, currencies
    pub referential: Arc<dyn EntityGateway>,
    /// Arrivals, plannings, weighings
    pub port_ops: Arc<dyn EntityGateway>,
    /// Whole referential tables used for name enrichment
    pub cache: ReferenceCache,
    pub payments: PaymentStore,
    pub surveillant_types: Arc<Vec<SurveillantType>>,
    pub default_page_size: u32,
}

impl AppState {
    pub fn new(
        referential: Arc<dyn EntityGateway>,
        port_ops: Arc<dyn EntityGateway>,
        config: &Config,
    ) -> Self {
        let cache = ReferenceCache::new(
            referential.clone(),
            config.reference_cache_ttl,
            config.reference_page_size,
        );

        Self {
            referential,
            port_ops,
            cache,
            payments: PaymentStore::new(),
            surveillant_types: Arc::new(config.surveillant_types.clone()),
            default_page_size: config.default_page_size.max(1),
        }
    }

    /// Build REST clients for both backends from `config`.
    pub fn from_config(config: &Config) -> Result<Self, DomainError> {
        let retry = RetryPolicy::linear(config.retry_max_retries, config.retry_backoff);

        let referential = RestClient::new(
            &config.referential_api_url,
            Backend::Referential,
            config.http_timeout,
            retry,
        )?;
        let port_ops = RestClient::new(
            &config.port_ops_api_url,
            Backend::PortOps,
            config.http_timeout,
            retry,
        )?;

        Ok(Self::new(Arc::new(referential), Arc::new(port_ops), config))
    }

    pub fn gateway(&self, backend: Backend) -> &dyn EntityGateway {
        match backend {
            Backend::Referential => self.referential.as_ref(),
            Backend::PortOps => self.port_ops.as_ref(),
        }
    }
}
