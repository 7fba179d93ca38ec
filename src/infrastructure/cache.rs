//! Read-through cache of whole reference tables
//!
//! Enrichment needs complete collections (all countries, all cities...) to
//! resolve foreign keys. Several listings rely on the same tables, so they are
//! fetched once per TTL window and shared.

use moka::future::Cache;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{DomainError, EntityGateway, ListQuery};

const MAX_CACHED_TABLES: u64 = 64;

#[derive(Clone)]
pub struct ReferenceCache {
    gateway: Arc<dyn EntityGateway>,
    tables: Cache<String, Arc<Vec<Value>>>,
    page_size: u32,
}

impl ReferenceCache {
    pub fn new(gateway: Arc<dyn EntityGateway>, ttl: Duration, page_size: u32) -> Self {
        Self {
            gateway,
            tables: Cache::builder()
                .max_capacity(MAX_CACHED_TABLES)
                .time_to_live(ttl)
                .build(),
            page_size,
        }
    }

    /// Whole table for `entity_name` (page 1, large page size, no filter).
    ///
    /// Concurrent callers for the same table share one backend request.
    pub async fn table(&self, entity_name: &str) -> Result<Arc<Vec<Value>>, Arc<DomainError>> {
        let gateway = self.gateway.clone();
        let query = ListQuery::new(entity_name, 1, self.page_size);

        self.tables
            .try_get_with(entity_name.to_string(), async move {
                let page = gateway.list(&query).await?;
                if page.total_items > page.items.len() as u64 {
                    tracing::warn!(
                        "Reference table {} truncated: {} of {} rows loaded",
                        query.entity_name,
                        page.items.len(),
                        page.total_items
                    );
                }
                Ok::<_, DomainError>(Arc::new(page.items))
            })
            .await
    }

    /// Drop a table after a write so the next read sees the change.
    pub async fn invalidate(&self, entity_name: &str) {
        self.tables.invalidate(entity_name).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EntityId, Page};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct CountingGateway {
        calls: AtomicU32,
    }

    #[async_trait]
    impl EntityGateway for CountingGateway {
        async fn list(&self, query: &ListQuery) -> Result<Page<Value>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert!(query.filters.is_empty());
            Ok(Page {
                items: vec![json!({"pays_Id": 1, "pays_Nom": "Maroc"})],
                total_items: 1,
            })
        }

        async fn create(&self, _: &str, _: &Value) -> Result<Option<Value>, DomainError> {
            unimplemented!()
        }

        async fn update(&self, _: &str, _: &EntityId, _: &Value) -> Result<(), DomainError> {
            unimplemented!()
        }

        async fn delete(&self, _: &str, _: &EntityId) -> Result<(), DomainError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_table_is_fetched_once_within_ttl() {
        let gateway = Arc::new(CountingGateway {
            calls: AtomicU32::new(0),
        });
        let cache = ReferenceCache::new(gateway.clone(), Duration::from_secs(60), 1000);

        let first = cache.table("Pays").await.unwrap();
        let second = cache.table("Pays").await.unwrap();

        assert_eq!(first.len(), 1);
        assert_eq!(second[0]["pays_Nom"], "Maroc");
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);

        cache.invalidate("Pays").await;
        cache.table("Pays").await.unwrap();
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 2);
    }
}
