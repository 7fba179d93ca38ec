//! Gateway trait definitions
//!
//! These traits define the contract for data access against one remote
//! deployment. Implementations live in the infrastructure layer.

use async_trait::async_trait;
use serde_json::Value;

use super::query::{ListQuery, Page};
use super::resource::EntityId;
use super::DomainError;

/// Untyped access to the collections of one backend
#[async_trait]
pub trait EntityGateway: Send + Sync {
    /// Fetch one page through the generic filtered endpoint
    async fn list(&self, query: &ListQuery) -> Result<Page<Value>, DomainError>;

    /// Create a record; returns the echoed body when the backend sends one
    async fn create(&self, entity_name: &str, body: &Value) -> Result<Option<Value>, DomainError>;

    /// Replace a record
    async fn update(
        &self,
        entity_name: &str,
        id: &EntityId,
        body: &Value,
    ) -> Result<(), DomainError>;

    /// Hard delete a record
    async fn delete(&self, entity_name: &str, id: &EntityId) -> Result<(), DomainError>;
}
