//! Domain layer - Pure data-access abstractions
//!
//! This layer contains NO framework dependencies (no reqwest client, no Axum).
//! Only the query contract, resource metadata, gateway traits and errors.

pub mod errors;
pub mod query;
pub mod repositories;
pub mod resource;

pub use errors::DomainError;
pub use query::{Filter, FilterOp, ListQuery, Page, total_pages};
pub use repositories::*;
pub use resource::{Backend, EntityId, FilterSpec, ListParams, Resource};
