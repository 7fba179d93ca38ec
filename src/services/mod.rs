//! Services Layer
//!
//! Back-office operations built on [`crate::domain::EntityGateway`]. Handlers
//! in `api` are thin wrappers around these functions.

pub mod arrivage_service;
pub mod enrichment;
pub mod list_state;
pub mod payment_workflow;
pub mod pesage_service;
pub mod planning_service;
pub mod referential_service;
pub mod resource_service;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use list_state::{FetchTicket, ListAction, ListController, ListState};
pub use payment_workflow::{PaymentStore, PaymentTab, PaymentWorkflow};
