//! List screen state as an explicit reducer
//!
//! Every parameter change bumps a generation counter and yields a
//! [`FetchTicket`]. A result carrying an older generation is dropped, so a slow
//! response for page 1 can never overwrite a faster one for page 2.

use std::sync::Arc;

use crate::domain::{DomainError, EntityGateway, EntityId, ListParams, Page, Resource, total_pages};
use crate::services::resource_service;

#[derive(Debug, Clone)]
pub enum ListAction<T> {
    SetSearch(String),
    /// `None` clears the filter
    SetFilter {
        param: String,
        value: Option<String>,
    },
    SetPage(u32),
    Reload,
    Loaded {
        generation: u64,
        page: Page<T>,
    },
    Failed {
        generation: u64,
        message: String,
    },
    RequestDelete(EntityId),
    CancelDelete,
}

/// A fetch the caller must run and report back with `Loaded` or `Failed`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub params: ListParams,
}

#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub params: ListParams,
    pub items: Vec<T>,
    pub total_items: u64,
    pub loading: bool,
    pub error: Option<String>,
    pub pending_delete: Option<EntityId>,
    generation: u64,
}

impl<T> ListState<T> {
    pub fn new(page_size: u32) -> Self {
        Self {
            params: ListParams::new(1, page_size.max(1)),
            items: Vec::new(),
            total_items: 0,
            loading: false,
            error: None,
            pending_delete: None,
            generation: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_items, self.params.page_size)
    }

    fn fetch(&mut self) -> Option<FetchTicket> {
        self.generation += 1;
        self.loading = true;
        Some(FetchTicket {
            generation: self.generation,
            params: self.params.clone(),
        })
    }

    /// Apply `action`. Returns the fetch to run when the listing is stale.
    pub fn dispatch(&mut self, action: ListAction<T>) -> Option<FetchTicket> {
        match action {
            ListAction::SetSearch(term) => {
                let term = term.trim().to_string();
                self.params.search = (!term.is_empty()).then_some(term);
                self.params.page = 1;
                self.fetch()
            }
            ListAction::SetFilter { param, value } => {
                self.params.filters.retain(|(p, _)| *p != param);
                if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
                    self.params.filters.push((param, value));
                }
                self.params.page = 1;
                self.fetch()
            }
            ListAction::SetPage(page) => {
                self.params.page = page.max(1);
                self.fetch()
            }
            ListAction::Reload => self.fetch(),
            ListAction::Loaded { generation, page } => {
                if generation != self.generation {
                    tracing::debug!(
                        "Dropping stale list result (generation {} < {})",
                        generation,
                        self.generation
                    );
                    return None;
                }
                self.loading = false;
                self.error = None;
                self.total_items = page.total_items;
                self.items = page.items;

                // a delete can empty the last page
                let last = self.total_pages();
                if self.params.page > last {
                    self.params.page = last;
                    return self.fetch();
                }
                None
            }
            ListAction::Failed {
                generation,
                message,
            } => {
                if generation == self.generation {
                    self.loading = false;
                    self.error = Some(message);
                }
                None
            }
            ListAction::RequestDelete(id) => {
                self.pending_delete = Some(id);
                None
            }
            ListAction::CancelDelete => {
                self.pending_delete = None;
                None
            }
        }
    }

    pub fn take_pending_delete(&mut self) -> Option<EntityId> {
        self.pending_delete.take()
    }
}

/// Drives a [`ListState`] against a gateway
pub struct ListController<R: Resource> {
    gateway: Arc<dyn EntityGateway>,
    pub state: ListState<R>,
}

impl<R: Resource> ListController<R> {
    pub fn new(gateway: Arc<dyn EntityGateway>, page_size: u32) -> Self {
        Self {
            gateway,
            state: ListState::new(page_size),
        }
    }

    /// Apply `action` and run every fetch it triggers.
    pub async fn dispatch(&mut self, action: ListAction<R>) {
        let mut next = self.state.dispatch(action);
        while let Some(ticket) = next {
            let result =
                resource_service::fetch_page::<R>(self.gateway.as_ref(), &ticket.params).await;
            let outcome = match result {
                Ok(page) => ListAction::Loaded {
                    generation: ticket.generation,
                    page,
                },
                Err(e) => {
                    tracing::error!("Failed to list {}: {}", R::ENTITY_NAME, e);
                    ListAction::Failed {
                        generation: ticket.generation,
                        message: e.user_message(),
                    }
                }
            };
            next = self.state.dispatch(outcome);
        }
    }

    /// Delete the record awaiting confirmation, then reload.
    pub async fn confirm_delete(&mut self) -> Result<(), DomainError> {
        let id = self
            .state
            .take_pending_delete()
            .ok_or(DomainError::ConfirmationRequired)?;
        resource_service::delete::<R>(self.gateway.as_ref(), &id, true).await?;
        self.dispatch(ListAction::Reload).await;
        Ok(())
    }
}
