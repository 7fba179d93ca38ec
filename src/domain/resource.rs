//! Resource metadata shared by every remote collection

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::DomainError;
use super::query::{Filter, FilterOp, ListQuery};
use crate::services::validation::ValidationErrors;

/// Which remote deployment owns a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Countries, cities, ports, companies, ships, surveillants, sites, zones, currencies
    Referential,
    /// Arrivals, plannings, weighings
    PortOps,
}

/// Primary key: numeric for most collections, text for some reference tables
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Int(i64),
    Text(String),
}

impl EntityId {
    /// Parse a path segment, preferring the numeric form.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        raw.parse::<i64>()
            .map(EntityId::Int)
            .unwrap_or_else(|_| EntityId::Text(raw.to_string()))
    }

    /// Parse a path segment as a key of `R`.
    ///
    /// Collections with numeric keys only take integers. Text keys are limited
    /// to letters, digits, `-` and `_`.
    pub fn parse_for<R: Resource>(raw: &str) -> Result<Self, DomainError> {
        match Self::parse(raw) {
            EntityId::Int(id) => Ok(EntityId::Int(id)),
            EntityId::Text(text)
                if R::TEXT_ID
                    && !text.is_empty()
                    && text
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') =>
            {
                Ok(EntityId::Text(text))
            }
            EntityId::Text(_) => Err(DomainError::InvalidId(format!(
                "{} is not a valid {} key",
                raw.trim(),
                R::ENTITY_NAME
            ))),
        }
    }

    /// Read a key out of a JSON object field.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n.as_i64().map(EntityId::Int),
            serde_json::Value::String(s) if !s.trim().is_empty() => {
                Some(EntityId::Text(s.trim().to_string()))
            }
            _ => None,
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Int(id) => write!(f, "{}", id),
            EntityId::Text(id) => write!(f, "{}", id),
        }
    }
}

/// Maps a caller-facing filter parameter to a wire field
#[derive(Debug, Clone, Copy)]
pub struct FilterSpec {
    pub param: &'static str,
    pub field: &'static str,
    pub op: FilterOp,
}

impl FilterSpec {
    pub const fn eq(param: &'static str, field: &'static str) -> Self {
        Self {
            param,
            field,
            op: FilterOp::Eq,
        }
    }

    pub const fn contains(param: &'static str, field: &'static str) -> Self {
        Self {
            param,
            field,
            op: FilterOp::Contains,
        }
    }
}

/// A remote collection addressed through the generic filtered endpoint
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const ENTITY_NAME: &'static str;
    const BACKEND: Backend;
    const ID_FIELD: &'static str;
    /// Field the free-text search term is matched against
    const SEARCH_FIELD: &'static str;
    const FIELDS: &'static [&'static str];
    const FILTERS: &'static [FilterSpec] = &[];
    /// Whether keys may be text as well as numbers
    const TEXT_ID: bool = false;

    fn id(&self) -> Option<EntityId>;

    /// Client-side checks run before any create or update is sent.
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

/// Caller-side list parameters before they are mapped to wire filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub page: u32,
    pub page_size: u32,
    pub search: Option<String>,
    /// `(param, value)` pairs, matched against [`Resource::FILTERS`]
    pub filters: Vec<(String, String)>,
}

impl ListParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page,
            page_size,
            ..Default::default()
        }
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn filter(mut self, param: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((param.into(), value.into()));
        self
    }

    /// Build the wire query for `R`.
    ///
    /// The search term comes first, then the filters in supplied order.
    /// Blank values and parameters `R` does not declare are dropped.
    pub fn to_query<R: Resource>(&self) -> ListQuery {
        let mut query = ListQuery::new(R::ENTITY_NAME, self.page, self.page_size)
            .with_fields(R::FIELDS);

        if let Some(term) = self.search.as_deref().map(str::trim)
            && !term.is_empty()
        {
            query = query.with_filter(Filter::contains(R::SEARCH_FIELD, term));
        }

        for (param, value) in &self.filters {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            let Some(spec) = R::FILTERS.iter().find(|spec| spec.param == param.as_str()) else {
                continue;
            };
            query = query.with_filter(Filter {
                field: spec.field.to_string(),
                op: spec.op,
                value: value.to_string(),
            });
        }

        query
    }
}
