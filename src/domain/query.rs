//! Filtered list query contract shared by both backends
//!
//! Every collection is read through one operation:
//! `list(entityName, page, pageSize, fields, filters) -> { items, totalItems }`.
//! Filters travel as `field:operator:value` triples joined by commas in a
//! single `filters` parameter, in the order they were supplied.

use serde::{Deserialize, Serialize};

/// Comparison operator understood by the remote filter endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Contains,
}

impl FilterOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOp::Eq => "eq",
            FilterOp::Contains => "contains",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub field: String,
    pub op: FilterOp,
    pub value: String,
}

impl Filter {
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            op: FilterOp::Eq,
            value: value.into(),
        }
    }

    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            op: FilterOp::Contains,
            value: value.into(),
        }
    }

    /// Wire form `field:operator:value`
    pub fn to_triple(&self) -> String {
        format!("{}:{}:{}", self.field, self.op.as_str(), self.value)
    }
}

/// One page request against a remote collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub entity_name: String,
    pub page: u32,
    pub page_size: u32,
    pub fields: Vec<String>,
    pub filters: Vec<Filter>,
}

impl ListQuery {
    pub fn new(entity_name: impl Into<String>, page: u32, page_size: u32) -> Self {
        Self {
            entity_name: entity_name.into(),
            page: page.max(1),
            page_size: page_size.max(1),
            fields: Vec::new(),
            filters: Vec::new(),
        }
    }

    pub fn with_fields(mut self, fields: &[&str]) -> Self {
        self.fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// `None` when no filter is active: the parameter must then be omitted.
    pub fn filter_param(&self) -> Option<String> {
        if self.filters.is_empty() {
            return None;
        }
        Some(
            self.filters
                .iter()
                .map(Filter::to_triple)
                .collect::<Vec<_>>()
                .join(","),
        )
    }

    /// Query-string pairs for `GetEntityFieldsWithFilters`
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("entityName", self.entity_name.clone()),
            ("pageSize", self.page_size.to_string()),
            ("page", self.page.to_string()),
        ];
        if !self.fields.is_empty() {
            pairs.push(("fields", self.fields.join(",")));
        }
        if let Some(filters) = self.filter_param() {
            pairs.push(("filters", filters));
        }
        pairs
    }
}

/// Raw page as returned by the remote endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(rename = "totalItems")]
    pub total_items: u64,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_items: self.total_items,
        }
    }
}

/// `max(1, ceil(total_items / page_size))`
pub fn total_pages(total_items: u64, page_size: u32) -> u32 {
    let page_size = u64::from(page_size.max(1));
    let pages = total_items.div_ceil(page_size).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_floors_to_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(95, 7), 14);
    }

    #[test]
    fn test_total_pages_matches_ceiling_division() {
        for page_size in 1..=25u32 {
            for total in 0..=200u64 {
                let expected = ((total as f64) / (page_size as f64)).ceil().max(1.0) as u32;
                assert_eq!(total_pages(total, page_size), expected, "{total}/{page_size}");
            }
        }
    }

    #[test]
    fn test_filter_param_joins_in_order() {
        let query = ListQuery::new("Port", 1, 10)
            .with_filter(Filter::contains("port_Nom", "casa"))
            .with_filter(Filter::eq("port_PaysId", "12"))
            .with_filter(Filter::eq("port_Actif", "true"));

        assert_eq!(
            query.filter_param().as_deref(),
            Some("port_Nom:contains:casa,port_PaysId:eq:12,port_Actif:eq:true")
        );
    }

    #[test]
    fn test_no_filters_param_when_empty() {
        let query = ListQuery::new("Pays", 1, 1000).with_fields(&["pays_Id", "pays_Nom"]);
        let pairs = query.to_query_pairs();

        assert!(query.filter_param().is_none());
        assert!(pairs.iter().all(|(k, _)| *k != "filters"));
        assert!(pairs.contains(&("fields", "pays_Id,pays_Nom".to_string())));
    }

    #[test]
    fn test_page_is_one_indexed() {
        let query = ListQuery::new("Site", 0, 0);
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 1);
    }
}
