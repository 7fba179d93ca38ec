//! Shared request parsing and response shapes

use axum::{
    Json,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{DomainError, ListParams, Page, total_pages};

/// `?confirm=true` is required on every delete
#[derive(Debug, Default, Deserialize)]
pub struct DeleteParams {
    #[serde(default)]
    pub confirm: bool,
}

/// Query string pairs in the order the caller wrote them
pub type RawQuery = Query<Vec<(String, String)>>;

/// Split list query parameters into paging, search and resource filters.
///
/// Anything other than `page`, `page_size` and `search` is treated as a
/// filter, kept in supplied order; unknown filters are dropped later by the
/// resource.
pub fn list_params(query: Vec<(String, String)>, default_page_size: u32) -> ListParams {
    let mut params = ListParams::new(1, default_page_size.max(1));
    for (key, value) in query {
        match key.as_str() {
            "page" => {
                if let Ok(page) = value.trim().parse::<u32>() {
                    params.page = page.max(1);
                }
            }
            "page_size" => {
                if let Ok(size) = value.trim().parse::<u32>() {
                    params.page_size = size.max(1);
                }
            }
            "search" => params.search = Some(value),
            _ => params.filters.push((key, value)),
        }
    }
    params
}

pub fn page_response<T: Serialize>(page: Page<T>, params: &ListParams) -> Response {
    Json(json!({
        "items": page.items,
        "totalItems": page.total_items,
        "page": params.page,
        "pageSize": params.page_size,
        "totalPages": total_pages(page.total_items, params.page_size),
    }))
    .into_response()
}

pub fn status_for(e: &DomainError) -> StatusCode {
    match e {
        DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::InvalidId(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound => StatusCode::NOT_FOUND,
        DomainError::ConfirmationRequired | DomainError::InvalidTransition(_) => {
            StatusCode::CONFLICT
        }
        DomainError::Transport(_) | DomainError::Upstream { .. } | DomainError::Decode(_) => {
            StatusCode::BAD_GATEWAY
        }
    }
}

/// Log a failed action and answer with the operator-facing message
pub fn error_response(action: &str, e: DomainError) -> Response {
    let status = status_for(&e);
    if status == StatusCode::BAD_GATEWAY {
        tracing::error!("{} failed: {}", action, e);
    } else {
        tracing::warn!("{} rejected: {}", action, e);
    }

    let body = match &e {
        DomainError::Validation(errors) => json!({
            "error": e.user_message(),
            "fields": errors.errors,
        }),
        _ => json!({ "error": e.user_message() }),
    };
    (status, Json(body)).into_response()
}
