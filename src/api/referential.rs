//! List endpoints of the referential collections

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde_json::json;

use super::common::{RawQuery, error_response, list_params, page_response};
use crate::infrastructure::AppState;
use crate::models::{Devise, Pays};
use crate::services::{referential_service, resource_service};


pub async fn list_pays(State(state): State<AppState>, Query(query): RawQuery) -> impl IntoResponse {
    let params = list_params(query, state.default_page_size);
    match resource_service::fetch_page::<Pays>(state.referential.as_ref(), &params).await {
        Ok(page) => page_response(page, &params),
        Err(e) => error_response("List pays", e),
    }
}

pub async fn list_devises(
    State(state): State<AppState>,
    Query(query): RawQuery,
) -> impl IntoResponse {
    let params = list_params(query, state.default_page_size);
    match resource_service::fetch_page::<Devise>(state.referential.as_ref(), &params).await {
        Ok(page) => page_response(page, &params),
        Err(e) => error_response("List devises", e),
    }
}

pub async fn list_villes(
    State(state): State<AppState>,
    Query(query): RawQuery,
) -> impl IntoResponse {
    let params = list_params(query, state.default_page_size);
    match referential_service::list_villes(state.referential.as_ref(), &state.cache, &params).await {
        Ok(page) => page_response(page, &params),
        Err(e) => error_response("List villes", e),
    }
}

#[utoipa::path(
    get,
    path = "/api/ports",
    params(
        ("page" = Option<u32>, Query, description = "1-based page number"),
        ("page_size" = Option<u32>, Query, description = "Rows per page"),
        ("search" = Option<String>, Query, description = "Matched against the port name"),
        ("pays_id" = Option<String>, Query, description = "Country filter"),
        ("ville_id" = Option<i64>, Query, description = "City filter")
    ),
    responses(
        (status = 200, description = "Ports with pays_Nom and ville_Nom attached"),
        (status = 502, description = "Referential backend failed")
    )
)]
pub async fn list_ports(State(state): State<AppState>, Query(query): RawQuery) -> impl IntoResponse {
    let params = list_params(query, state.default_page_size);
    match referential_service::list_ports(state.referential.as_ref(), &state.cache, &params).await {
        Ok(page) => page_response(page, &params),
        Err(e) => error_response("List ports", e),
    }
}

pub async fn list_compagnies(
    State(state): State<AppState>,
    Query(query): RawQuery,
) -> impl IntoResponse {
    let params = list_params(query, state.default_page_size);
    match referential_service::list_compagnies(state.referential.as_ref(), &state.cache, &params)
        .await
    {
        Ok(page) => page_response(page, &params),
        Err(e) => error_response("List compagnies", e),
    }
}

pub async fn list_navires(
    State(state): State<AppState>,
    Query(query): RawQuery,
) -> impl IntoResponse {
    let params = list_params(query, state.default_page_size);
    match referential_service::list_navires(state.referential.as_ref(), &state.cache, &params).await {
        Ok(page) => page_response(page, &params),
        Err(e) => error_response("List navires", e),
    }
}

pub async fn list_surveillants(
    State(state): State<AppState>,
    Query(query): RawQuery,
) -> impl IntoResponse {
    let params = list_params(query, state.default_page_size);
    match referential_service::list_surveillants(
        state.referential.as_ref(),
        &state.cache,
        &state.surveillant_types,
        &params,
    )
    .await
    {
        Ok(page) => page_response(page, &params),
        Err(e) => error_response("List surveillants", e),
    }
}

/// Configured surveillant types (not backed by an API)
pub async fn list_surveillant_types(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({ "items": state.surveillant_types.as_ref() }))
}

pub async fn list_sites(State(state): State<AppState>, Query(query): RawQuery) -> impl IntoResponse {
    let params = list_params(query, state.default_page_size);
    match referential_service::list_sites(state.referential.as_ref(), &state.cache, &params).await {
        Ok(page) => page_response(page, &params),
        Err(e) => error_response("List sites", e),
    }
}

pub async fn list_zones(State(state): State<AppState>, Query(query): RawQuery) -> impl IntoResponse {
    let params = list_params(query, state.default_page_size);
    match referential_service::list_zones(state.referential.as_ref(), &state.cache, &params).await {
        Ok(page) => page_response(page, &params),
        Err(e) => error_response("List zones", e),
    }
}
