//! Arrival endpoints: listing, detail and per-tab updates

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::{Value, json};

use super::common::{RawQuery, error_response, list_params, page_response};
use crate::domain::EntityId;
use crate::infrastructure::AppState;
use crate::models::ArrivageSection;
use crate::services::arrivage_service;

pub async fn list_arrivages(
    State(state): State<AppState>,
    Query(query): RawQuery,
) -> impl IntoResponse {
    let params = list_params(query, state.default_page_size);
    match arrivage_service::list(state.port_ops.as_ref(), &state.cache, &params).await {
        Ok(page) => page_response(page, &params),
        Err(e) => error_response("List arrivages", e),
    }
}

pub async fn get_arrivage(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match arrivage_service::get(state.port_ops.as_ref(), &state.cache, &EntityId::Int(id)).await {
        Ok(item) => (StatusCode::OK, Json(json!({ "item": item }))).into_response(),
        Err(e) => error_response(&format!("Get arrivage {}", id), e),
    }
}

pub async fn update_section(
    State(state): State<AppState>,
    Path((id, section)): Path<(i64, String)>,
    Json(patch): Json<Value>,
) -> impl IntoResponse {
    let Some(section) = ArrivageSection::parse(&section) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"error": format!("Unknown section '{}'", section)})),
        )
            .into_response();
    };

    match arrivage_service::update_section(state.port_ops.as_ref(), &EntityId::Int(id), section, &patch)
        .await
    {
        Ok(arrivage) => (
            StatusCode::OK,
            Json(json!({
                "message": "Section saved successfully",
                "item": arrivage
            })),
        )
            .into_response(),
        Err(e) => error_response(&format!("Update arrivage {} section {:?}", id, section), e),
    }
}
