//! Weighbridge endpoints

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use super::common::{DeleteParams, RawQuery, error_response, list_params, page_response};
use crate::domain::EntityId;
use crate::infrastructure::AppState;
use crate::models::Tonnes;
use crate::services::pesage_service::{self, NewPesage, PesageHistoryEdit};

#[derive(Debug, Deserialize, ToSchema)]
pub struct NetWeightRequest {
    #[schema(value_type = f64)]
    pub premiere_pesee: Tonnes,
    #[schema(value_type = f64)]
    pub deuxieme_pesee: Tonnes,
}

pub async fn list_pesages(
    State(state): State<AppState>,
    Query(query): RawQuery,
) -> impl IntoResponse {
    let params = list_params(query, state.default_page_size);
    match pesage_service::list(state.port_ops.as_ref(), &params).await {
        Ok(page) => page_response(page, &params),
        Err(e) => error_response("List pesages", e),
    }
}

pub async fn record_pesage(
    State(state): State<AppState>,
    Json(payload): Json<NewPesage>,
) -> impl IntoResponse {
    match pesage_service::record(state.port_ops.as_ref(), payload).await {
        Ok((id, pesage)) => (
            StatusCode::CREATED,
            Json(json!({
                "message": "Pesage recorded successfully",
                "id": id,
                "item": pesage
            })),
        )
            .into_response(),
        Err(e) => error_response("Record pesage", e),
    }
}

/// Net weight preview; nothing is stored
#[utoipa::path(
    post,
    path = "/api/pesages/net",
    request_body = NetWeightRequest,
    responses(
        (status = 200, description = "Absolute difference of both weighings, 3 decimals"),
        (status = 422, description = "A weighing is zero")
    )
)]
pub async fn compute_net(Json(payload): Json<NetWeightRequest>) -> impl IntoResponse {
    match pesage_service::preview_net(payload.premiere_pesee, payload.deuxieme_pesee) {
        Ok(net) => (
            StatusCode::OK,
            Json(json!({
                "poids_net": net,
                "affichage": net.to_string()
            })),
        )
            .into_response(),
        Err(e) => error_response("Net weight preview", e),
    }
}

pub async fn edit_pesage(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<PesageHistoryEdit>,
) -> impl IntoResponse {
    match pesage_service::edit_history(state.port_ops.as_ref(), &EntityId::Int(id), payload).await {
        Ok(pesage) => (
            StatusCode::OK,
            Json(json!({
                "message": "Pesage updated successfully",
                "item": pesage
            })),
        )
            .into_response(),
        Err(e) => error_response(&format!("Edit pesage {}", id), e),
    }
}

pub async fn delete_pesage(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<DeleteParams>,
) -> impl IntoResponse {
    match pesage_service::delete(state.port_ops.as_ref(), &EntityId::Int(id), params.confirm).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"message": "Pesage deleted successfully"})),
        )
            .into_response(),
        Err(e) => error_response(&format!("Delete pesage {}", id), e),
    }
}
