//! Planning endpoints, including the validate / reject decision

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
use crate::models::PlanningArrivage;
use crate::services::planning_service;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RejectRequest {
    #[serde(default)]
    pub motif: String,
}

pub async fn list_plannings(
    State(state): State<AppState>,
    Query(query): RawQuery,
) -> impl IntoResponse {
    let params = list_params(query, state.default_page_size);
    match planning_service::list(state.port_ops.as_ref(), &params).await {
        Ok(page) => page_response(page, &params),
        Err(e) => error_response("List plannings", e),
    }
}

pub async fn create_planning(
    State(state): State<AppState>,
    Json(planning): Json<PlanningArrivage>,
) -> impl IntoResponse {
    match planning_service::create(state.port_ops.as_ref(), planning).await {
        Ok(id) => (
            StatusCode::CREATED,
            Json(json!({
                "message": "Planning created successfully",
                "id": id
            })),
        )
            .into_response(),
        Err(e) => error_response("Create planning", e),
    }
}

#[utoipa::path(
    post,
    path = "/api/plannings/{id}/valider",
    params(("id" = i64, Path, description = "Planning id")),
    responses(
        (status = 200, description = "Planning validated"),
        (status = 409, description = "Planning is no longer pending")
    )
)]
pub async fn validate_planning(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match planning_service::validate(state.port_ops.as_ref(), &EntityId::Int(id)).await {
        Ok(planning) => (
            StatusCode::OK,
            Json(json!({
                "message": "Planning validated",
                "item": planning
            })),
        )
            .into_response(),
        Err(e) => error_response(&format!("Validate planning {}", id), e),
    }
}

pub async fn reject_planning(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<RejectRequest>,
) -> impl IntoResponse {
    match planning_service::reject(state.port_ops.as_ref(), &EntityId::Int(id), &payload.motif).await
    {
        Ok(planning) => (
            StatusCode::OK,
            Json(json!({
                "message": "Planning rejected",
                "item": planning
            })),
        )
            .into_response(),
        Err(e) => error_response(&format!("Reject planning {}", id), e),
    }
}

pub async fn delete_planning(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<DeleteParams>,
) -> impl IntoResponse {
    match planning_service::delete(state.port_ops.as_ref(), &EntityId::Int(id), params.confirm).await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"message": "Planning deleted successfully"})),
        )
            .into_response(),
        Err(e) => error_response(&format!("Delete planning {}", id), e),
    }
}
