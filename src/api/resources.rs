//! CRUD handlers shared by every collection
//!
//! Instantiated per resource in the router, e.g. `get(get_one::<Port>)`.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use super::common::{DeleteParams, error_response};
use crate::domain::{Backend, EntityId, Resource};
use crate::infrastructure::AppState;
use crate::services::resource_service;

/// Referential writes make cached name tables stale.
async fn invalidate<R: Resource>(state: &AppState) {
    if R::BACKEND == Backend::Referential {
        state.cache.invalidate(R::ENTITY_NAME).await;
    }
}

pub async fn get_one<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let id = match EntityId::parse_for::<R>(&id) {
        Ok(id) => id,
        Err(e) => return error_response(&format!("Get {}", R::ENTITY_NAME), e),
    };
    match resource_service::fetch_by_id::<R>(state.gateway(R::BACKEND), &id).await {
        Ok(item) => (StatusCode::OK, Json(json!({ "item": item }))).into_response(),
        Err(e) => error_response(&format!("Get {} {}", R::ENTITY_NAME, id), e),
    }
}

pub async fn create<R: Resource>(
    State(state): State<AppState>,
    Json(entity): Json<R>,
) -> Response {
    match resource_service::create(state.gateway(R::BACKEND), &entity).await {
        Ok(id) => {
            invalidate::<R>(&state).await;
            (
                StatusCode::CREATED,
                Json(json!({
                    "message": format!("{} created successfully", R::ENTITY_NAME),
                    "id": id
                })),
            )
                .into_response()
        }
        Err(e) => error_response(&format!("Create {}", R::ENTITY_NAME), e),
    }
}

pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(entity): Json<R>,
) -> Response {
    let id = match EntityId::parse_for::<R>(&id) {
        Ok(id) => id,
        Err(e) => return error_response(&format!("Update {}", R::ENTITY_NAME), e),
    };
    match resource_service::update(state.gateway(R::BACKEND), &id, &entity).await {
        Ok(()) => {
            invalidate::<R>(&state).await;
            (
                StatusCode::OK,
                Json(json!({"message": format!("{} updated successfully", R::ENTITY_NAME)})),
            )
                .into_response()
        }
        Err(e) => error_response(&format!("Update {} {}", R::ENTITY_NAME, id), e),
    }
}

pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<DeleteParams>,
) -> Response {
    let id = match EntityId::parse_for::<R>(&id) {
        Ok(id) => id,
        Err(e) => return error_response(&format!("Delete {}", R::ENTITY_NAME), e),
    };
    match resource_service::delete::<R>(state.gateway(R::BACKEND), &id, params.confirm).await {
        Ok(()) => {
            invalidate::<R>(&state).await;
            (
                StatusCode::OK,
                Json(json!({"message": format!("{} deleted successfully", R::ENTITY_NAME)})),
            )
                .into_response()
        }
        Err(e) => error_response(&format!("Delete {} {}", R::ENTITY_NAME, id), e),
    }
}
