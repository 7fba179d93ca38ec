//! Payment tabs of an arrival

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use super::common::error_response;
use crate::domain::{DomainError, EntityId};
use crate::infrastructure::AppState;
use crate::models::Arrivage;
use crate::services::payment_workflow::{
    BankNomination, NewClaim, PaymentSnapshot, PaymentTab, PaymentWorkflow, SwiftPayment,
};
use crate::services::resource_service;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SelectTabRequest {
    pub tab: PaymentTab,
}

/// Apply `step` to the workflow of an arrival the port-ops backend knows.
async fn run_step<F>(state: &AppState, id: i64, step: F) -> Result<PaymentSnapshot, DomainError>
where
    F: FnOnce(&mut PaymentWorkflow) -> Result<(), DomainError>,
{
    resource_service::fetch_raw_by_id::<Arrivage>(state.port_ops.as_ref(), &EntityId::Int(id))
        .await?;
    state.payments.apply(id, step)
}

fn snapshot_response(
    action: &str,
    result: Result<PaymentSnapshot, DomainError>,
) -> axum::response::Response {
    match result {
        Ok(snapshot) => (StatusCode::OK, Json(json!(snapshot))).into_response(),
        Err(e) => error_response(action, e),
    }
}

#[utoipa::path(
    get,
    path = "/api/arrivages/{id}/paiement",
    params(("id" = i64, Path, description = "Arrival id")),
    responses(
        (status = 200, description = "Current payment workflow", body = PaymentSnapshot)
    )
)]
pub async fn get_paiement(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    Json(state.payments.snapshot(id))
}

pub async fn select_tab(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SelectTabRequest>,
) -> impl IntoResponse {
    snapshot_response(
        &format!("Select payment tab for arrivage {}", id),
        run_step(&state, id, |w| w.select_tab(payload.tab)).await,
    )
}

pub async fn save_banque(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<BankNomination>,
) -> impl IntoResponse {
    snapshot_response(
        &format!("Save bank nomination for arrivage {}", id),
        run_step(&state, id, |w| w.save_bank(payload)).await,
    )
}

pub async fn save_swift(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SwiftPayment>,
) -> impl IntoResponse {
    snapshot_response(
        &format!("Save SWIFT payment for arrivage {}", id),
        run_step(&state, id, |w| w.save_swift(payload)).await,
    )
}

pub async fn add_reclamation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<NewClaim>,
) -> impl IntoResponse {
    let result = run_step(&state, id, |w| w.add_claim(payload).map(|_| ())).await;
    match result {
        Ok(snapshot) => (StatusCode::CREATED, Json(json!(snapshot))).into_response(),
        Err(e) => error_response(&format!("Add claim for arrivage {}", id), e),
    }
}

pub async fn traiter_reclamation(
    State(state): State<AppState>,
    Path((id, claim)): Path<(i64, u32)>,
) -> impl IntoResponse {
    snapshot_response(
        &format!("Treat claim {} of arrivage {}", claim, id),
        run_step(&state, id, |w| w.mark_treated(claim)).await,
    )
}
