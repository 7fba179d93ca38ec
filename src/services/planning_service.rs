//! Monthly arrival plans and their validation decision

use crate::domain::{DomainError, EntityGateway, EntityId, ListParams, Page};
use crate::models::{PlanningArrivage, PlanningStatus};
use crate::services::resource_service;
use crate::services::validation::ValidationErrors;

fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

pub async fn list(
    gateway: &dyn EntityGateway,
    params: &ListParams,
) -> Result<Page<PlanningArrivage>, DomainError> {
    resource_service::fetch_page::<PlanningArrivage>(gateway, params).await
}

/// New plans always start pending, whatever status the caller sent.
pub async fn create(
    gateway: &dyn EntityGateway,
    mut planning: PlanningArrivage,
) -> Result<Option<EntityId>, DomainError> {
    planning.id = None;
    planning.statut = PlanningStatus::EnAttente;
    planning.motif_rejet = None;
    planning.date_statut = Some(today());
    resource_service::create(gateway, &planning).await
}

async fn decide(
    gateway: &dyn EntityGateway,
    id: &EntityId,
    statut: PlanningStatus,
    motif: Option<String>,
) -> Result<PlanningArrivage, DomainError> {
    let mut planning = resource_service::fetch_by_id::<PlanningArrivage>(gateway, id).await?;
    if planning.statut != PlanningStatus::EnAttente {
        return Err(DomainError::InvalidTransition(format!(
            "planning {} is no longer pending",
            id
        )));
    }

    planning.statut = statut;
    planning.motif_rejet = motif;
    planning.date_statut = Some(today());
    resource_service::update(gateway, id, &planning).await?;

    tracing::info!("Planning {} set to {:?}", id, statut);
    Ok(planning)
}

pub async fn validate(
    gateway: &dyn EntityGateway,
    id: &EntityId,
) -> Result<PlanningArrivage, DomainError> {
    decide(gateway, id, PlanningStatus::Valide, None).await
}

pub async fn reject(
    gateway: &dyn EntityGateway,
    id: &EntityId,
    motif: &str,
) -> Result<PlanningArrivage, DomainError> {
    let motif = motif.trim();
    if motif.is_empty() {
        return Err(ValidationErrors::single("planning_MotifRejet", "is required").into());
    }
    decide(gateway, id, PlanningStatus::Rejete, Some(motif.to_string())).await
}

pub async fn delete(
    gateway: &dyn EntityGateway,
    id: &EntityId,
    confirmed: bool,
) -> Result<(), DomainError> {
    resource_service::delete::<PlanningArrivage>(gateway, id, confirmed).await
}
