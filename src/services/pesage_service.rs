//! Weighbridge operations
//!
//! A session starts when a vehicle is selected: that fixes the first weighing.
//! The second weighing stays editable until the record is saved. Historical
//! records only accept changes to their motive and comment.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{DomainError, EntityGateway, EntityId, ListParams, Page};
use crate::models::{Pesage, Tonnes};
use crate::services::resource_service;
use crate::services::validation::Validator;

/// `|first - second|`, exact to the kilogram
pub fn net_weight(first: Tonnes, second: Tonnes) -> Tonnes {
    first.abs_diff(second)
}

/// Net weight of two readings that are both greater than zero
pub fn preview_net(first: Tonnes, second: Tonnes) -> Result<Tonnes, DomainError> {
    Validator::new()
        .check(
            "premiere_pesee",
            first.is_positive(),
            "must be greater than 0",
        )
        .check(
            "deuxieme_pesee",
            second.is_positive(),
            "must be greater than 0",
        )
        .finish()?;
    Ok(net_weight(first, second))
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeighingSession {
    arrivage_id: Option<i64>,
    immatriculation: String,
    premiere_pesee: Tonnes,
    deuxieme_pesee: Option<Tonnes>,
}

impl WeighingSession {
    /// Open a session for a vehicle whose first weighing is known.
    pub fn select_vehicle(
        arrivage_id: Option<i64>,
        immatriculation: &str,
        premiere_pesee: Tonnes,
    ) -> Result<Self, DomainError> {
        Validator::new()
            .required("pesage_Immatriculation", Some(immatriculation))
            .check(
                "pesage_PremierePesee",
                premiere_pesee.is_positive(),
                "must be greater than 0",
            )
            .finish()?;

        Ok(Self {
            arrivage_id,
            immatriculation: immatriculation.trim().to_string(),
            premiere_pesee,
            deuxieme_pesee: None,
        })
    }

    pub fn set_second_weighing(&mut self, weight: Tonnes) {
        self.deuxieme_pesee = Some(weight);
    }

    /// `None` until the second weighing is entered
    pub fn net_weight(&self) -> Option<Tonnes> {
        self.deuxieme_pesee
            .map(|second| net_weight(self.premiere_pesee, second))
    }

    pub fn into_record(
        self,
        motif: Option<String>,
        commentaire: Option<String>,
    ) -> Result<Pesage, DomainError> {
        let Some(second) = self.deuxieme_pesee else {
            return Err(DomainError::InvalidTransition(
                "the second weighing has not been entered".to_string(),
            ));
        };
        Ok(Pesage {
            id: None,
            arrivage_id: self.arrivage_id,
            immatriculation: self.immatriculation,
            premiere_pesee: self.premiere_pesee,
            deuxieme_pesee: second,
            poids_net: net_weight(self.premiere_pesee, second),
            motif,
            commentaire,
            date_pesage: Some(chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string()),
        })
    }
}

/// Body accepted when recording a weighing
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewPesage {
    pub arrivage_id: Option<i64>,
    pub immatriculation: String,
    #[schema(value_type = f64)]
    pub premiere_pesee: Tonnes,
    #[schema(value_type = f64)]
    pub deuxieme_pesee: Tonnes,
    #[serde(default)]
    pub motif: Option<String>,
    #[serde(default)]
    pub commentaire: Option<String>,
}

/// Fields editable on a stored weighing
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PesageHistoryEdit {
    #[serde(default)]
    pub motif: Option<String>,
    #[serde(default)]
    pub commentaire: Option<String>,
}

pub async fn list(
    gateway: &dyn EntityGateway,
    params: &ListParams,
) -> Result<Page<Pesage>, DomainError> {
    resource_service::fetch_page::<Pesage>(gateway, params).await
}

/// Compute the net weight and store the weighing.
pub async fn record(
    gateway: &dyn EntityGateway,
    input: NewPesage,
) -> Result<(Option<EntityId>, Pesage), DomainError> {
    let mut session = WeighingSession::select_vehicle(
        input.arrivage_id,
        &input.immatriculation,
        input.premiere_pesee,
    )?;
    session.set_second_weighing(input.deuxieme_pesee);
    let pesage = session.into_record(input.motif, input.commentaire)?;

    let id = resource_service::create(gateway, &pesage).await?;
    Ok((id, pesage))
}

/// Update motive and comment only; weights come from the stored record.
pub async fn edit_history(
    gateway: &dyn EntityGateway,
    id: &EntityId,
    edit: PesageHistoryEdit,
) -> Result<Pesage, DomainError> {
    let mut stored = resource_service::fetch_by_id::<Pesage>(gateway, id).await?;
    stored.motif = edit.motif;
    stored.commentaire = edit.commentaire;

    resource_service::update(gateway, id, &stored).await?;
    Ok(stored)
}

pub async fn delete(
    gateway: &dyn EntityGateway,
    id: &EntityId,
    confirmed: bool,
) -> Result<(), DomainError> {
    resource_service::delete::<Pesage>(gateway, id, confirmed).await
}
