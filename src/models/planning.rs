use serde::{Deserialize, Serialize};

use crate::domain::{Backend, EntityId, FilterSpec, Resource};
use crate::services::validation::{ValidationErrors, Validator};

/// Validation status of a monthly arrival plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PlanningStatus {
    #[default]
    EnAttente,
    Valide,
    Rejete,
}

impl TryFrom<u8> for PlanningStatus {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::EnAttente),
            1 => Ok(Self::Valide),
            2 => Ok(Self::Rejete),
            other => Err(format!("unknown planning status code {}", other)),
        }
    }
}

impl From<PlanningStatus> for u8 {
    fn from(status: PlanningStatus) -> Self {
        match status {
            PlanningStatus::EnAttente => 0,
            PlanningStatus::Valide => 1,
            PlanningStatus::Rejete => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningArrivage {
    #[serde(rename = "planning_Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "planning_ArrivageId", default)]
    pub arrivage_id: Option<i64>,
    #[serde(rename = "planning_Statut", default)]
    pub statut: PlanningStatus,
    #[serde(rename = "planning_Mois", default)]
    pub mois: u32,
    #[serde(rename = "planning_Annee", default)]
    pub annee: i32,
    #[serde(rename = "planning_DateStatut", default)]
    pub date_statut: Option<String>,
    #[serde(rename = "planning_MotifRejet", default)]
    pub motif_rejet: Option<String>,
}

impl Resource for PlanningArrivage {
    const ENTITY_NAME: &'static str = "PlanningArrivage";
    const BACKEND: Backend = Backend::PortOps;
    const ID_FIELD: &'static str = "planning_Id";
    const SEARCH_FIELD: &'static str = "planning_MotifRejet";
    const FIELDS: &'static [&'static str] = &[
        "planning_Id",
        "planning_ArrivageId",
        "planning_Statut",
        "planning_Mois",
        "planning_Annee",
        "planning_DateStatut",
        "planning_MotifRejet",
    ];
    const FILTERS: &'static [FilterSpec] = &[
        FilterSpec::eq("statut", "planning_Statut"),
        FilterSpec::eq("mois", "planning_Mois"),
        FilterSpec::eq("annee", "planning_Annee"),
        FilterSpec::eq("arrivage_id", "planning_ArrivageId"),
    ];

    fn id(&self) -> Option<EntityId> {
        self.id.map(EntityId::Int)
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.required_value("planning_ArrivageId", &self.arrivage_id)
            .range("planning_Mois", Some(f64::from(self.mois)), 1.0, 12.0)
            .range("planning_Annee", Some(f64::from(self.annee)), 2000.0, 2100.0)
            .date("planning_DateStatut", self.date_statut.as_deref());
        if self.statut == PlanningStatus::Rejete {
            v.required("planning_MotifRejet", self.motif_rejet.as_deref());
        }
        v.finish()
    }
}
