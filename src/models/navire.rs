use serde::{Deserialize, Serialize};

use super::default_true;
use crate::domain::{Backend, EntityId, FilterSpec, Resource};
use crate::services::validation::{ValidationErrors, Validator};

/// Ship validation status codes as stored by the referential API
pub mod statut_validation {
    pub const EN_ATTENTE: i32 = 0;
    pub const VALIDE: i32 = 1;
    pub const REJETE: i32 = 2;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Navire {
    #[serde(rename = "navire_Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "navire_Nom", default)]
    pub nom: String,
    #[serde(rename = "navire_IMO", default)]
    pub imo: Option<String>,
    #[serde(rename = "navire_CompagnieId", default)]
    pub compagnie_id: Option<i64>,
    #[serde(rename = "navire_PaysImmatriculationId", default)]
    pub pays_immatriculation_id: Option<EntityId>,
    #[serde(rename = "navire_PortImmatriculationId", default)]
    pub port_immatriculation_id: Option<i64>,
    /// Metres
    #[serde(rename = "navire_Longueur", default)]
    pub longueur: Option<f64>,
    #[serde(rename = "navire_Largeur", default)]
    pub largeur: Option<f64>,
    #[serde(rename = "navire_TirantEau", default)]
    pub tirant_eau: Option<f64>,
    #[serde(rename = "navire_JaugeBrute", default)]
    pub jauge_brute: Option<f64>,
    #[serde(rename = "navire_JaugeNette", default)]
    pub jauge_nette: Option<f64>,
    #[serde(rename = "navire_PortEnLourd", default)]
    pub port_en_lourd: Option<f64>,
    #[serde(rename = "navire_StatutValidation", default)]
    pub statut_validation: i32,
    #[serde(rename = "navire_Actif", default = "default_true")]
    pub actif: bool,
}

impl Resource for Navire {
    const ENTITY_NAME: &'static str = "Navire";
    const BACKEND: Backend = Backend::Referential;
    const ID_FIELD: &'static str = "navire_Id";
    const SEARCH_FIELD: &'static str = "navire_Nom";
    const FIELDS: &'static [&'static str] = &[
        "navire_Id",
        "navire_Nom",
        "navire_IMO",
        "navire_CompagnieId",
        "navire_PaysImmatriculationId",
        "navire_PortImmatriculationId",
        "navire_Longueur",
        "navire_Largeur",
        "navire_TirantEau",
        "navire_JaugeBrute",
        "navire_JaugeNette",
        "navire_PortEnLourd",
        "navire_StatutValidation",
        "navire_Actif",
    ];
    const FILTERS: &'static [FilterSpec] = &[
        FilterSpec::contains("imo", "navire_IMO"),
        FilterSpec::eq("compagnie_id", "navire_CompagnieId"),
        FilterSpec::eq("pays_id", "navire_PaysImmatriculationId"),
        FilterSpec::eq("statut", "navire_StatutValidation"),
        FilterSpec::eq("actif", "navire_Actif"),
    ];

    fn id(&self) -> Option<EntityId> {
        self.id.map(EntityId::Int)
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let net_within_gross = match (self.jauge_brute, self.jauge_nette) {
            (Some(brute), Some(nette)) => nette <= brute,
            _ => true,
        };

        Validator::new()
            .required("navire_Nom", Some(self.nom.as_str()))
            .required("navire_IMO", self.imo.as_deref())
            .imo("navire_IMO", self.imo.as_deref())
            .required_value("navire_CompagnieId", &self.compagnie_id)
            .positive("navire_Longueur", self.longueur)
            .positive("navire_Largeur", self.largeur)
            .positive("navire_TirantEau", self.tirant_eau)
            .positive("navire_JaugeBrute", self.jauge_brute)
            .positive("navire_JaugeNette", self.jauge_nette)
            .positive("navire_PortEnLourd", self.port_en_lourd)
            .range(
                "navire_StatutValidation",
                Some(f64::from(self.statut_validation)),
                f64::from(statut_validation::EN_ATTENTE),
                f64::from(statut_validation::REJETE),
            )
            .check(
                "navire_JaugeNette",
                net_within_gross,
                "must not exceed the gross tonnage",
            )
            .finish()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavireView {
    #[serde(flatten)]
    pub navire: Navire,
    #[serde(rename = "compagnie_Nom")]
    pub compagnie_nom: String,
    #[serde(rename = "pays_Nom")]
    pub pays_nom: String,
    #[serde(rename = "port_Nom")]
    pub port_nom: String,
}
