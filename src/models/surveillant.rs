use serde::{Deserialize, Serialize};

use super::default_true;
use crate::domain::{Backend, EntityId, FilterSpec, Resource};
use crate::services::validation::{ValidationErrors, Validator};

/// Entry of the configured surveillant type list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveillantType {
    pub id: i64,
    pub label: String,
}

/// Cargo inspection agent or firm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surveillant {
    #[serde(rename = "surveillant_Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "surveillant_TypeId", default)]
    pub type_id: Option<i64>,
    #[serde(rename = "surveillant_Nom", default)]
    pub nom: String,
    #[serde(rename = "surveillant_Prenom", default)]
    pub prenom: Option<String>,
    #[serde(rename = "surveillant_RaisonSociale", default)]
    pub raison_sociale: Option<String>,
    #[serde(rename = "surveillant_PaysId", default)]
    pub pays_id: Option<EntityId>,
    #[serde(rename = "surveillant_Email", default)]
    pub email: Option<String>,
    #[serde(rename = "surveillant_Telephone", default)]
    pub telephone: Option<String>,
    #[serde(rename = "surveillant_Actif", default = "default_true")]
    pub actif: bool,
}

impl Resource for Surveillant {
    const ENTITY_NAME: &'static str = "Surveillant";
    const BACKEND: Backend = Backend::Referential;
    const ID_FIELD: &'static str = "surveillant_Id";
    const SEARCH_FIELD: &'static str = "surveillant_Nom";
    const FIELDS: &'static [&'static str] = &[
        "surveillant_Id",
        "surveillant_TypeId",
        "surveillant_Nom",
        "surveillant_Prenom",
        "surveillant_RaisonSociale",
        "surveillant_PaysId",
        "surveillant_Email",
        "surveillant_Telephone",
        "surveillant_Actif",
    ];
    const FILTERS: &'static [FilterSpec] = &[
        FilterSpec::eq("type_id", "surveillant_TypeId"),
        FilterSpec::eq("pays_id", "surveillant_PaysId"),
        FilterSpec::eq("actif", "surveillant_Actif"),
    ];

    fn id(&self) -> Option<EntityId> {
        self.id.map(EntityId::Int)
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required_value("surveillant_TypeId", &self.type_id)
            .required("surveillant_Nom", Some(self.nom.as_str()))
            .required_value("surveillant_PaysId", &self.pays_id)
            .email("surveillant_Email", self.email.as_deref())
            .phone("surveillant_Telephone", self.telephone.as_deref())
            .finish()
    }
}

/// Surveillant row; note the capitalised `Pays_Nom` expected by this screen
#[derive(Debug, Clone, Serialize)]
pub struct SurveillantView {
    #[serde(flatten)]
    pub surveillant: Surveillant,
    #[serde(rename = "type_Nom")]
    pub type_nom: String,
    #[serde(rename = "Pays_Nom")]
    pub pays_nom: String,
}
