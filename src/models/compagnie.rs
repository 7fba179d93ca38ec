use serde::{Deserialize, Serialize};

use super::default_true;
use crate::domain::{Backend, EntityId, FilterSpec, Resource};
use crate::services::validation::{ValidationErrors, Validator};

/// Maritime company (armateur)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompagnieMaritime {
    #[serde(rename = "compagnie_Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "compagnie_Nom", default)]
    pub nom: String,
    #[serde(rename = "compagnie_CodeIMO", default)]
    pub code_imo: Option<String>,
    #[serde(rename = "compagnie_PaysId", default)]
    pub pays_id: Option<EntityId>,
    #[serde(rename = "compagnie_Adresse", default)]
    pub adresse: Option<String>,
    #[serde(rename = "compagnie_Telephone", default)]
    pub telephone: Option<String>,
    #[serde(rename = "compagnie_Email", default)]
    pub email: Option<String>,
    #[serde(rename = "compagnie_SiteWeb", default)]
    pub site_web: Option<String>,
    #[serde(rename = "compagnie_Actif", default = "default_true")]
    pub actif: bool,
}

impl Resource for CompagnieMaritime {
    const ENTITY_NAME: &'static str = "CompagnieMaritime";
    const BACKEND: Backend = Backend::Referential;
    const ID_FIELD: &'static str = "compagnie_Id";
    const SEARCH_FIELD: &'static str = "compagnie_Nom";
    const FIELDS: &'static [&'static str] = &[
        "compagnie_Id",
        "compagnie_Nom",
        "compagnie_CodeIMO",
        "compagnie_PaysId",
        "compagnie_Adresse",
        "compagnie_Telephone",
        "compagnie_Email",
        "compagnie_SiteWeb",
        "compagnie_Actif",
    ];
    const FILTERS: &'static [FilterSpec] = &[
        FilterSpec::eq("pays_id", "compagnie_PaysId"),
        FilterSpec::contains("code_imo", "compagnie_CodeIMO"),
        FilterSpec::eq("actif", "compagnie_Actif"),
    ];

    fn id(&self) -> Option<EntityId> {
        self.id.map(EntityId::Int)
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("compagnie_Nom", Some(self.nom.as_str()))
            .required("compagnie_CodeIMO", self.code_imo.as_deref())
            .imo("compagnie_CodeIMO", self.code_imo.as_deref())
            .required_value("compagnie_PaysId", &self.pays_id)
            .email("compagnie_Email", self.email.as_deref())
            .phone("compagnie_Telephone", self.telephone.as_deref())
            .url("compagnie_SiteWeb", self.site_web.as_deref())
            .finish()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompagnieView {
    #[serde(flatten)]
    pub compagnie: CompagnieMaritime,
    #[serde(rename = "pays_Nom")]
    pub pays_nom: String,
}
