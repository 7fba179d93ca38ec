use serde::{Deserialize, Serialize};

use super::default_true;
use crate::domain::{Backend, EntityId, FilterSpec, Resource};
use crate::services::validation::{ValidationErrors, Validator};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    #[serde(rename = "site_Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "site_Nom", default)]
    pub nom: String,
    #[serde(rename = "site_Adresse", default)]
    pub adresse: Option<String>,
    #[serde(rename = "site_VilleId", default)]
    pub ville_id: Option<i64>,
    #[serde(rename = "site_Actif", default = "default_true")]
    pub actif: bool,
}

impl Resource for Site {
    const ENTITY_NAME: &'static str = "Site";
    const BACKEND: Backend = Backend::Referential;
    const ID_FIELD: &'static str = "site_Id";
    const SEARCH_FIELD: &'static str = "site_Nom";
    const FIELDS: &'static [&'static str] =
        &["site_Id", "site_Nom", "site_Adresse", "site_VilleId", "site_Actif"];
    const FILTERS: &'static [FilterSpec] = &[
        FilterSpec::eq("ville_id", "site_VilleId"),
        FilterSpec::eq("actif", "site_Actif"),
    ];

    fn id(&self) -> Option<EntityId> {
        self.id.map(EntityId::Int)
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("site_Nom", Some(self.nom.as_str()))
            .max_len("site_Adresse", self.adresse.as_deref(), 255)
            .required_value("site_VilleId", &self.ville_id)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteView {
    #[serde(flatten)]
    pub site: Site,
    #[serde(rename = "ville_Nom")]
    pub ville_nom: String,
}
