use serde::{Deserialize, Serialize};

use crate::domain::{Backend, EntityId, FilterSpec, Resource};
use crate::services::validation::{ValidationErrors, Validator};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ville {
    #[serde(rename = "ville_Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "ville_Nom", default)]
    pub nom: String,
    #[serde(rename = "ville_PaysId", default)]
    pub pays_id: Option<EntityId>,
}

impl Resource for Ville {
    const ENTITY_NAME: &'static str = "Ville";
    const BACKEND: Backend = Backend::Referential;
    const ID_FIELD: &'static str = "ville_Id";
    const SEARCH_FIELD: &'static str = "ville_Nom";
    const FIELDS: &'static [&'static str] = &["ville_Id", "ville_Nom", "ville_PaysId"];
    const FILTERS: &'static [FilterSpec] = &[FilterSpec::eq("pays_id", "ville_PaysId")];

    fn id(&self) -> Option<EntityId> {
        self.id.map(EntityId::Int)
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("ville_Nom", Some(self.nom.as_str()))
            .required_value("ville_PaysId", &self.pays_id)
            .finish()
    }
}

/// City row with its country name attached
#[derive(Debug, Clone, Serialize)]
pub struct VilleView {
    #[serde(flatten)]
    pub ville: Ville,
    #[serde(rename = "pays_Nom")]
    pub pays_nom: String,
}
