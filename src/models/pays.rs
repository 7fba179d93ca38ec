use serde::{Deserialize, Serialize};

use crate::domain::{Backend, EntityId, Resource};
use crate::services::validation::{ValidationErrors, Validator};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pays {
    #[serde(rename = "pays_Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(rename = "pays_Nom", default)]
    pub nom: String,
}

impl Resource for Pays {
    const ENTITY_NAME: &'static str = "Pays";
    const BACKEND: Backend = Backend::Referential;
    const ID_FIELD: &'static str = "pays_Id";
    const SEARCH_FIELD: &'static str = "pays_Nom";
    const FIELDS: &'static [&'static str] = &["pays_Id", "pays_Nom"];
    const TEXT_ID: bool = true;

    fn id(&self) -> Option<EntityId> {
        self.id.clone()
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("pays_Nom", Some(self.nom.as_str()))
            .max_len("pays_Nom", Some(self.nom.as_str()), 100)
            .finish()
    }
}
