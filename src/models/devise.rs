use serde::{Deserialize, Serialize};

use crate::domain::{Backend, EntityId, Resource};
use crate::services::validation::{ValidationErrors, Validator};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Devise {
    #[serde(rename = "devise_Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "devise_Code", default)]
    pub code: String,
    #[serde(rename = "devise_Libelle", default)]
    pub libelle: Option<String>,
}

impl Resource for Devise {
    const ENTITY_NAME: &'static str = "Devise";
    const BACKEND: Backend = Backend::Referential;
    const ID_FIELD: &'static str = "devise_Id";
    const SEARCH_FIELD: &'static str = "devise_Code";
    const FIELDS: &'static [&'static str] = &["devise_Id", "devise_Code", "devise_Libelle"];

    fn id(&self) -> Option<EntityId> {
        self.id.map(EntityId::Int)
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("devise_Code", Some(self.code.as_str()))
            .currency("devise_Code", Some(self.code.as_str()))
            .finish()
    }
}
