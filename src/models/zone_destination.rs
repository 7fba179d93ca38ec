use serde::{Deserialize, Serialize};

use crate::domain::{Backend, EntityId, FilterSpec, Resource};
use crate::services::validation::{ValidationErrors, Validator};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneDestination {
    #[serde(rename = "zone_Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "zone_Libelle", default)]
    pub libelle: String,
    #[serde(rename = "zone_SiteId", default)]
    pub site_id: Option<i64>,
    #[serde(rename = "zone_DateCreation", default)]
    pub date_creation: Option<String>,
}

impl Resource for ZoneDestination {
    const ENTITY_NAME: &'static str = "ZoneDestination";
    const BACKEND: Backend = Backend::Referential;
    const ID_FIELD: &'static str = "zone_Id";
    const SEARCH_FIELD: &'static str = "zone_Libelle";
    const FIELDS: &'static [&'static str] =
        &["zone_Id", "zone_Libelle", "zone_SiteId", "zone_DateCreation"];
    const FILTERS: &'static [FilterSpec] = &[FilterSpec::eq("site_id", "zone_SiteId")];

    fn id(&self) -> Option<EntityId> {
        self.id.map(EntityId::Int)
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("zone_Libelle", Some(self.libelle.as_str()))
            .required_value("zone_SiteId", &self.site_id)
            .date("zone_DateCreation", self.date_creation.as_deref())
            .finish()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ZoneDestinationView {
    #[serde(flatten)]
    pub zone: ZoneDestination,
    #[serde(rename = "site_Nom")]
    pub site_nom: String,
}
