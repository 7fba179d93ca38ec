use serde::{Deserialize, Serialize};

use super::default_true;
use crate::domain::{Backend, EntityId, FilterSpec, Resource};
use crate::services::validation::{ValidationErrors, Validator};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    #[serde(rename = "port_Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "port_Nom", default)]
    pub nom: String,
    #[serde(rename = "port_CodeIATA", default)]
    pub code_iata: Option<String>,
    #[serde(rename = "port_UNLOCODE", default)]
    pub unlocode: Option<String>,
    #[serde(rename = "port_PaysId", default)]
    pub pays_id: Option<EntityId>,
    #[serde(rename = "port_VilleId", default)]
    pub ville_id: Option<i64>,
    #[serde(rename = "port_Latitude", default)]
    pub latitude: Option<f64>,
    #[serde(rename = "port_Longitude", default)]
    pub longitude: Option<f64>,
    #[serde(rename = "port_Actif", default = "default_true")]
    pub actif: bool,
}

impl Resource for Port {
    const ENTITY_NAME: &'static str = "Port";
    const BACKEND: Backend = Backend::Referential;
    const ID_FIELD: &'static str = "port_Id";
    const SEARCH_FIELD: &'static str = "port_Nom";
    const FIELDS: &'static [&'static str] = &[
        "port_Id",
        "port_Nom",
        "port_CodeIATA",
        "port_UNLOCODE",
        "port_PaysId",
        "port_VilleId",
        "port_Latitude",
        "port_Longitude",
        "port_Actif",
    ];
    const FILTERS: &'static [FilterSpec] = &[
        FilterSpec::eq("pays_id", "port_PaysId"),
        FilterSpec::eq("ville_id", "port_VilleId"),
        FilterSpec::contains("unlocode", "port_UNLOCODE"),
        FilterSpec::eq("actif", "port_Actif"),
    ];

    fn id(&self) -> Option<EntityId> {
        self.id.map(EntityId::Int)
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("port_Nom", Some(self.nom.as_str()))
            .required("port_UNLOCODE", self.unlocode.as_deref())
            .unlocode("port_UNLOCODE", self.unlocode.as_deref())
            .iata("port_CodeIATA", self.code_iata.as_deref())
            .required_value("port_PaysId", &self.pays_id)
            .range("port_Latitude", self.latitude, -90.0, 90.0)
            .range("port_Longitude", self.longitude, -180.0, 180.0)
            .finish()
    }
}

/// Port row with country and city names attached
#[derive(Debug, Clone, Serialize)]
pub struct PortView {
    #[serde(flatten)]
    pub port: Port,
    #[serde(rename = "pays_Nom")]
    pub pays_nom: String,
    #[serde(rename = "ville_Nom")]
    pub ville_nom: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn casablanca() -> Port {
        Port {
            id: None,
            nom: "Casablanca".to_string(),
            code_iata: Some("CMN".to_string()),
            unlocode: Some("MACAS".to_string()),
            pays_id: Some(EntityId::Int(1)),
            ville_id: Some(4),
            latitude: Some(33.6),
            longitude: Some(-7.6),
            actif: true,
        }
    }

    #[test]
    fn test_valid_port_passes() {
        assert!(casablanca().validate().is_ok());
    }

    #[test]
    fn test_port_requires_locode_and_country() {
        let port = Port {
            unlocode: Some("casa".to_string()),
            pays_id: None,
            latitude: Some(120.0),
            ..casablanca()
        };
        let err = port.validate().unwrap_err();

        assert!(err.has_field("port_UNLOCODE"));
        assert!(err.has_field("port_PaysId"));
        assert!(err.has_field("port_Latitude"));
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_value(casablanca()).unwrap();
        assert_eq!(json["port_UNLOCODE"], "MACAS");
        assert_eq!(json["port_PaysId"], 1);
        assert!(json.get("port_Id").is_none());
    }
}
