use serde::{Deserialize, Serialize};

use crate::domain::{Backend, EntityId, FilterSpec, Resource};
use crate::services::validation::{ValidationErrors, Validator};

/// Coarse arrival status codes
pub mod statut {
    pub const BROUILLON: i32 = 0;
    pub const EN_COURS: i32 = 1;
    pub const CLOTURE: i32 = 2;
}

/// Maritime cargo arrival with its tabbed sub-sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrivage {
    #[serde(rename = "arrivage_Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "arrivage_NumeroFactureProforma", default)]
    pub numero_facture_proforma: String,
    #[serde(rename = "arrivage_DateFacture", default)]
    pub date_facture: Option<String>,
    #[serde(rename = "arrivage_DateArriveePrevue", default)]
    pub date_arrivee_prevue: Option<String>,
    #[serde(rename = "arrivage_Montant", default)]
    pub montant: Option<f64>,
    #[serde(rename = "arrivage_Quantite", default)]
    pub quantite: Option<f64>,
    #[serde(rename = "arrivage_DeviseId", default)]
    pub devise_id: Option<i64>,
    #[serde(rename = "arrivage_ModalitePaiement", default)]
    pub modalite_paiement: Option<String>,
    #[serde(rename = "arrivage_Statut", default)]
    pub statut: i32,

    // logistique
    #[serde(rename = "arrivage_PortChargement", default)]
    pub port_chargement: Option<String>,
    #[serde(rename = "arrivage_PortDechargement", default)]
    pub port_dechargement: Option<String>,
    #[serde(rename = "arrivage_Transitaire", default)]
    pub transitaire: Option<String>,

    // assurance
    #[serde(rename = "arrivage_Assureur", default)]
    pub assureur: Option<String>,
    #[serde(rename = "arrivage_NumeroPolice", default)]
    pub numero_police: Option<String>,

    // nomination navire
    #[serde(rename = "arrivage_NavireId", default)]
    pub navire_id: Option<i64>,
    #[serde(rename = "arrivage_DateNomination", default)]
    pub date_nomination: Option<String>,

    // qualification
    #[serde(rename = "arrivage_Qualite", default)]
    pub qualite: Option<String>,
    #[serde(rename = "arrivage_SurveillantId", default)]
    pub surveillant_id: Option<i64>,

    // contrat
    #[serde(rename = "arrivage_NumeroContrat", default)]
    pub numero_contrat: Option<String>,
    #[serde(rename = "arrivage_ConditionsContrat", default)]
    pub conditions_contrat: Option<String>,
}

impl Resource for Arrivage {
    const ENTITY_NAME: &'static str = "Arrivage";
    const BACKEND: Backend = Backend::PortOps;
    const ID_FIELD: &'static str = "arrivage_Id";
    const SEARCH_FIELD: &'static str = "arrivage_NumeroFactureProforma";
    const FIELDS: &'static [&'static str] = &[
        "arrivage_Id",
        "arrivage_NumeroFactureProforma",
        "arrivage_DateFacture",
        "arrivage_DateArriveePrevue",
        "arrivage_Montant",
        "arrivage_Quantite",
        "arrivage_DeviseId",
        "arrivage_ModalitePaiement",
        "arrivage_Statut",
        "arrivage_PortChargement",
        "arrivage_PortDechargement",
        "arrivage_Transitaire",
        "arrivage_Assureur",
        "arrivage_NumeroPolice",
        "arrivage_NavireId",
        "arrivage_DateNomination",
        "arrivage_Qualite",
        "arrivage_SurveillantId",
        "arrivage_NumeroContrat",
        "arrivage_ConditionsContrat",
    ];
    const FILTERS: &'static [FilterSpec] = &[
        FilterSpec::eq("statut", "arrivage_Statut"),
        FilterSpec::eq("devise_id", "arrivage_DeviseId"),
        FilterSpec::eq("navire_id", "arrivage_NavireId"),
    ];

    fn id(&self) -> Option<EntityId> {
        self.id.map(EntityId::Int)
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required(
                "arrivage_NumeroFactureProforma",
                Some(self.numero_facture_proforma.as_str()),
            )
            .date("arrivage_DateFacture", self.date_facture.as_deref())
            .date("arrivage_DateArriveePrevue", self.date_arrivee_prevue.as_deref())
            .date("arrivage_DateNomination", self.date_nomination.as_deref())
            .positive("arrivage_Montant", self.montant)
            .positive("arrivage_Quantite", self.quantite)
            .range(
                "arrivage_Statut",
                Some(f64::from(self.statut)),
                f64::from(statut::BROUILLON),
                f64::from(statut::CLOTURE),
            )
            .finish()
    }
}

/// Independently editable tab of an arrival
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrivageSection {
    Logistique,
    Assurance,
    Nomination,
    Qualification,
    Contrat,
}

impl ArrivageSection {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "logistique" => Some(Self::Logistique),
            "assurance" => Some(Self::Assurance),
            "nomination" => Some(Self::Nomination),
            "qualification" => Some(Self::Qualification),
            "contrat" => Some(Self::Contrat),
            _ => None,
        }
    }

    /// Wire fields owned by this tab
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Self::Logistique => &[
                "arrivage_PortChargement",
                "arrivage_PortDechargement",
                "arrivage_Transitaire",
            ],
            Self::Assurance => &["arrivage_Assureur", "arrivage_NumeroPolice"],
            Self::Nomination => &["arrivage_NavireId", "arrivage_DateNomination"],
            Self::Qualification => &["arrivage_Qualite", "arrivage_SurveillantId"],
            Self::Contrat => &["arrivage_NumeroContrat", "arrivage_ConditionsContrat"],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ArrivageView {
    #[serde(flatten)]
    pub arrivage: Arrivage,
    #[serde(rename = "devise_Code")]
    pub devise_code: String,
    #[serde(rename = "navire_Nom")]
    pub navire_nom: String,
}
