use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::domain::{Backend, EntityId, FilterSpec, Resource};
use crate::services::validation::{ValidationErrors, Validator};

/// Weight in tonnes with exactly three decimals, stored as thousandths.
/// A weight is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tonnes(u64);

impl Tonnes {
    pub const ZERO: Tonnes = Tonnes(0);

    pub const fn from_thousandths(thousandths: u64) -> Self {
        Tonnes(thousandths)
    }

    pub const fn thousandths(self) -> u64 {
        self.0
    }

    /// Whole tonnes; `None` past the representable range.
    pub fn from_whole(tonnes: u64) -> Option<Self> {
        tonnes.checked_mul(1000).map(Tonnes)
    }

    /// Rounds to the nearest thousandth. `None` for negative, non-finite or
    /// out-of-range values.
    pub fn from_f64(value: f64) -> Option<Self> {
        let scaled = (value * 1000.0).round();
        if !scaled.is_finite() || scaled < 0.0 || scaled >= u64::MAX as f64 {
            return None;
        }
        Some(Tonnes(scaled as u64))
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// `|self - other|`
    pub fn abs_diff(self, other: Tonnes) -> Tonnes {
        Tonnes(self.0.abs_diff(other.0))
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Tonnes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:03}", self.0 / 1000, self.0 % 1000)
    }
}

impl FromStr for Tonnes {
    type Err = String;

    /// Accepts `7`, `7.25`, `7.250` and the comma form `7,250`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim().replace(',', ".");
        let (whole, frac) = raw.split_once('.').unwrap_or((raw.as_str(), ""));

        if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("invalid weight '{}'", raw));
        }
        if frac.len() > 3 || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("weight '{}' must have at most 3 decimals", raw));
        }

        let out_of_range = || format!("weight '{}' is out of range", raw);
        let whole: u64 = whole.parse().map_err(|_| out_of_range())?;
        let frac: u64 = format!("{:0<3}", frac)
            .parse()
            .map_err(|_| format!("invalid weight '{}'", raw))?;
        whole
            .checked_mul(1000)
            .and_then(|t| t.checked_add(frac))
            .map(Tonnes)
            .ok_or_else(out_of_range)
    }
}

impl Serialize for Tonnes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

struct TonnesVisitor;

impl Visitor<'_> for TonnesVisitor {
    type Value = Tonnes;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a weight in tonnes as number or decimal string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Tonnes, E> {
        if v < 0.0 {
            return Err(E::custom("weight cannot be negative"));
        }
        Tonnes::from_f64(v).ok_or_else(|| E::custom("weight out of range"))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Tonnes, E> {
        let v = u64::try_from(v).map_err(|_| E::custom("weight cannot be negative"))?;
        self.visit_u64(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Tonnes, E> {
        Tonnes::from_whole(v).ok_or_else(|| E::custom("weight out of range"))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Tonnes, E> {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Tonnes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TonnesVisitor)
    }
}

/// Recorded weighbridge operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pesage {
    #[serde(rename = "pesage_Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "pesage_ArrivageId", default)]
    pub arrivage_id: Option<i64>,
    /// Vehicle registration plate
    #[serde(rename = "pesage_Immatriculation", default)]
    pub immatriculation: String,
    #[serde(rename = "pesage_PremierePesee", default)]
    pub premiere_pesee: Tonnes,
    #[serde(rename = "pesage_DeuxiemePesee", default)]
    pub deuxieme_pesee: Tonnes,
    #[serde(rename = "pesage_PoidsNet", default)]
    pub poids_net: Tonnes,
    #[serde(rename = "pesage_Motif", default)]
    pub motif: Option<String>,
    #[serde(rename = "pesage_Commentaire", default)]
    pub commentaire: Option<String>,
    #[serde(rename = "pesage_Date", default)]
    pub date_pesage: Option<String>,
}

impl Resource for Pesage {
    const ENTITY_NAME: &'static str = "Pesage";
    const BACKEND: Backend = Backend::PortOps;
    const ID_FIELD: &'static str = "pesage_Id";
    const SEARCH_FIELD: &'static str = "pesage_Immatriculation";
    const FIELDS: &'static [&'static str] = &[
        "pesage_Id",
        "pesage_ArrivageId",
        "pesage_Immatriculation",
        "pesage_PremierePesee",
        "pesage_DeuxiemePesee",
        "pesage_PoidsNet",
        "pesage_Motif",
        "pesage_Commentaire",
        "pesage_Date",
    ];
    const FILTERS: &'static [FilterSpec] = &[FilterSpec::eq("arrivage_id", "pesage_ArrivageId")];

    fn id(&self) -> Option<EntityId> {
        self.id.map(EntityId::Int)
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("pesage_Immatriculation", Some(self.immatriculation.as_str()))
            .max_len("pesage_Motif", self.motif.as_deref(), 255)
            .date("pesage_Date", self.date_pesage.as_deref())
            .check(
                "pesage_PremierePesee",
                self.premiere_pesee.is_positive(),
                "must be greater than 0",
            )
            .check(
                "pesage_DeuxiemePesee",
                self.deuxieme_pesee.is_positive(),
                "must be greater than 0",
            )
            .check(
                "pesage_PoidsNet",
                self.poids_net == self.premiere_pesee.abs_diff(self.deuxieme_pesee),
                "must equal the difference of both weighings",
            )
            .finish()
    }
}
