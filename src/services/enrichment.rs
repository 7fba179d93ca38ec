//! Foreign key to display-name resolution
//!
//! A related table is loaded whole through the [`ReferenceCache`], indexed by
//! primary key and used to attach a name to every row of a listing. A row
//! whose key is missing, or whose table could not be loaded, gets a sentinel
//! instead. Enrichment never fails the listing that asked for it.

use serde_json::Value;
use std::collections::HashMap;
use std::fmt::Display;

use crate::infrastructure::cache::ReferenceCache;
use crate::models::SurveillantType;

/// Sentinel used by ports, cities and companies
pub const UNKNOWN: &str = "Unknown";
/// Sentinel used by ships, zones, surveillants and arrivals
pub const NON_TROUVE: &str = "Non trouvé";

/// Where to find the display name of a foreign key
#[derive(Debug, Clone, Copy)]
pub struct Lookup {
    pub entity_name: &'static str,
    pub key_field: &'static str,
    pub name_field: &'static str,
}

pub const PAYS: Lookup = Lookup {
    entity_name: "Pays",
    key_field: "pays_Id",
    name_field: "pays_Nom",
};

pub const VILLE: Lookup = Lookup {
    entity_name: "Ville",
    key_field: "ville_Id",
    name_field: "ville_Nom",
};

pub const PORT: Lookup = Lookup {
    entity_name: "Port",
    key_field: "port_Id",
    name_field: "port_Nom",
};

pub const COMPAGNIE: Lookup = Lookup {
    entity_name: "CompagnieMaritime",
    key_field: "compagnie_Id",
    name_field: "compagnie_Nom",
};

pub const SITE: Lookup = Lookup {
    entity_name: "Site",
    key_field: "site_Id",
    name_field: "site_Nom",
};

pub const NAVIRE: Lookup = Lookup {
    entity_name: "Navire",
    key_field: "navire_Id",
    name_field: "navire_Nom",
};

pub const DEVISE: Lookup = Lookup {
    entity_name: "Devise",
    key_field: "devise_Id",
    name_field: "devise_Code",
};

fn key_of(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.as_i64().map_or_else(|| n.to_string(), |i| i.to_string())),
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

/// Primary key (string form) to display name
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    names: HashMap<String, String>,
}

impl NameIndex {
    pub fn from_rows(rows: &[Value], lookup: &Lookup) -> Self {
        let names = rows
            .iter()
            .filter_map(|row| {
                let key = key_of(row.get(lookup.key_field)?)?;
                let name = row.get(lookup.name_field)?.as_str()?.to_string();
                Some((key, name))
            })
            .collect();
        Self { names }
    }

    pub fn from_surveillant_types(types: &[SurveillantType]) -> Self {
        let names = types
            .iter()
            .map(|t| (t.id.to_string(), t.label.clone()))
            .collect();
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name for `key`, or `sentinel` when the key is absent or unknown.
    pub fn resolve<K: Display>(&self, key: Option<K>, sentinel: &str) -> String {
        key.and_then(|k| self.names.get(k.to_string().trim()).cloned())
            .unwrap_or_else(|| sentinel.to_string())
    }
}

/// Load the index for `lookup`. A failed load yields an empty index.
pub async fn load_index(cache: &ReferenceCache, lookup: &Lookup) -> NameIndex {
    match cache.table(lookup.entity_name).await {
        Ok(rows) => NameIndex::from_rows(&rows, lookup),
        Err(e) => {
            tracing::warn!(
                "Could not load {} for enrichment, names fall back to sentinel: {}",
                lookup.entity_name,
                e
            );
            NameIndex::default()
        }
    }
}
