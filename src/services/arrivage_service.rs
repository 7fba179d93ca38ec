//! Arrivals and their independently saved tabs

use serde_json::Value;

use crate::domain::{DomainError, EntityGateway, EntityId, ListParams, Page};
use crate::infrastructure::cache::ReferenceCache;
use crate::models::{Arrivage, ArrivageSection, ArrivageView};
use crate::services::enrichment::{self, DEVISE, NAVIRE, NON_TROUVE, NameIndex};
use crate::services::resource_service;
use crate::services::validation::{FieldError, ValidationErrors};

fn view(arrivage: Arrivage, devises: &NameIndex, navires: &NameIndex) -> ArrivageView {
    ArrivageView {
        devise_code: devises.resolve(arrivage.devise_id, NON_TROUVE),
        navire_nom: navires.resolve(arrivage.navire_id, NON_TROUVE),
        arrivage,
    }
}

/// Arrivals with currency code and nominated ship name attached.
///
/// `gateway` is the port-ops backend; names come from the referential cache.
pub async fn list(
    gateway: &dyn EntityGateway,
    cache: &ReferenceCache,
    params: &ListParams,
) -> Result<Page<ArrivageView>, DomainError> {
    let page = resource_service::fetch_page::<Arrivage>(gateway, params).await?;
    let (devises, navires) = futures::join!(
        enrichment::load_index(cache, &DEVISE),
        enrichment::load_index(cache, &NAVIRE)
    );
    Ok(page.map(|arrivage| view(arrivage, &devises, &navires)))
}

pub async fn get(
    gateway: &dyn EntityGateway,
    cache: &ReferenceCache,
    id: &EntityId,
) -> Result<ArrivageView, DomainError> {
    let arrivage = resource_service::fetch_by_id::<Arrivage>(gateway, id).await?;
    let (devises, navires) = futures::join!(
        enrichment::load_index(cache, &DEVISE),
        enrichment::load_index(cache, &NAVIRE)
    );
    Ok(view(arrivage, &devises, &navires))
}

/// Replace one tab's fields on the stored arrival and PUT the whole record.
///
/// `patch` may only name fields owned by `section`.
pub async fn update_section(
    gateway: &dyn EntityGateway,
    id: &EntityId,
    section: ArrivageSection,
    patch: &Value,
) -> Result<Arrivage, DomainError> {
    let Value::Object(patch) = patch else {
        return Err(ValidationErrors::single("body", "must be a JSON object").into());
    };

    let allowed = section.fields();
    let foreign: Vec<FieldError> = patch
        .keys()
        .filter(|key| !allowed.contains(&key.as_str()))
        .map(|key| FieldError {
            field: key.clone(),
            message: format!("is not part of the {:?} section", section),
        })
        .collect();
    if !foreign.is_empty() {
        return Err(ValidationErrors { errors: foreign }.into());
    }

    let mut stored = resource_service::fetch_raw_by_id::<Arrivage>(gateway, id).await?;
    if let Value::Object(record) = &mut stored {
        for (key, value) in patch {
            record.insert(key.clone(), value.clone());
        }
    }

    let arrivage: Arrivage = serde_json::from_value(stored)?;
    resource_service::update(gateway, id, &arrivage).await?;
    tracing::info!("Arrivage {} section {:?} saved", id, section);
    Ok(arrivage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::RecordingGateway;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    fn port_ops() -> RecordingGateway {
        RecordingGateway::new("arrivage_Id").with_rows(
            "Arrivage",
            vec![json!({
                "arrivage_Id": 1,
                "arrivage_NumeroFactureProforma": "PF-2025-001",
                "arrivage_DeviseId": 2,
                "arrivage_Statut": 1,
                "arrivage_Assureur": "Wafa Assurance"
            })],
        )
    }

    #[tokio::test]
    async fn test_section_update_only_touches_its_fields() {
        let gateway = port_ops();

        let arrivage = update_section(
            &gateway,
            &EntityId::Int(1),
            ArrivageSection::Logistique,
            &json!({"arrivage_PortChargement": "Santos", "arrivage_Transitaire": "Timar"}),
        )
        .await
        .unwrap();

        assert_eq!(arrivage.port_chargement.as_deref(), Some("Santos"));
        let stored = &gateway.rows("Arrivage")[0];
        assert_eq!(stored["arrivage_Assureur"], "Wafa Assurance");
        assert_eq!(stored["arrivage_Transitaire"], "Timar");
        assert_eq!(stored["arrivage_NumeroFactureProforma"], "PF-2025-001");
    }

    #[tokio::test]
    async fn test_section_rejects_foreign_fields() {
        let gateway = port_ops();

        let err = update_section(
            &gateway,
            &EntityId::Int(1),
            ArrivageSection::Assurance,
            &json!({"arrivage_Montant": 10}),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, DomainError::Validation(ref e) if e.has_field("arrivage_Montant")));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_list_attaches_currency_code() {
        let gateway = port_ops();
        let referential = Arc::new(RecordingGateway::new("devise_Id").with_rows(
            "Devise",
            vec![json!({"devise_Id": 2, "devise_Code": "USD"})],
        ));
        let cache = ReferenceCache::new(referential, Duration::from_secs(60), 1000);

        let page = list(&gateway, &cache, &ListParams::new(1, 10)).await.unwrap();

        assert_eq!(page.items[0].devise_code, "USD");
        assert_eq!(page.items[0].navire_nom, NON_TROUVE);
    }
}
