//! Typed CRUD over any [`Resource`]
//!
//! Validation runs before a write is sent. Nothing here updates local state:
//! callers re-fetch to observe a change.

use serde_json::Value;

use crate::domain::{
    DomainError, EntityGateway, EntityId, Filter, ListParams, ListQuery, Page, Resource,
};

fn decode_items<R: Resource>(page: Page<Value>) -> Result<Page<R>, DomainError> {
    let items = page
        .items
        .into_iter()
        .map(serde_json::from_value::<R>)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Page {
        items,
        total_items: page.total_items,
    })
}

/// One page of `R`, filtered by search term and declared filters
pub async fn fetch_page<R: Resource>(
    gateway: &dyn EntityGateway,
    params: &ListParams,
) -> Result<Page<R>, DomainError> {
    let query = params.to_query::<R>();
    decode_items(gateway.list(&query).await?)
}

/// Raw JSON record for `id`, as stored by the backend
pub async fn fetch_raw_by_id<R: Resource>(
    gateway: &dyn EntityGateway,
    id: &EntityId,
) -> Result<Value, DomainError> {
    let query = ListQuery::new(R::ENTITY_NAME, 1, 1)
        .with_fields(R::FIELDS)
        .with_filter(Filter::eq(R::ID_FIELD, id.to_string()));

    gateway
        .list(&query)
        .await?
        .items
        .into_iter()
        .next()
        .ok_or(DomainError::NotFound)
}

pub async fn fetch_by_id<R: Resource>(
    gateway: &dyn EntityGateway,
    id: &EntityId,
) -> Result<R, DomainError> {
    let raw = fetch_raw_by_id::<R>(gateway, id).await?;
    Ok(serde_json::from_value(raw)?)
}

/// Validate and POST `entity`; returns the new id when the backend echoes it.
pub async fn create<R: Resource>(
    gateway: &dyn EntityGateway,
    entity: &R,
) -> Result<Option<EntityId>, DomainError> {
    entity.validate()?;

    let mut body = serde_json::to_value(entity)?;
    if let Value::Object(map) = &mut body {
        map.remove(R::ID_FIELD);
    }

    let echoed = gateway.create(R::ENTITY_NAME, &body).await?;
    let id = echoed.as_ref().and_then(|value| match value {
        Value::Object(map) => map.get(R::ID_FIELD).and_then(EntityId::from_json),
        other => EntityId::from_json(other),
    });

    tracing::info!("Created {} (id: {:?})", R::ENTITY_NAME, id);
    Ok(id)
}

/// Validate and PUT `entity` under `id`. The id field in the body is forced to `id`.
pub async fn update<R: Resource>(
    gateway: &dyn EntityGateway,
    id: &EntityId,
    entity: &R,
) -> Result<(), DomainError> {
    entity.validate()?;

    let mut body = serde_json::to_value(entity)?;
    if let Value::Object(map) = &mut body {
        map.insert(R::ID_FIELD.to_string(), serde_json::to_value(id)?);
    }

    gateway.update(R::ENTITY_NAME, id, &body).await?;
    tracing::info!("Updated {} {}", R::ENTITY_NAME, id);
    Ok(())
}

/// Hard delete. Without `confirmed` the backend is never called.
pub async fn delete<R: Resource>(
    gateway: &dyn EntityGateway,
    id: &EntityId,
    confirmed: bool,
) -> Result<(), DomainError> {
    if !confirmed {
        return Err(DomainError::ConfirmationRequired);
    }
    gateway.delete(R::ENTITY_NAME, id).await?;
    tracing::info!("Deleted {} {}", R::ENTITY_NAME, id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pays;
    use crate::services::test_support::RecordingGateway;

    #[tokio::test]
    async fn test_create_then_fetch_round_trip() {
        let gateway = RecordingGateway::new("pays_Id");
        let pays = Pays {
            id: None,
            nom: "Maroc".to_string(),
        };

        let id = create(&gateway, &pays).await.unwrap().expect("echoed id");
        let fetched: Pays = fetch_by_id(&gateway, &id).await.unwrap();

        assert_eq!(fetched.nom, "Maroc");
        assert_eq!(fetched.id, Some(id));
    }

    #[tokio::test]
    async fn test_invalid_entity_is_never_sent() {
        let gateway = RecordingGateway::new("pays_Id");
        let pays = Pays {
            id: None,
            nom: "   ".to_string(),
        };

        let err = create(&gateway, &pays).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_update_forces_path_id_into_body() {
        let gateway = RecordingGateway::new("pays_Id");
        let pays = Pays {
            id: Some(EntityId::Int(5)),
            nom: "Maroc".to_string(),
        };
        create(&gateway, &pays).await.unwrap();

        let renamed = Pays {
            id: None,
            nom: "Royaume du Maroc".to_string(),
        };
        update(&gateway, &EntityId::Int(1), &renamed).await.unwrap();

        let fetched: Pays = fetch_by_id(&gateway, &EntityId::Int(1)).await.unwrap();
        assert_eq!(fetched.nom, "Royaume du Maroc");
        assert_eq!(gateway.calls().last().unwrap(), "list Pays");
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let gateway = RecordingGateway::new("pays_Id");

        let err = delete::<Pays>(&gateway, &EntityId::Int(1), false)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ConfirmationRequired));
        assert!(gateway.calls().is_empty());

        delete::<Pays>(&gateway, &EntityId::Int(1), true).await.unwrap();
        assert_eq!(gateway.calls(), vec!["delete Pays 1".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_by_id_missing_is_not_found() {
        let gateway = RecordingGateway::new("pays_Id");
        let err = fetch_by_id::<Pays>(&gateway, &EntityId::Int(99))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound));
    }
}
