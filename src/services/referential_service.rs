//! Enriched listings of the referential collections
//!
//! Each listing fetches its page first, then loads the related tables it
//! needs concurrently and attaches their names.

use crate::domain::{DomainError, EntityGateway, ListParams, Page};
use crate::infrastructure::cache::ReferenceCache;
use crate::models::{
    CompagnieMaritime, CompagnieView, Navire, NavireView, Port, PortView, Site, SiteView,
    Surveillant, SurveillantType, SurveillantView, Ville, VilleView, ZoneDestination,
    ZoneDestinationView,
};
use crate::services::enrichment::{
    self, COMPAGNIE, NON_TROUVE, NameIndex, PAYS, PORT, SITE, UNKNOWN, VILLE,
};
use crate::services::resource_service::fetch_page;

pub async fn list_villes(
    gateway: &dyn EntityGateway,
    cache: &ReferenceCache,
    params: &ListParams,
) -> Result<Page<VilleView>, DomainError> {
    let page = fetch_page::<Ville>(gateway, params).await?;
    let pays = enrichment::load_index(cache, &PAYS).await;

    Ok(page.map(|ville| VilleView {
        pays_nom: pays.resolve(ville.pays_id.as_ref(), UNKNOWN),
        ville,
    }))
}

pub async fn list_ports(
    gateway: &dyn EntityGateway,
    cache: &ReferenceCache,
    params: &ListParams,
) -> Result<Page<PortView>, DomainError> {
    let page = fetch_page::<Port>(gateway, params).await?;
    let (pays, villes) = futures::join!(
        enrichment::load_index(cache, &PAYS),
        enrichment::load_index(cache, &VILLE)
    );

    Ok(page.map(|port| PortView {
        pays_nom: pays.resolve(port.pays_id.as_ref(), UNKNOWN),
        ville_nom: villes.resolve(port.ville_id, UNKNOWN),
        port,
    }))
}

pub async fn list_compagnies(
    gateway: &dyn EntityGateway,
    cache: &ReferenceCache,
    params: &ListParams,
) -> Result<Page<CompagnieView>, DomainError> {
    let page = fetch_page::<CompagnieMaritime>(gateway, params).await?;
    let pays = enrichment::load_index(cache, &PAYS).await;

    Ok(page.map(|compagnie| CompagnieView {
        pays_nom: pays.resolve(compagnie.pays_id.as_ref(), UNKNOWN),
        compagnie,
    }))
}

pub async fn list_navires(
    gateway: &dyn EntityGateway,
    cache: &ReferenceCache,
    params: &ListParams,
) -> Result<Page<NavireView>, DomainError> {
    let page = fetch_page::<Navire>(gateway, params).await?;
    let (compagnies, pays, ports) = futures::join!(
        enrichment::load_index(cache, &COMPAGNIE),
        enrichment::load_index(cache, &PAYS),
        enrichment::load_index(cache, &PORT)
    );

    Ok(page.map(|navire| NavireView {
        compagnie_nom: compagnies.resolve(navire.compagnie_id, NON_TROUVE),
        pays_nom: pays.resolve(navire.pays_immatriculation_id.as_ref(), NON_TROUVE),
        port_nom: ports.resolve(navire.port_immatriculation_id, NON_TROUVE),
        navire,
    }))
}

pub async fn list_surveillants(
    gateway: &dyn EntityGateway,
    cache: &ReferenceCache,
    types: &[SurveillantType],
    params: &ListParams,
) -> Result<Page<SurveillantView>, DomainError> {
    let page = fetch_page::<Surveillant>(gateway, params).await?;
    let pays = enrichment::load_index(cache, &PAYS).await;
    let type_names = NameIndex::from_surveillant_types(types);

    Ok(page.map(|surveillant| SurveillantView {
        type_nom: type_names.resolve(surveillant.type_id, NON_TROUVE),
        pays_nom: pays.resolve(surveillant.pays_id.as_ref(), NON_TROUVE),
        surveillant,
    }))
}

pub async fn list_sites(
    gateway: &dyn EntityGateway,
    cache: &ReferenceCache,
    params: &ListParams,
) -> Result<Page<SiteView>, DomainError> {
    let page = fetch_page::<Site>(gateway, params).await?;
    let villes = enrichment::load_index(cache, &VILLE).await;

    Ok(page.map(|site| SiteView {
        ville_nom: villes.resolve(site.ville_id, UNKNOWN),
        site,
    }))
}

pub async fn list_zones(
    gateway: &dyn EntityGateway,
    cache: &ReferenceCache,
    params: &ListParams,
) -> Result<Page<ZoneDestinationView>, DomainError> {
    let page = fetch_page::<ZoneDestination>(gateway, params).await?;
    let sites = enrichment::load_index(cache, &SITE).await;

    Ok(page.map(|zone| ZoneDestinationView {
        site_nom: sites.resolve(zone.site_id, NON_TROUVE),
        zone,
    }))
}
