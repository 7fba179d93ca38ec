pub mod arrivages;
pub mod common;
pub mod health;
pub mod paiement;
pub mod pesages;
pub mod plannings;
pub mod referential;
pub mod resources;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::infrastructure::AppState;
use crate::models::{
    Arrivage, CompagnieMaritime, Devise, Navire, Pays, Port, Site, Surveillant, Ville,
    ZoneDestination,
};
use resources::{create, delete as delete_one, get_one, update};

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Referential
        .route("/pays", get(referential::list_pays).post(create::<Pays>))
        .route(
            "/pays/:id",
            get(get_one::<Pays>)
                .put(update::<Pays>)
                .delete(delete_one::<Pays>),
        )
        .route("/villes", get(referential::list_villes).post(create::<Ville>))
        .route(
            "/villes/:id",
            get(get_one::<Ville>)
                .put(update::<Ville>)
                .delete(delete_one::<Ville>),
        )
        .route("/ports", get(referential::list_ports).post(create::<Port>))
        .route(
            "/ports/:id",
            get(get_one::<Port>)
                .put(update::<Port>)
                .delete(delete_one::<Port>),
        )
        .route(
            "/compagnies",
            get(referential::list_compagnies).post(create::<CompagnieMaritime>),
        )
        .route(
            "/compagnies/:id",
            get(get_one::<CompagnieMaritime>)
                .put(update::<CompagnieMaritime>)
                .delete(delete_one::<CompagnieMaritime>),
        )
        .route("/navires", get(referential::list_navires).post(create::<Navire>))
        .route(
            "/navires/:id",
            get(get_one::<Navire>)
                .put(update::<Navire>)
                .delete(delete_one::<Navire>),
        )
        .route(
            "/surveillants",
            get(referential::list_surveillants).post(create::<Surveillant>),
        )
        .route("/surveillants/types", get(referential::list_surveillant_types))
        .route(
            "/surveillants/:id",
            get(get_one::<Surveillant>)
                .put(update::<Surveillant>)
                .delete(delete_one::<Surveillant>),
        )
        .route("/sites", get(referential::list_sites).post(create::<Site>))
        .route(
            "/sites/:id",
            get(get_one::<Site>)
                .put(update::<Site>)
                .delete(delete_one::<Site>),
        )
        .route(
            "/zones",
            get(referential::list_zones).post(create::<ZoneDestination>),
        )
        .route(
            "/zones/:id",
            get(get_one::<ZoneDestination>)
                .put(update::<ZoneDestination>)
                .delete(delete_one::<ZoneDestination>),
        )
        .route("/devises", get(referential::list_devises).post(create::<Devise>))
        .route(
            "/devises/:id",
            get(get_one::<Devise>)
                .put(update::<Devise>)
                .delete(delete_one::<Devise>),
        )
        // Arrivals
        .route(
            "/arrivages",
            get(arrivages::list_arrivages).post(create::<Arrivage>),
        )
        .route(
            "/arrivages/:id",
            get(arrivages::get_arrivage)
                .put(update::<Arrivage>)
                .delete(delete_one::<Arrivage>),
        )
        .route(
            "/arrivages/:id/sections/:section",
            put(arrivages::update_section),
        )
        // Payment tabs
        .route("/arrivages/:id/paiement", get(paiement::get_paiement))
        .route("/arrivages/:id/paiement/onglet", post(paiement::select_tab))
        .route("/arrivages/:id/paiement/banque", post(paiement::save_banque))
        .route("/arrivages/:id/paiement/swift", post(paiement::save_swift))
        .route(
            "/arrivages/:id/paiement/reclamations",
            post(paiement::add_reclamation),
        )
        .route(
            "/arrivages/:id/paiement/reclamations/:claim/traiter",
            post(paiement::traiter_reclamation),
        )
        // Plannings
        .route(
            "/plannings",
            get(plannings::list_plannings).post(plannings::create_planning),
        )
        .route("/plannings/:id", delete(plannings::delete_planning))
        .route("/plannings/:id/valider", post(plannings::validate_planning))
        .route("/plannings/:id/rejeter", post(plannings::reject_planning))
        // Weighings
        .route(
            "/pesages",
            get(pesages::list_pesages).post(pesages::record_pesage),
        )
        .route("/pesages/net", post(pesages::compute_net))
        .route(
            "/pesages/:id",
            put(pesages::edit_pesage).delete(pesages::delete_pesage),
        )
        .with_state(state)
}
