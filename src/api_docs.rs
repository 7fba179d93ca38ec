use crate::api;
use crate::services::{payment_workflow, pesage_service};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::referential::list_ports,
        api::paiement::get_paiement,
        api::plannings::validate_planning,
        api::pesages::compute_net,
    ),
    components(
        schemas(
            payment_workflow::PaymentTab,
            payment_workflow::PaymentSnapshot,
            payment_workflow::BankNomination,
            payment_workflow::SwiftPayment,
            payment_workflow::Claim,
            payment_workflow::NewClaim,
            pesage_service::NewPesage,
            pesage_service::PesageHistoryEdit,
            api::paiement::SelectTabRequest,
            api::plannings::RejectRequest,
            api::pesages::NetWeightRequest,
        )
    ),
    tags(
        (name = "portops", description = "Port-operations back-office API")
    )
)]
pub struct ApiDoc;
