mod common;

use axum::http::StatusCode;
use common::{LIST_PATH, empty_request, get, json_request, send, send_status, test_app};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn backends() -> (MockServer, MockServer) {
    (MockServer::start().await, MockServer::start().await)
}

fn page(items: serde_json::Value, total: u64) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"items": items, "totalItems": total}))
}

#[tokio::test]
async fn test_health() {
    let (referential, port_ops) = backends().await;
    let (status, body) = send(test_app(&referential, &port_ops), get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_ports_are_enriched_with_sentinel() {
    let (referential, port_ops) = backends().await;
    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .and(query_param("entityName", "Port"))
        .and(query_param("filters", "port_PaysId:eq:1"))
        .respond_with(page(
            json!([
                {"port_Id": 1, "port_Nom": "Casablanca", "port_PaysId": 1, "port_VilleId": 4},
                {"port_Id": 2, "port_Nom": "Jorf Lasfar", "port_PaysId": 1, "port_VilleId": 77}
            ]),
            12,
        ))
        .expect(1)
        .mount(&referential)
        .await;
    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .and(query_param("entityName", "Pays"))
        .respond_with(page(json!([{"pays_Id": 1, "pays_Nom": "Maroc"}]), 1))
        .mount(&referential)
        .await;
    // city table unavailable: names degrade, the listing does not fail
    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .and(query_param("entityName", "Ville"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&referential)
        .await;

    let (status, body) = send(
        test_app(&referential, &port_ops),
        get("/api/ports?page=1&page_size=10&pays_id=1"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalItems"], 12);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["pageSize"], 10);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|p| p["pays_Nom"] == "Maroc"));
    assert!(items.iter().all(|p| p["ville_Nom"] == "Unknown"));
}

#[tokio::test]
async fn test_empty_listing_has_one_page() {
    let (referential, port_ops) = backends().await;
    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .respond_with(page(json!([]), 0))
        .mount(&referential)
        .await;

    let (status, body) = send(test_app(&referential, &port_ops), get("/api/pays")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalPages"], 1);
    assert_eq!(body["page"], 1);
}

#[tokio::test]
async fn test_create_then_fetch_by_id() {
    let (referential, port_ops) = backends().await;
    Mock::given(method("POST"))
        .and(path("/api/Pays"))
        .and(body_partial_json(json!({"pays_Nom": "Sénégal"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"pays_Id": 8, "pays_Nom": "Sénégal"})),
        )
        .expect(1)
        .mount(&referential)
        .await;
    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .and(query_param("entityName", "Pays"))
        .and(query_param("filters", "pays_Id:eq:8"))
        .respond_with(page(json!([{"pays_Id": 8, "pays_Nom": "Sénégal"}]), 1))
        .expect(1)
        .mount(&referential)
        .await;

    let app = test_app(&referential, &port_ops);
    let (status, body) = send(
        app.clone(),
        json_request("POST", "/api/pays", json!({"pays_Nom": " Sénégal "})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 8);

    let (status, body) = send(app, get("/api/pays/8")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["item"]["pays_Nom"], "Sénégal");
}

#[tokio::test]
async fn test_invalid_ship_is_rejected_before_sending() {
    let (referential, port_ops) = backends().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&referential)
        .await;

    let (status, body) = send(
        test_app(&referential, &port_ops),
        json_request(
            "POST",
            "/api/navires",
            json!({"navire_Nom": "Atlas", "navire_IMO": "IMO12"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let fields = body["fields"].as_array().unwrap();
    assert!(fields.iter().any(|f| f["field"] == "navire_IMO"));
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let (referential, port_ops) = backends().await;
    Mock::given(method("DELETE"))
        .and(path("/api/Port/3"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&referential)
        .await;

    let app = test_app(&referential, &port_ops);
    let (status, body) = send(app.clone(), empty_request("DELETE", "/api/ports/3")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "confirmation required");

    let (status, _) = send(app, empty_request("DELETE", "/api/ports/3?confirm=true")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_path_id_cannot_target_another_entity() {
    let (referential, port_ops) = backends().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&referential)
        .await;

    let app = test_app(&referential, &port_ops);
    let (status, _) = send(
        app.clone(),
        empty_request(
            "DELETE",
            "/api/ports/1%2F..%2F..%2F..%2Fapi%2FPays%2F5?confirm=true",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(app, empty_request("DELETE", "/api/pays/..?confirm=true")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_payment_on_unknown_arrival_is_not_found() {
    let (referential, port_ops) = backends().await;
    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .respond_with(page(json!([]), 0))
        .mount(&port_ops)
        .await;
    let app = test_app(&referential, &port_ops);

    let (status, _) = send(
        app.clone(),
        json_request(
            "POST",
            "/api/arrivages/77/paiement/banque",
            json!({"banque": "BMCE", "numero_compte": "011 780 0000123456789012 34"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(app, get("/api/arrivages/77/paiement")).await;
    assert_eq!(body["banque_valid"], false);
}

#[tokio::test]
async fn test_backend_failure_maps_to_bad_gateway() {
    let (referential, port_ops) = backends().await;
    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&port_ops)
        .await;

    let (status, body) = send(test_app(&referential, &port_ops), get("/api/plannings")).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "server error");
}

#[tokio::test]
async fn test_payment_tabs_follow_the_workflow() {
    let (referential, port_ops) = backends().await;
    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .and(query_param("entityName", "Arrivage"))
        .and(query_param("filters", "arrivage_Id:eq:5"))
        .respond_with(page(json!([{"arrivage_Id": 5}]), 1))
        .mount(&port_ops)
        .await;
    let app = test_app(&referential, &port_ops);

    let (status, _) = send(
        app.clone(),
        json_request("POST", "/api/arrivages/5/paiement/onglet", json!({"tab": "swift"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send(
        app.clone(),
        json_request(
            "POST",
            "/api/arrivages/5/paiement/banque",
            json!({"banque": "BMCE", "numero_compte": "011 780 0000123456789012 34"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active_tab"], "swift");
    assert_eq!(body["banque_valid"], true);

    send(
        app.clone(),
        json_request(
            "POST",
            "/api/arrivages/5/paiement/swift",
            json!({"reference_swift": "BMCEMAMC-0042"}),
        ),
    )
    .await;
    let (status, body) = send(
        app.clone(),
        json_request(
            "POST",
            "/api/arrivages/5/paiement/reclamations",
            json!({"objet": "Manquant à la livraison"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["complete"], false);

    let (status, body) = send(
        app.clone(),
        empty_request("POST", "/api/arrivages/5/paiement/reclamations/1/traiter"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["complete"], true);

    let (_, body) = send(app, get("/api/arrivages/6/paiement")).await;
    assert_eq!(body["active_tab"], "banque");
}

#[tokio::test]
async fn test_arrival_section_update_keeps_other_tabs() {
    let (referential, port_ops) = backends().await;
    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .and(query_param("entityName", "Arrivage"))
        .respond_with(page(
            json!([{
                "arrivage_Id": 4,
                "arrivage_NumeroFactureProforma": "PF-44",
                "arrivage_Assureur": "Saham"
            }]),
            1,
        ))
        .mount(&port_ops)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/Arrivage/4"))
        .and(body_partial_json(json!({
            "arrivage_Id": 4,
            "arrivage_Assureur": "Saham",
            "arrivage_NumeroContrat": "CT-2025-9"
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&port_ops)
        .await;

    let (status, _) = send(
        test_app(&referential, &port_ops),
        json_request(
            "PUT",
            "/api/arrivages/4/sections/contrat",
            json!({"arrivage_NumeroContrat": "CT-2025-9"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_net_weight_preview() {
    let (referential, port_ops) = backends().await;
    let (status, body) = send(
        test_app(&referential, &port_ops),
        json_request(
            "POST",
            "/api/pesages/net",
            json!({"premiere_pesee": "7.250", "deuxieme_pesee": 5.1}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["affichage"], "2.150");
    assert_eq!(body["poids_net"], 2.15);
}

#[tokio::test]
async fn test_net_weight_preview_rejects_bad_readings() {
    let (referential, port_ops) = backends().await;
    let app = test_app(&referential, &port_ops);

    for payload in [
        json!({"premiere_pesee": -3, "deuxieme_pesee": 1}),
        json!({"premiere_pesee": -1e20, "deuxieme_pesee": 0}),
        json!({"premiere_pesee": 1e20, "deuxieme_pesee": 1}),
    ] {
        let status = send_status(
            app.clone(),
            json_request("POST", "/api/pesages/net", payload.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{payload}");
    }

    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/pesages/net",
            json!({"premiere_pesee": 0, "deuxieme_pesee": 4}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(
        body["fields"]
            .as_array()
            .unwrap()
            .iter()
            .any(|f| f["field"] == "premiere_pesee")
    );
}

#[tokio::test]
async fn test_recorded_weighing_carries_net_weight() {
    let (referential, port_ops) = backends().await;
    Mock::given(method("POST"))
        .and(path("/api/Pesage"))
        .and(body_partial_json(json!({
            "pesage_Immatriculation": "12345-A-6",
            "pesage_PoidsNet": 2.15
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"pesage_Id": 31})))
        .expect(1)
        .mount(&port_ops)
        .await;

    let (status, body) = send(
        test_app(&referential, &port_ops),
        json_request(
            "POST",
            "/api/pesages",
            json!({
                "arrivage_id": 4,
                "immatriculation": "12345-A-6",
                "premiere_pesee": 7.25,
                "deuxieme_pesee": 5.1
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 31);
}

#[tokio::test]
async fn test_reject_without_motive() {
    let (referential, port_ops) = backends().await;
    let (status, body) = send(
        test_app(&referential, &port_ops),
        json_request("POST", "/api/plannings/2/rejeter", json!({"motif": ""})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["fields"][0]["field"], "planning_MotifRejet");
}

#[tokio::test]
async fn test_surveillant_types_come_from_config() {
    let (referential, port_ops) = backends().await;
    let (status, body) = send(
        test_app(&referential, &port_ops),
        get("/api/surveillants/types"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"][0]["label"], "Société de surveillance");
}
