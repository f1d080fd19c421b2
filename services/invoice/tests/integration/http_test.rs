use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::NaiveDate;
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::{Value, json};

use fieldsales_invoice::router::build_router;
use fieldsales_invoice_schema::{invoice_details, mobi_users, outlets};
use fieldsales_testing::fixture::Fixture;
use fieldsales_testing::form::{InvoiceForm, SAMPLE_PDF};

use crate::helpers::test_state;

fn acme_outlet() -> outlets::Model {
    outlets::Model {
        outlet_code: "AC01".into(),
        outlet_name: "Acme Store".into(),
        client_route: "North".into(),
    }
}

fn inserted_row() -> invoice_details::Model {
    invoice_details::Model {
        id: 1,
        user_id: "7".into(),
        outlet_code: "AC01".into(),
        outlet_name: "Acme Store".into(),
        invoice_available: true,
        display_type: "Standard".into(),
        invoice_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        invoice_number: "INV-100".into(),
        invoice_document: Some("AC01_20240301_100000.pdf".into()),
        sensodent_k_fr_75gm: 5,
        sensodent_kf_cp_75gm: 0,
        sensodent_k_fr_125gm: 0,
        sensodent_kf_cp_125gm: 0,
        sensodent_kf_cp_15g: 0,
        sensodent_k_fr_15g: 0,
        kidodent_cavity_shield: 0,
    }
}

fn file_names(dir: &std::path::Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect()
}

// ── POST /upload_invoice ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_upload_invoice_and_store_document() {
    let dir = tempfile::tempdir().unwrap();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![acme_outlet()]])
        .append_query_results([vec![inserted_row()]])
        .into_connection();
    let server = TestServer::new(build_router(test_state(db, dir.path()).await)).unwrap();

    let form = InvoiceForm::valid()
        .field("SENSODENT_K_FR_75GM", "5")
        .file("invoice.pdf", SAMPLE_PDF);
    let resp = server
        .post("/upload_invoice")
        .multipart(form.into_multipart())
        .await;

    resp.assert_status_ok();
    Fixture::assert_matches(
        &resp.json::<Value>(),
        "contracts/http/invoice/upload_success.json",
    );

    let names = file_names(dir.path());
    assert_eq!(names.len(), 1, "expected one stored document, got {names:?}");
    assert!(names[0].starts_with("AC01_") && names[0].ends_with(".pdf"));
    let stored = std::fs::read(dir.path().join(&names[0])).unwrap();
    assert_eq!(stored, SAMPLE_PDF);
}

#[tokio::test]
async fn should_return_400_for_unknown_outlet() {
    let dir = tempfile::tempdir().unwrap();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<outlets::Model>::new()])
        .into_connection();
    let server = TestServer::new(build_router(test_state(db, dir.path()).await)).unwrap();

    let form = InvoiceForm::valid()
        .field("outlet_name", "Unknown Outlet")
        .file("invoice.pdf", SAMPLE_PDF);
    let resp = server
        .post("/upload_invoice")
        .multipart(form.into_multipart())
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    let body = resp.json::<Value>();
    Fixture::assert_matches(&body, "contracts/http/invoice/upload_outlet_not_found.json");
    assert!(body["message"].as_str().unwrap().contains("Unknown Outlet"));
    assert!(file_names(dir.path()).is_empty(), "no document may be stored");
}

#[tokio::test]
async fn should_return_400_for_negative_quantity() {
    let dir = tempfile::tempdir().unwrap();
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let server = TestServer::new(build_router(test_state(db, dir.path()).await)).unwrap();

    let form = InvoiceForm::valid()
        .field("SENSODENT_K_FR_75GM", "-1")
        .file("invoice.pdf", SAMPLE_PDF);
    let resp = server
        .post("/upload_invoice")
        .multipart(form.into_multipart())
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    let body = resp.json::<Value>();
    Fixture::assert_matches(&body, "contracts/http/invoice/upload_invalid_quantity.json");
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("SENSODENT_K_FR_75GM")
    );
    assert!(file_names(dir.path()).is_empty());
}

#[tokio::test]
async fn should_return_400_for_missing_field() {
    let dir = tempfile::tempdir().unwrap();
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let server = TestServer::new(build_router(test_state(db, dir.path()).await)).unwrap();

    let resp = server
        .post("/upload_invoice")
        .multipart(InvoiceForm::valid().without("invoice_number").into_multipart())
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    let body = resp.json::<Value>();
    assert_eq!(body["kind"], "MISSING_FIELD");
    assert_eq!(body["message"], "missing field: invoice_number");
}

#[tokio::test]
async fn should_return_json_error_for_non_multipart_body() {
    let dir = tempfile::tempdir().unwrap();
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let server = TestServer::new(build_router(test_state(db, dir.path()).await)).unwrap();

    let resp = server.post("/upload_invoice").text("user_id=7").await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    assert!(
        resp.header("content-type")
            .to_str()
            .unwrap()
            .starts_with("application/json")
    );
    Fixture::assert_matches(
        &resp.json::<Value>(),
        "contracts/http/invoice/upload_invalid_form.json",
    );
    assert!(file_names(dir.path()).is_empty());
}

#[tokio::test]
async fn should_return_413_when_upload_exceeds_limit() {
    let dir = tempfile::tempdir().unwrap();
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let mut state = test_state(db, dir.path()).await;
    state.max_upload_bytes = 256;
    let server = TestServer::new(build_router(state)).unwrap();

    let form = InvoiceForm::valid().file("invoice.pdf", &[b'x'; 4096]);
    let resp = server
        .post("/upload_invoice")
        .multipart(form.into_multipart())
        .await;

    resp.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(resp.json::<Value>()["kind"], "PAYLOAD_TOO_LARGE");
    assert!(file_names(dir.path()).is_empty());
}

// ── GET /get_outlets ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_empty_outlet_list_without_route() {
    let dir = tempfile::tempdir().unwrap();
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let server = TestServer::new(build_router(test_state(db, dir.path()).await)).unwrap();

    let resp = server.get("/get_outlets").await;

    resp.assert_status_ok();
    resp.assert_json(&json!([]));
}

#[tokio::test]
async fn should_list_outlets_for_route() {
    let dir = tempfile::tempdir().unwrap();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            acme_outlet(),
            outlets::Model {
                outlet_code: "BM02".into(),
                outlet_name: "Beta Mart".into(),
                client_route: "North".into(),
            },
        ]])
        .into_connection();
    let server = TestServer::new(build_router(test_state(db, dir.path()).await)).unwrap();

    let resp = server
        .get("/get_outlets")
        .add_query_param("routeName", "North")
        .await;

    resp.assert_status_ok();
    resp.assert_json(&json!(["Acme Store", "Beta Mart"]));
}

// ── GET /users/{user_id}/routes ──────────────────────────────────────────────

#[tokio::test]
async fn should_return_404_for_unknown_user_routes() {
    let dir = tempfile::tempdir().unwrap();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<mobi_users::Model>::new()])
        .into_connection();
    let server = TestServer::new(build_router(test_state(db, dir.path()).await)).unwrap();

    let resp = server.get("/users/99/routes").await;

    resp.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(resp.json::<Value>()["kind"], "USER_NOT_FOUND");
}

// ── Health and common layers ─────────────────────────────────────────────────

#[tokio::test]
async fn should_report_health_with_common_headers() {
    let dir = tempfile::tempdir().unwrap();
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let server = TestServer::new(build_router(test_state(db, dir.path()).await)).unwrap();

    let resp = server.get("/healthz").await;

    resp.assert_status_ok();
    assert_eq!(resp.header("x-content-type-options"), "nosniff");
    assert_eq!(resp.header("x-frame-options"), "SAMEORIGIN");
    assert!(!resp.header("x-request-id").is_empty());
}
