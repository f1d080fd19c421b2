use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use fieldsales_core::health::healthz;
use fieldsales_core::middleware::with_common_layers;

use crate::handlers::{
    catalog::get_products, health::readyz, invoice::upload_invoice, outlet::get_outlets,
    route::get_user_routes,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);
    let router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Invoices
        .route("/upload_invoice", post(upload_invoice))
        // Catalog
        .route("/get_outlets", get(get_outlets))
        .route("/get_products", get(get_products))
        // Schedule
        .route("/users/{user_id}/routes", get(get_user_routes))
        .layer(body_limit)
        .with_state(state);
    with_common_layers(router)
}
