use std::sync::Arc;

use sea_orm::Database;
use tracing::info;

use fieldsales_core::config::Config;
use fieldsales_core::tracing::init_tracing;

use fieldsales_invoice::config::{DocumentStoreKind, InvoiceConfig};
use fieldsales_invoice::infra::storage::{AnyDocumentStore, FsDocumentStore, S3DocumentStore};
use fieldsales_invoice::router::build_router;
use fieldsales_invoice::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = InvoiceConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let documents = match config.document_store {
        DocumentStoreKind::Fs => AnyDocumentStore::Fs(
            FsDocumentStore::open(&config.document_dir)
                .await
                .expect("failed to open document directory"),
        ),
        DocumentStoreKind::S3 => {
            let bucket = config
                .s3_bucket
                .as_deref()
                .expect("S3_BUCKET is required when DOCUMENT_STORE=s3");
            AnyDocumentStore::S3(
                S3DocumentStore::connect(
                    bucket,
                    config.s3_endpoint.as_deref(),
                    config.s3_region.as_deref(),
                )
                .await
                .expect("failed to configure S3 client"),
            )
        }
    };
    info!(store = ?config.document_store, "document store ready");

    let state = AppState {
        db: Arc::new(db),
        documents,
        catalog_client_id: config.catalog_client_id,
        max_upload_bytes: config.max_upload_bytes,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.invoice_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("invoice service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
