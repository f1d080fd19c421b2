use serde::Deserialize;

use fieldsales_core::config::Config;

/// Which backend holds uploaded invoice documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStoreKind {
    /// Local directory (`DOCUMENT_DIR`).
    Fs,
    /// S3-compatible bucket (`S3_BUCKET`, optional `S3_ENDPOINT` / `S3_REGION`).
    S3,
}

/// Invoice service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct InvoiceConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 5000). Env var: `INVOICE_PORT`.
    #[serde(default = "default_port")]
    pub invoice_port: u16,
    /// Env var: `DOCUMENT_STORE` (`fs` or `s3`, default `fs`).
    #[serde(default = "default_store")]
    pub document_store: DocumentStoreKind,
    /// Root directory for the `fs` store (default `./invoices`).
    #[serde(default = "default_document_dir")]
    pub document_dir: String,
    pub s3_bucket: Option<String>,
    /// Custom endpoint for S3-compatible stores (MinIO, R2, ...).
    pub s3_endpoint: Option<String>,
    pub s3_region: Option<String>,
    /// Client whose products are listed by `GET /get_products` (default 79).
    #[serde(default = "default_client_id")]
    pub catalog_client_id: i32,
    /// Largest accepted request body in bytes (default 10 MiB).
    #[serde(default = "default_max_upload")]
    pub max_upload_bytes: usize,
}

impl Config for InvoiceConfig {}

fn default_port() -> u16 {
    5000
}

fn default_store() -> DocumentStoreKind {
    DocumentStoreKind::Fs
}

fn default_document_dir() -> String {
    "./invoices".to_owned()
}

fn default_client_id() -> i32 {
    79
}

fn default_max_upload() -> usize {
    10 * 1024 * 1024
}
