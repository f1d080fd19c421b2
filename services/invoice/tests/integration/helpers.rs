use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use chrono::{DateTime, TimeZone, Utc};
use sea_orm::DatabaseConnection;

use fieldsales_invoice::domain::repository::{DocumentStore, InvoiceRepository, OutletRepository};
use fieldsales_invoice::domain::types::{InvoiceRecord, StoredDocumentKey};
use fieldsales_invoice::error::InvoiceServiceError;
use fieldsales_invoice::infra::storage::{AnyDocumentStore, FsDocumentStore};
use fieldsales_invoice::state::AppState;
use fieldsales_invoice::usecase::document::DocumentUploader;
use fieldsales_invoice::usecase::invoice_record::InvoiceRecordWriter;
use fieldsales_invoice::usecase::outlet::OutletResolver;
use fieldsales_invoice::usecase::submit_invoice::{
    SubmitInvoiceInput, SubmitInvoiceUseCase, UploadedDocument,
};

pub const SAMPLE_PDF: &[u8] = fieldsales_testing::form::SAMPLE_PDF;

// ── MockOutletRepo ───────────────────────────────────────────────────────────

pub struct MockOutletRepo {
    pub outlets: Vec<(String, String)>,
}

impl MockOutletRepo {
    /// Knows only "Acme Store" (AC01).
    pub fn acme() -> Self {
        Self {
            outlets: vec![("Acme Store".to_owned(), "AC01".to_owned())],
        }
    }
}

impl OutletRepository for MockOutletRepo {
    async fn find_code_by_name(
        &self,
        outlet_name: &str,
    ) -> Result<Option<String>, InvoiceServiceError> {
        Ok(self
            .outlets
            .iter()
            .find(|(name, _)| name == outlet_name)
            .map(|(_, code)| code.clone()))
    }

    async fn list_names_by_route(
        &self,
        _route_name: &str,
    ) -> Result<Vec<String>, InvoiceServiceError> {
        Ok(self.outlets.iter().map(|(name, _)| name.clone()).collect())
    }
}

// ── MockDocumentStore ────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockDocumentStore {
    pub objects: Arc<Mutex<HashMap<String, Bytes>>>,
    pub store_calls: Arc<Mutex<u32>>,
    pub fail: bool,
}

impl MockDocumentStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Returns a shared handle to the stored objects for post-execution inspection.
    pub fn objects_handle(&self) -> Arc<Mutex<HashMap<String, Bytes>>> {
        Arc::clone(&self.objects)
    }

    pub fn calls_handle(&self) -> Arc<Mutex<u32>> {
        Arc::clone(&self.store_calls)
    }
}

impl DocumentStore for MockDocumentStore {
    async fn store(&self, key: &StoredDocumentKey, bytes: Bytes) -> Result<(), InvoiceServiceError> {
        *self.store_calls.lock().unwrap() += 1;
        if self.fail {
            return Err(InvoiceServiceError::StoreUnavailable(anyhow::anyhow!(
                "bucket unreachable"
            )));
        }
        self.objects
            .lock()
            .unwrap()
            .insert(key.as_str().to_owned(), bytes);
        Ok(())
    }

    async fn exists(&self, key: &StoredDocumentKey) -> Result<bool, InvoiceServiceError> {
        Ok(self.objects.lock().unwrap().contains_key(key.as_str()))
    }
}

// ── MockInvoiceRepo ──────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockInvoiceRepo {
    pub rows: Arc<Mutex<Vec<InvoiceRecord>>>,
    pub fail: bool,
}

impl MockInvoiceRepo {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn rows_handle(&self) -> Arc<Mutex<Vec<InvoiceRecord>>> {
        Arc::clone(&self.rows)
    }
}

impl InvoiceRepository for MockInvoiceRepo {
    async fn insert(&self, record: &InvoiceRecord) -> Result<i32, InvoiceServiceError> {
        if self.fail {
            return Err(InvoiceServiceError::Persistence(anyhow::anyhow!(
                "deadlock detected"
            )));
        }
        let mut rows = self.rows.lock().unwrap();
        rows.push(record.clone());
        Ok(rows.len() as i32)
    }
}

// ── Builders ─────────────────────────────────────────────────────────────────

pub fn submit_usecase(
    store: MockDocumentStore,
    invoices: MockInvoiceRepo,
) -> SubmitInvoiceUseCase<MockOutletRepo, MockDocumentStore, MockInvoiceRepo> {
    SubmitInvoiceUseCase {
        resolver: OutletResolver {
            repo: MockOutletRepo::acme(),
        },
        uploader: DocumentUploader { store },
        writer: InvoiceRecordWriter { repo: invoices },
    }
}

pub fn received_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()
}

/// Valid submission for "Acme Store" with a 12-byte PDF attached.
pub fn submission() -> SubmitInvoiceInput {
    SubmitInvoiceInput {
        user_id: Some("7".to_owned()),
        outlet_name: Some("Acme Store".to_owned()),
        invoice_date: Some("2024-03-01".to_owned()),
        invoice_number: Some("INV-100".to_owned()),
        document: Some(UploadedDocument {
            file_name: Some("invoice.pdf".to_owned()),
            bytes: Bytes::from_static(SAMPLE_PDF),
        }),
        quantities: vec![],
        received_at: received_at(),
    }
}

pub async fn test_state(db: DatabaseConnection, document_dir: &std::path::Path) -> AppState {
    AppState {
        db: Arc::new(db),
        documents: AnyDocumentStore::Fs(FsDocumentStore::open(document_dir).await.unwrap()),
        catalog_client_id: 79,
        max_upload_bytes: 10 * 1024 * 1024,
    }
}
