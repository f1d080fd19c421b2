use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbInvoiceRepository, DbOutletRepository, DbProductCatalogRepository,
    DbRouteScheduleRepository,
};
use crate::infra::storage::AnyDocumentStore;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub documents: AnyDocumentStore,
    pub catalog_client_id: i32,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn outlet_repo(&self) -> DbOutletRepository {
        DbOutletRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn invoice_repo(&self) -> DbInvoiceRepository {
        DbInvoiceRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn catalog_repo(&self) -> DbProductCatalogRepository {
        DbProductCatalogRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn route_schedule_repo(&self) -> DbRouteScheduleRepository {
        DbRouteScheduleRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn document_store(&self) -> AnyDocumentStore {
        self.documents.clone()
    }
}
