#![allow(async_fn_in_trait)]

use bytes::Bytes;

use crate::domain::types::{InvoiceRecord, StoredDocumentKey};
use crate::error::InvoiceServiceError;

/// Read access to the outlet catalog.
pub trait OutletRepository: Send + Sync {
    /// Exact-name lookup of an outlet's code.
    async fn find_code_by_name(
        &self,
        outlet_name: &str,
    ) -> Result<Option<String>, InvoiceServiceError>;

    async fn list_names_by_route(
        &self,
        route_name: &str,
    ) -> Result<Vec<String>, InvoiceServiceError>;
}

/// Writer for invoice rows.
pub trait InvoiceRepository: Send + Sync {
    /// Insert one row in its own transaction and return its id. The
    /// transaction is rolled back before a failure is returned.
    async fn insert(&self, record: &InvoiceRecord) -> Result<i32, InvoiceServiceError>;
}

/// Object store holding uploaded invoice documents.
///
/// `store` overwrites an existing object silently. Readers observe either
/// the previous object or the new one, never a partial write.
pub trait DocumentStore: Send + Sync {
    async fn store(&self, key: &StoredDocumentKey, bytes: Bytes)
    -> Result<(), InvoiceServiceError>;

    async fn exists(&self, key: &StoredDocumentKey) -> Result<bool, InvoiceServiceError>;
}

/// Read access to product master data.
pub trait ProductCatalogRepository: Send + Sync {
    /// Distinct descriptions of the client's products that are not deleted.
    async fn list_descriptions(&self, client_id: i32) -> Result<Vec<String>, InvoiceServiceError>;
}

/// Read access to users and their monthly route schedule.
pub trait RouteScheduleRepository: Send + Sync {
    async fn user_exists(&self, user_id: &str) -> Result<bool, InvoiceServiceError>;

    /// Distinct route names scheduled for the user in `month` (1-12).
    async fn list_route_names(
        &self,
        user_id: &str,
        month: u32,
    ) -> Result<Vec<String>, InvoiceServiceError>;
}
