use bytes::Bytes;
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::repository::DocumentStore;
use crate::domain::types::StoredDocumentKey;
use crate::error::InvoiceServiceError;

/// Candidate keys probed before an upload gives up.
pub const MAX_KEY_ATTEMPTS: u32 = 10;

/// Names and stores uploaded invoice documents.
pub struct DocumentUploader<D: DocumentStore> {
    pub store: D,
}

impl<D: DocumentStore> DocumentUploader<D> {
    /// Store `bytes` under the first candidate key not already present.
    ///
    /// The probe and the write are separate calls, so two uploads racing for
    /// the same candidate can still overwrite each other.
    pub async fn upload(
        &self,
        outlet_code: &str,
        at: DateTime<Utc>,
        file_name: Option<&str>,
        bytes: Bytes,
    ) -> Result<StoredDocumentKey, InvoiceServiceError> {
        for attempt in 0..MAX_KEY_ATTEMPTS {
            let key = StoredDocumentKey::generate(outlet_code, at, file_name, attempt);
            if self.store.exists(&key).await? {
                debug!(document_key = %key, "document key taken");
                continue;
            }
            self.store.store(&key, bytes.clone()).await?;
            debug!(document_key = %key, size = bytes.len(), "document stored");
            return Ok(key);
        }
        Err(InvoiceServiceError::StoreUnavailable(anyhow::anyhow!(
            "no free document key for outlet {outlet_code} after {MAX_KEY_ATTEMPTS} attempts"
        )))
    }
}
