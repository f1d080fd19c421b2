use crate::domain::repository::InvoiceRepository;
use crate::domain::types::InvoiceRecord;
use crate::error::InvoiceServiceError;

/// Validates and persists invoice rows.
pub struct InvoiceRecordWriter<I: InvoiceRepository> {
    pub repo: I,
}

impl<I: InvoiceRepository> InvoiceRecordWriter<I> {
    /// Insert `record`, returning the new row id.
    pub async fn insert(&self, record: &InvoiceRecord) -> Result<i32, InvoiceServiceError> {
        validate_record(record)?;
        self.repo.insert(record).await
    }
}

fn validate_record(record: &InvoiceRecord) -> Result<(), InvoiceServiceError> {
    if record.user_id.trim().is_empty() {
        return Err(InvoiceServiceError::MissingField("user_id"));
    }
    if record.invoice_number.trim().is_empty() {
        return Err(InvoiceServiceError::MissingField("invoice_number"));
    }
    if record.outlet_code.is_empty() {
        return Err(InvoiceServiceError::OutletNotFound(record.outlet_name.clone()));
    }
    if record.invoice_available != record.invoice_document_key.is_some() {
        return Err(InvoiceServiceError::Internal(anyhow::anyhow!(
            "invoice_available disagrees with document key"
        )));
    }
    Ok(())
}
