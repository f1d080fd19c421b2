use bytes::Bytes;
use chrono::{DateTime, NaiveDate, Utc};
use tracing::{error, info, instrument, warn};

use crate::domain::repository::{DocumentStore, InvoiceRepository, OutletRepository};
use crate::domain::types::{
    DisplayType, InvoiceRecord, ProductKey, Quantities, StoredDocumentKey, parse_invoice_date,
};
use crate::error::InvoiceServiceError;
use crate::usecase::document::DocumentUploader;
use crate::usecase::invoice_record::InvoiceRecordWriter;
use crate::usecase::outlet::OutletResolver;

/// File attached to a submission.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: Option<String>,
    pub bytes: Bytes,
}

/// Raw submission as received from the form. Text fields are unvalidated.
#[derive(Debug, Clone)]
pub struct SubmitInvoiceInput {
    pub user_id: Option<String>,
    pub outlet_name: Option<String>,
    pub invoice_date: Option<String>,
    pub invoice_number: Option<String>,
    pub document: Option<UploadedDocument>,
    pub quantities: Vec<(ProductKey, String)>,
    /// Moment the request arrived; timestamps the document key.
    pub received_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct SubmittedInvoice {
    pub record_id: i32,
    pub document_key: Option<StoredDocumentKey>,
}

struct ValidSubmission {
    user_id: String,
    outlet_name: String,
    invoice_date: NaiveDate,
    invoice_number: String,
    quantities: Quantities,
}

/// Drives outlet resolution, document upload and record insertion, strictly
/// in that order.
///
/// The document is stored before the row is inserted, so a committed row
/// never names a missing document. The converse is not guaranteed: if the
/// insert fails after a successful upload, the object stays in the store
/// unreferenced and is only reported in the logs.
pub struct SubmitInvoiceUseCase<O, D, I>
where
    O: OutletRepository,
    D: DocumentStore,
    I: InvoiceRepository,
{
    pub resolver: OutletResolver<O>,
    pub uploader: DocumentUploader<D>,
    pub writer: InvoiceRecordWriter<I>,
}

impl<O, D, I> SubmitInvoiceUseCase<O, D, I>
where
    O: OutletRepository,
    D: DocumentStore,
    I: InvoiceRepository,
{
    #[instrument(
        skip_all,
        fields(
            user_id = input.user_id.as_deref().unwrap_or_default(),
            outlet = input.outlet_name.as_deref().unwrap_or_default(),
        )
    )]
    pub async fn execute(
        &self,
        input: SubmitInvoiceInput,
    ) -> Result<SubmittedInvoice, InvoiceServiceError> {
        let valid = validate(&input).inspect_err(|e| log_failure("validate", e))?;

        let outlet_code = self
            .resolver
            .resolve(&valid.outlet_name)
            .await
            .inspect_err(|e| log_failure("resolve_outlet", e))?;

        let document_key = match input.document {
            Some(document) => Some(
                self.uploader
                    .upload(
                        &outlet_code,
                        input.received_at,
                        document.file_name.as_deref(),
                        document.bytes,
                    )
                    .await
                    .inspect_err(|e| log_failure("store_document", e))?,
            ),
            None => None,
        };

        let record = InvoiceRecord {
            user_id: valid.user_id,
            outlet_code,
            outlet_name: valid.outlet_name,
            invoice_available: document_key.is_some(),
            display_type: DisplayType::Standard,
            invoice_date: valid.invoice_date,
            invoice_number: valid.invoice_number,
            invoice_document_key: document_key,
            quantities: valid.quantities,
        };

        match self.writer.insert(&record).await {
            Ok(record_id) => {
                info!(
                    record_id,
                    outlet_code = %record.outlet_code,
                    document_key = record.invoice_document_key.as_ref().map(|k| k.as_str()),
                    "invoice recorded"
                );
                Ok(SubmittedInvoice {
                    record_id,
                    document_key: record.invoice_document_key,
                })
            }
            Err(e) => {
                if let Some(key) = &record.invoice_document_key {
                    error!(
                        stage = "insert_record",
                        document_key = %key,
                        error = %e,
                        cause = e.source_chain(),
                        "invoice not recorded, stored document is orphaned"
                    );
                } else {
                    log_failure("insert_record", &e);
                }
                Err(e)
            }
        }
    }
}

fn validate(input: &SubmitInvoiceInput) -> Result<ValidSubmission, InvoiceServiceError> {
    let user_id = required(&input.user_id, "user_id")?;
    let outlet_name = required(&input.outlet_name, "outlet_name")?;
    let invoice_date = required(&input.invoice_date, "invoice_date")?;
    let invoice_number = required(&input.invoice_number, "invoice_number")?;

    let invoice_date = parse_invoice_date(&invoice_date)?;
    let quantities = Quantities::parse(
        input
            .quantities
            .iter()
            .map(|(key, raw)| (*key, raw.as_str())),
    )?;

    Ok(ValidSubmission {
        user_id,
        outlet_name,
        invoice_date,
        invoice_number,
        quantities,
    })
}

fn required(value: &Option<String>, field: &'static str) -> Result<String, InvoiceServiceError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_owned()),
        _ => Err(InvoiceServiceError::MissingField(field)),
    }
}

fn log_failure(stage: &'static str, e: &InvoiceServiceError) {
    if e.status().is_server_error() {
        error!(stage, error = %e, cause = e.source_chain(), "invoice submission failed");
    } else {
        warn!(stage, error = %e, "invoice submission rejected");
    }
}
