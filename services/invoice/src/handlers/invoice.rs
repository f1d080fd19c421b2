use axum::{
    Json,
    extract::{
        State,
        multipart::{Field, Multipart, MultipartError, MultipartRejection},
    },
    http::StatusCode,
};
use chrono::Utc;
use serde::Serialize;
use tracing::warn;

use crate::domain::types::ProductKey;
use crate::error::InvoiceServiceError;
use crate::state::AppState;
use crate::usecase::document::DocumentUploader;
use crate::usecase::invoice_record::InvoiceRecordWriter;
use crate::usecase::outlet::OutletResolver;
use crate::usecase::submit_invoice::{SubmitInvoiceInput, SubmitInvoiceUseCase, UploadedDocument};

#[derive(Serialize)]
pub struct UploadInvoiceResponse {
    pub success: bool,
    pub message: &'static str,
}

pub async fn upload_invoice(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadInvoiceResponse>, InvoiceServiceError> {
    let input = match multipart {
        Ok(multipart) => read_submission(multipart, state.max_upload_bytes).await,
        Err(rejection) => Err(InvoiceServiceError::InvalidForm(rejection.body_text())),
    }
    .inspect_err(|e| warn!(stage = "read_form", error = %e, "invoice submission rejected"))?;

    let usecase = SubmitInvoiceUseCase {
        resolver: OutletResolver {
            repo: state.outlet_repo(),
        },
        uploader: DocumentUploader {
            store: state.document_store(),
        },
        writer: InvoiceRecordWriter {
            repo: state.invoice_repo(),
        },
    };
    usecase.execute(input).await?;

    Ok(Json(UploadInvoiceResponse {
        success: true,
        message: "Invoice uploaded successfully",
    }))
}

/// Collect the form into a submission. Unknown fields are skipped; an empty
/// file part counts as no document.
async fn read_submission(
    mut multipart: Multipart,
    limit: usize,
) -> Result<SubmitInvoiceInput, InvoiceServiceError> {
    let mut input = SubmitInvoiceInput {
        user_id: None,
        outlet_name: None,
        invoice_date: None,
        invoice_number: None,
        document: None,
        quantities: Vec::new(),
        received_at: Utc::now(),
    };

    let form_error = |e: MultipartError| multipart_error(e, limit);
    while let Some(field) = multipart.next_field().await.map_err(form_error)? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        match name.as_str() {
            "user_id" => input.user_id = Some(text(field, limit).await?),
            "outlet_name" => input.outlet_name = Some(text(field, limit).await?),
            "invoice_date" => input.invoice_date = Some(text(field, limit).await?),
            "invoice_number" => input.invoice_number = Some(text(field, limit).await?),
            "invoice_file" => {
                let file_name = field
                    .file_name()
                    .map(str::to_owned)
                    .filter(|n| !n.is_empty());
                let bytes = field.bytes().await.map_err(form_error)?;
                if file_name.is_some() && !bytes.is_empty() {
                    input.document = Some(UploadedDocument { file_name, bytes });
                }
            }
            other => {
                if let Some(key) = ProductKey::from_field(other) {
                    input.quantities.push((key, text(field, limit).await?));
                }
            }
        }
    }
    Ok(input)
}

async fn text(field: Field<'_>, limit: usize) -> Result<String, InvoiceServiceError> {
    field.text().await.map_err(|e| multipart_error(e, limit))
}

fn multipart_error(e: MultipartError, limit: usize) -> InvoiceServiceError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        InvoiceServiceError::PayloadTooLarge(limit)
    } else {
        InvoiceServiceError::InvalidForm(e.body_text())
    }
}
