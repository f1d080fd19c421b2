//! Multipart builders for `POST /upload_invoice` requests.

use axum_test::multipart::{MultipartForm, Part};

/// A 12-byte document with a PDF signature.
pub const SAMPLE_PDF: &[u8] = b"%PDF-1.4\n%\xc7\xec";

/// Builder for invoice submission forms. Starts from a complete, valid
/// submission for outlet "Acme Store"; tests override or drop fields.
#[derive(Clone, Debug)]
pub struct InvoiceForm {
    fields: Vec<(String, String)>,
    file: Option<(String, Vec<u8>)>,
}

impl InvoiceForm {
    pub fn valid() -> Self {
        Self {
            fields: vec![
                ("user_id".to_owned(), "7".to_owned()),
                ("outlet_name".to_owned(), "Acme Store".to_owned()),
                ("invoice_date".to_owned(), "2024-03-01".to_owned()),
                ("invoice_number".to_owned(), "INV-100".to_owned()),
            ],
            file: None,
        }
    }

    /// Set a text field, replacing any previous value.
    pub fn field(mut self, name: &str, value: &str) -> Self {
        self.fields.retain(|(n, _)| n != name);
        self.fields.push((name.to_owned(), value.to_owned()));
        self
    }

    pub fn without(mut self, name: &str) -> Self {
        self.fields.retain(|(n, _)| n != name);
        self
    }

    pub fn file(mut self, file_name: &str, bytes: &[u8]) -> Self {
        self.file = Some((file_name.to_owned(), bytes.to_vec()));
        self
    }

    pub fn into_multipart(self) -> MultipartForm {
        let mut form = MultipartForm::new();
        for (name, value) in self.fields {
            form = form.add_text(name, value);
        }
        if let Some((file_name, bytes)) = self.file {
            let mime = if file_name.ends_with(".pdf") {
                "application/pdf"
            } else {
                "application/octet-stream"
            };
            form = form.add_part(
                "invoice_file",
                Part::bytes(bytes).file_name(file_name).mime_type(mime),
            );
        }
        form
    }
}
