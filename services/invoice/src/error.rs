use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Invoice service error variants.
#[derive(Debug, thiserror::Error)]
pub enum InvoiceServiceError {
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("invalid invoice date: {0}")]
    InvalidDate(String),
    #[error("invalid quantity for {0}")]
    InvalidQuantity(String),
    #[error("invalid form: {0}")]
    InvalidForm(String),
    #[error("upload exceeds {0} bytes")]
    PayloadTooLarge(usize),
    #[error("outlet not found: {0}")]
    OutletNotFound(String),
    #[error("user not found")]
    UserNotFound,
    #[error("document store unavailable")]
    StoreUnavailable(#[source] anyhow::Error),
    #[error("database error")]
    Persistence(#[source] anyhow::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl InvoiceServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidDate(_) => "INVALID_DATE",
            Self::InvalidQuantity(_) => "INVALID_QUANTITY",
            Self::InvalidForm(_) => "INVALID_FORM",
            Self::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            Self::OutletNotFound(_) => "OUTLET_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            Self::Persistence(_) => "PERSISTENCE_ERROR",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Full context chain of a server fault, for logs.
    pub fn source_chain(&self) -> Option<String> {
        match self {
            Self::StoreUnavailable(e) | Self::Persistence(e) | Self::Internal(e) => {
                Some(format!("{e:#}"))
            }
            _ => None,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingField(_)
            | Self::InvalidDate(_)
            | Self::InvalidQuantity(_)
            | Self::InvalidForm(_)
            | Self::OutletNotFound(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::StoreUnavailable(_) | Self::Persistence(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for InvoiceServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Client errors are logged by the usecase with submission context;
        // here only the source chain of server faults is recorded.
        if let Some(chain) = self.source_chain() {
            tracing::error!(error = %chain, kind = self.kind(), "server error");
        }
        let body = serde_json::json!({
            "success": false,
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
