use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::InvoiceServiceError;

/// Extension given to stored documents whose upload name carries none.
pub const DEFAULT_DOCUMENT_EXTENSION: &str = ".pdf";

/// Products that can be reported on an invoice. Each key is both the form
/// field name and the `InvoiceDetails` column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProductKey {
    SensodentKFr75gm,
    SensodentKfCp75gm,
    SensodentKFr125gm,
    SensodentKfCp125gm,
    SensodentKfCp15g,
    SensodentKFr15g,
    KidodentCavityShield,
}

impl ProductKey {
    pub const ALL: [ProductKey; 7] = [
        Self::SensodentKFr75gm,
        Self::SensodentKfCp75gm,
        Self::SensodentKFr125gm,
        Self::SensodentKfCp125gm,
        Self::SensodentKfCp15g,
        Self::SensodentKFr15g,
        Self::KidodentCavityShield,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SensodentKFr75gm => "SENSODENT_K_FR_75GM",
            Self::SensodentKfCp75gm => "SENSODENT_KF_CP_75GM",
            Self::SensodentKFr125gm => "SENSODENT_K_FR_125GM",
            Self::SensodentKfCp125gm => "SENSODENT_KF_CP_125GM",
            Self::SensodentKfCp15g => "SENSODENT_KF_CP_15G",
            Self::SensodentKFr15g => "SENSODENT_K_FR_15G",
            Self::KidodentCavityShield => "KIDODENT_CAVITY_SHIELD",
        }
    }

    pub fn from_field(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivered quantity per product. Products never set read as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quantities(BTreeMap<ProductKey, u32>);

impl Quantities {
    pub fn get(&self, key: ProductKey) -> u32 {
        self.0.get(&key).copied().unwrap_or(0)
    }

    pub fn set(&mut self, key: ProductKey, quantity: u32) {
        self.0.insert(key, quantity);
    }

    /// Coerce free-text form values. The first bad value fails the whole set.
    pub fn parse<'a, I>(raw: I) -> Result<Self, InvoiceServiceError>
    where
        I: IntoIterator<Item = (ProductKey, &'a str)>,
    {
        let mut quantities = Self::default();
        for (key, value) in raw {
            quantities.set(key, parse_quantity(key, value)?);
        }
        Ok(quantities)
    }
}

/// Parse one quantity field. Blank means 0; the value must fit a
/// non-negative `i32` column.
pub fn parse_quantity(key: ProductKey, raw: &str) -> Result<u32, InvoiceServiceError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    match trimmed.parse::<i32>() {
        Ok(value) if value >= 0 => Ok(value as u32),
        _ => Err(InvoiceServiceError::InvalidQuantity(key.as_str().to_owned())),
    }
}

/// Parse an ISO `YYYY-MM-DD` invoice date.
pub fn parse_invoice_date(raw: &str) -> Result<NaiveDate, InvoiceServiceError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| InvoiceServiceError::InvalidDate(raw.to_owned()))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayType {
    #[default]
    Standard,
}

impl DisplayType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
        }
    }
}

/// Object-store key of an uploaded invoice document:
/// `{outletCode}_{YYYYMMDD_HHMMSS}{extension}`, with `_{attempt}` inserted
/// before the extension when an earlier candidate was already taken.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoredDocumentKey(String);

impl StoredDocumentKey {
    pub fn generate(
        outlet_code: &str,
        at: DateTime<Utc>,
        file_name: Option<&str>,
        attempt: u32,
    ) -> Self {
        let stamp = at.format("%Y%m%d_%H%M%S");
        let extension = document_extension(file_name);
        if attempt == 0 {
            Self(format!("{outlet_code}_{stamp}{extension}"))
        } else {
            Self(format!("{outlet_code}_{stamp}_{attempt}{extension}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// MIME type announced to the object store, derived from the extension.
    pub fn content_type(&self) -> &'static str {
        let extension = Path::new(&self.0)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("pdf") => "application/pdf",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("png") => "image/png",
            _ => "application/octet-stream",
        }
    }
}

impl fmt::Display for StoredDocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extension (with leading dot) of an uploaded file name. Names without a
/// plain alphanumeric extension fall back to `.pdf`.
pub fn document_extension(file_name: Option<&str>) -> String {
    file_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|e| format!(".{e}"))
        .unwrap_or_else(|| DEFAULT_DOCUMENT_EXTENSION.to_owned())
}

/// Invoice row as persisted. Never updated once written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceRecord {
    pub user_id: String,
    pub outlet_code: String,
    pub outlet_name: String,
    pub invoice_available: bool,
    pub display_type: DisplayType,
    pub invoice_date: NaiveDate,
    pub invoice_number: String,
    pub invoice_document_key: Option<StoredDocumentKey>,
    pub quantities: Quantities,
}
