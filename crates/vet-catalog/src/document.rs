//! # Document Field Schemas
//!
//! Expected structure per declared document type, used by the forensics
//! analyzer: which fields must be present, and which have a known format
//! that can be validated (dates, MRZ codes, country codes).
//!
//! The engine performs no OCR — it only checks the structural
//! consistency of the field values the caller already extracted.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A known value format for a document field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldFormat {
    /// ISO date, `YYYY-MM-DD`.
    Date,
    /// Machine-readable zone line: `A-Z`, `0-9` and `<` filler only,
    /// at least 30 characters.
    Mrz,
    /// Two- or three-letter country code.
    CountryCode,
    /// ASCII digits only.
    Numeric,
}

impl FieldFormat {
    /// Whether `raw` conforms to this format.
    pub fn is_valid(self, raw: &str) -> bool {
        match self {
            Self::Date => NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok(),
            Self::Mrz => {
                raw.len() >= 30
                    && raw
                        .chars()
                        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '<')
            }
            Self::CountryCode => {
                (2..=3).contains(&raw.len()) && raw.chars().all(|c| c.is_ascii_alphabetic())
            }
            Self::Numeric => !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()),
        }
    }
}

impl fmt::Display for FieldFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Date => "date",
            Self::Mrz => "mrz",
            Self::CountryCode => "country_code",
            Self::Numeric => "numeric",
        };
        f.write_str(s)
    }
}

/// One expected field in a document schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentField {
    /// Field key as extracted from the document.
    pub name: String,
    /// Whether absence of the field is an anomaly.
    pub required: bool,
    /// Format to validate when the field is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<FieldFormat>,
}

impl DocumentField {
    /// Required field without format validation.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
            format: None,
        }
    }

    /// Optional field without format validation.
    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            format: None,
        }
    }

    /// Attach a format check.
    pub fn with_format(mut self, format: FieldFormat) -> Self {
        self.format = Some(format);
        self
    }
}

/// Expected field schema for one document type. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSchema {
    /// Document type key, e.g. "passport". Compared case-insensitively.
    pub doc_type: String,
    /// Expected fields.
    pub fields: Vec<DocumentField>,
}

impl DocumentSchema {
    /// Built-in schemas for the common identity document types. Catalogs
    /// may extend or override these with their own entries.
    pub fn builtin() -> Vec<DocumentSchema> {
        vec![
            DocumentSchema {
                doc_type: "passport".to_string(),
                fields: vec![
                    DocumentField::required("document_number"),
                    DocumentField::required("full_name"),
                    DocumentField::required("issue_date").with_format(FieldFormat::Date),
                    DocumentField::required("expiry_date").with_format(FieldFormat::Date),
                    DocumentField::required("issuing_country").with_format(FieldFormat::CountryCode),
                    DocumentField::optional("mrz_line").with_format(FieldFormat::Mrz),
                    DocumentField::optional("date_of_birth").with_format(FieldFormat::Date),
                ],
            },
            DocumentSchema {
                doc_type: "national_id".to_string(),
                fields: vec![
                    DocumentField::required("document_number").with_format(FieldFormat::Numeric),
                    DocumentField::required("full_name"),
                    DocumentField::required("issue_date").with_format(FieldFormat::Date),
                    DocumentField::optional("expiry_date").with_format(FieldFormat::Date),
                    DocumentField::optional("date_of_birth").with_format(FieldFormat::Date),
                ],
            },
            DocumentSchema {
                doc_type: "driver_license".to_string(),
                fields: vec![
                    DocumentField::required("document_number"),
                    DocumentField::required("full_name"),
                    DocumentField::required("issue_date").with_format(FieldFormat::Date),
                    DocumentField::required("expiry_date").with_format(FieldFormat::Date),
                    DocumentField::optional("address"),
                ],
            },
        ]
    }
}
