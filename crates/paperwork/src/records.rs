//! Input records describing the documents to generate.
//!
//! Records are deserialized in two stages: a raw shape in which every field
//! is optional, followed by validation that collects the full list of missing
//! required fields into a single [`ValidationError`]. Successful validation
//! yields an immutable record; each record is used to build exactly one
//! document.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use chrono::Local;
use log::debug;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{Error, Result, ValidationError};

/// Date format used when a letter record omits its date, matching the format
/// the upstream system writes into data files ("March 15, 2024").
const LETTER_DATE_FORMAT: &str = "%B %d, %Y";

/// The party an invoice is billed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub name: String,
    pub address: String,
    pub email: String,
}

/// A single billable line on an invoice.
///
/// `total` is supplied by the caller alongside `quantity` and `rate`; it is
/// rendered verbatim and never recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub service: String,
    pub description: String,
    pub quantity: u32,
    pub rate: Decimal,
    pub total: Decimal,
}

/// A validated invoice ready for document assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceRecord {
    pub invoice_number: String,
    pub date: String,
    pub due_date: String,
    pub customer: Customer,
    pub line_items: Vec<LineItem>,
    pub subtotal: Decimal,
    pub tax_rate: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
    pub notes: Option<String>,
}

impl InvoiceRecord {
    /// Loads and validates an invoice record from a JSON data file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw: RawInvoiceRecord = read_json(path)?;
        let record = raw.validate()?;
        debug!(
            "loaded invoice {} with {} line item(s) from {}",
            record.invoice_number,
            record.line_items.len(),
            path.display()
        );
        Ok(record)
    }

    /// Parses and validates an invoice record from a JSON string.
    pub fn from_json_str(data: &str) -> Result<Self> {
        let raw: RawInvoiceRecord =
            serde_json::from_str(data).map_err(|source| Error::InvalidJson {
                path: "<string>".into(),
                source,
            })?;
        Ok(raw.validate()?)
    }
}

/// A validated letter ready for document assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterRecord {
    pub name: String,
    pub address: String,
    pub message: String,
    pub date: String,
}

impl LetterRecord {
    /// Loads and validates a letter record from a JSON data file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw: RawLetterRecord = read_json(path)?;
        let record = raw.validate()?;
        debug!("loaded letter for {} from {}", record.name, path.display());
        Ok(record)
    }

    /// Parses and validates a letter record from a JSON string.
    pub fn from_json_str(data: &str) -> Result<Self> {
        let raw: RawLetterRecord =
            serde_json::from_str(data).map_err(|source| Error::InvalidJson {
                path: "<string>".into(),
                source,
            })?;
        Ok(raw.validate()?)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.to_owned(),
            }
        } else {
            Error::ReadInput {
                path: path.to_owned(),
                source,
            }
        }
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| Error::InvalidJson {
        path: path.to_owned(),
        source,
    })
}

/// Records the name of a missing required field and passes the value through.
fn require<T>(value: Option<T>, name: impl Into<String>, missing: &mut Vec<String>) -> Option<T> {
    if value.is_none() {
        missing.push(name.into());
    }
    value
}

#[derive(Debug, Deserialize)]
struct RawCustomer {
    name: Option<String>,
    address: Option<String>,
    email: Option<String>,
}

impl RawCustomer {
    fn validate(self, missing: &mut Vec<String>) -> Option<Customer> {
        let name = require(self.name, "customer.name", missing);
        let address = require(self.address, "customer.address", missing);
        let email = require(self.email, "customer.email", missing);
        Some(Customer {
            name: name?,
            address: address?,
            email: email?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawLineItem {
    service: Option<String>,
    description: Option<String>,
    quantity: Option<u32>,
    rate: Option<Decimal>,
    total: Option<Decimal>,
}

impl RawLineItem {
    fn validate(self, index: usize, missing: &mut Vec<String>) -> Option<LineItem> {
        let field = |name: &str| format!("line_items[{index}].{name}");
        let service = require(self.service, field("service"), missing);
        let description = require(self.description, field("description"), missing);
        let quantity = require(self.quantity, field("quantity"), missing);
        let rate = require(self.rate, field("rate"), missing);
        let total = require(self.total, field("total"), missing);
        Some(LineItem {
            service: service?,
            description: description?,
            quantity: quantity?,
            rate: rate?,
            total: total?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawInvoiceRecord {
    invoice_number: Option<String>,
    date: Option<String>,
    due_date: Option<String>,
    customer: Option<RawCustomer>,
    line_items: Option<Vec<RawLineItem>>,
    subtotal: Option<Decimal>,
    tax_rate: Option<Decimal>,
    tax_amount: Option<Decimal>,
    total_amount: Option<Decimal>,
    notes: Option<String>,
}

impl RawInvoiceRecord {
    fn validate(self) -> std::result::Result<InvoiceRecord, ValidationError> {
        let mut missing = Vec::new();

        let invoice_number = require(self.invoice_number, "invoice_number", &mut missing);
        let date = require(self.date, "date", &mut missing);
        let due_date = require(self.due_date, "due_date", &mut missing);
        let customer = match self.customer {
            Some(raw) => raw.validate(&mut missing),
            None => {
                missing.push("customer".to_string());
                None
            }
        };
        let line_items = match self.line_items {
            Some(raw_items) => {
                let count = raw_items.len();
                let items: Vec<LineItem> = raw_items
                    .into_iter()
                    .enumerate()
                    .filter_map(|(index, raw)| raw.validate(index, &mut missing))
                    .collect();
                (items.len() == count).then_some(items)
            }
            None => {
                missing.push("line_items".to_string());
                None
            }
        };
        let subtotal = require(self.subtotal, "subtotal", &mut missing);
        let tax_rate = require(self.tax_rate, "tax_rate", &mut missing);
        let tax_amount = require(self.tax_amount, "tax_amount", &mut missing);
        let total_amount = require(self.total_amount, "total_amount", &mut missing);

        let record = (|| {
            Some(InvoiceRecord {
                invoice_number: invoice_number?,
                date: date?,
                due_date: due_date?,
                customer: customer?,
                line_items: line_items?,
                subtotal: subtotal?,
                tax_rate: tax_rate?,
                tax_amount: tax_amount?,
                total_amount: total_amount?,
                notes: self.notes,
            })
        })();

        match record {
            Some(record) => Ok(record),
            None => Err(ValidationError::new(missing)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawLetterRecord {
    name: Option<String>,
    address: Option<String>,
    message: Option<String>,
    date: Option<String>,
}

impl RawLetterRecord {
    fn validate(self) -> std::result::Result<LetterRecord, ValidationError> {
        let mut missing = Vec::new();

        let name = require(self.name, "name", &mut missing);
        let address = require(self.address, "address", &mut missing);
        let message = require(self.message, "message", &mut missing);
        let date = self.date.unwrap_or_else(default_letter_date);

        let record = (|| {
            Some(LetterRecord {
                name: name?,
                address: address?,
                message: message?,
                date,
            })
        })();

        match record {
            Some(record) => Ok(record),
            None => Err(ValidationError::new(missing)),
        }
    }
}

fn default_letter_date() -> String {
    Local::now().format(LETTER_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const INVOICE_JSON: &str = r#"{
        "invoice_number": "INV-2024-0001",
        "date": "March 1, 2024",
        "due_date": "March 31, 2024",
        "customer": {
            "name": "Acme Corp",
            "address": "1 Acme Way, Springfield",
            "email": "billing@acme.example"
        },
        "line_items": [
            {
                "service": "Consulting",
                "description": "Architecture review",
                "quantity": 2,
                "rate": 150.00,
                "total": 300.00
            }
        ],
        "subtotal": 300.00,
        "tax_rate": 0.08,
        "tax_amount": 24.00,
        "total_amount": 324.00,
        "notes": "Net 30."
    }"#;

    #[test]
    fn parses_complete_invoice() {
        let record = InvoiceRecord::from_json_str(INVOICE_JSON).expect("valid invoice");
        assert_eq!(record.invoice_number, "INV-2024-0001");
        assert_eq!(record.customer.name, "Acme Corp");
        assert_eq!(record.line_items.len(), 1);
        assert_eq!(record.line_items[0].quantity, 2);
        assert_eq!(record.notes.as_deref(), Some("Net 30."));
    }

    #[test]
    fn reports_nested_missing_invoice_fields() {
        let data = r#"{
            "invoice_number": "INV-2024-0002",
            "date": "March 1, 2024",
            "due_date": "March 31, 2024",
            "customer": { "name": "Acme Corp", "address": "1 Acme Way" },
            "line_items": [ { "service": "Consulting", "description": "Review", "quantity": 1, "total": 150.00 } ],
            "subtotal": 150.00,
            "tax_rate": 0.08,
            "tax_amount": 12.00,
            "total_amount": 162.00
        }"#;
        let err = InvoiceRecord::from_json_str(data).expect_err("missing fields");
        match err {
            Error::Validation(err) => {
                let missing: Vec<&str> =
                    err.missing_fields().iter().map(String::as_str).collect();
                assert_eq!(missing, ["customer.email", "line_items[0].rate"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn letter_reports_all_missing_fields_in_order() {
        let err = LetterRecord::from_json_str("{}").expect_err("missing fields");
        match err {
            Error::Validation(err) => {
                let missing: Vec<&str> =
                    err.missing_fields().iter().map(String::as_str).collect();
                assert_eq!(missing, ["name", "address", "message"]);
                assert!(err.to_string().contains("message"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn letter_date_defaults_to_current_date() {
        let data = r#"{"name":"Jane Doe","address":"123 Main St","message":"Hello"}"#;
        let record = LetterRecord::from_json_str(data).expect("valid letter");
        assert!(!record.date.is_empty());
        // "%B %d, %Y" always renders a comma between day and year.
        assert!(record.date.contains(','));
    }

    #[test]
    fn letter_keeps_explicit_date() {
        let data = r#"{"name":"Jane Doe","address":"123 Main St","message":"Hello","date":"July 4, 2024"}"#;
        let record = LetterRecord::from_json_str(data).expect("valid letter");
        assert_eq!(record.date, "July 4, 2024");
    }

    #[test]
    fn malformed_json_is_not_a_validation_error() {
        let err = LetterRecord::from_json_str("{not json").expect_err("malformed");
        assert!(matches!(err, Error::InvalidJson { .. }));
    }
}
