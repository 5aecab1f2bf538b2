//! Error model for the generation pipeline.
//!
//! Every failure the pipeline can hit is represented here: the input file is
//! missing or unreadable, the JSON is malformed, required fields are absent,
//! the layout engine rejects the document, or the output cannot be written.
//! All variants propagate to the caller; nothing is retried.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level pipeline error.
#[derive(Debug, Error)]
pub enum Error {
    /// The input data file does not exist.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The input data file exists but could not be read.
    #[error("failed to read {path}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input data file is not well-formed JSON (or has the wrong shape).
    #[error("invalid JSON in {path}: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Required fields are missing from the input record.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The layout engine failed to render the document.
    #[error("failed to render document")]
    Render(#[from] genpdf::error::Error),

    /// The rendered PDF could not be written to the output path.
    #[error("failed to write {path}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Validation failure listing every missing required field at once.
///
/// Nested fields are reported with their full path (`customer.email`,
/// `line_items[2].rate`) in the order they appear in the record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required field(s): {}", field_list(.missing))]
pub struct ValidationError {
    missing: Vec<String>,
}

fn field_list(fields: &[String]) -> String {
    fields.join(", ")
}

impl ValidationError {
    /// Creates a validation error from the collected field paths.
    pub fn new(missing: Vec<String>) -> Self {
        Self { missing }
    }

    /// Returns the missing field paths in record order.
    pub fn missing_fields(&self) -> &[String] {
        &self.missing
    }
}
