//! Invoice and letter PDF generation.
//!
//! JSON data files are validated into records, assembled into ordered block
//! sequences, and rendered through `genpdf`.

pub mod assemble;
pub mod elements;
pub mod error;
pub mod fonts;
pub mod generate;
pub mod model;
pub mod records;
pub mod render;
pub mod style;

pub use error::{Error, Result, ValidationError};
pub use generate::{generate_invoice, generate_letter};
pub use records::{InvoiceRecord, LetterRecord};
pub use style::DocumentStyle;
