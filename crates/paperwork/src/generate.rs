//! End-to-end generation pipeline: JSON data file in, PDF file out.
//!
//! Each function reads and validates one record, assembles its block
//! sequence, renders it fully in memory, and only then writes the output
//! file. A failure at any stage leaves no partial output behind.

use std::fs;
use std::path::Path;

use log::info;

use crate::assemble;
use crate::error::{Error, Result};
use crate::records::{InvoiceRecord, LetterRecord};
use crate::render;
use crate::style::DocumentStyle;

/// Generates an invoice PDF from a JSON data file.
///
/// Missing parent directories of `output_path` are created. Returns the
/// number of bytes written.
pub fn generate_invoice(
    data_file: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    style: &DocumentStyle,
) -> Result<usize> {
    let record = InvoiceRecord::from_json_file(data_file.as_ref())?;
    let blocks = assemble::invoice_blocks(&record, style);
    let title = format!("Invoice {}", record.invoice_number);
    let bytes = render::render_blocks(&blocks, style, &title)?;
    write_output(output_path.as_ref(), &bytes)?;
    info!(
        "generated invoice {} at {} ({} bytes)",
        record.invoice_number,
        output_path.as_ref().display(),
        bytes.len()
    );
    Ok(bytes.len())
}

/// Generates a letter PDF from a JSON data file.
///
/// Missing parent directories of `output_path` are created. Returns the
/// number of bytes written.
pub fn generate_letter(
    data_file: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    style: &DocumentStyle,
) -> Result<usize> {
    let record = LetterRecord::from_json_file(data_file.as_ref())?;
    let blocks = assemble::letter_blocks(&record, style);
    let title = format!("Letter for {}", record.name);
    let bytes = render::render_blocks(&blocks, style, &title)?;
    write_output(output_path.as_ref(), &bytes)?;
    info!(
        "generated letter for {} at {} ({} bytes)",
        record.name,
        output_path.as_ref().display(),
        bytes.len()
    );
    Ok(bytes.len())
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::WriteOutput {
                path: path.to_owned(),
                source,
            })?;
        }
    }
    fs::write(path, bytes).map_err(|source| Error::WriteOutput {
        path: path.to_owned(),
        source,
    })
}
