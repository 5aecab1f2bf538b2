//! The document assembler.
//!
//! Pure transformations from validated records into the ordered block
//! sequences the renderer consumes. Assembly has no hidden state: the same
//! record and style always produce the same blocks, and nothing is emitted
//! until the whole sequence is built.

use rust_decimal::Decimal;

use crate::model::{
    Block, HeadingLevel, HorizontalAlignment, RowBand, Span, TableBlock, TableRow, TextBlock,
};
use crate::records::{InvoiceRecord, LetterRecord, LineItem};
use crate::style::DocumentStyle;

const TABLE_HEADERS: [&str; 5] = ["Item", "Description", "Quantity", "Rate", "Amount"];
const SIGNATURE_PLACEHOLDER: &str = "_______________________";

/// Builds the block sequence for an invoice document.
///
/// Order: title, invoice metadata, customer address, the line-item table,
/// and a trailing notes section when the record carries non-empty notes.
pub fn invoice_blocks(record: &InvoiceRecord, style: &DocumentStyle) -> Vec<Block> {
    let mut blocks = vec![
        Block::heading("INVOICE", HeadingLevel::Title),
        Block::text(format!("Invoice #: {}", record.invoice_number)),
        Block::text(format!("Date: {}", record.date)),
        Block::text(format!("Due Date: {}", record.due_date)),
        Block::spacer(style.section_gap_mm),
        Block::heading("Bill To:", HeadingLevel::Section),
        Block::text(record.customer.name.clone()),
        Block::text(record.customer.address.clone()),
        Block::text(record.customer.email.clone()),
        Block::spacer(style.section_gap_mm),
        Block::Table(line_item_table(record, style)),
    ];

    if let Some(notes) = record.notes.as_deref().filter(|notes| !notes.is_empty()) {
        blocks.push(Block::spacer(style.notes_gap_mm));
        blocks.push(Block::heading("Notes:", HeadingLevel::Section));
        blocks.push(Block::text(notes));
    }

    blocks
}

/// Builds the block sequence for a letter document.
///
/// Order: letterhead, date, greeting, one paragraph per comma-separated
/// address segment, the message, and the fixed closing.
pub fn letter_blocks(record: &LetterRecord, style: &DocumentStyle) -> Vec<Block> {
    let mut blocks = vec![
        Block::heading(format!("Letter for: {}", record.name), HeadingLevel::Title),
        Block::spacer(style.section_gap_mm),
        Block::text(format!("Date: {}", record.date)),
        Block::text(format!("Dear {},", record.name)),
    ];

    blocks.extend(
        record
            .address
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(Block::text),
    );

    blocks.push(Block::spacer(style.section_gap_mm));
    blocks.push(Block::text(record.message.clone()));
    blocks.push(Block::spacer(style.section_gap_mm));
    blocks.push(Block::text("Sincerely,"));
    blocks.push(Block::spacer(style.signature_gap_mm));
    blocks.push(Block::text(SIGNATURE_PLACEHOLDER));

    blocks
}

fn line_item_table(record: &InvoiceRecord, style: &DocumentStyle) -> TableBlock {
    let header = TableRow::new(
        TABLE_HEADERS
            .into_iter()
            .map(|label| header_cell(label, style))
            .collect(),
        RowBand::Header,
    );
    let items = record.line_items.iter().map(item_row);
    let totals = [
        ("Subtotal:".to_string(), record.subtotal),
        (
            format!("Tax ({}):", format_percent(record.tax_rate)),
            record.tax_amount,
        ),
        ("Total:".to_string(), record.total_amount),
    ]
    .into_iter()
    .map(|(label, amount)| totals_row(label, amount));

    TableBlock::new(style.table.column_weights.clone())
        .with_row(header)
        .with_rows(items)
        .with_rows(totals)
}

fn header_cell(label: &str, style: &DocumentStyle) -> TextBlock {
    TextBlock::new(vec![Span::new(label)
        .bold()
        .colored(style.table.header_text)])
    .with_alignment(HorizontalAlignment::Center)
}

fn item_row(item: &LineItem) -> TableRow {
    TableRow::new(
        vec![
            centered(item.service.clone()),
            centered(item.description.clone()),
            centered(item.quantity.to_string()),
            centered(format_currency(item.rate)),
            centered(format_currency(item.total)),
        ],
        RowBand::Body,
    )
}

fn totals_row(label: String, amount: Decimal) -> TableRow {
    TableRow::new(
        vec![
            empty_cell(),
            empty_cell(),
            empty_cell(),
            bold_centered(label),
            bold_centered(format_currency(amount)),
        ],
        RowBand::Totals,
    )
}

fn centered(text: String) -> TextBlock {
    TextBlock::plain(text).with_alignment(HorizontalAlignment::Center)
}

fn bold_centered(text: String) -> TextBlock {
    TextBlock::new(vec![Span::new(text).bold()]).with_alignment(HorizontalAlignment::Center)
}

fn empty_cell() -> TextBlock {
    TextBlock::default().with_alignment(HorizontalAlignment::Center)
}

/// Formats a currency amount with a leading dollar sign and exactly two
/// decimal places.
fn format_currency(amount: Decimal) -> String {
    format!("${amount:.2}")
}

/// Formats a fractional tax rate as a percentage with one decimal place.
fn format_percent(rate: Decimal) -> String {
    format!("{:.1}%", rate * Decimal::from(100))
}
