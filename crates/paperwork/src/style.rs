//! Style configuration for generated documents.
//!
//! All appearance decisions live in [`DocumentStyle`], an explicit value
//! passed to the assembler and the renderer. The `Default` implementation
//! reproduces the fixed appearance of the upstream documents; callers that
//! need a different look construct their own value instead of mutating shared
//! state.

use genpdf::style::Color;
use genpdf::PaperSize;

const PAGE_MARGIN_MM: f64 = 25.4;

const TITLE_FONT_SIZE: u8 = 24;
const TITLE_SPACE_AFTER_MM: f64 = 10.6;
const SECTION_FONT_SIZE: u8 = 12;
const SECTION_SPACE_AFTER_MM: f64 = 2.0;
const BODY_FONT_SIZE: u8 = 10;

const SECTION_GAP_MM: f64 = 7.0;
const NOTES_GAP_MM: f64 = 10.5;
const SIGNATURE_GAP_MM: f64 = 12.0;

// Item/Description/Quantity/Rate/Amount at 2in/2in/1in/1in/1.25in.
const TABLE_COLUMN_WEIGHTS: [usize; 5] = [8, 8, 4, 4, 5];
const TABLE_HEADER_FONT_SIZE: u8 = 14;
const TABLE_HEADER_FILL: Color = Color::Rgb(128, 128, 128);
const TABLE_HEADER_TEXT: Color = Color::Rgb(245, 245, 245);
const TABLE_TOTALS_FILL: Color = Color::Rgb(211, 211, 211);
const TABLE_HEADER_PADDING_MM: f64 = 2.2;
const TABLE_BAND_PADDING_MM: f64 = 1.0;
const TABLE_CELL_PADDING_MM: f64 = 0.8;

/// Page geometry for the rendered document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageSetup {
    /// Paper size handed to the layout engine.
    pub paper_size: PaperSize,
    /// Margin applied to all four sides, in millimetres.
    pub margin_mm: f64,
}

/// Appearance of a heading line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadingStyle {
    /// Font size in points.
    pub font_size: u8,
    /// Gap inserted below the heading, in millimetres.
    pub space_after_mm: f64,
}

/// Appearance of the invoice table.
#[derive(Clone, Debug, PartialEq)]
pub struct TableStyle {
    /// Relative column widths.
    pub column_weights: Vec<usize>,
    /// Fill behind the column-header row.
    pub header_fill: Color,
    /// Text color of the column-header row.
    pub header_text: Color,
    /// Font size of the column-header row, in points.
    pub header_font_size: u8,
    /// Vertical padding inside the column-header band, in millimetres.
    pub header_padding_mm: f64,
    /// Fill behind the subtotal/tax/total rows.
    pub totals_fill: Color,
    /// Vertical padding inside the totals bands, in millimetres.
    pub band_padding_mm: f64,
    /// Padding around unshaded cell content, in millimetres.
    pub cell_padding_mm: f64,
}

/// Complete style configuration for one document.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentStyle {
    /// Page size and margins.
    pub page: PageSetup,
    /// Style of the document title line.
    pub title: HeadingStyle,
    /// Style of section headings ("Bill To:", "Notes:").
    pub heading: HeadingStyle,
    /// Default font size for body text, in points.
    pub body_font_size: u8,
    /// Gap between document sections, in millimetres.
    pub section_gap_mm: f64,
    /// Gap before the notes section, in millimetres.
    pub notes_gap_mm: f64,
    /// Gap left for a handwritten signature in letters, in millimetres.
    pub signature_gap_mm: f64,
    /// Invoice table appearance.
    pub table: TableStyle,
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self {
            page: PageSetup {
                paper_size: PaperSize::Letter,
                margin_mm: PAGE_MARGIN_MM,
            },
            title: HeadingStyle {
                font_size: TITLE_FONT_SIZE,
                space_after_mm: TITLE_SPACE_AFTER_MM,
            },
            heading: HeadingStyle {
                font_size: SECTION_FONT_SIZE,
                space_after_mm: SECTION_SPACE_AFTER_MM,
            },
            body_font_size: BODY_FONT_SIZE,
            section_gap_mm: SECTION_GAP_MM,
            notes_gap_mm: NOTES_GAP_MM,
            signature_gap_mm: SIGNATURE_GAP_MM,
            table: TableStyle {
                column_weights: TABLE_COLUMN_WEIGHTS.to_vec(),
                header_fill: TABLE_HEADER_FILL,
                header_text: TABLE_HEADER_TEXT,
                header_font_size: TABLE_HEADER_FONT_SIZE,
                header_padding_mm: TABLE_HEADER_PADDING_MM,
                totals_fill: TABLE_TOTALS_FILL,
                band_padding_mm: TABLE_BAND_PADDING_MM,
                cell_padding_mm: TABLE_CELL_PADDING_MM,
            },
        }
    }
}
