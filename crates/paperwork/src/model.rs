//! Data structures describing the logical content of a generated document.
//!
//! The types in this module form the ordered block sequence the assembler
//! produces and the renderer consumes. They mirror the building blocks
//! expected by `genpdf` without touching the rendering APIs, so block
//! sequences can be inspected and compared independently of the layout
//! engine.

use genpdf::style::{Color, Style, StyledString};

/// Horizontal alignment for textual content.
///
/// The variants map directly to [`genpdf::Alignment`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Left aligned content.
    #[default]
    Left,
    /// Center aligned content.
    Center,
    /// Right aligned content.
    Right,
}

/// A slice of text together with inline style attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Span {
    text: String,
    bold: bool,
    italic: bool,
    color: Option<Color>,
}

impl Span {
    /// Creates a new span with the provided text and no styles applied.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Returns the raw text contained in this span.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the span should be rendered in bold.
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Returns whether the span should be rendered in italic.
    pub fn is_italic(&self) -> bool {
        self.italic
    }

    /// Returns the configured color for the span, if any.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Sets the bold flag and returns the updated span.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Sets the italic flag and returns the updated span.
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Sets the span color and returns the updated span.
    pub fn with_color(mut self, color: Option<Color>) -> Self {
        self.color = color;
        self
    }

    /// Convenience shorthand that marks the span as bold.
    pub fn bold(self) -> Self {
        self.with_bold(true)
    }

    /// Convenience shorthand that marks the span as italic.
    pub fn italic(self) -> Self {
        self.with_italic(true)
    }

    /// Convenience shorthand that assigns a color to the span.
    pub fn colored(self, color: Color) -> Self {
        self.with_color(Some(color))
    }

    fn to_style(&self) -> Style {
        let mut style = Style::new();
        if let Some(color) = self.color {
            style.set_color(color);
        }
        if self.bold {
            style.set_bold();
        }
        if self.italic {
            style.set_italic();
        }
        style
    }

    /// Converts the span into a styled string for the layout engine.
    pub fn to_styled_string(&self) -> StyledString {
        StyledString::new(self.text.clone(), self.to_style())
    }
}

impl From<&Span> for StyledString {
    fn from(span: &Span) -> Self {
        span.to_styled_string()
    }
}

/// A paragraph of styled spans with an alignment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBlock {
    spans: Vec<Span>,
    alignment: HorizontalAlignment,
}

impl TextBlock {
    /// Creates a paragraph from the provided spans using left alignment.
    pub fn new(spans: impl Into<Vec<Span>>) -> Self {
        Self {
            spans: spans.into(),
            ..Self::default()
        }
    }

    /// Creates a paragraph holding a single unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(vec![Span::new(text)])
    }

    /// Returns the spans that make up the paragraph.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Returns the configured alignment.
    pub fn alignment(&self) -> HorizontalAlignment {
        self.alignment
    }

    /// Sets the alignment and returns the updated paragraph.
    pub fn with_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Returns the concatenated text of all spans.
    pub fn text(&self) -> String {
        self.spans.iter().map(Span::text).collect()
    }
}

/// Heading levels used by the generated documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadingLevel {
    /// The document title line.
    Title,
    /// A section heading such as "Bill To:" or "Notes:".
    Section,
}

/// A heading with a fixed level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heading {
    text: String,
    level: HeadingLevel,
}

impl Heading {
    /// Creates a heading at the given level.
    pub fn new(text: impl Into<String>, level: HeadingLevel) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }

    /// Returns the heading text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the heading level.
    pub fn level(&self) -> HeadingLevel {
        self.level
    }
}

/// An explicit vertical gap between blocks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spacer {
    height_mm: f64,
}

impl Spacer {
    /// Creates a spacer with the given height in millimetres.
    pub fn new(height_mm: f64) -> Self {
        Self { height_mm }
    }

    /// Returns the spacer height in millimetres.
    pub fn height_mm(&self) -> f64 {
        self.height_mm
    }
}

/// Shading band a table row belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowBand {
    /// The column-header row.
    Header,
    /// A line-item row.
    Body,
    /// One of the trailing subtotal/tax/total rows.
    Totals,
}

/// A single table row: one cell per column plus its shading band.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    cells: Vec<TextBlock>,
    band: RowBand,
}

impl TableRow {
    /// Creates a row from its cells and band.
    pub fn new(cells: Vec<TextBlock>, band: RowBand) -> Self {
        Self { cells, band }
    }

    /// Returns the cells of the row.
    pub fn cells(&self) -> &[TextBlock] {
        &self.cells
    }

    /// Returns the shading band of the row.
    pub fn band(&self) -> RowBand {
        self.band
    }
}

/// A table block: weighted columns and banded rows.
#[derive(Clone, Debug, PartialEq)]
pub struct TableBlock {
    column_weights: Vec<usize>,
    rows: Vec<TableRow>,
}

impl TableBlock {
    /// Creates an empty table with the given column weights.
    pub fn new(column_weights: impl Into<Vec<usize>>) -> Self {
        Self {
            column_weights: column_weights.into(),
            rows: Vec::new(),
        }
    }

    /// Returns the relative column weights.
    pub fn column_weights(&self) -> &[usize] {
        &self.column_weights
    }

    /// Returns the rows of the table.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Appends a row and returns the updated table.
    pub fn with_row(mut self, row: TableRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Extends the table with multiple rows and returns the updated instance.
    pub fn with_rows<I>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = TableRow>,
    {
        self.rows.extend(rows);
        self
    }
}

/// Individual renderable units consumed by the layout engine.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    /// Styled paragraph content.
    Paragraph(TextBlock),
    /// A document or section heading.
    Heading(Heading),
    /// An explicit vertical gap.
    Spacer(Spacer),
    /// A banded table.
    Table(TableBlock),
}

impl Block {
    /// Convenience helper for building a paragraph block.
    pub fn paragraph(spans: impl Into<Vec<Span>>) -> Self {
        Self::Paragraph(TextBlock::new(spans))
    }

    /// Convenience helper for a paragraph holding plain text.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Paragraph(TextBlock::plain(text))
    }

    /// Convenience helper for building a heading block.
    pub fn heading(text: impl Into<String>, level: HeadingLevel) -> Self {
        Self::Heading(Heading::new(text, level))
    }

    /// Convenience helper for building a spacer block.
    pub fn spacer(height_mm: f64) -> Self {
        Self::Spacer(Spacer::new(height_mm))
    }
}
