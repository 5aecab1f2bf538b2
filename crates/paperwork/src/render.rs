//! Rendering of block sequences through the `genpdf` layout engine.
//!
//! The assembler's output never touches PDF internals; everything in this
//! module maps blocks onto `genpdf` elements and hands the result to the
//! engine, which paginates and produces the final bytes in memory.

use genpdf::elements::{FrameCellDecorator, Paragraph, TableLayout};
use genpdf::error::Error;
use genpdf::style::{Style, StyledString};
use genpdf::{Alignment, Document, Element, Margins, PaperSize, SimplePageDecorator};

use crate::elements::{mm_from_f64, FilledText, VerticalSpace};
use crate::fonts;
use crate::model::{Block, HeadingLevel, HorizontalAlignment, RowBand, TableBlock, TextBlock};
use crate::style::DocumentStyle;

/// Builder for `genpdf::Document` instances pre-configured with the bundled
/// fonts and the crate defaults.
#[derive(Default)]
pub struct DocumentBuilder {
    paper_size: Option<PaperSize>,
    margin_mm: Option<f64>,
    font_size: Option<u8>,
    title: Option<String>,
}

impl DocumentBuilder {
    /// Creates a new builder instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the paper size used for the document.
    pub fn with_paper_size(mut self, paper_size: PaperSize) -> Self {
        self.paper_size = Some(paper_size);
        self
    }

    /// Sets the margin applied to all four sides, in millimetres.
    pub fn with_margins(mut self, margin_mm: f64) -> Self {
        self.margin_mm = Some(margin_mm);
        self
    }

    /// Sets the default font size, in points.
    pub fn with_font_size(mut self, font_size: u8) -> Self {
        self.font_size = Some(font_size);
        self
    }

    /// Sets the document title metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builds a fully configured `genpdf::Document` instance.
    pub fn build(self) -> Result<Document, Error> {
        let font_family = fonts::bundled_font_family()?;
        let mut document = Document::new(font_family);

        if let Some(title) = self.title {
            document.set_title(title);
        }
        if let Some(font_size) = self.font_size {
            document.set_font_size(font_size);
        }
        if let Some(paper_size) = self.paper_size {
            document.set_paper_size(paper_size);
        }

        let mut decorator = SimplePageDecorator::new();
        if let Some(margin_mm) = self.margin_mm {
            let margin = mm_from_f64(margin_mm);
            decorator.set_margins(Margins::trbl(margin, margin, margin, margin));
        }
        document.set_page_decorator(decorator);

        Ok(document)
    }
}

/// Renders a block sequence into PDF bytes.
pub fn render_blocks(blocks: &[Block], style: &DocumentStyle, title: &str) -> Result<Vec<u8>, Error> {
    let mut document = DocumentBuilder::new()
        .with_paper_size(style.page.paper_size)
        .with_margins(style.page.margin_mm)
        .with_font_size(style.body_font_size)
        .with_title(title)
        .build()?;

    for block in blocks {
        push_block(&mut document, block, style)?;
    }

    let mut bytes = Vec::new();
    document.render(&mut bytes)?;
    Ok(bytes)
}

fn push_block(document: &mut Document, block: &Block, style: &DocumentStyle) -> Result<(), Error> {
    match block {
        Block::Paragraph(text) => document.push(paragraph(text)),
        Block::Heading(heading) => {
            let heading_style = match heading.level() {
                HeadingLevel::Title => style.title,
                HeadingLevel::Section => style.heading,
            };
            document.push(
                Paragraph::new(heading.text())
                    .styled(Style::new().bold().with_font_size(heading_style.font_size)),
            );
            document.push(VerticalSpace::new(heading_style.space_after_mm));
        }
        Block::Spacer(spacer) => document.push(VerticalSpace::new(spacer.height_mm())),
        Block::Table(table) => document.push(table_layout(table, style)?),
    }
    Ok(())
}

fn table_layout(table: &TableBlock, style: &DocumentStyle) -> Result<TableLayout, Error> {
    let mut layout = TableLayout::new(table.column_weights().to_vec());
    layout.set_cell_decorator(FrameCellDecorator::new(true, true, false));

    for row in table.rows() {
        let mut layout_row = layout.row();
        for cell in row.cells() {
            match row.band() {
                RowBand::Header => layout_row.push_element(
                    FilledText::new(styled_strings(cell), style.table.header_fill)
                        .with_alignment(alignment(cell.alignment()))
                        .with_padding(style.table.header_padding_mm)
                        .styled(Style::new().with_font_size(style.table.header_font_size)),
                ),
                RowBand::Totals => layout_row.push_element(
                    FilledText::new(styled_strings(cell), style.table.totals_fill)
                        .with_alignment(alignment(cell.alignment()))
                        .with_padding(style.table.band_padding_mm),
                ),
                RowBand::Body => {
                    let padding = mm_from_f64(style.table.cell_padding_mm);
                    layout_row.push_element(
                        paragraph(cell).padded(Margins::trbl(padding, padding, padding, padding)),
                    );
                }
            }
        }
        layout_row.push()?;
    }

    Ok(layout)
}

fn paragraph(text: &TextBlock) -> Paragraph {
    let mut paragraph = Paragraph::default();
    for span in text.spans() {
        paragraph.push(span.to_styled_string());
    }
    paragraph.set_alignment(alignment(text.alignment()));
    paragraph
}

fn styled_strings(text: &TextBlock) -> Vec<StyledString> {
    text.spans().iter().map(StyledString::from).collect()
}

fn alignment(alignment: HorizontalAlignment) -> Alignment {
    match alignment {
        HorizontalAlignment::Left => Alignment::Left,
        HorizontalAlignment::Center => Alignment::Center,
        HorizontalAlignment::Right => Alignment::Right,
    }
}
