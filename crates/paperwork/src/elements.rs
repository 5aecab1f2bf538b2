//! Custom element implementations built on top of `genpdf` primitives.
//!
//! This module adds the two pieces the upstream crate does not ship with: an
//! exact-height vertical gap and a single-line text element painted over a
//! solid fill band, used for the shaded header and totals rows of the invoice
//! table.

use genpdf::error::Error;
use genpdf::style::{Color, Style, StyledString};
use genpdf::{render, Alignment, Element, Mm, Position, RenderResult, Size};

/// Vertical distance between the strokes that build up a fill band. Areas
/// only expose stroked lines, so solid fills are laid down as overlapping
/// horizontal strokes; the default stroke is thicker than this step.
const FILL_STROKE_STEP_MM: f64 = 0.25;

pub(crate) fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

fn mm_to_f64(value: Mm) -> f64 {
    let mm: printpdf::Mm = value.into();
    mm.0
}

/// A fixed-height vertical gap.
///
/// The gap is clamped to the space left on the current page instead of
/// spilling onto the next one, so a spacer at the bottom of a page never
/// produces a blank leading area.
pub struct VerticalSpace {
    height: Mm,
}

impl VerticalSpace {
    /// Creates a gap with the given height in millimetres.
    pub fn new(height_mm: f64) -> Self {
        Self {
            height: mm_from_f64(height_mm),
        }
    }
}

impl Element for VerticalSpace {
    fn render(
        &mut self,
        _context: &genpdf::Context,
        area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let available = area.size().height;
        let height = if self.height > available {
            available
        } else {
            self.height
        };

        let mut result = RenderResult::default();
        result.size = Size::new(0, height);
        Ok(result)
    }
}

/// A single line of styled text painted over a solid fill band.
///
/// The fill is drawn first, then the text, so the band always sits behind
/// the glyphs. Table grid lines drawn by the cell decorator land on top of
/// the band edges afterwards.
pub struct FilledText {
    spans: Vec<StyledString>,
    fill: Color,
    alignment: Alignment,
    padding: Mm,
}

impl FilledText {
    /// Creates a filled text element from the provided spans.
    pub fn new(spans: Vec<StyledString>, fill: Color) -> Self {
        Self {
            spans,
            fill,
            alignment: Alignment::Left,
            padding: Mm::default(),
        }
    }

    /// Sets the horizontal alignment for the rendered line.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    /// Sets the alignment and returns the updated element.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.set_alignment(alignment);
        self
    }

    /// Sets the vertical padding above and below the text line.
    pub fn set_padding(&mut self, padding_mm: f64) {
        self.padding = mm_from_f64(padding_mm);
    }

    /// Sets the vertical padding and returns the updated element.
    pub fn with_padding(mut self, padding_mm: f64) -> Self {
        self.set_padding(padding_mm);
        self
    }
}

impl Element for FilledText {
    fn render(
        &mut self,
        context: &genpdf::Context,
        mut area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let mut prepared: Vec<StyledString> = Vec::with_capacity(self.spans.len());
        let mut total_width = Mm::default();
        let mut line_height = style.line_height(&context.font_cache);

        for span in &self.spans {
            let mut string = span.clone();
            string.style = style.and(string.style);
            total_width += string.width(&context.font_cache);
            line_height = line_height.max(string.style.line_height(&context.font_cache));
            prepared.push(string);
        }

        let band_height = line_height + self.padding + self.padding;
        let mut result = RenderResult::default();
        if band_height > area.size().height {
            result.has_more = true;
            return Ok(result);
        }

        let available_width = area.size().width;
        let mut offset = 0.0;
        let band = mm_to_f64(band_height);
        while offset < band {
            let y = mm_from_f64(offset);
            area.draw_line(
                vec![Position::new(0, y), Position::new(available_width, y)],
                Style::new().with_color(self.fill),
            );
            offset += FILL_STROKE_STEP_MM;
        }

        let x_offset = match self.alignment {
            Alignment::Left => Mm::default(),
            Alignment::Center => (available_width - total_width) / 2.0,
            Alignment::Right => available_width - total_width,
        };

        if let Some(mut section) =
            area.text_section(&context.font_cache, Position::new(x_offset, self.padding), style)
        {
            for string in &prepared {
                section.print_str(&string.s, string.style)?;
            }
        } else {
            result.has_more = true;
            return Ok(result);
        }

        result.size = Size::new(available_width, band_height);
        Ok(result)
    }
}
