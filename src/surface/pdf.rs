//! A [Surface] rendering into a PDF [Document] with embedded fonts.

use super::{wrap::wrap_text, FontStyle, Surface, TextAlign, TextDrawOptions};
use crate::colour::{colours, Colour};
use crate::document::Document;
use crate::error::FlowError;
use crate::font::Font;
use crate::info::Info;
use crate::layout::options::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_LINE_HEIGHT};
use crate::page::{Page, RuleLayout, SpanFont, SpanLayout};
use crate::pagesize::PageSize;
use crate::units::Pt;
use id_arena::Id;
use log::{trace, warn};
use std::io::Write;

/// A font registered under a family name and style
#[derive(Debug, Clone)]
struct RegisteredFont {
    family: String,
    style: FontStyle,
    weight: u16,
    id: Id<Font>,
}

/// Renders layout output into a [Document]. Fonts must be registered under a family name
/// before they can be selected with [Surface::set_font]; the first registered font doubles
/// as the default font, which is what the `Helvetica` family resolves to unless a font was
/// registered under that name explicitly.
pub struct PdfSurface {
    document: Document,
    page_size: PageSize,
    current_page: Id<Page>,
    fonts: Vec<RegisteredFont>,
    current_font: Option<Id<Font>>,
    font_size: Pt,
    text_colour: Colour,
    draw_colour: Colour,
    line_width: Pt,
}

impl PdfSurface {
    /// Start a new document with one empty page of the given size
    pub fn new(page_size: PageSize) -> PdfSurface {
        let mut document = Document::default();
        let current_page = document.add_page(Page::new(page_size));
        PdfSurface {
            document,
            page_size,
            current_page,
            fonts: Vec::new(),
            current_font: None,
            font_size: DEFAULT_FONT_SIZE,
            text_colour: colours::BLACK,
            draw_colour: colours::BLACK,
            line_width: Pt(1.0),
        }
    }

    /// Add a font to the document and make it selectable as `family` in `style`. The weight
    /// is read from the font itself.
    pub fn register_font<S: ToString>(
        &mut self,
        font: Font,
        family: S,
        style: FontStyle,
    ) -> Id<Font> {
        let weight = font.weight();
        let id = self.document.add_font(font);
        let family = family.to_string();
        trace!("registered font {family} ({style}, {weight}) as F{}", id.index());
        self.fonts.push(RegisteredFont {
            family,
            style,
            weight,
            id,
        });
        if self.current_font.is_none() {
            self.current_font = Some(id);
        }
        id
    }

    /// Sets the document information block written with the PDF
    pub fn set_info(&mut self, info: Info) {
        self.document.set_info(info);
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Number of pages in the document so far
    pub fn page_count(&self) -> usize {
        self.document.page_count()
    }

    /// Give up the surface and take the rendered document
    pub fn finish(self) -> Document {
        self.document
    }

    /// Write the rendered document as a PDF
    pub fn write<W: Write>(self, w: W) -> Result<(), FlowError> {
        self.document.write(w)
    }

    fn default_font(&self) -> Option<Id<Font>> {
        self.fonts.first().map(|f| f.id)
    }

    fn active_font(&self) -> Option<&Font> {
        self.current_font
            .or_else(|| self.default_font())
            .and_then(|id| self.document.fonts.get(id))
    }

    /// Resolve a font selection: the exact match, else the nearest weight in the same
    /// family and style, else the nearest weight in the family
    fn resolve_font(&self, family: &str, style: FontStyle, weight: u16) -> Option<Id<Font>> {
        let in_family: Vec<&RegisteredFont> = self
            .fonts
            .iter()
            .filter(|f| f.family.eq_ignore_ascii_case(family))
            .collect();

        if let Some(exact) = in_family
            .iter()
            .find(|f| f.style == style && f.weight == weight)
        {
            return Some(exact.id);
        }

        let same_style = in_family.iter().copied().filter(|f| f.style == style);
        let fallback = nearest_weight(same_style, weight)
            .or_else(|| nearest_weight(in_family.iter().copied(), weight))?;
        warn!(
            "no exact font for {family} ({style}, {weight}), using {} ({}, {})",
            fallback.family, fallback.style, fallback.weight
        );
        Some(fallback.id)
    }

    fn page_mut(&mut self) -> Result<&mut Page, FlowError> {
        self.document
            .pages
            .get_mut(self.current_page)
            .ok_or(FlowError::PageMissing)
    }
}

fn nearest_weight<'a, I>(candidates: I, weight: u16) -> Option<&'a RegisteredFont>
where
    I: Iterator<Item = &'a RegisteredFont>,
{
    candidates.min_by_key(|f| (f.weight as i32 - weight as i32).abs())
}

impl Surface for PdfSurface {
    fn page_width(&self) -> Pt {
        self.page_size.0
    }

    fn page_height(&self) -> Pt {
        self.page_size.1
    }

    fn set_font(&mut self, family: &str, style: FontStyle, weight: u16) -> Result<(), FlowError> {
        if self.fonts.is_empty() {
            return Err(FlowError::NoFonts);
        }

        let id = match self.resolve_font(family, style, weight) {
            Some(id) => id,
            None if family.eq_ignore_ascii_case(DEFAULT_FONT_FAMILY) => {
                self.default_font().ok_or(FlowError::NoFonts)?
            }
            None => {
                return Err(FlowError::UnknownFont {
                    family: family.to_string(),
                    style,
                    weight,
                })
            }
        };
        self.current_font = Some(id);
        Ok(())
    }

    fn set_font_size(&mut self, size: Pt) {
        self.font_size = size;
    }

    fn font_size(&self) -> Pt {
        self.font_size
    }

    fn string_unit_width(&self, text: &str) -> f32 {
        self.active_font()
            .map(|font| font.string_unit_width(text))
            .unwrap_or_default()
    }

    fn split_text_to_size(&self, text: &str, max_width: Pt) -> Vec<String> {
        let size = self.font_size;
        let scale = self.scale_factor();
        wrap_text(text, max_width, |s| self.string_unit_width(s) * size / scale)
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: Pt,
        y: Pt,
        options: &TextDrawOptions,
    ) -> Result<(), FlowError> {
        let id = self
            .current_font
            .or_else(|| self.default_font())
            .ok_or(FlowError::NoFonts)?;
        let font = self.document.fonts.get(id).ok_or(FlowError::NoFonts)?;

        let size = self.font_size;
        let lines: Vec<String> = match options.max_width {
            Some(max_width) => self.split_text_to_size(text, max_width),
            None => text.lines().map(ToString::to_string).collect(),
        };

        let ascent = font.ascent(size);
        let page_height = self.page_size.1;
        let spans: Vec<SpanLayout> = lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                let width = font.width_of_text(&line, size);
                let line_x = match options.align {
                    TextAlign::Left => x,
                    TextAlign::Center => x - width / 2.0,
                    TextAlign::Right => x - width,
                };
                let line_y =
                    page_height - y - ascent - size * (i as f32 * options.line_height_factor);
                SpanLayout {
                    text: line,
                    font: SpanFont { id, size },
                    colour: self.text_colour,
                    coords: (line_x, line_y),
                }
            })
            .collect();

        let page = self.page_mut()?;
        for span in spans {
            page.add_span(span);
        }
        Ok(())
    }

    fn draw_line(&mut self, x1: Pt, y1: Pt, x2: Pt, y2: Pt) -> Result<(), FlowError> {
        let page_height = self.page_size.1;
        let rule = RuleLayout {
            from: (x1, page_height - y1),
            to: (x2, page_height - y2),
            colour: self.draw_colour,
            width: self.line_width,
        };
        self.page_mut()?.add_rule(rule);
        Ok(())
    }

    fn add_page(&mut self) -> Result<(), FlowError> {
        self.current_page = self.document.add_page(Page::new(self.page_size));
        Ok(())
    }

    fn line_height_factor(&self) -> f32 {
        DEFAULT_LINE_HEIGHT
    }

    fn scale_factor(&self) -> f32 {
        1.0
    }

    fn set_text_colour(&mut self, colour: Colour) {
        self.text_colour = colour;
    }

    fn set_draw_colour(&mut self, colour: Colour) {
        self.draw_colour = colour;
    }

    fn set_line_width(&mut self, width: Pt) {
        self.line_width = width;
    }

    fn reset_font(&mut self) -> Result<(), FlowError> {
        self.set_font_size(DEFAULT_FONT_SIZE);
        self.set_font(DEFAULT_FONT_FAMILY, FontStyle::Normal, 400)?;
        self.text_colour = colours::BLACK;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::A4;

    #[test]
    fn selecting_a_font_without_any_registered_fails() {
        let mut surface = PdfSurface::new(A4);
        let err = surface
            .set_font("Montserrat", FontStyle::Normal, 400)
            .expect_err("no fonts");
        assert!(matches!(err, FlowError::NoFonts));
    }

    #[test]
    fn drawing_text_without_fonts_fails() {
        let mut surface = PdfSurface::new(A4);
        let options = TextDrawOptions {
            max_width: None,
            align: TextAlign::Left,
            line_height_factor: DEFAULT_LINE_HEIGHT,
        };
        assert!(matches!(
            surface.draw_text("hi", Pt(0.0), Pt(0.0), &options),
            Err(FlowError::NoFonts)
        ));
    }

    #[test]
    fn rules_are_flipped_into_pdf_space() {
        let mut surface = PdfSurface::new(A4);
        surface
            .draw_line(Pt(10.0), Pt(100.0), Pt(50.0), Pt(100.0))
            .unwrap();
        surface.add_page().unwrap();
        assert_eq!(surface.page_count(), 2);

        let doc = surface.finish();
        let first = doc.id_of_page_index(0).unwrap();
        let page = &doc.pages[first];
        assert_eq!(page.contents.len(), 1);
        match &page.contents[0] {
            crate::page::PageContents::Rule(rule) => {
                assert_eq!(rule.from, (Pt(10.0), A4.1 - Pt(100.0)));
                assert_eq!(rule.to, (Pt(50.0), A4.1 - Pt(100.0)));
            }
            other => panic!("expected a rule, got {other:?}"),
        }
    }
}
