//! A surface with fixed-advance metrics that records every call made against it.
//!
//! Useful for dry runs (how many pages will this take?) and for asserting on exact
//! coordinates in tests without parsing a PDF back.

use super::{wrap::wrap_text, FontStyle, Surface, TextDrawOptions};
use crate::colour::{colours, Colour};
use crate::error::FlowError;
use crate::layout::options::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE};
use crate::pagesize::{PageSize, A4};
use crate::units::Pt;

/// The font selection active when a call was recorded
#[derive(Debug, Clone, PartialEq)]
pub struct FontSelection {
    pub family: String,
    pub style: FontStyle,
    pub weight: u16,
    pub size: Pt,
}

/// One recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Text {
        text: String,
        x: Pt,
        y: Pt,
        options: TextDrawOptions,
        font: FontSelection,
        colour: Colour,
        page: usize,
    },
    Line {
        from: (Pt, Pt),
        to: (Pt, Pt),
        colour: Colour,
        width: Pt,
        page: usize,
    },
    AddPage,
    SetFont {
        family: String,
        style: FontStyle,
        weight: u16,
    },
    SetFontSize(Pt),
}

pub struct RecordingSurface {
    page_size: PageSize,
    char_width: f32,
    scale_factor: f32,
    line_height_factor: f32,
    known_families: Option<Vec<String>>,
    font: FontSelection,
    text_colour: Colour,
    draw_colour: Colour,
    line_width: Pt,
    pages: usize,
    calls: Vec<DrawCall>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        RecordingSurface {
            page_size: A4,
            char_width: 0.5,
            scale_factor: 1.0,
            line_height_factor: 1.15,
            known_families: None,
            font: FontSelection {
                family: DEFAULT_FONT_FAMILY.to_string(),
                style: FontStyle::Normal,
                weight: 400,
                size: DEFAULT_FONT_SIZE,
            },
            text_colour: colours::BLACK,
            draw_colour: colours::BLACK,
            line_width: Pt(1.0),
            pages: 1,
            calls: Vec::new(),
        }
    }
}

impl RecordingSurface {
    /// A4 pages, every glyph half an em wide, 1.15 line height
    pub fn new() -> RecordingSurface {
        RecordingSurface::default()
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Advance of every glyph, in em
    pub fn with_char_width(mut self, char_width: f32) -> Self {
        self.char_width = char_width;
        self
    }

    pub fn with_scale_factor(mut self, scale_factor: f32) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    pub fn with_line_height_factor(mut self, factor: f32) -> Self {
        self.line_height_factor = factor;
        self
    }

    /// Restrict [Surface::set_font] to the given families (case-insensitive). The default
    /// family stays selectable so [Surface::reset_font] never fails. By default any family is
    /// accepted.
    pub fn with_known_families<S: ToString>(mut self, families: &[S]) -> Self {
        self.known_families = Some(families.iter().map(ToString::to_string).collect());
        self
    }

    /// Every call recorded so far, in order
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Recorded text draws as `(text, x, y)`
    pub fn texts(&self) -> Vec<(&str, Pt, Pt)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, x, y, .. } => Some((text.as_str(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    /// Recorded rules as `((x1, y1), (x2, y2))`
    pub fn lines(&self) -> Vec<((Pt, Pt), (Pt, Pt))> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// Number of pages, including the initial one
    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// The currently active font selection
    pub fn font(&self) -> &FontSelection {
        &self.font
    }

    fn measure(&self, text: &str) -> Pt {
        self.string_unit_width(text) * self.font.size / self.scale_factor
    }
}

impl Surface for RecordingSurface {
    fn page_width(&self) -> Pt {
        self.page_size.0
    }

    fn page_height(&self) -> Pt {
        self.page_size.1
    }

    fn set_font(&mut self, family: &str, style: FontStyle, weight: u16) -> Result<(), FlowError> {
        if let Some(known) = &self.known_families {
            let accepted = family.eq_ignore_ascii_case(DEFAULT_FONT_FAMILY)
                || known.iter().any(|k| k.eq_ignore_ascii_case(family));
            if !accepted {
                return Err(FlowError::UnknownFont {
                    family: family.to_string(),
                    style,
                    weight,
                });
            }
        }

        self.font.family = family.to_string();
        self.font.style = style;
        self.font.weight = weight;
        self.calls.push(DrawCall::SetFont {
            family: family.to_string(),
            style,
            weight,
        });
        Ok(())
    }

    fn set_font_size(&mut self, size: Pt) {
        self.font.size = size;
        self.calls.push(DrawCall::SetFontSize(size));
    }

    fn font_size(&self) -> Pt {
        self.font.size
    }

    fn string_unit_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.char_width
    }

    fn split_text_to_size(&self, text: &str, max_width: Pt) -> Vec<String> {
        wrap_text(text, max_width, |s| self.measure(s))
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: Pt,
        y: Pt,
        options: &TextDrawOptions,
    ) -> Result<(), FlowError> {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            options: *options,
            font: self.font.clone(),
            colour: self.text_colour,
            page: self.pages,
        });
        Ok(())
    }

    fn draw_line(&mut self, x1: Pt, y1: Pt, x2: Pt, y2: Pt) -> Result<(), FlowError> {
        self.calls.push(DrawCall::Line {
            from: (x1, y1),
            to: (x2, y2),
            colour: self.draw_colour,
            width: self.line_width,
            page: self.pages,
        });
        Ok(())
    }

    fn add_page(&mut self) -> Result<(), FlowError> {
        self.pages += 1;
        self.calls.push(DrawCall::AddPage);
        Ok(())
    }

    fn line_height_factor(&self) -> f32 {
        self.line_height_factor
    }

    fn scale_factor(&self) -> f32 {
        self.scale_factor
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

    #[test]
    fn measures_with_fixed_advance() {
        let mut surface = RecordingSurface::new().with_char_width(0.5);
        surface.set_font_size(Pt(10.0));
        assert_eq!(surface.string_unit_width("abcd"), 2.0);
        assert_eq!(
            surface.split_text_to_size("aaaa bbbb cccc", Pt(50.0)),
            vec!["aaaa bbbb", "cccc"]
        );
    }

    #[test]
    fn rejects_unknown_families_when_restricted() {
        let mut surface = RecordingSurface::new().with_known_families(&["Montserrat"]);
        assert!(surface.set_font("montserrat", FontStyle::Bold, 700).is_ok());
        let err = surface
            .set_font("Comic Sans", FontStyle::Normal, 400)
            .expect_err("unknown family");
        assert!(matches!(err, FlowError::UnknownFont { .. }));
    }

    #[test]
    fn restricted_surfaces_can_always_reset() {
        let mut surface = RecordingSurface::new().with_known_families(&["Montserrat"]);
        surface.set_font("Montserrat", FontStyle::Normal, 400).unwrap();
        surface.reset_font().unwrap();
        assert_eq!(surface.font().family, DEFAULT_FONT_FAMILY);
    }

    #[test]
    fn tags_draws_with_their_page() {
        let mut surface = RecordingSurface::new();
        surface.draw_line(Pt(0.0), Pt(1.0), Pt(2.0), Pt(1.0)).unwrap();
        surface.add_page().unwrap();
        surface.draw_line(Pt(0.0), Pt(1.0), Pt(2.0), Pt(1.0)).unwrap();

        let pages: Vec<usize> = surface
            .calls()
            .iter()
            .filter_map(|c| match c {
                DrawCall::Line { page, .. } => Some(*page),
                _ => None,
            })
            .collect();
        assert_eq!(pages, vec![1, 2]);
        assert_eq!(surface.page_count(), 2);
    }
}
