//! Drawing surfaces the layout engine renders onto.
//!
//! A [Surface] is the engine's only view of the output medium: it knows its page size, its
//! active font, how wide a string is, how to wrap a string to a width, and how to put text
//! and rules on the current page. Coordinates handed to a surface are in document space:
//! the origin is the top-left corner of the page and `y` grows downwards.
//!
//! Two surfaces ship with the crate:
//!
//! - [PdfSurface](crate::surface::pdf::PdfSurface) renders to a PDF [Document](crate::Document)
//!   using embedded TrueType / OpenType fonts
//! - [RecordingSurface](crate::surface::recording::RecordingSurface) uses fixed-advance metrics
//!   and records every call, which makes it useful for dry runs and tests

use crate::colour::Colour;
use crate::error::FlowError;
use crate::units::Pt;
use std::fmt;

pub mod pdf;
pub mod recording;
pub mod wrap;

/// The style axis of a font selection, next to family and weight
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Bold,
    BoldItalic,
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
            FontStyle::Bold => "bold",
            FontStyle::BoldItalic => "bolditalic",
        })
    }
}

/// Horizontal alignment of drawn text relative to the draw origin. Surfaces treat the `x`
/// passed to [Surface::draw_text] as the left edge, the centre, or the right edge of each
/// line respectively.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Parameters for a single [Surface::draw_text] call. Text is always anchored at the top of
/// its first line.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextDrawOptions {
    /// Width to wrap the text at; `None` only breaks at explicit newlines
    pub max_width: Option<Pt>,
    pub align: TextAlign,
    /// Multiplier of the font size giving the distance between consecutive baselines
    pub line_height_factor: f32,
}

/// The drawing primitives the layout engine needs from an output medium
pub trait Surface {
    /// Width of the current page
    fn page_width(&self) -> Pt;

    /// Height of the current page
    fn page_height(&self) -> Pt;

    /// Select the active font used by subsequent measuring and drawing
    fn set_font(&mut self, family: &str, style: FontStyle, weight: u16) -> Result<(), FlowError>;

    fn set_font_size(&mut self, size: Pt);

    fn font_size(&self) -> Pt;

    /// Width of `text` in the active font, in em units (i.e. for a font size of 1). Scale by
    /// the font size and divide by [Surface::scale_factor] to obtain document units.
    fn string_unit_width(&self, text: &str) -> f32;

    /// Greedily wrap `text` into lines no wider than `max_width` using the active font and
    /// size. Explicit newlines always break. Never returns an empty list.
    fn split_text_to_size(&self, text: &str, max_width: Pt) -> Vec<String>;

    /// Place `text` with its top-left (or top-centre / top-right, see [TextAlign]) at `(x, y)`
    fn draw_text(
        &mut self,
        text: &str,
        x: Pt,
        y: Pt,
        options: &TextDrawOptions,
    ) -> Result<(), FlowError>;

    /// Draw a straight rule between two points
    fn draw_line(&mut self, x1: Pt, y1: Pt, x2: Pt, y2: Pt) -> Result<(), FlowError>;

    /// Append a new page and make it the current page
    fn add_page(&mut self) -> Result<(), FlowError>;

    /// Surface-wide default line height multiplier
    fn line_height_factor(&self) -> f32;

    /// Conversion between the surface's internal units and document units
    fn scale_factor(&self) -> f32;

    fn set_text_colour(&mut self, colour: Colour);

    fn set_draw_colour(&mut self, colour: Colour);

    /// Stroke width of subsequently drawn rules
    fn set_line_width(&mut self, width: Pt);

    /// Restore the surface's default font, font size and text colour
    fn reset_font(&mut self) -> Result<(), FlowError>;
}
