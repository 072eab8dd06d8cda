//! Per-element configuration and the engine-wide defaults.

use super::Margins;
use crate::colour::{colours, Colour};
use crate::surface::{FontStyle, TextAlign};
use crate::units::Pt;

/// Font size every element starts from, and the size the surface is reset to afterwards
pub const DEFAULT_FONT_SIZE: Pt = Pt(16.0);
/// Family every element starts from, and the family the surface is reset to afterwards
pub const DEFAULT_FONT_FAMILY: &str = "Helvetica";
/// Line height multiplier used when none is given
pub const DEFAULT_LINE_HEIGHT: f32 = 1.15;
/// Extra left indent of every list item
pub const DEFAULT_ITEM_INDENT: Pt = Pt(10.0);
/// Glyph prefixed to unordered list items
pub const DEFAULT_BULLET: &str = "•";

/// Font selection for an element
#[derive(Debug, Clone, PartialEq)]
pub struct FontOptions {
    pub size: Pt,
    pub family: String,
    pub style: FontStyle,
    /// 100 = thin, 400 = normal, 700 = bold, 900 = black
    pub weight: u16,
}

impl Default for FontOptions {
    fn default() -> Self {
        FontOptions {
            size: DEFAULT_FONT_SIZE,
            family: DEFAULT_FONT_FAMILY.to_string(),
            style: FontStyle::Normal,
            weight: 400,
        }
    }
}

impl FontOptions {
    pub fn size(mut self, size: Pt) -> Self {
        self.size = size;
        self
    }

    pub fn family<S: ToString>(mut self, family: S) -> Self {
        self.family = family.to_string();
        self
    }

    pub fn style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    pub fn weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }
}

/// Where an element goes relative to the flow: a base origin, offsets that shift it, and
/// margins that space it from its neighbours.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Placement {
    /// Base x, added to everything the region contributes
    pub x: Pt,
    /// Base y, added to everything the region contributes
    pub y: Pt,
    /// `left` and `top` push the element right and down; `right` and `bottom` pull it back
    pub offsets: Margins,
    pub margins: Margins,
}

impl Placement {
    pub fn at(x: Pt, y: Pt) -> Placement {
        Placement {
            x,
            y,
            ..Placement::default()
        }
    }

    pub fn offsets(mut self, offsets: Margins) -> Self {
        self.offsets = offsets;
        self
    }

    pub fn margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }
}

/// Options for [add_text](crate::layout::text::add_text)
#[derive(Debug, Clone, PartialEq)]
pub struct TextOptions {
    pub font: FontOptions,
    /// Baseline distance as a multiple of the font size. When set it also shifts the first
    /// line down by `(factor - 1) * size`; when unset the surface default is used for
    /// measuring only.
    pub line_height: Option<f32>,
    /// Wrap width; falls back to the region width, then the page width
    pub max_width: Option<Pt>,
    pub align: TextAlign,
    /// Horizontally centre the text on the page, ignoring the flow's x
    pub center: bool,
    pub placement: Placement,
    pub colour: Colour,
}

impl Default for TextOptions {
    fn default() -> Self {
        TextOptions {
            font: FontOptions::default(),
            line_height: None,
            max_width: None,
            align: TextAlign::Left,
            center: false,
            placement: Placement::default(),
            colour: colours::BLACK,
        }
    }
}

impl TextOptions {
    pub fn font(mut self, font: FontOptions) -> Self {
        self.font = font;
        self
    }

    pub fn size(mut self, size: Pt) -> Self {
        self.font.size = size;
        self
    }

    pub fn weight(mut self, weight: u16) -> Self {
        self.font.weight = weight;
        self
    }

    pub fn line_height(mut self, factor: f32) -> Self {
        self.line_height = Some(factor);
        self
    }

    pub fn max_width(mut self, max_width: Pt) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn centered(mut self) -> Self {
        self.center = true;
        self
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn margins(mut self, margins: Margins) -> Self {
        self.placement.margins = margins;
        self
    }

    pub fn offsets(mut self, offsets: Margins) -> Self {
        self.placement.offsets = offsets;
        self
    }

    pub fn colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }
}

/// Options for [add_line](crate::layout::line::add_line)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineOptions {
    pub placement: Placement,
    /// Length basis of the rule; falls back to the region width, then the page width
    pub max_width: Option<Pt>,
    pub colour: Colour,
    /// Stroke width
    pub width: Pt,
}

impl Default for LineOptions {
    fn default() -> Self {
        LineOptions {
            placement: Placement::default(),
            max_width: None,
            colour: colours::BLACK,
            width: Pt(1.0),
        }
    }
}

impl LineOptions {
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn margins(mut self, margins: Margins) -> Self {
        self.placement.margins = margins;
        self
    }

    pub fn offsets(mut self, offsets: Margins) -> Self {
        self.placement.offsets = offsets;
        self
    }

    pub fn max_width(mut self, max_width: Pt) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    pub fn width(mut self, width: Pt) -> Self {
        self.width = width;
        self
    }
}

/// How ordered list items are numbered
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum NumberStyle {
    /// 1. 2. 3.
    #[default]
    Decimal,
    /// I. II. III.
    Roman,
    /// a. b. c.
    Alpha,
}

/// What precedes each list item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMarker {
    Bullet(String),
    Ordered(NumberStyle),
}

impl Default for ListMarker {
    fn default() -> Self {
        ListMarker::Bullet(DEFAULT_BULLET.to_string())
    }
}

/// Options for [add_list](crate::layout::list::add_list)
#[derive(Debug, Clone, PartialEq)]
pub struct ListOptions {
    pub font: FontOptions,
    /// Baseline distance as a multiple of the font size, also the factor between consecutive
    /// items. Defaults to [DEFAULT_LINE_HEIGHT] for items.
    pub line_height: Option<f32>,
    pub max_width: Option<Pt>,
    pub align: TextAlign,
    pub center: bool,
    pub placement: Placement,
    pub colour: Colour,
    pub marker: ListMarker,
    /// Added to the base x of every item
    pub item_indent: Pt,
}

impl Default for ListOptions {
    fn default() -> Self {
        ListOptions {
            font: FontOptions::default(),
            line_height: None,
            max_width: None,
            align: TextAlign::Left,
            center: false,
            placement: Placement::default(),
            colour: colours::BLACK,
            marker: ListMarker::default(),
            item_indent: DEFAULT_ITEM_INDENT,
        }
    }
}

impl ListOptions {
    pub fn font(mut self, font: FontOptions) -> Self {
        self.font = font;
        self
    }

    pub fn size(mut self, size: Pt) -> Self {
        self.font.size = size;
        self
    }

    pub fn line_height(mut self, factor: f32) -> Self {
        self.line_height = Some(factor);
        self
    }

    pub fn max_width(mut self, max_width: Pt) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn centered(mut self) -> Self {
        self.center = true;
        self
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn margins(mut self, margins: Margins) -> Self {
        self.placement.margins = margins;
        self
    }

    pub fn offsets(mut self, offsets: Margins) -> Self {
        self.placement.offsets = offsets;
        self
    }

    pub fn colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    pub fn bullet<S: ToString>(mut self, bullet: S) -> Self {
        self.marker = ListMarker::Bullet(bullet.to_string());
        self
    }

    pub fn ordered(mut self, style: NumberStyle) -> Self {
        self.marker = ListMarker::Ordered(style);
        self
    }

    pub fn item_indent(mut self, indent: Pt) -> Self {
        self.item_indent = indent;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_engine_defaults() {
        let text = TextOptions::default();
        assert_eq!(text.font.size, Pt(16.0));
        assert_eq!(text.font.family, "Helvetica");
        assert_eq!(text.font.weight, 400);
        assert_eq!(text.line_height, None);
        assert!(!text.center);

        let list = ListOptions::default();
        assert_eq!(list.marker, ListMarker::Bullet("•".to_string()));
        assert_eq!(list.item_indent, Pt(10.0));

        assert_eq!(LineOptions::default().width, Pt(1.0));
    }

    #[test]
    fn builders_fill_nested_fields() {
        let options = TextOptions::default()
            .size(Pt(10.0))
            .margins(Margins::bottom(Pt(4.0)))
            .line_height(1.5);
        assert_eq!(options.font.size, Pt(10.0));
        assert_eq!(options.placement.margins.bottom, Pt(4.0));
        assert_eq!(options.line_height, Some(1.5));
    }
}
