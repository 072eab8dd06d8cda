//! Text measurement. Nothing here touches region or page state.

use crate::surface::Surface;
use crate::units::Pt;

/// Width of `text` laid out on a single line in the surface's active font at `font_size`,
/// clamped to `max_width` when one is given
pub fn text_width<S: Surface + ?Sized>(
    surface: &S,
    text: &str,
    font_size: Pt,
    max_width: Option<Pt>,
) -> Pt {
    let width = surface.string_unit_width(text) * font_size / surface.scale_factor();
    match max_width {
        Some(max_width) if width > max_width => max_width,
        _ => width,
    }
}

/// Height of `text` once wrapped at `max_width`. Each line takes `line_height` times the font
/// size, falling back to the surface's own factor. Empty text still takes one line.
pub fn text_height<S: Surface + ?Sized>(
    surface: &S,
    text: &str,
    max_width: Pt,
    font_size: Pt,
    line_height: Option<f32>,
) -> Pt {
    let factor = line_height.unwrap_or_else(|| surface.line_height_factor());
    let line_count = surface.split_text_to_size(text, max_width).len().max(1);
    (line_count as f32 * factor) * font_size / surface.scale_factor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::RecordingSurface;

    #[test]
    fn width_is_clamped_to_max_width() {
        let surface = RecordingSurface::new().with_char_width(0.5);
        assert_eq!(text_width(&surface, "abcd", Pt(10.0), None), Pt(20.0));
        assert_eq!(text_width(&surface, "abcd", Pt(10.0), Some(Pt(15.0))), Pt(15.0));
        assert_eq!(text_width(&surface, "abcd", Pt(10.0), Some(Pt(50.0))), Pt(20.0));
    }

    #[test]
    fn width_respects_the_scale_factor() {
        let surface = RecordingSurface::new()
            .with_char_width(0.5)
            .with_scale_factor(2.0);
        assert_eq!(text_width(&surface, "abcd", Pt(10.0), None), Pt(10.0));
    }

    #[test]
    fn height_counts_wrapped_lines() {
        let mut surface = RecordingSurface::new()
            .with_char_width(0.5)
            .with_line_height_factor(1.0);
        surface.set_font_size(Pt(10.0));
        // "aaaa bbbb" fits in 45pt, "cccc" goes on a second line
        assert_eq!(
            text_height(&surface, "aaaa bbbb cccc", Pt(45.0), Pt(10.0), None),
            Pt(20.0)
        );
        assert_eq!(
            text_height(&surface, "aaaa bbbb cccc", Pt(45.0), Pt(10.0), Some(1.5)),
            Pt(30.0)
        );
    }

    #[test]
    fn empty_text_takes_one_line() {
        let surface = RecordingSurface::new().with_line_height_factor(1.0);
        assert_eq!(text_height(&surface, "", Pt(100.0), Pt(12.0), None), Pt(12.0));
    }

    #[test]
    fn measuring_draws_nothing() {
        let surface = RecordingSurface::new();
        text_width(&surface, "some text", Pt(12.0), None);
        text_height(&surface, "some text", Pt(30.0), Pt(12.0), None);
        assert!(surface.calls().is_empty());
    }
}
