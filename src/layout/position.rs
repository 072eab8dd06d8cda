//! Absolute coordinates of elements within a region.
//!
//! Coordinates are in document space: the origin is the top-left corner of the page and `y`
//! grows downwards.

use super::measure::text_width;
use super::options::Placement;
use super::region::RegionState;
use crate::surface::{Surface, TextAlign};
use crate::units::Pt;

/// Absolute x of an element starting at `base_x` within `region`.
///
/// With `alignment`, the draw origin moves to where the surface expects it for that alignment:
/// half the measured width further right for centred text, the full width for right-aligned
/// text.
pub fn resolve_x(
    base_x: Pt,
    region: &RegionState,
    placement: &Placement,
    alignment: Option<(TextAlign, Pt)>,
) -> Pt {
    let mut x = base_x
        + region.page().horizontal_padding()
        + region.x
        + region.padding_horizontal
        + placement.offsets.left
        - placement.offsets.right
        + placement.margins.left;

    match alignment {
        Some((TextAlign::Center, width)) => x += width / 2.0,
        Some((TextAlign::Right, width)) => x += width,
        Some((TextAlign::Left, _)) | None => {}
    }
    x
}

/// Absolute y of an element starting at `base_y` within `region`, given the region's current
/// cursor. The region's vertical padding only applies to the first element on a page.
///
/// An explicit `line_height` pushes the element down by the extra leading above its first
/// line, `(line_height - 1) * font_size`.
pub fn resolve_y(
    base_y: Pt,
    region: &RegionState,
    placement: &Placement,
    font_size: Pt,
    line_height: Option<f32>,
) -> Pt {
    let mut y = base_y + region.y;
    if region.is_first_element() {
        y += region.padding_vertical;
    }
    y += placement.offsets.top - placement.offsets.bottom + placement.margins.top;
    y += region.cursor_y();

    if let Some(factor) = line_height {
        y += font_size * (factor - 1.0);
    }
    y
}

/// The width an element in `region` may occupy: the element's own maximum, else the region's,
/// else the page width, less the horizontal padding of both region and page on each side
pub fn effective_width<S: Surface + ?Sized>(
    surface: &S,
    region: &RegionState,
    max_width: Option<Pt>,
) -> Pt {
    let width = max_width
        .or(region.max_width)
        .unwrap_or_else(|| surface.page_width());
    width - region.padding_horizontal * 2.0 - region.page().horizontal_padding() * 2.0
}

/// The x that horizontally centres `text` on the page
pub fn center_x<S: Surface + ?Sized>(
    surface: &S,
    text: &str,
    font_size: Pt,
    max_width: Option<Pt>,
) -> Pt {
    (surface.page_width() - text_width(surface, text, font_size, max_width)) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::page_state::{PageOptions, PageState};
    use crate::layout::region::RegionOptions;
    use crate::layout::Margins;
    use crate::surface::recording::RecordingSurface;

    fn region(page: PageOptions, options: RegionOptions) -> RegionState {
        RegionState::new(&PageState::shared(page), options)
    }

    #[test]
    fn x_sums_every_horizontal_contribution() {
        let region = region(
            PageOptions::default().padding_horizontal(Pt(5.0)),
            RegionOptions::default()
                .x(Pt(100.0))
                .padding_horizontal(Pt(10.0)),
        );
        let placement = Placement::default()
            .offsets(Margins::trbl(Pt(0.0), Pt(2.0), Pt(0.0), Pt(3.0)))
            .margins(Margins::trbl(Pt(0.0), Pt(0.0), Pt(0.0), Pt(7.0)));
        assert_eq!(
            resolve_x(Pt(1.0), &region, &placement, None),
            Pt(1.0 + 5.0 + 100.0 + 10.0 + 3.0 - 2.0 + 7.0)
        );
    }

    #[test]
    fn x_moves_with_alignment() {
        let region = region(PageOptions::default(), RegionOptions::default());
        let placement = Placement::default();
        let width = Pt(40.0);
        assert_eq!(
            resolve_x(Pt(10.0), &region, &placement, Some((TextAlign::Left, width))),
            Pt(10.0)
        );
        assert_eq!(
            resolve_x(Pt(10.0), &region, &placement, Some((TextAlign::Center, width))),
            Pt(30.0)
        );
        assert_eq!(
            resolve_x(Pt(10.0), &region, &placement, Some((TextAlign::Right, width))),
            Pt(50.0)
        );
    }

    #[test]
    fn only_the_first_element_gets_region_padding() {
        let mut region = region(
            PageOptions::default(),
            RegionOptions::default()
                .padding_vertical(Pt(10.0))
                .cursor_y(Pt(50.0)),
        );
        let placement = Placement::default();
        assert_eq!(
            resolve_y(Pt(0.0), &region, &placement, Pt(16.0), None),
            Pt(60.0)
        );

        region.add_element();
        assert_eq!(
            resolve_y(Pt(0.0), &region, &placement, Pt(16.0), None),
            Pt(50.0)
        );
    }

    #[test]
    fn explicit_line_height_adds_leading() {
        let region = region(PageOptions::default(), RegionOptions::default().cursor_y(Pt(0.0)));
        let placement = Placement::default().margins(Margins::top(Pt(4.0)));
        assert_eq!(
            resolve_y(Pt(0.0), &region, &placement, Pt(10.0), Some(1.5)),
            Pt(9.0)
        );
        assert_eq!(
            resolve_y(Pt(0.0), &region, &placement, Pt(10.0), None),
            Pt(4.0)
        );
    }

    #[test]
    fn effective_width_falls_back_to_the_page() {
        let surface = RecordingSurface::new().with_page_size((Pt(600.0), Pt(800.0)));
        let padded = region(
            PageOptions::default().padding(Pt(20.0)),
            RegionOptions::default().padding_horizontal(Pt(30.0)),
        );
        assert_eq!(effective_width(&surface, &padded, None), Pt(600.0 - 60.0 - 40.0));

        let narrow = region(
            PageOptions::default(),
            RegionOptions::default().max_width(Pt(200.0)),
        );
        assert_eq!(effective_width(&surface, &narrow, None), Pt(200.0));
        assert_eq!(effective_width(&surface, &narrow, Some(Pt(50.0))), Pt(50.0));
    }

    #[test]
    fn centred_text_straddles_the_page_centre() {
        let mut surface = RecordingSurface::new()
            .with_page_size((Pt(600.0), Pt(800.0)))
            .with_char_width(0.5);
        surface.set_font_size(Pt(10.0));
        let x = center_x(&surface, "abcd", Pt(10.0), None);
        assert_eq!(x, Pt(290.0));
        assert_eq!(x + text_width(&surface, "abcd", Pt(10.0), None) / 2.0, Pt(300.0));
    }
}
