use super::measure::{text_height, text_width};
use super::options::{FontOptions, TextOptions, DEFAULT_LINE_HEIGHT};
use super::paginate::advance_if_needed;
use super::position::{center_x, effective_width, resolve_x, resolve_y};
use super::region::RegionState;
use crate::error::FlowError;
use crate::surface::{Surface, TextDrawOptions};
use log::trace;

/// Select the element's font on the surface
pub(crate) fn apply_font<S: Surface + ?Sized>(
    surface: &mut S,
    font: &FontOptions,
) -> Result<(), FlowError> {
    surface.set_font(&font.family, font.style, font.weight)?;
    surface.set_font_size(font.size);
    Ok(())
}

/// Lay out a block of text at the region's cursor, wrapping it to the available width and
/// starting a new page first if the whole block does not fit.
///
/// The block is followed by the region's vertical padding. The next element takes that
/// padding back before placing itself, so it only ever shows up below the last element.
/// The surface's default font is restored afterwards.
pub fn add_text<S: Surface + ?Sized>(
    surface: &mut S,
    region: &mut RegionState,
    text: &str,
    options: &TextOptions,
) -> Result<(), FlowError> {
    let size = options.font.size;
    let placement = &options.placement;

    apply_font(surface, &options.font)?;
    surface.set_text_colour(options.colour);

    region.undo_trailing_padding();

    let width = effective_width(surface, region, options.max_width);
    let height = text_height(surface, text, width, size, options.line_height);
    advance_if_needed(surface, region, height)?;

    let base_x = if options.center {
        center_x(surface, text, size, options.max_width)
    } else {
        placement.x
    };
    let measured = text_width(surface, text, size, options.max_width);
    let x = resolve_x(base_x, region, placement, Some((options.align, measured)));
    let y = resolve_y(placement.y, region, placement, size, options.line_height);

    surface.draw_text(
        text,
        x,
        y,
        &TextDrawOptions {
            max_width: Some(width),
            align: options.align,
            line_height_factor: options.line_height.unwrap_or(DEFAULT_LINE_HEIGHT),
        },
    )?;
    trace!("region {:?}: text at ({x}, {y}), height {height}", region.id);

    let mut cursor = region.cursor_y();
    if region.is_first_element() {
        cursor += region.padding_vertical;
    }
    cursor += placement.margins.top + placement.margins.bottom + height + region.padding_vertical;
    region.set_cursor_y(cursor);
    region.add_element();

    surface.reset_font()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::options::Placement;
    use crate::layout::page_state::{PageOptions, PageState};
    use crate::layout::region::RegionOptions;
    use crate::layout::Margins;
    use crate::surface::recording::{DrawCall, RecordingSurface};
    use crate::surface::TextAlign;
    use crate::units::Pt;

    #[test]
    fn second_element_reclaims_the_trailing_padding() {
        let mut surface = RecordingSurface::new().with_line_height_factor(1.0);
        let page = PageState::shared(PageOptions::default());
        let mut region = RegionState::new(
            &page,
            RegionOptions::default()
                .padding_vertical(Pt(10.0))
                .cursor_y(Pt(0.0)),
        );
        let options = TextOptions::default().size(Pt(10.0));

        add_text(&mut surface, &mut region, "one", &options).unwrap();
        assert_eq!(region.cursor_y(), Pt(30.0));

        add_text(&mut surface, &mut region, "two", &options).unwrap();
        let texts = surface.texts();
        assert_eq!(texts[1].2, Pt(20.0));
        assert_eq!(region.cursor_y(), Pt(40.0));
        assert_eq!(region.element_count(), 2);
    }

    #[test]
    fn margins_surround_the_block() {
        let mut surface = RecordingSurface::new().with_line_height_factor(1.0);
        let page = PageState::shared(PageOptions::default());
        let mut region = RegionState::new(&page, RegionOptions::default());
        let options = TextOptions::default()
            .size(Pt(10.0))
            .margins(Margins::trbl(Pt(5.0), Pt(0.0), Pt(7.0), Pt(3.0)));

        add_text(&mut surface, &mut region, "text", &options).unwrap();
        assert_eq!(surface.texts()[0], ("text", Pt(3.0), Pt(5.0)));
        assert_eq!(region.cursor_y(), Pt(22.0));
    }

    #[test]
    fn centred_text_is_anchored_on_the_page_centre() {
        let mut surface = RecordingSurface::new()
            .with_page_size((Pt(600.0), Pt(800.0)))
            .with_char_width(0.5);
        let page = PageState::shared(PageOptions::default());
        let mut region = RegionState::new(&page, RegionOptions::default());
        let options = TextOptions::default()
            .size(Pt(10.0))
            .centered()
            .align(TextAlign::Center);

        add_text(&mut surface, &mut region, "abcd", &options).unwrap();
        assert_eq!(surface.texts()[0].1, Pt(300.0));
    }

    #[test]
    fn surface_font_is_restored_afterwards() {
        let mut surface = RecordingSurface::new();
        let page = PageState::shared(PageOptions::default());
        let mut region = RegionState::new(&page, RegionOptions::default());
        let options = TextOptions::default()
            .font(FontOptions::default().family("Montserrat").weight(700).size(Pt(20.0)));

        add_text(&mut surface, &mut region, "bold", &options).unwrap();

        let drawn_with = surface.calls().iter().find_map(|call| match call {
            DrawCall::Text { font, .. } => Some(font.clone()),
            _ => None,
        });
        let drawn_with = drawn_with.unwrap();
        assert_eq!(drawn_with.family, "Montserrat");
        assert_eq!(drawn_with.weight, 700);
        assert_eq!(drawn_with.size, Pt(20.0));

        assert_eq!(surface.font().family, "Helvetica");
        assert_eq!(surface.font().weight, 400);
        assert_eq!(surface.font().size, Pt(16.0));
    }

    #[test]
    fn explicit_position_is_added_to_the_flow() {
        let mut surface = RecordingSurface::new();
        let page = PageState::shared(PageOptions::default());
        let mut region = RegionState::new(&page, RegionOptions::default().cursor_y(Pt(100.0)));
        let options = TextOptions::default()
            .size(Pt(10.0))
            .placement(Placement::at(Pt(40.0), Pt(8.0)));

        add_text(&mut surface, &mut region, "here", &options).unwrap();
        assert_eq!(surface.texts()[0], ("here", Pt(40.0), Pt(108.0)));
    }
}
