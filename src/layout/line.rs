use super::options::LineOptions;
use super::paginate::advance_if_needed;
use super::position::{effective_width, resolve_x, resolve_y};
use super::region::RegionState;
use crate::error::FlowError;
use crate::surface::Surface;
use crate::units::Pt;
use log::trace;

/// Draw a horizontal rule across the region at its cursor.
///
/// The rule spans the available width plus the region's horizontal padding on both sides.
/// Afterwards the cursor sits one point below the rule plus its bottom margin, and a page
/// break is taken if that leaves no room.
pub fn add_line<S: Surface + ?Sized>(
    surface: &mut S,
    region: &mut RegionState,
    options: &LineOptions,
) -> Result<(), FlowError> {
    let placement = &options.placement;

    region.undo_trailing_padding();

    let x = resolve_x(placement.x, region, placement, None);
    let y = resolve_y(placement.y, region, placement, surface.font_size(), None);
    let x2 = x
        + effective_width(surface, region, options.max_width)
        + region.padding_horizontal * 2.0;

    surface.set_draw_colour(options.colour);
    surface.set_line_width(options.width);
    surface.draw_line(x, y, x2, y)?;
    trace!("region {:?}: rule from {x} to {x2} at {y}", region.id);

    region.set_cursor_y(y + placement.margins.bottom + Pt(1.0));
    // counted before the page check so a break leaves the new page with no elements
    region.add_element();
    advance_if_needed(surface, region, Pt(1.0))?;
    Ok(())
}
