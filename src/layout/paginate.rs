//! Page breaks. An element is checked once before it is drawn; elements taller than a page
//! are not split.

use super::region::RegionState;
use crate::error::FlowError;
use crate::surface::Surface;
use crate::units::Pt;
use log::debug;

/// Whether an element of `height` fits between the region's cursor and the page's bottom
/// padding
pub fn fits<S: Surface + ?Sized>(surface: &S, region: &RegionState, height: Pt) -> bool {
    region.cursor_y() + height <= surface.page_height() - region.page().bottom_padding()
}

/// Start a new page if an element of `height` does not fit on the current one. On a page
/// break the surface gains a page, the shared page count grows by one, and the region's
/// cursor moves to the top padding of the new page.
///
/// Returns whether a page break happened.
pub fn advance_if_needed<S: Surface + ?Sized>(
    surface: &mut S,
    region: &mut RegionState,
    height: Pt,
) -> Result<bool, FlowError> {
    if fits(surface, region, height) {
        return Ok(false);
    }

    surface.add_page()?;
    region.shared_page().borrow_mut().add_page();
    region.restart_page();
    debug!(
        "region {:?} moved to page {} (element of height {height} did not fit)",
        region.id,
        region.page().number_of_pages()
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::page_state::{PageOptions, PageState};
    use crate::layout::region::RegionOptions;
    use crate::surface::recording::RecordingSurface;

    #[test]
    fn fit_respects_bottom_padding() {
        let surface = RecordingSurface::new().with_page_size((Pt(600.0), Pt(800.0)));
        let page = PageState::shared(PageOptions::default().padding_vertical(Pt(50.0)));
        let region = RegionState::new(&page, RegionOptions::default().cursor_y(Pt(700.0)));
        assert!(fits(&surface, &region, Pt(50.0)));
        assert!(!fits(&surface, &region, Pt(50.5)));
    }

    #[test]
    fn advancing_adds_exactly_one_page() {
        let mut surface = RecordingSurface::new().with_page_size((Pt(600.0), Pt(800.0)));
        let page = PageState::shared(PageOptions::default().padding(Pt(20.0)));
        let mut region = RegionState::new(&page, RegionOptions::default().cursor_y(Pt(770.0)));
        region.add_element();

        assert!(advance_if_needed(&mut surface, &mut region, Pt(30.0)).unwrap());
        assert_eq!(surface.page_count(), 2);
        assert_eq!(page.borrow().number_of_pages(), 2);
        assert_eq!(region.cursor_y(), Pt(20.0));
        assert!(region.is_first_element());

        assert!(!advance_if_needed(&mut surface, &mut region, Pt(30.0)).unwrap());
        assert_eq!(surface.page_count(), 2);
    }
}
