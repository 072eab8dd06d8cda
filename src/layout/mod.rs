//! Flow layout of text, rules and lists onto paginated surfaces.
//!
//! Content is placed in [RegionState]s: rectangular flows with their own write cursor. Every
//! region on a document shares one [PageState] so that all of them agree on the page count.
//! Each renderer call measures its element, starts a new page if it does not fit, works out
//! where it goes, draws it, and moves the region's cursor below it.
//!
//! # Example
//!
//! ```
//! use pdf_flow::layout::{add_line, add_text, LineOptions, PageOptions, PageState, RegionOptions, RegionState, TextOptions};
//! use pdf_flow::surface::recording::RecordingSurface;
//! use pdf_flow::Pt;
//!
//! let mut surface = RecordingSurface::new();
//! let page = PageState::shared(PageOptions::default().padding(Pt(20.0)));
//! let mut body = RegionState::new(&page, RegionOptions::default().padding_horizontal(Pt(30.0)));
//!
//! add_text(&mut surface, &mut body, "Summary", &TextOptions::default().size(Pt(12.0)))?;
//! add_line(&mut surface, &mut body, &LineOptions::default())?;
//! assert_eq!(surface.texts().len(), 1);
//! # Ok::<(), pdf_flow::FlowError>(())
//! ```

mod margins;
pub mod line;
pub mod list;
pub mod measure;
pub mod options;
pub mod page_state;
pub mod paginate;
pub mod position;
pub mod region;
pub mod text;

pub use line::add_line;
pub use list::add_list;
pub use margins::*;
pub use options::*;
pub use page_state::*;
pub use region::*;
pub use text::add_text;
