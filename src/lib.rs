//! Flow layout for paginated documents.
//!
//! Text blocks, rules and lists are laid out one after another in regions that track a write
//! cursor, with page breaks inserted whenever the next element would overflow the page. Layout
//! is independent of the output medium: it only talks to a [Surface](surface::Surface), and
//! the crate ships a PDF surface with embedded TrueType / OpenType fonts.
//!
//! ```no_run
//! use pdf_flow::layout::{add_text, PageOptions, PageState, RegionOptions, RegionState, TextOptions};
//! use pdf_flow::surface::{pdf::PdfSurface, FontStyle};
//! use pdf_flow::{pagesize, Font, Pt};
//!
//! let font = Font::load(std::fs::read("Montserrat-Regular.ttf")?)?;
//! let mut surface = PdfSurface::new(pagesize::A4);
//! surface.register_font(font, "Montserrat", FontStyle::Normal);
//!
//! let page = PageState::shared(PageOptions::default().padding(Pt(36.0)));
//! let mut region = RegionState::new(&page, RegionOptions::default());
//! let options = TextOptions::default().size(Pt(12.0));
//! add_text(&mut surface, &mut region, "Hello, world!", &options)?;
//!
//! surface.write(std::fs::File::create("hello.pdf")?)?;
//! # Ok::<(), pdf_flow::FlowError>(())
//! ```

mod colour;
pub use colour::*;

mod content;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// Region and page state, measurement, positioning, pagination and the element renderers
pub mod layout;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

/// Output media the layout engine draws onto
pub mod surface;

pub mod templates;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
