use crate::surface::FontStyle;
use thiserror::Error;

/// All errors that the crate can generate. Layout itself is total over its inputs; every
/// error originates in a drawing surface and is handed back to the caller untouched.
#[derive(Error, Debug)]
pub enum FlowError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error("no font registered for family {family:?} ({style}, weight {weight})")]
    /// The surface has no font matching the requested family
    UnknownFont {
        family: String,
        style: FontStyle,
        weight: u16,
    },

    #[error("no fonts have been registered with the surface")]
    /// Text was measured or drawn before any font was registered
    NoFonts,

    #[error("page is missing from the document")]
    /// A page referenced by the document order no longer exists
    PageMissing,
}
