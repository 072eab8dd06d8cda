use crate::units::Pt;
use std::cell::RefCell;
use std::rc::Rc;

/// A [PageState] shared by every region laid out on the same document
pub type SharedPage = Rc<RefCell<PageState>>;

/// Construction parameters for a [PageState]
#[derive(Debug, Clone, PartialEq)]
pub struct PageOptions {
    /// Padding on every side, unless overridden per axis
    pub padding: Option<Pt>,
    /// Top and bottom padding
    pub padding_vertical: Option<Pt>,
    /// Left and right padding
    pub padding_horizontal: Option<Pt>,
    pub number_of_pages: usize,
}

impl Default for PageOptions {
    fn default() -> Self {
        PageOptions {
            padding: None,
            padding_vertical: None,
            padding_horizontal: None,
            number_of_pages: 1,
        }
    }
}

impl PageOptions {
    pub fn padding(mut self, padding: Pt) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn padding_vertical(mut self, padding: Pt) -> Self {
        self.padding_vertical = Some(padding);
        self
    }

    pub fn padding_horizontal(mut self, padding: Pt) -> Self {
        self.padding_horizontal = Some(padding);
        self
    }
}

/// Document-wide page bookkeeping: how many pages exist and how far content stays away from
/// the page edges. Only a page advance changes it.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    number_of_pages: usize,
    padding: Option<Pt>,
    padding_vertical: Option<Pt>,
    padding_horizontal: Option<Pt>,
}

impl Default for PageState {
    fn default() -> Self {
        PageState::new(PageOptions::default())
    }
}

impl PageState {
    pub fn new(options: PageOptions) -> PageState {
        PageState {
            number_of_pages: options.number_of_pages.max(1),
            padding: options.padding,
            padding_vertical: options.padding_vertical,
            padding_horizontal: options.padding_horizontal,
        }
    }

    /// Wrap a new page state for sharing between regions
    pub fn shared(options: PageOptions) -> SharedPage {
        Rc::new(RefCell::new(PageState::new(options)))
    }

    pub fn number_of_pages(&self) -> usize {
        self.number_of_pages
    }

    /// Padding above the first element of every page
    pub fn top_padding(&self) -> Pt {
        self.padding_vertical.or(self.padding).unwrap_or_default()
    }

    /// Padding below the last element of every page
    pub fn bottom_padding(&self) -> Pt {
        self.top_padding()
    }

    /// Padding left and right of the content
    pub fn horizontal_padding(&self) -> Pt {
        self.padding_horizontal.or(self.padding).unwrap_or_default()
    }

    /// Record one more page
    pub(crate) fn add_page(&mut self) {
        self.number_of_pages += 1;
    }
}
