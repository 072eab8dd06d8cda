use super::page_state::{PageState, SharedPage};
use crate::units::Pt;
use std::cell::Ref;
use std::rc::Rc;

/// Construction parameters for a [RegionState]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RegionOptions {
    /// Label used in log output
    pub id: String,
    /// Fixed x origin of the region
    pub x: Pt,
    /// Fixed y origin of the region
    pub y: Pt,
    /// Width content in this region wraps at, unless an element overrides it
    pub max_width: Option<Pt>,
    pub padding_horizontal: Pt,
    /// Applied above the first element and below every element
    pub padding_vertical: Pt,
    /// Start the cursor here instead of at the page's top padding
    pub cursor_y: Option<Pt>,
}

impl RegionOptions {
    pub fn id<S: ToString>(mut self, id: S) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn x(mut self, x: Pt) -> Self {
        self.x = x;
        self
    }

    pub fn y(mut self, y: Pt) -> Self {
        self.y = y;
        self
    }

    pub fn max_width(mut self, max_width: Pt) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn padding_horizontal(mut self, padding: Pt) -> Self {
        self.padding_horizontal = padding;
        self
    }

    pub fn padding_vertical(mut self, padding: Pt) -> Self {
        self.padding_vertical = padding;
        self
    }

    pub fn cursor_y(mut self, cursor_y: Pt) -> Self {
        self.cursor_y = Some(cursor_y);
        self
    }
}

/// A rectangular flow of elements (a header, a column, a body) with its own write cursor.
///
/// The cursor is the y coordinate, relative to the region origin, where the next element
/// starts. It only moves down, except when a page advance resets it to the top of the new
/// page or when a renderer takes back the trailing padding of the previous element.
#[derive(Debug, Clone)]
pub struct RegionState {
    pub id: String,
    pub x: Pt,
    pub y: Pt,
    pub max_width: Option<Pt>,
    pub padding_horizontal: Pt,
    pub padding_vertical: Pt,
    cursor_y: Pt,
    element_count: usize,
    elements_on_page: usize,
    page: SharedPage,
}

impl RegionState {
    pub fn new(page: &SharedPage, options: RegionOptions) -> RegionState {
        let cursor_y = options
            .cursor_y
            .unwrap_or_else(|| page.borrow().top_padding());
        RegionState {
            id: options.id,
            x: options.x,
            y: options.y,
            max_width: options.max_width,
            padding_horizontal: options.padding_horizontal,
            padding_vertical: options.padding_vertical,
            cursor_y,
            element_count: 0,
            elements_on_page: 0,
            page: Rc::clone(page),
        }
    }

    pub fn cursor_y(&self) -> Pt {
        self.cursor_y
    }

    pub fn set_cursor_y(&mut self, cursor_y: Pt) {
        self.cursor_y = cursor_y;
    }

    /// Total number of elements rendered into this region
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Whether the next element is the first one placed since the region started, or since it
    /// last moved to a new page. Only the first element receives the region's top padding.
    pub fn is_first_element(&self) -> bool {
        self.elements_on_page == 0
    }

    pub(crate) fn add_element(&mut self) {
        self.element_count += 1;
        self.elements_on_page += 1;
    }

    /// Take back the trailing padding left below the previous element
    pub(crate) fn undo_trailing_padding(&mut self) {
        if !self.is_first_element() {
            self.cursor_y -= self.padding_vertical;
        }
    }

    /// Move the cursor to the top of a fresh page
    pub(crate) fn restart_page(&mut self) {
        self.cursor_y = self.page.borrow().top_padding();
        self.elements_on_page = 0;
    }

    /// The page state this region lays out on
    pub fn page(&self) -> Ref<'_, PageState> {
        self.page.borrow()
    }

    pub(crate) fn shared_page(&self) -> &SharedPage {
        &self.page
    }
}
