use crate::units::Pt;

/// Spacing on each side of an element. Used both for the margins of an element and for the
/// offsets that nudge it away from where the flow would otherwise put it.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins::trbl(value, value, value, value)
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) sides
    pub fn symmetric(vertical: Pt, horizontal: Pt) -> Margins {
        Margins::trbl(vertical, horizontal, vertical, horizontal)
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::default()
    }

    /// Only a top component
    pub fn top(top: Pt) -> Margins {
        Margins {
            top,
            ..Margins::default()
        }
    }

    /// Only a bottom component
    pub fn bottom(bottom: Pt) -> Margins {
        Margins {
            bottom,
            ..Margins::default()
        }
    }

    /// Sum of the left and right components
    pub fn horizontal(&self) -> Pt {
        self.left + self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_sides() {
        let m = Margins::symmetric(Pt(1.0), Pt(2.0));
        assert_eq!(m, Margins::trbl(Pt(1.0), Pt(2.0), Pt(1.0), Pt(2.0)));
        assert_eq!(m.horizontal(), Pt(4.0));
        assert_eq!(Margins::empty(), Margins::all(Pt(0.0)));
        assert_eq!(Margins::top(Pt(3.0)).bottom, Pt(0.0));
    }
}
