use std::io::Write;

/// A colour, expressed in RGB, CMYK or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceCMYK colour; c, m, y, and k range from 0.0 to 1.0
    CMYK { c: f32, m: f32, y: f32, k: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Default for Colour {
    fn default() -> Self {
        colours::BLACK
    }
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the CMYK space. c, m, y, and k range from 0.0 to 1.0
    pub fn new_cmyk(c: f32, m: f32, y: f32, k: f32) -> Colour {
        Colour::CMYK { c, m, y, k }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// Write the content stream operator selecting this colour for fills (text)
    #[allow(clippy::write_with_newline)]
    pub(crate) fn write_fill<W: Write>(&self, content: &mut W) -> std::io::Result<()> {
        match *self {
            Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
            Colour::CMYK { c, m, y, k } => write!(content, "{c} {m} {y} {k} k\n"),
            Colour::Grey { g } => write!(content, "{g} g\n"),
        }
    }

    /// Write the content stream operator selecting this colour for strokes (rules)
    #[allow(clippy::write_with_newline)]
    pub(crate) fn write_stroke<W: Write>(&self, content: &mut W) -> std::io::Result<()> {
        match *self {
            Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} RG\n"),
            Colour::CMYK { c, m, y, k } => write!(content, "{c} {m} {y} {k} K\n"),
            Colour::Grey { g } => write!(content, "{g} G\n"),
        }
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour::RGB {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    pub const GREY: Colour = Colour::Grey { g: 0.5 };
    pub const RED: Colour = Colour::RGB {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    pub const BLUE: Colour = Colour::RGB {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_and_stroke_operators_differ_in_case() {
        let mut fill: Vec<u8> = Vec::new();
        let mut stroke: Vec<u8> = Vec::new();
        colours::RED.write_fill(&mut fill).unwrap();
        colours::RED.write_stroke(&mut stroke).unwrap();
        assert_eq!(String::from_utf8(fill).unwrap(), "1 0 0 rg\n");
        assert_eq!(String::from_utf8(stroke).unwrap(), "1 0 0 RG\n");
    }

    #[test]
    fn byte_constructors_normalise() {
        assert_eq!(
            Colour::new_rgb_bytes(255, 0, 255),
            Colour::new_rgb(1.0, 0.0, 1.0)
        );
    }
}
