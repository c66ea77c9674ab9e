//! Element color classes
//!
//! The element file tags each quadrilateral with an integer class in 0..=3.
//! The palette maps classes to fixed fill colors; a class outside the
//! palette is a hard error at tessellation time.

use std::fmt;

/// The four element color classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementClass {
    Cyan,
    Green,
    Grey,
    Blue,
}

impl ElementClass {
    /// All classes, in palette order
    pub const ALL: [ElementClass; 4] = [
        ElementClass::Cyan,
        ElementClass::Green,
        ElementClass::Grey,
        ElementClass::Blue,
    ];

    /// Opaque fill color for this class
    pub fn color(&self) -> [f32; 4] {
        match self {
            ElementClass::Cyan => [0.0, 1.0, 1.0, 1.0],
            ElementClass::Green => [0.0, 0.5, 0.0, 1.0],
            ElementClass::Grey => [0.5, 0.5, 0.5, 1.0],
            ElementClass::Blue => [0.0, 0.0, 1.0, 1.0],
        }
    }

    /// Fill color with the given alpha
    pub fn color_with_alpha(&self, alpha: f32) -> [f32; 4] {
        let [r, g, b, _] = self.color();
        [r, g, b, alpha]
    }
}

impl TryFrom<usize> for ElementClass {
    type Error = PaletteError;

    fn try_from(class: usize) -> Result<Self, Self::Error> {
        match class {
            0 => Ok(ElementClass::Cyan),
            1 => Ok(ElementClass::Green),
            2 => Ok(ElementClass::Grey),
            3 => Ok(ElementClass::Blue),
            other => Err(PaletteError::UnknownClass(other)),
        }
    }
}

/// Error mapping a raw class field through the palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// Class field outside the palette range 0..=3
    UnknownClass(usize),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::UnknownClass(class) => {
                write!(f, "unknown element color class {} (palette has classes 0..=3)", class)
            }
        }
    }
}

impl std::error::Error for PaletteError {}
