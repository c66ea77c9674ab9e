//! Raw element connectivity
//!
//! Each line of the element file is kept exactly as read. Only elements
//! with exactly 5 fields (4 node indices in winding order + 1 color class)
//! render as filled quadrilaterals; everything else is carried in memory
//! untouched and skipped at tessellation time.

use serde::{Serialize, Deserialize};

/// One line of the element file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Raw integer fields, in line order
    pub fields: Vec<usize>,
}

impl Element {
    /// Create an element from raw fields
    pub fn new(fields: Vec<usize>) -> Self {
        Self { fields }
    }

    /// Number of fields on the source line
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the element has no fields (blank source line)
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// View this element as a renderable quadrilateral
    ///
    /// Returns `Some` only for elements with exactly 5 fields. The color
    /// class is returned raw; range checking happens when it is mapped
    /// through the palette.
    pub fn as_quad(&self) -> Option<Quad> {
        match self.fields[..] {
            [n0, n1, n2, n3, class] => Some(Quad {
                nodes: [n0, n1, n2, n3],
                class,
            }),
            _ => None,
        }
    }
}

/// A quadrilateral element: 4 node indices plus a raw color class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quad {
    /// Node indices into the point list, in winding order
    pub nodes: [usize; 4],
    /// Raw color-class field (unvalidated)
    pub class: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_quad_exact_length() {
        let element = Element::new(vec![0, 1, 2, 3, 2]);
        let quad = element.as_quad().unwrap();
        assert_eq!(quad.nodes, [0, 1, 2, 3]);
        assert_eq!(quad.class, 2);
    }

    #[test]
    fn test_as_quad_rejects_other_lengths() {
        assert!(Element::new(vec![]).as_quad().is_none());
        assert!(Element::new(vec![0, 1, 2, 3]).as_quad().is_none());
        assert!(Element::new(vec![0, 1, 2, 3, 0, 7]).as_quad().is_none());
    }

    #[test]
    fn test_as_quad_keeps_out_of_range_class() {
        // The raw view does not validate the class field
        let element = Element::new(vec![0, 1, 2, 3, 9]);
        assert_eq!(element.as_quad().unwrap().class, 9);
    }

    #[test]
    fn test_len_matches_fields() {
        let element = Element::new(vec![4, 5, 6]);
        assert_eq!(element.len(), 3);
        assert!(!element.is_empty());
    }
}
