//! Mesh data model and loaders for the meshview viewer
//!
//! This crate provides the in-memory representation of a 2D finite-element
//! mesh and the plain-text readers that populate it:
//!
//! - [`Point2`] - a node position; the position in the point list is the
//!   implicit node index used everywhere else
//! - [`Bounds`] - axis-aligned extent of a point set
//! - [`Element`] - one raw connectivity line, with a typed [`Quad`] view
//! - [`ElementClass`] - the four-entry color-class palette
//! - [`Mesh`] / [`MeshPaths`] - the four lists bundled together, loaded
//!   from (and writable back to) their text files
//!
//! The readers perform no schema validation beyond tokenizing each line:
//! node indices are assumed valid and element lengths are checked only at
//! render time.

mod point;
mod element;
mod palette;
mod reader;
mod mesh;

pub use point::{Point2, Bounds};
pub use element::{Element, Quad};
pub use palette::{ElementClass, PaletteError};
pub use reader::{
    parse_points, parse_elements, parse_dirichlet, parse_neumann,
    read_points, read_elements, read_dirichlet, read_neumann,
    write_points, write_elements, write_dirichlet, write_neumann,
    MeshReadError,
};
pub use mesh::{Mesh, MeshPaths};
