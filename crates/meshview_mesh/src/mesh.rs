//! The loaded mesh and its file locations
//!
//! [`Mesh::load`] is the single entry point the viewer calls: it reads all
//! four input files into immutable lists, which the renderer then consumes.
//! [`Mesh::save`] writes the same representation back out; the viewer never
//! calls it, but tests and fixture generation do.

use std::fs;
use std::path::{Path, PathBuf};

use crate::reader::{
    self, read_dirichlet, read_elements, read_neumann, read_points, MeshReadError,
};
use crate::{Bounds, Element, Point2};

/// Locations of the four mesh input files
///
/// Defaults match the conventional file names resolved against the current
/// working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshPaths {
    pub points: PathBuf,
    pub elements: PathBuf,
    pub dirichlet: PathBuf,
    pub neumann: PathBuf,
}

impl Default for MeshPaths {
    fn default() -> Self {
        Self {
            points: PathBuf::from("points"),
            elements: PathBuf::from("finite_elements"),
            dirichlet: PathBuf::from("dirichlet"),
            neumann: PathBuf::from("neumann"),
        }
    }
}

impl MeshPaths {
    /// Conventional file names resolved against a directory
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            points: dir.join("points"),
            elements: dir.join("finite_elements"),
            dirichlet: dir.join("dirichlet"),
            neumann: dir.join("neumann"),
        }
    }
}

/// A fully loaded mesh
///
/// All four lists are populated once by [`Mesh::load`] and read-only
/// afterwards. Indices are unchecked: elements and boundary sets are
/// assumed to reference valid positions in `points`.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Node positions; list position is the node index
    pub points: Vec<Point2>,
    /// Raw element lines
    pub elements: Vec<Element>,
    /// Nodes with a first-type boundary condition
    pub dirichlet: Vec<usize>,
    /// Edges with a second-type boundary condition (expected pairs)
    pub neumann: Vec<Vec<usize>>,
}

impl Mesh {
    /// Load all four input files
    pub fn load(paths: &MeshPaths) -> Result<Self, MeshReadError> {
        let points = read_points(&paths.points)?;
        let elements = read_elements(&paths.elements)?;
        let dirichlet = read_dirichlet(&paths.dirichlet)?;
        let neumann = read_neumann(&paths.neumann)?;

        log::info!(
            "loaded {} points, {} elements, {} dirichlet nodes, {} neumann edges",
            points.len(),
            elements.len(),
            dirichlet.len(),
            neumann.len()
        );

        Ok(Self { points, elements, dirichlet, neumann })
    }

    /// Write all four files in the format [`Mesh::load`] accepts
    pub fn save(&self, paths: &MeshPaths) -> Result<(), MeshReadError> {
        fs::write(&paths.points, reader::write_points(&self.points))?;
        fs::write(&paths.elements, reader::write_elements(&self.elements))?;
        fs::write(&paths.dirichlet, reader::write_dirichlet(&self.dirichlet))?;
        fs::write(&paths.neumann, reader::write_neumann(&self.neumann))?;
        Ok(())
    }

    /// Bounding box of the node positions
    ///
    /// Returns `None` for a mesh with no points.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of(&self.points)
    }

    /// Number of elements that render as quadrilaterals (exactly 5 fields)
    pub fn quad_count(&self) -> usize {
        self.elements.iter().filter(|e| e.as_quad().is_some()).count()
    }
}
