//! Plain-text mesh readers and writers
//!
//! Four line-oriented formats, one per input file:
//!
//! - points: `<float> <float>` per line
//! - elements: whitespace-separated integers per line, any count
//! - dirichlet: a single integer node index per line
//! - neumann: whitespace-separated integers per line (expected pairs)
//!
//! Each format has a string parser and a path-reading wrapper. Parsing is
//! strict about token content but performs no cross-file validation: node
//! indices are taken at face value and element lengths are not checked
//! here. The writers emit the same representation the parsers accept, so a
//! written mesh reads back identically.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::{Element, Point2};

/// Error reading one of the mesh input files
#[derive(Debug)]
pub enum MeshReadError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Malformed line content
    Parse {
        /// 1-based line number in the source file
        line: usize,
        message: String,
    },
}

impl fmt::Display for MeshReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshReadError::Io(err) => write!(f, "IO error: {}", err),
            MeshReadError::Parse { line, message } => {
                write!(f, "parse error at line {}: {}", line, message)
            }
        }
    }
}

impl std::error::Error for MeshReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MeshReadError::Io(err) => Some(err),
            MeshReadError::Parse { .. } => None,
        }
    }
}

impl From<io::Error> for MeshReadError {
    fn from(err: io::Error) -> Self {
        MeshReadError::Io(err)
    }
}

/// Parse a points file: two floats per line, one point per line
pub fn parse_points(input: &str) -> Result<Vec<Point2>, MeshReadError> {
    let mut points = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(MeshReadError::Parse {
                line: index + 1,
                message: format!("expected 2 coordinates, found {}", tokens.len()),
            });
        }
        let x = parse_coordinate(tokens[0], index + 1)?;
        let y = parse_coordinate(tokens[1], index + 1)?;
        points.push(Point2::new(x, y));
    }
    Ok(points)
}

/// Parse an elements file: one raw integer list per line
///
/// No length check is applied; lines that do not describe a quadrilateral
/// are kept as-is and skipped at tessellation time.
pub fn parse_elements(input: &str) -> Result<Vec<Element>, MeshReadError> {
    let mut elements = Vec::new();
    for (index, line) in input.lines().enumerate() {
        elements.push(Element::new(parse_indices(line, index + 1)?));
    }
    Ok(elements)
}

/// Parse a dirichlet file: a single node index per line
pub fn parse_dirichlet(input: &str) -> Result<Vec<usize>, MeshReadError> {
    let mut dirichlet = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let node = line.trim().parse::<usize>().map_err(|err| MeshReadError::Parse {
            line: index + 1,
            message: format!("invalid node index '{}': {}", line.trim(), err),
        })?;
        dirichlet.push(node);
    }
    Ok(dirichlet)
}

/// Parse a neumann file: one raw integer list per line (expected pairs)
pub fn parse_neumann(input: &str) -> Result<Vec<Vec<usize>>, MeshReadError> {
    let mut neumann = Vec::new();
    for (index, line) in input.lines().enumerate() {
        neumann.push(parse_indices(line, index + 1)?);
    }
    Ok(neumann)
}

/// Read and parse a points file
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point2>, MeshReadError> {
    parse_points(&fs::read_to_string(path)?)
}

/// Read and parse an elements file
pub fn read_elements<P: AsRef<Path>>(path: P) -> Result<Vec<Element>, MeshReadError> {
    parse_elements(&fs::read_to_string(path)?)
}

/// Read and parse a dirichlet file
pub fn read_dirichlet<P: AsRef<Path>>(path: P) -> Result<Vec<usize>, MeshReadError> {
    parse_dirichlet(&fs::read_to_string(path)?)
}

/// Read and parse a neumann file
pub fn read_neumann<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<usize>>, MeshReadError> {
    parse_neumann(&fs::read_to_string(path)?)
}

/// Write a point list in the format `parse_points` accepts
pub fn write_points(points: &[Point2]) -> String {
    let mut out = String::new();
    for p in points {
        out.push_str(&format!("{} {}\n", p.x, p.y));
    }
    out
}

/// Write an element list in the format `parse_elements` accepts
pub fn write_elements(elements: &[Element]) -> String {
    let mut out = String::new();
    for element in elements {
        out.push_str(&join_indices(&element.fields));
        out.push('\n');
    }
    out
}

/// Write a dirichlet set in the format `parse_dirichlet` accepts
pub fn write_dirichlet(dirichlet: &[usize]) -> String {
    let mut out = String::new();
    for node in dirichlet {
        out.push_str(&format!("{}\n", node));
    }
    out
}

/// Write a neumann set in the format `parse_neumann` accepts
pub fn write_neumann(neumann: &[Vec<usize>]) -> String {
    let mut out = String::new();
    for edge in neumann {
        out.push_str(&join_indices(edge));
        out.push('\n');
    }
    out
}

fn parse_coordinate(token: &str, line: usize) -> Result<f64, MeshReadError> {
    token.parse::<f64>().map_err(|err| MeshReadError::Parse {
        line,
        message: format!("invalid coordinate '{}': {}", token, err),
    })
}

fn parse_indices(line: &str, line_number: usize) -> Result<Vec<usize>, MeshReadError> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<usize>().map_err(|err| MeshReadError::Parse {
                line: line_number,
                message: format!("invalid index '{}': {}", token, err),
            })
        })
        .collect()
}

fn join_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
