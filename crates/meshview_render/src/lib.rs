//! Mesh figure rendering
//!
//! This crate provides the wgpu-based pipeline that turns a loaded mesh
//! into an on-screen figure.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera2d::Camera2D`] - orthographic 2D camera with pan/zoom
//! - [`figure::Figure`] - tessellates mesh, overlays, and legend into
//!   triangle lists
//! - [`pipeline::FigurePipeline`] - draws the tessellated figure
//!
//! Everything is tessellated on the CPU into a single triangle list in
//! paint order (element fills, outlines, node markers, boundary overlays);
//! the GPU side is one alpha-blended pipeline with a world pass and a
//! screen-space legend pass.

pub mod context;
pub mod camera2d;
pub mod figure;
pub mod legend;
pub mod pipeline;

// Re-export mesh types for convenience
pub use meshview_mesh::{Mesh, Point2, Bounds, Element, ElementClass, PaletteError};

pub use camera2d::Camera2D;
pub use figure::{Figure, FigureGeometry, FigureStyle};
pub use legend::{Legend, LegendEntry, LegendSample};
