//! Rendering pipeline components

pub mod types;
pub mod figure_pipeline;

pub use types::{Vertex2D, ViewUniforms};
pub use figure_pipeline::{FigurePipeline, orthographic_matrix};
