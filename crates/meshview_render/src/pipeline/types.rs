//! GPU-compatible data types for the figure pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// A figure vertex: 2D position with color
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex2D {
    /// Position in world space (or NDC for the legend overlay)
    pub position: [f32; 2],
    /// RGBA color, straight alpha
    pub color: [f32; 4],
}

impl Vertex2D {
    /// Create a new vertex
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// View uniforms for the figure pipeline
///
/// Layout: one column-major mat4x4, 64 bytes (must match figure.wgsl).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ViewUniforms {
    /// Combined view-projection matrix, columns as arrays
    pub view_proj: [[f32; 4]; 4],
}

impl ViewUniforms {
    /// Identity transform (used by the screen-space overlay pass)
    pub const IDENTITY: ViewUniforms = ViewUniforms {
        view_proj: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };
}

impl Default for ViewUniforms {
    fn default() -> Self {
        Self::IDENTITY
    }
}
