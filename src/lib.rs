//! Meshview - 2D FEM mesh viewer
//!
//! Library surface of the viewer: the layered [`config::AppConfig`] plus
//! re-exports of the workspace crates, so tests and embedding callers can
//! load and tessellate meshes without going through the binary.

pub mod config;

pub use meshview_mesh as mesh;
pub use meshview_render as render;
pub use meshview_input as input;
