//! Viewer input handling
//!
//! This crate translates winit mouse input into pan/zoom operations on the
//! figure view.

mod view_controller;

pub use view_controller::{ViewController, ViewControl};
