//! View controller for plot-style navigation
//!
//! Controls:
//! - Left mouse drag: pan
//! - Scroll wheel: zoom about the cursor
//!
//! Events are accumulated as they arrive and applied to the view once per
//! frame in [`ViewController::update`].

use winit::event::{ElementState, MouseButton};

/// Operations a controllable view must support
///
/// Implemented by the renderer's 2D camera; the controller itself stays
/// independent of the render crate.
pub trait ViewControl {
    /// Shift the view by a screen-space delta in pixels
    fn pan_pixels(&mut self, dx: f32, dy: f32);
    /// Scale the view by `factor` (> 1 zooms out), keeping the world point
    /// under `cursor` (pixels, origin top-left) fixed
    fn zoom_at(&mut self, factor: f32, cursor: (f32, f32));
}

/// Accumulates mouse input and applies it to a [`ViewControl`]
pub struct ViewController {
    // Drag state
    dragging: bool,
    cursor: (f64, f64),
    pending_pan: (f64, f64),

    // Scroll state, in wheel lines
    pending_scroll: f32,

    // Configuration
    /// Zoom factor applied per scroll line
    pub zoom_step: f32,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewController {
    pub fn new() -> Self {
        Self {
            dragging: false,
            cursor: (0.0, 0.0),
            pending_pan: (0.0, 0.0),
            pending_scroll: 0.0,
            zoom_step: 1.1,
        }
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.dragging = state == ElementState::Pressed;
        }
    }

    /// Process cursor movement
    ///
    /// Takes the absolute cursor position in window pixels; while the left
    /// button is held, the motion since the last position becomes pan.
    pub fn process_cursor_moved(&mut self, x: f64, y: f64) {
        if self.dragging {
            self.pending_pan.0 += x - self.cursor.0;
            self.pending_pan.1 += y - self.cursor.1;
        }
        self.cursor = (x, y);
    }

    /// Process scroll wheel input, in wheel lines (positive = zoom in)
    pub fn process_scroll(&mut self, lines: f32) {
        self.pending_scroll += lines;
    }

    /// Last known cursor position in window pixels
    pub fn cursor_position(&self) -> (f64, f64) {
        self.cursor
    }

    /// True while the left button is held
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Apply accumulated input to the view
    ///
    /// Returns true if the view changed, so the caller can skip redraw
    /// bookkeeping on idle frames.
    pub fn update<C: ViewControl>(&mut self, view: &mut C) -> bool {
        let mut changed = false;

        if self.pending_pan != (0.0, 0.0) {
            view.pan_pixels(self.pending_pan.0 as f32, self.pending_pan.1 as f32);
            self.pending_pan = (0.0, 0.0);
            changed = true;
        }

        if self.pending_scroll != 0.0 {
            // One scroll line scales the visible extent by zoom_step
            let factor = self.zoom_step.powf(-self.pending_scroll);
            view.zoom_at(factor, (self.cursor.0 as f32, self.cursor.1 as f32));
            self.pending_scroll = 0.0;
            changed = true;
        }

        changed
    }
}
