//! Orthographic 2D camera
//!
//! The camera is a world-space center plus a visible height; the visible
//! width follows from the viewport aspect ratio, so world x and y scales
//! stay equal and circles render round. Pan and zoom arrive in window
//! pixels through the [`ViewControl`] trait.

use meshview_input::ViewControl;
use meshview_mesh::Bounds;

use crate::pipeline::{orthographic_matrix, ViewUniforms};

/// Minimum visible height, to keep zoom finite
const MIN_HEIGHT: f32 = 1e-6;

/// 2D camera for viewing a figure
pub struct Camera2D {
    /// World-space center of the view
    pub center: [f32; 2],
    /// Visible world height
    pub height: f32,
    /// Viewport size in pixels
    viewport: (f32, f32),
    /// Fitted view restored by reset
    home: Option<([f32; 2], f32)>,
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera2D {
    /// Create a camera showing a 2-unit-high view around the origin
    pub fn new() -> Self {
        Self {
            center: [0.0, 0.0],
            height: 2.0,
            viewport: (1.0, 1.0),
            home: None,
        }
    }

    /// Set the viewport size in pixels
    ///
    /// Zero-sized updates (minimized window) are ignored.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.viewport = (width, height);
        }
    }

    /// Viewport aspect ratio (width over height)
    pub fn aspect(&self) -> f32 {
        self.viewport.0 / self.viewport.1
    }

    /// World units per screen pixel
    pub fn world_per_pixel(&self) -> f32 {
        self.height / self.viewport.1
    }

    /// Center the view on `bounds` with a relative margin
    ///
    /// The fitted view becomes the home view restored by [`reset`].
    /// A degenerate (zero-extent) bounds gets a fallback height.
    ///
    /// [`reset`]: Camera2D::reset
    pub fn fit_bounds(&mut self, bounds: &Bounds, margin: f32) {
        let center = bounds.center();
        self.center = [center.x as f32, center.y as f32];

        let needed = (bounds.height() as f32)
            .max(bounds.width() as f32 / self.aspect())
            * (1.0 + margin);
        self.height = if needed > MIN_HEIGHT { needed } else { 2.0 };

        self.home = Some((self.center, self.height));
    }

    /// Restore the last fitted view
    pub fn reset(&mut self) {
        if let Some((center, height)) = self.home {
            self.center = center;
            self.height = height;
        }
    }

    /// Convert a window pixel position (origin top-left) to world space
    pub fn screen_to_world(&self, pixel: (f32, f32)) -> [f32; 2] {
        let wpp = self.world_per_pixel();
        [
            self.center[0] + (pixel.0 - self.viewport.0 / 2.0) * wpp,
            self.center[1] - (pixel.1 - self.viewport.1 / 2.0) * wpp,
        ]
    }

    /// View uniforms for the current state
    pub fn view_uniforms(&self) -> ViewUniforms {
        ViewUniforms {
            view_proj: orthographic_matrix(self.center, self.height, self.aspect()),
        }
    }
}

impl ViewControl for Camera2D {
    fn pan_pixels(&mut self, dx: f32, dy: f32) {
        let wpp = self.world_per_pixel();
        // Dragging right moves the world with the cursor; screen y is down
        self.center[0] -= dx * wpp;
        self.center[1] += dy * wpp;
    }

    fn zoom_at(&mut self, factor: f32, cursor: (f32, f32)) {
        let anchor = self.screen_to_world(cursor);
        self.height = (self.height * factor).max(MIN_HEIGHT);
        // Keep the world point under the cursor fixed
        self.center = [
            anchor[0] - (anchor[0] - self.center[0]) * factor,
            anchor[1] - (anchor[1] - self.center[1]) * factor,
        ];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshview_mesh::Point2;

    fn square_bounds() -> Bounds {
        Bounds::of(&[Point2::new(0.0, 0.0), Point2::new(4.0, 4.0)]).unwrap()
    }

    #[test]
    fn test_fit_bounds_centers_mesh() {
        let mut camera = Camera2D::new();
        camera.set_viewport(800.0, 600.0);
        camera.fit_bounds(&square_bounds(), 0.0);

        assert_eq!(camera.center, [2.0, 2.0]);
        // Square mesh in a wide viewport: height is the limiting side
        assert!((camera.height - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_fit_bounds_wide_mesh_limited_by_width() {
        let bounds = Bounds::of(&[Point2::new(0.0, 0.0), Point2::new(16.0, 1.0)]).unwrap();
        let mut camera = Camera2D::new();
        camera.set_viewport(800.0, 400.0); // aspect 2
        camera.fit_bounds(&bounds, 0.0);

        // Width 16 at aspect 2 needs height 8
        assert!((camera.height - 8.0).abs() < 1e-6);
    }

    #[test]
    fn test_fit_degenerate_bounds_gets_fallback() {
        let bounds = Bounds::of(&[Point2::new(1.0, 1.0)]).unwrap();
        let mut camera = Camera2D::new();
        camera.set_viewport(800.0, 600.0);
        camera.fit_bounds(&bounds, 0.05);

        assert_eq!(camera.center, [1.0, 1.0]);
        assert_eq!(camera.height, 2.0);
    }

    #[test]
    fn test_reset_restores_fitted_view() {
        let mut camera = Camera2D::new();
        camera.set_viewport(800.0, 600.0);
        camera.fit_bounds(&square_bounds(), 0.0);

        camera.pan_pixels(100.0, -50.0);
        camera.zoom_at(0.5, (400.0, 300.0));
        assert_ne!(camera.center, [2.0, 2.0]);

        camera.reset();
        assert_eq!(camera.center, [2.0, 2.0]);
        assert!((camera.height - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_pan_follows_cursor() {
        let mut camera = Camera2D::new();
        camera.set_viewport(100.0, 100.0);
        camera.height = 10.0; // 0.1 world units per pixel

        camera.pan_pixels(10.0, 0.0);
        assert!((camera.center[0] + 1.0).abs() < 1e-6);

        camera.pan_pixels(0.0, 10.0);
        assert!((camera.center[1] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_keeps_cursor_point_fixed() {
        let mut camera = Camera2D::new();
        camera.set_viewport(200.0, 100.0);
        camera.center = [3.0, 1.0];
        camera.height = 4.0;

        let cursor = (30.0, 80.0);
        let before = camera.screen_to_world(cursor);
        camera.zoom_at(0.5, cursor);
        let after = camera.screen_to_world(cursor);

        assert!((before[0] - after[0]).abs() < 1e-4);
        assert!((before[1] - after[1]).abs() < 1e-4);
        assert!((camera.height - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_screen_center_is_world_center() {
        let mut camera = Camera2D::new();
        camera.set_viewport(640.0, 480.0);
        camera.center = [5.0, -3.0];

        let world = camera.screen_to_world((320.0, 240.0));
        assert!((world[0] - 5.0).abs() < 1e-6);
        assert!((world[1] + 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_view_uniforms_match_state() {
        let mut camera = Camera2D::new();
        camera.set_viewport(100.0, 100.0);
        camera.center = [1.0, 2.0];
        camera.height = 4.0;

        let uniforms = camera.view_uniforms();
        // Scale column: 2 / (height * aspect) with aspect 1
        assert!((uniforms.view_proj[0][0] - 0.5).abs() < 1e-6);
        assert!((uniforms.view_proj[1][1] - 0.5).abs() < 1e-6);
    }
}
