//! Figure legend
//!
//! The legend is collected while the figure is tessellated: one entry per
//! drawn layer, each with a label, a color, and a sample shape. It renders
//! as a swatch panel in the top-right corner, built directly in NDC so it
//! stays put while the figure pans and zooms. Labels are logged at startup;
//! nothing in the stack rasterizes text.

use crate::figure::{push_circle, push_quad};
use crate::pipeline::Vertex2D;

/// How a legend entry is sampled in the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendSample {
    /// A round marker (node layers)
    Marker,
    /// A short line segment (edge layers)
    Line,
}

/// One legend entry
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: [f32; 4],
    pub sample: LegendSample,
}

/// Ordered collection of legend entries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Legend {
    entries: Vec<LegendEntry>,
}

// Panel layout in NDC, vertical units; horizontal sizes are divided by the
// viewport aspect so the panel keeps its proportions.
const PANEL_RIGHT: f32 = 0.97;
const PANEL_TOP: f32 = 0.95;
const PANEL_WIDTH: f32 = 0.30;
const ROW_HEIGHT: f32 = 0.08;
const PADDING: f32 = 0.03;
const MARKER_RADIUS: f32 = 0.022;
const LINE_HALF_HEIGHT: f32 = 0.008;
const SAMPLE_SEGMENTS: u32 = 16;
const PANEL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.85];

impl Legend {
    /// Create an empty legend
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    pub fn add(&mut self, label: impl Into<String>, color: [f32; 4], sample: LegendSample) {
        self.entries.push(LegendEntry {
            label: label.into(),
            color,
            sample,
        });
    }

    /// All entries, in draw order
    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if an entry with this label exists
    pub fn has(&self, label: &str) -> bool {
        self.entries.iter().any(|e| e.label == label)
    }

    /// Build the swatch panel as NDC triangles
    ///
    /// Returns an empty list for an empty legend.
    pub fn overlay_vertices(&self, aspect: f32) -> Vec<Vertex2D> {
        let mut vertices = Vec::new();
        if self.entries.is_empty() {
            return vertices;
        }

        let width = PANEL_WIDTH / aspect;
        let height = 2.0 * PADDING + ROW_HEIGHT * self.entries.len() as f32;
        let left = PANEL_RIGHT - width;
        let bottom = PANEL_TOP - height;

        push_quad(
            &mut vertices,
            [
                [left, bottom],
                [PANEL_RIGHT, bottom],
                [PANEL_RIGHT, PANEL_TOP],
                [left, PANEL_TOP],
            ],
            PANEL_COLOR,
        );

        for (row, entry) in self.entries.iter().enumerate() {
            let row_center = PANEL_TOP - PADDING - ROW_HEIGHT * (row as f32 + 0.5);
            let sample_left = left + PADDING / aspect;
            let sample_right = sample_left + (ROW_HEIGHT * 1.5) / aspect;

            match entry.sample {
                LegendSample::Marker => {
                    let center = [(sample_left + sample_right) / 2.0, row_center];
                    push_circle(
                        &mut vertices,
                        center,
                        [MARKER_RADIUS / aspect, MARKER_RADIUS],
                        SAMPLE_SEGMENTS,
                        entry.color,
                    );
                }
                LegendSample::Line => {
                    push_quad(
                        &mut vertices,
                        [
                            [sample_left, row_center - LINE_HALF_HEIGHT],
                            [sample_right, row_center - LINE_HALF_HEIGHT],
                            [sample_right, row_center + LINE_HALF_HEIGHT],
                            [sample_left, row_center + LINE_HALF_HEIGHT],
                        ],
                        entry.color,
                    );
                }
            }
        }

        vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_legend_builds_nothing() {
        assert!(Legend::new().overlay_vertices(1.0).is_empty());
    }

    #[test]
    fn test_entries_keep_order() {
        let mut legend = Legend::new();
        legend.add("Mesh nodes", [0.0, 0.0, 0.0, 1.0], LegendSample::Marker);
        legend.add("Neumann edges", [1.0, 0.0, 0.0, 1.0], LegendSample::Line);

        assert_eq!(legend.len(), 2);
        assert_eq!(legend.entries()[0].label, "Mesh nodes");
        assert_eq!(legend.entries()[1].label, "Neumann edges");
        assert!(legend.has("Neumann edges"));
        assert!(!legend.has("Dirichlet nodes"));
    }

    #[test]
    fn test_overlay_vertex_counts() {
        let mut legend = Legend::new();
        legend.add("Mesh nodes", [0.0, 0.0, 0.0, 1.0], LegendSample::Marker);
        legend.add("Neumann edges", [1.0, 0.0, 0.0, 1.0], LegendSample::Line);

        let vertices = legend.overlay_vertices(1.5);
        // Panel quad (6) + marker fan (3 per segment) + line quad (6)
        let expected = 6 + 3 * SAMPLE_SEGMENTS as usize + 6;
        assert_eq!(vertices.len(), expected);
    }

    #[test]
    fn test_panel_background_is_first() {
        let mut legend = Legend::new();
        legend.add("Mesh nodes", [0.0, 0.0, 0.0, 1.0], LegendSample::Marker);

        let vertices = legend.overlay_vertices(1.0);
        assert_eq!(vertices[0].color, PANEL_COLOR);
    }

    #[test]
    fn test_panel_stays_inside_ndc() {
        let mut legend = Legend::new();
        legend.add("Mesh nodes", [0.0, 0.0, 0.0, 1.0], LegendSample::Marker);
        legend.add("Dirichlet nodes", [0.0, 0.0, 1.0, 1.0], LegendSample::Marker);
        legend.add("Neumann edges", [1.0, 0.0, 0.0, 1.0], LegendSample::Line);

        for v in legend.overlay_vertices(1.0) {
            assert!(v.position[0] <= 1.0 && v.position[0] >= -1.0);
            assert!(v.position[1] <= 1.0 && v.position[1] >= -1.0);
        }
    }
}
