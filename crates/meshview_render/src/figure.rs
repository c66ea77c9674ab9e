//! Figure tessellation
//!
//! Converts the loaded mesh lists into one flat triangle list in paint
//! order: filled quadrilaterals with black outlines, then every mesh node
//! as a round marker, then the optional Dirichlet and Neumann overlays.
//! Elements whose line did not have exactly 5 fields are skipped here,
//! matching the loader's promise to carry them untouched.
//!
//! All widths and radii are world-space fractions of the mesh extent, so
//! the figure keeps its proportions for meshes of any scale.

use meshview_mesh::{Bounds, Element, ElementClass, PaletteError, Point2};

use crate::legend::{Legend, LegendSample};
use crate::pipeline::Vertex2D;

/// Visual style of the tessellated figure
#[derive(Debug, Clone)]
pub struct FigureStyle {
    /// Alpha applied to element fill colors
    pub fill_alpha: f32,
    /// Element outline color
    pub edge_color: [f32; 4],
    /// Mesh node marker color
    pub node_color: [f32; 4],
    /// Dirichlet overlay color
    pub dirichlet_color: [f32; 4],
    /// Neumann overlay color
    pub neumann_color: [f32; 4],
    /// Marker radius as a fraction of the mesh extent
    pub marker_scale: f32,
    /// Outline half-width as a fraction of the mesh extent
    pub edge_width_scale: f32,
    /// Triangle count per marker circle
    pub marker_segments: u32,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            fill_alpha: 0.5,
            edge_color: [0.0, 0.0, 0.0, 1.0],
            node_color: [0.0, 0.0, 0.0, 1.0],
            dirichlet_color: [0.0, 0.0, 1.0, 1.0],
            neumann_color: [1.0, 0.0, 0.0, 1.0],
            marker_scale: 0.008,
            edge_width_scale: 0.0012,
            marker_segments: 16,
        }
    }
}

/// Builder for a figure over a point and element list
///
/// Dirichlet and Neumann overlays are optional; a figure without them draws
/// only elements and nodes. Layer visibility mirrors the viewer's toggles.
pub struct Figure<'a> {
    points: &'a [Point2],
    elements: &'a [Element],
    dirichlet: Option<&'a [usize]>,
    neumann: Option<&'a [Vec<usize>]>,
    fills_visible: bool,
    nodes_visible: bool,
}

impl<'a> Figure<'a> {
    /// Create a figure over points and elements
    pub fn new(points: &'a [Point2], elements: &'a [Element]) -> Self {
        Self {
            points,
            elements,
            dirichlet: None,
            neumann: None,
            fills_visible: true,
            nodes_visible: true,
        }
    }

    /// Overlay the Dirichlet node set
    pub fn with_dirichlet(mut self, dirichlet: &'a [usize]) -> Self {
        self.dirichlet = Some(dirichlet);
        self
    }

    /// Overlay the Neumann edge set
    pub fn with_neumann(mut self, neumann: &'a [Vec<usize>]) -> Self {
        self.neumann = Some(neumann);
        self
    }

    /// Show or hide element fills and outlines
    pub fn with_fills(mut self, visible: bool) -> Self {
        self.fills_visible = visible;
        self
    }

    /// Show or hide mesh node markers
    pub fn with_nodes(mut self, visible: bool) -> Self {
        self.nodes_visible = visible;
        self
    }

    /// Tessellate the figure into triangles and a legend
    ///
    /// Fails on an element color class outside the palette. Node indices
    /// are assumed valid; an out-of-range index panics.
    pub fn tessellate(&self, style: &FigureStyle) -> Result<FigureGeometry, PaletteError> {
        let extent = Bounds::of(self.points)
            .map(|b| b.extent() as f32)
            .filter(|e| *e > 0.0)
            .unwrap_or(1.0);
        let marker_radius = extent * style.marker_scale;
        let edge_half_width = extent * style.edge_width_scale;

        let mut geometry = FigureGeometry::new();

        // Element fills and outlines, in file order; fill and outline per
        // element so later elements paint over earlier ones, like the
        // original figure's patch stacking
        if self.fills_visible {
            for element in self.elements {
                let Some(quad) = element.as_quad() else {
                    geometry.skipped_elements += 1;
                    continue;
                };
                let class = ElementClass::try_from(quad.class)?;
                let corners = quad.nodes.map(|node| point_f32(&self.points[node]));

                push_quad(&mut geometry.vertices, corners, class.color_with_alpha(style.fill_alpha));
                geometry.quads += 1;

                for k in 0..4 {
                    if push_segment(
                        &mut geometry.vertices,
                        corners[k],
                        corners[(k + 1) % 4],
                        edge_half_width,
                        style.edge_color,
                    ) {
                        geometry.edge_segments += 1;
                    }
                }
            }

            if geometry.skipped_elements > 0 {
                log::debug!(
                    "skipped {} elements without exactly 5 fields",
                    geometry.skipped_elements
                );
            }
        }

        // Every mesh node
        if self.nodes_visible {
            for point in self.points {
                push_circle(
                    &mut geometry.vertices,
                    point_f32(point),
                    [marker_radius, marker_radius],
                    style.marker_segments,
                    style.node_color,
                );
                geometry.markers += 1;
            }
            geometry.legend.add("Mesh nodes", style.node_color, LegendSample::Marker);
        }

        // Dirichlet nodes, overplotted
        if let Some(dirichlet) = self.dirichlet {
            for &node in dirichlet {
                push_circle(
                    &mut geometry.vertices,
                    point_f32(&self.points[node]),
                    [marker_radius, marker_radius],
                    style.marker_segments,
                    style.dirichlet_color,
                );
                geometry.markers += 1;
            }
            geometry.legend.add("Dirichlet nodes", style.dirichlet_color, LegendSample::Marker);
        }

        // Neumann edges: endpoints plus a segment twice the outline width;
        // the legend entry is attached on the first drawn edge only
        if let Some(neumann) = self.neumann {
            let mut label_added = false;
            for edge in neumann {
                let [a, b] = match edge[..] {
                    [a, b] => [a, b],
                    _ => continue,
                };
                let pa = point_f32(&self.points[a]);
                let pb = point_f32(&self.points[b]);

                push_circle(
                    &mut geometry.vertices,
                    pa,
                    [marker_radius, marker_radius],
                    style.marker_segments,
                    style.neumann_color,
                );
                push_circle(
                    &mut geometry.vertices,
                    pb,
                    [marker_radius, marker_radius],
                    style.marker_segments,
                    style.neumann_color,
                );
                geometry.markers += 2;

                if push_segment(
                    &mut geometry.vertices,
                    pa,
                    pb,
                    edge_half_width * 2.0,
                    style.neumann_color,
                ) {
                    geometry.boundary_segments += 1;
                }

                if !label_added {
                    geometry.legend.add("Neumann edges", style.neumann_color, LegendSample::Line);
                    label_added = true;
                }
            }
        }

        Ok(geometry)
    }
}

/// Tessellated figure: triangles in paint order plus the legend
pub struct FigureGeometry {
    /// World-space triangle list
    pub vertices: Vec<Vertex2D>,
    /// Legend entries collected while tessellating
    pub legend: Legend,
    quads: usize,
    skipped_elements: usize,
    markers: usize,
    edge_segments: usize,
    boundary_segments: usize,
}

impl FigureGeometry {
    fn new() -> Self {
        Self {
            vertices: Vec::new(),
            legend: Legend::new(),
            quads: 0,
            skipped_elements: 0,
            markers: 0,
            edge_segments: 0,
            boundary_segments: 0,
        }
    }

    /// Total vertex count
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of filled quadrilaterals
    #[inline]
    pub fn quad_count(&self) -> usize {
        self.quads
    }

    /// Elements skipped for not having exactly 5 fields
    #[inline]
    pub fn skipped_elements(&self) -> usize {
        self.skipped_elements
    }

    /// Number of round markers (nodes plus overlay endpoints)
    #[inline]
    pub fn marker_count(&self) -> usize {
        self.markers
    }

    /// Number of element outline segments
    #[inline]
    pub fn edge_segment_count(&self) -> usize {
        self.edge_segments
    }

    /// Number of Neumann edge segments
    #[inline]
    pub fn boundary_segment_count(&self) -> usize {
        self.boundary_segments
    }
}

fn point_f32(point: &Point2) -> [f32; 2] {
    [point.x as f32, point.y as f32]
}

/// Append a filled quadrilateral as two triangles
pub(crate) fn push_quad(out: &mut Vec<Vertex2D>, corners: [[f32; 2]; 4], color: [f32; 4]) {
    for &index in &[0, 1, 2, 0, 2, 3] {
        out.push(Vertex2D::new(corners[index], color));
    }
}

/// Append a thick line segment as a quad
///
/// Returns false for a degenerate (zero-length) segment, which emits
/// nothing.
pub(crate) fn push_segment(
    out: &mut Vec<Vertex2D>,
    a: [f32; 2],
    b: [f32; 2],
    half_width: f32,
    color: [f32; 4],
) -> bool {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    let length = (dx * dx + dy * dy).sqrt();
    if length <= f32::EPSILON {
        return false;
    }

    let nx = -dy / length * half_width;
    let ny = dx / length * half_width;
    push_quad(
        out,
        [
            [a[0] + nx, a[1] + ny],
            [a[0] - nx, a[1] - ny],
            [b[0] - nx, b[1] - ny],
            [b[0] + nx, b[1] + ny],
        ],
        color,
    );
    true
}

/// Append a circle as a triangle fan
///
/// `radius` is split per axis so the legend can correct for aspect.
pub(crate) fn push_circle(
    out: &mut Vec<Vertex2D>,
    center: [f32; 2],
    radius: [f32; 2],
    segments: u32,
    color: [f32; 4],
) {
    let step = std::f32::consts::TAU / segments as f32;
    for s in 0..segments {
        let a0 = step * s as f32;
        let a1 = step * (s + 1) as f32;
        out.push(Vertex2D::new(center, color));
        out.push(Vertex2D::new(
            [center[0] + radius[0] * a0.cos(), center[1] + radius[1] * a0.sin()],
            color,
        ));
        out.push(Vertex2D::new(
            [center[0] + radius[0] * a1.cos(), center[1] + radius[1] * a1.sin()],
            color,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    fn style() -> FigureStyle {
        FigureStyle::default()
    }

    #[test]
    fn test_single_quad_is_cyan() {
        let points = unit_square();
        let elements = vec![Element::new(vec![0, 1, 2, 3, 0])];
        let geometry = Figure::new(&points, &elements).tessellate(&style()).unwrap();

        assert_eq!(geometry.quad_count(), 1);
        assert_eq!(geometry.skipped_elements(), 0);
        // Class 0 fill with alpha 0.5, first in paint order
        for vertex in &geometry.vertices[..6] {
            assert_eq!(vertex.color, [0.0, 1.0, 1.0, 0.5]);
        }
        // The fill covers the square's corners
        assert_eq!(geometry.vertices[0].position, [0.0, 0.0]);
        assert_eq!(geometry.vertices[1].position, [1.0, 0.0]);
    }

    #[test]
    fn test_quad_gets_four_outline_segments() {
        let points = unit_square();
        let elements = vec![Element::new(vec![0, 1, 2, 3, 1])];
        let geometry = Figure::new(&points, &elements).tessellate(&style()).unwrap();

        assert_eq!(geometry.edge_segment_count(), 4);
    }

    #[test]
    fn test_non_quad_elements_skipped_but_nodes_drawn() {
        let points = unit_square();
        let elements = vec![
            Element::new(vec![0, 1, 2]),
            Element::new(vec![0, 1, 2, 3, 1]),
            Element::new(vec![0, 1, 2, 3, 0, 9]),
        ];
        let geometry = Figure::new(&points, &elements).tessellate(&style()).unwrap();

        assert_eq!(geometry.quad_count(), 1);
        assert_eq!(geometry.skipped_elements(), 2);
        // All four mesh points still get markers
        assert_eq!(geometry.marker_count(), 4);
    }

    #[test]
    fn test_out_of_range_class_is_fatal() {
        let points = unit_square();
        let elements = vec![Element::new(vec![0, 1, 2, 3, 4])];
        let err = Figure::new(&points, &elements).tessellate(&style()).unwrap_err();
        assert_eq!(err, PaletteError::UnknownClass(4));
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_node_index_panics() {
        let points = unit_square();
        let elements = vec![Element::new(vec![0, 1, 2, 99, 0])];
        let _ = Figure::new(&points, &elements).tessellate(&style());
    }

    #[test]
    fn test_marker_vertex_count() {
        let points = unit_square();
        let elements = Vec::new();
        let geometry = Figure::new(&points, &elements).tessellate(&style()).unwrap();

        assert_eq!(geometry.marker_count(), 4);
        let per_marker = 3 * style().marker_segments as usize;
        assert_eq!(geometry.vertex_count(), 4 * per_marker);
    }

    #[test]
    fn test_dirichlet_overlay_and_legend() {
        let points = unit_square();
        let elements = Vec::new();
        let dirichlet = vec![0, 3];
        let geometry = Figure::new(&points, &elements)
            .with_dirichlet(&dirichlet)
            .tessellate(&style())
            .unwrap();

        // 4 node markers + 2 dirichlet overplots
        assert_eq!(geometry.marker_count(), 6);
        assert!(geometry.legend.has("Mesh nodes"));
        assert!(geometry.legend.has("Dirichlet nodes"));
    }

    #[test]
    fn test_neumann_draws_two_segments_one_label() {
        let points = unit_square();
        let elements = Vec::new();
        let neumann = vec![vec![0, 1], vec![1, 2]];
        let geometry = Figure::new(&points, &elements)
            .with_neumann(&neumann)
            .tessellate(&style())
            .unwrap();

        assert_eq!(geometry.boundary_segment_count(), 2);
        let labels = geometry
            .legend
            .entries()
            .iter()
            .filter(|e| e.label == "Neumann edges")
            .count();
        assert_eq!(labels, 1);
    }

    #[test]
    fn test_neumann_skips_non_pairs() {
        let points = unit_square();
        let elements = Vec::new();
        let neumann = vec![vec![0], vec![0, 1, 2], vec![2, 3]];
        let geometry = Figure::new(&points, &elements)
            .with_neumann(&neumann)
            .tessellate(&style())
            .unwrap();

        assert_eq!(geometry.boundary_segment_count(), 1);
    }

    #[test]
    fn test_empty_neumann_adds_no_label() {
        let points = unit_square();
        let elements = Vec::new();
        let neumann: Vec<Vec<usize>> = Vec::new();
        let geometry = Figure::new(&points, &elements)
            .with_neumann(&neumann)
            .tessellate(&style())
            .unwrap();

        assert!(!geometry.legend.has("Neumann edges"));
    }

    #[test]
    fn test_hidden_layers_emit_nothing() {
        let points = unit_square();
        let elements = vec![Element::new(vec![0, 1, 2, 3, 0])];
        let geometry = Figure::new(&points, &elements)
            .with_fills(false)
            .with_nodes(false)
            .tessellate(&style())
            .unwrap();

        assert_eq!(geometry.vertex_count(), 0);
        assert!(geometry.legend.is_empty());
    }

    #[test]
    fn test_degenerate_segment_emits_nothing() {
        let mut out = Vec::new();
        assert!(!push_segment(&mut out, [1.0, 1.0], [1.0, 1.0], 0.1, [0.0; 4]));
        assert!(out.is_empty());
    }

    #[test]
    fn test_segment_width() {
        let mut out = Vec::new();
        assert!(push_segment(&mut out, [0.0, 0.0], [2.0, 0.0], 0.5, [1.0, 0.0, 0.0, 1.0]));
        assert_eq!(out.len(), 6);
        // Horizontal segment: the offset is vertical, total width 1.0
        let ys: Vec<f32> = out.iter().map(|v| v.position[1]).collect();
        assert!(ys.iter().any(|&y| (y - 0.5).abs() < 1e-6));
        assert!(ys.iter().any(|&y| (y + 0.5).abs() < 1e-6));
    }
}
