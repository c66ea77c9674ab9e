//! End-to-end test: text files through the loader into a tessellated figure
//!
//! Exercises the same path the viewer takes at startup, minus the window:
//! write the four input files, load them, tessellate with both overlays.

use std::fs;

use meshview::mesh::{Mesh, MeshPaths};
use meshview::render::{Figure, FigureStyle};

/// A 2x1 quad mesh: six nodes, two colored quads, one degenerate element
const POINTS: &str = "0 0\n1 0\n2 0\n2 1\n1 1\n0 1\n";
const ELEMENTS: &str = "0 1 4 5 0\n1 2 3 4 1\n0 1 2\n";
const DIRICHLET: &str = "0\n5\n";
const NEUMANN: &str = "2 3\n";

fn write_fixture(name: &str) -> MeshPaths {
    let dir = std::env::temp_dir().join(format!("meshview_fixture_{}", name));
    fs::create_dir_all(&dir).unwrap();
    let paths = MeshPaths::in_dir(&dir);
    fs::write(&paths.points, POINTS).unwrap();
    fs::write(&paths.elements, ELEMENTS).unwrap();
    fs::write(&paths.dirichlet, DIRICHLET).unwrap();
    fs::write(&paths.neumann, NEUMANN).unwrap();
    paths
}

#[test]
fn test_load_and_tessellate() {
    let paths = write_fixture("load_and_tessellate");
    let mesh = Mesh::load(&paths).unwrap();

    assert_eq!(mesh.points.len(), 6);
    assert_eq!(mesh.elements.len(), 3);
    assert_eq!(mesh.quad_count(), 2);
    assert_eq!(mesh.dirichlet, vec![0, 5]);
    assert_eq!(mesh.neumann, vec![vec![2, 3]]);

    let geometry = Figure::new(&mesh.points, &mesh.elements)
        .with_dirichlet(&mesh.dirichlet)
        .with_neumann(&mesh.neumann)
        .tessellate(&FigureStyle::default())
        .unwrap();

    assert_eq!(geometry.quad_count(), 2);
    assert_eq!(geometry.skipped_elements(), 1);
    // 6 nodes + 2 dirichlet + 2 neumann endpoints
    assert_eq!(geometry.marker_count(), 10);
    assert_eq!(geometry.boundary_segment_count(), 1);

    let legend: Vec<&str> = geometry
        .legend
        .entries()
        .iter()
        .map(|e| e.label.as_str())
        .collect();
    assert_eq!(legend, vec!["Mesh nodes", "Dirichlet nodes", "Neumann edges"]);
}

#[test]
fn test_loader_round_trip_through_save() {
    let paths = write_fixture("round_trip");
    let mesh = Mesh::load(&paths).unwrap();

    let out_dir = std::env::temp_dir().join("meshview_fixture_round_trip_out");
    fs::create_dir_all(&out_dir).unwrap();
    let out_paths = MeshPaths::in_dir(&out_dir);

    mesh.save(&out_paths).unwrap();
    let reloaded = Mesh::load(&out_paths).unwrap();
    assert_eq!(reloaded, mesh);
}

#[test]
fn test_malformed_points_terminate_load() {
    let paths = write_fixture("malformed");
    fs::write(&paths.points, "0 0\n0 one\n").unwrap();

    let err = Mesh::load(&paths).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("line 2"), "unexpected error: {}", message);
}
