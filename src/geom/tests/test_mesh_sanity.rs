use crate::geom::{
    GeomContext, MobiusStrip, StripParams, mesh_strip, mesh_strip_with_context, seam_gap,
    triangulate_grid,
};

#[test]
fn triangulate_grid_splits_each_cell() {
    assert!(triangulate_grid(1, 5).is_empty());
    assert_eq!(triangulate_grid(2, 2), vec![0, 1, 2, 2, 1, 3]);

    let indices = triangulate_grid(4, 3);
    assert_eq!(indices.len(), 3 * 2 * 6);
    assert!(indices.iter().all(|&i| i < 12));
}

#[test]
fn strip_mesh_is_a_valid_open_grid() {
    let n = 16;
    let strip = MobiusStrip::new(StripParams::new(5.0, 2.0, n)).unwrap();
    let mut ctx = GeomContext::new();
    let (mesh, diag) = mesh_strip_with_context(&strip, &mut ctx);

    mesh.validate().expect("mesh validate");
    assert_eq!(mesh.vertex_count(), n * n);
    assert_eq!(mesh.triangle_count(), 2 * (n - 1) * (n - 1));

    assert_eq!(diag.vertex_count, n * n);
    assert_eq!(diag.triangle_count, mesh.triangle_count());
    assert_eq!(diag.open_edge_count, 4 * (n - 1));
    assert!(diag.is_manifold());
    assert_eq!(diag.degenerate_triangle_count, 0);
    assert!(diag.is_clean(), "unexpected issues: {}", diag.summary());
    assert!(diag.seam_gap < 1e-9);

    let uvs = mesh.uvs.as_ref().unwrap();
    assert_eq!(uvs[0], [0.0, 0.0]);
    assert_eq!(uvs[n * n - 1], [1.0, 1.0]);

    for normal in mesh.normals.as_ref().unwrap() {
        let len = (normal[0].powi(2) + normal[1].powi(2) + normal[2].powi(2)).sqrt();
        assert!((len - 1.0).abs() < 1e-9);
    }
}

#[test]
fn seam_columns_meet_in_reverse_order() {
    let strip = MobiusStrip::new(StripParams::new(2.0, 1.0, 9)).unwrap();
    assert!(seam_gap(&strip) < 1e-12);

    let first = strip.position(0, 0);
    let last = strip.position(0, 8);
    assert!(first.distance_to(last) > 0.5);
}

#[test]
fn zero_width_mesh_is_fully_degenerate() {
    let strip = MobiusStrip::new(StripParams::new(5.0, 0.0, 6)).unwrap();
    let (mesh, diag) = mesh_strip(&strip);

    mesh.validate().expect("mesh validate");
    assert_eq!(diag.degenerate_triangle_count, diag.triangle_count);
    assert!(!diag.is_clean());
    assert_eq!(diag.warnings.len(), 1);
    assert!(diag.summary().contains("degenerate:50"));
}
