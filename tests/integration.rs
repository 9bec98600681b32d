use mobius_engine::Engine;
use mobius_engine::geom::{MobiusStrip, StripError, StripParams, mesh_strip};
use mobius_engine::render::{LEGEND_LABEL, TITLE, render_payload};

#[test]
fn engine_starts_with_default_strip() {
    let engine = Engine::with_params(StripParams::default()).expect("default engine");
    assert_eq!(engine.strip().params(), StripParams::default());
    assert_eq!(engine.strip().grid().len(), 100 * 100);
}

#[test]
fn engine_reconfigure_rebuilds_scalars() {
    let mut engine = Engine::with_params(StripParams::new(5.0, 2.0, 50)).expect("engine");
    let narrow_area = {
        engine
            .set_params(StripParams::new(5.0, 0.5, 50))
            .expect("reconfigure");
        engine.surface_area()
    };

    engine
        .set_params(StripParams::new(5.0, 2.0, 50))
        .expect("reconfigure");
    assert!(engine.surface_area() > narrow_area);
    assert!(engine.edge_length() > 0.0);
}

#[test]
fn degenerate_resolution_is_reported_not_nan() {
    let err = MobiusStrip::new(StripParams::new(5.0, 2.0, 1)).unwrap_err();
    assert!(matches!(err, StripError::DegenerateResolution { resolution: 1 }));
    assert!(Engine::with_params(StripParams::new(5.0, 2.0, 0)).is_err());
}

#[test]
fn render_payload_matches_mesh() {
    let strip = MobiusStrip::new(StripParams::new(5.0, 2.0, 20)).expect("strip");
    let (mesh, _) = mesh_strip(&strip);
    let payload = render_payload(&strip);

    assert_eq!(payload.title, TITLE);
    assert_eq!(payload.legend.label, LEGEND_LABEL);
    assert_eq!(payload.box_aspect, [1.0, 1.0, 0.5]);
    assert_eq!(payload.mesh.vertices, mesh.positions);
    assert_eq!(payload.mesh.faces.len(), mesh.triangle_count());
    assert_eq!(payload.colors.len(), mesh.vertex_count());
    assert!(
        payload
            .colors
            .iter()
            .flatten()
            .all(|c| (0.0..=1.0).contains(c))
    );
}
