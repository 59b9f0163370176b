use cryptoview::core::{Viewport, ViewportBounds, ZoomDirection};

const BOUNDS: ViewportBounds = ViewportBounds::new(1000.0, 200.0);

#[test]
fn home_viewport_rejects_pan_to_the_right() {
    let mut viewport = Viewport::home(1000.0);
    assert!(!viewport.pan(25.0, BOUNDS));
    assert_eq!(viewport, Viewport::home(1000.0));
}

#[test]
fn pan_round_trip_restores_viewport() {
    let mut viewport = Viewport::home(1000.0);
    assert!(viewport.pan(-50.0, BOUNDS));
    assert_eq!(viewport.left(), -50.0);
    assert_eq!(viewport.right(), 950.0);

    assert!(viewport.pan(50.0, BOUNDS));
    assert_eq!(viewport, Viewport::home(1000.0));
}

#[test]
fn panning_left_by_floating_width_twice_stays_clamped() {
    let mut viewport = Viewport::home(1000.0);
    let span = viewport.floating_width();

    assert!(viewport.pan(-span, BOUNDS));
    assert_eq!(viewport.right(), BOUNDS.min_right());
    assert_eq!(viewport.left(), -1000.0);

    assert!(!viewport.pan(-span, BOUNDS));
    assert_eq!(viewport.right(), BOUNDS.min_right());
    assert_eq!(viewport.left(), -1000.0);
}

#[test]
fn clamp_only_moves_violating_edge() {
    let mut viewport = Viewport::new(-20.0, 700.0).expect("viewport");
    viewport.clamp(BOUNDS);
    assert_eq!(viewport.left(), -20.0);
    assert_eq!(viewport.right(), 800.0);
}

#[test]
fn zoom_in_widens_around_anchor() {
    let viewport = Viewport::home(1000.0).zoomed(ZoomDirection::In, 500.0, 4.0, BOUNDS);
    assert_eq!(viewport.left(), -100.0);
    assert_eq!(viewport.right(), 1100.0);
}

#[test]
fn zoom_out_narrows_and_clamps() {
    let viewport = Viewport::home(1000.0).zoomed(ZoomDirection::Out, 500.0, 4.0, BOUNDS);
    assert_eq!(viewport.left(), 0.0);
    assert_eq!(viewport.right(), 900.0);
}

#[test]
fn repeated_zoom_out_settles_on_bounds() {
    let mut viewport = Viewport::home(1000.0);
    for _ in 0..20 {
        viewport.zoom(ZoomDirection::Out, 500.0, 4.0, BOUNDS);
    }
    assert_eq!(viewport.left(), 0.0);
    assert_eq!(viewport.right(), 800.0);

    let again = viewport.zoomed(ZoomDirection::Out, 500.0, 4.0, BOUNDS);
    assert_eq!(again, viewport);
}

#[test]
fn invalid_zoom_inputs_leave_viewport_unchanged() {
    let viewport = Viewport::home(1000.0);
    assert_eq!(
        viewport.zoomed(ZoomDirection::In, f64::NAN, 4.0, BOUNDS),
        viewport
    );
    assert_eq!(viewport.zoomed(ZoomDirection::In, 500.0, 0.0, BOUNDS), viewport);
}

#[test]
fn viewport_constructor_validates_edges() {
    assert!(Viewport::new(10.0, 10.0).is_err());
    assert!(Viewport::new(f64::NEG_INFINITY, 10.0).is_err());
}
