use approx::assert_abs_diff_eq;
use cryptoview::ChartError;
use cryptoview::core::{
    PriceProjection, Viewport, apply_vertical_zoom, nearest_index, sample_spacing, to_pixel_x,
    to_pixel_y,
};

#[test]
fn price_mapping_puts_top_at_zero_and_bottom_at_height() {
    assert_eq!(to_pixel_y(120.0, 120.0, 80.0, 400.0).expect("top"), 0.0);
    assert_eq!(to_pixel_y(80.0, 120.0, 80.0, 400.0).expect("bottom"), 400.0);
    assert_abs_diff_eq!(
        to_pixel_y(100.0, 120.0, 80.0, 400.0).expect("mid"),
        200.0,
        epsilon = 1e-9
    );
}

#[test]
fn non_finite_price_is_invalid_data() {
    let err = to_pixel_y(f64::NAN, 120.0, 80.0, 400.0).expect_err("nan price");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn vertical_zoom_compresses_around_midpoint() {
    assert_abs_diff_eq!(apply_vertical_zoom(0.0, 200.0, 2.0), 100.0, epsilon = 1e-12);
    assert_abs_diff_eq!(apply_vertical_zoom(400.0, 200.0, 2.0), 300.0, epsilon = 1e-12);
    assert_abs_diff_eq!(apply_vertical_zoom(200.0, 200.0, 7.5), 200.0, epsilon = 1e-12);
    assert_abs_diff_eq!(apply_vertical_zoom(0.0, 200.0, 0.5), -200.0, epsilon = 1e-12);
}

#[test]
fn projection_applies_zoom_after_base_mapping() {
    let projection = PriceProjection::new(120.0, 80.0, 400.0, 2.0).expect("projection");
    assert_abs_diff_eq!(projection.mid(), 200.0, epsilon = 1e-12);
    assert_abs_diff_eq!(projection.price_to_pixel(120.0), 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(projection.price_to_pixel(80.0), 300.0, epsilon = 1e-9);
}

#[test]
fn projection_rejects_flat_range_and_bad_zoom() {
    assert!(matches!(
        PriceProjection::new(5.0, 5.0, 400.0, 1.0),
        Err(ChartError::DegenerateRange { .. })
    ));
    assert!(PriceProjection::new(10.0, 5.0, 400.0, 0.0).is_err());
    assert!(PriceProjection::new(10.0, 5.0, 0.0, 1.0).is_err());
}

#[test]
fn index_mapping_uses_floating_width() {
    let viewport = Viewport::new(-100.0, 900.0).expect("viewport");
    assert_eq!(sample_spacing(viewport, 10), 100.0);
    assert_eq!(to_pixel_x(0, viewport, 10), -100.0);
    assert_eq!(to_pixel_x(3, viewport, 10), 200.0);
    assert_eq!(sample_spacing(viewport, 0), 0.0);
}

#[test]
fn nearest_index_rounds_and_clamps() {
    let viewport = Viewport::new(-100.0, 900.0).expect("viewport");
    assert_eq!(nearest_index(240.0, viewport, 10), 3);
    assert_eq!(nearest_index(260.0, viewport, 10), 4);
    assert_eq!(nearest_index(-1.0e9, viewport, 10), 0);
    assert_eq!(nearest_index(1.0e9, viewport, 10), 9);
    assert_eq!(nearest_index(f64::NAN, viewport, 10), 0);
    assert_eq!(nearest_index(500.0, viewport, 0), 0);
}
