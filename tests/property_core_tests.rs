use cryptoview::core::grid::non_degenerate_rounding;
use cryptoview::core::{
    GridTuning, Viewport, ViewportBounds, ZoomDirection, nearest_index, plan_grid, to_pixel_x,
    to_pixel_y,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn pixel_x_is_strictly_monotonic_in_index(
        left in -10_000.0f64..0.0,
        span in 10.0f64..50_000.0,
        count in 2usize..2_000
    ) {
        let viewport = Viewport::new(left, left + span).expect("viewport");
        let mut previous = to_pixel_x(0, viewport, count);
        for index in 1..count {
            let x = to_pixel_x(index, viewport, count);
            prop_assert!(x > previous);
            previous = x;
        }
    }

    #[test]
    fn prices_inside_range_map_inside_canvas(
        bottom in -1_000_000.0f64..1_000_000.0,
        range in 0.001f64..100_000.0,
        fraction in 0.0f64..=1.0,
        height in 1.0f64..4_000.0
    ) {
        let top = bottom + range;
        let price = (bottom + fraction * range).clamp(bottom, top);
        let y = to_pixel_y(price, top, bottom, height).expect("mapped");
        let eps = height * 1e-6;
        prop_assert!(y >= -eps && y <= height + eps);
    }

    #[test]
    fn pan_round_trip_is_exact_away_from_bounds(
        left in -5_000i32..-1_000,
        right in 2_000i32..6_000,
        delta in 1i32..500
    ) {
        let bounds = ViewportBounds::new(1_000.0, 200.0);
        let original = Viewport::new(f64::from(left), f64::from(right)).expect("viewport");
        let mut viewport = original;

        prop_assert!(viewport.pan(f64::from(delta), bounds));
        prop_assert!(viewport.pan(-f64::from(delta), bounds));
        prop_assert_eq!(viewport, original);
    }

    #[test]
    fn pan_and_zoom_never_break_clamp_invariants(
        steps in proptest::collection::vec((-2_000.0f64..2_000.0, 0.0f64..1_000.0, any::<bool>()), 1..40)
    ) {
        let bounds = ViewportBounds::new(1_000.0, 200.0);
        let mut viewport = Viewport::home(1_000.0);
        for (delta, anchor, zoom_in) in steps {
            viewport.pan(delta, bounds);
            let direction = if zoom_in { ZoomDirection::In } else { ZoomDirection::Out };
            viewport.zoom(direction, anchor, 4.0, bounds);
            prop_assert!(viewport.left() <= 0.0);
            prop_assert!(viewport.right() >= bounds.min_right());
        }
    }

    #[test]
    fn repeated_pan_past_bound_does_not_drift(delta in 1.0f64..5_000.0, repeats in 2usize..20) {
        let bounds = ViewportBounds::new(1_000.0, 200.0);
        let mut viewport = Viewport::home(1_000.0);
        viewport.pan(-delta, bounds);
        let settled = viewport;
        for _ in 0..repeats {
            viewport.pan(-delta, bounds);
        }
        if settled.right() == bounds.min_right() {
            prop_assert_eq!(viewport, settled);
        }
        prop_assert!(viewport.right() >= bounds.min_right());
    }

    #[test]
    fn nearest_index_stays_in_range(
        pointer in proptest::num::f64::ANY,
        left in -10_000.0f64..0.0,
        span in 1.0f64..50_000.0,
        count in 1usize..10_000
    ) {
        let viewport = Viewport::new(left, left + span).expect("viewport");
        prop_assert!(nearest_index(pointer, viewport, count) < count);
    }

    #[test]
    fn rounding_search_separates_distinct_extrema(
        bottom in -10_000.0f64..10_000.0,
        gap in 0.001f64..1_000.0
    ) {
        let top = bottom + gap;
        let (rounded_top, rounded_bottom) =
            non_degenerate_rounding(top, bottom, 12).expect("separable");
        prop_assert!(rounded_top != rounded_bottom);
    }

    #[test]
    fn grid_lines_stay_on_canvas(
        bottom in -10_000.0f64..10_000.0,
        gap in 0.0f64..5_000.0,
        height in 50.0f64..2_000.0,
        zoom in 0.05f64..50.0
    ) {
        let tuning = GridTuning::default();
        let plan = plan_grid(bottom + gap, bottom, height, zoom, tuning).expect("plan");
        prop_assert!(!plan.lines.is_empty());
        prop_assert!(plan.lines.len() <= tuning.max_lines);
        for line in &plan.lines {
            prop_assert!(line.y >= 0.0 && line.y <= height);
            prop_assert!(line.value.is_finite());
        }
    }
}
