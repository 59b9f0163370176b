use cryptoview::render::{Color, DrawCommand, DrawingSurface, Font, Paint, RecordingSurface};

const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
const FONT: Font = Font::new("Verdana", 12.0);

#[test]
fn last_frame_starts_at_latest_clear() {
    let mut surface = RecordingSurface::new(200.0, 100.0);
    surface.clear_region(0.0, 0.0, 200.0, 100.0).expect("clear");
    surface.draw_text("first", 1.0, 1.0, FONT, WHITE).expect("text");
    surface.clear_region(0.0, 0.0, 200.0, 100.0).expect("clear");
    surface.draw_text("second", 1.0, 1.0, FONT, WHITE).expect("text");

    assert_eq!(surface.frames(), 2);
    assert_eq!(surface.texts(), vec!["second"]);
    assert_eq!(surface.commands().len(), 4);
}

#[test]
fn partial_clear_is_not_a_frame() {
    let mut surface = RecordingSurface::new(200.0, 100.0);
    surface.clear_region(10.0, 10.0, 20.0, 20.0).expect("clear");
    assert_eq!(surface.frames(), 0);
}

#[test]
fn paths_are_recorded_in_order() {
    let mut surface = RecordingSurface::new(200.0, 100.0);
    surface.begin_path();
    surface.move_to(0.0, 0.0);
    surface.line_to(10.0, 5.0);
    surface.set_line_dash(&[5.0, 4.0]);
    surface.stroke_path(WHITE, 0.5).expect("stroke");

    assert_eq!(
        surface.take_commands(),
        vec![
            DrawCommand::BeginPath,
            DrawCommand::MoveTo { x: 0.0, y: 0.0 },
            DrawCommand::LineTo { x: 10.0, y: 5.0 },
            DrawCommand::LineDash(vec![5.0, 4.0]),
            DrawCommand::Stroke {
                color: WHITE,
                width: 0.5
            },
        ]
    );
    assert!(surface.commands().is_empty());
}

#[test]
fn invalid_paint_inputs_are_rejected() {
    let mut surface = RecordingSurface::new(200.0, 100.0);
    assert!(surface.stroke_path(WHITE, 0.0).is_err());
    assert!(surface.fill_path(Paint::Solid(Color::rgba(2.0, 0.0, 0.0, 1.0))).is_err());
    assert!(
        surface
            .draw_text("nan", f64::NAN, 0.0, FONT, WHITE)
            .is_err()
    );
    assert!(
        surface
            .fill_path(Paint::VerticalGradient {
                top: 0.0,
                bottom: f64::INFINITY,
                start: WHITE,
                end: WHITE,
            })
            .is_err()
    );
    assert!(surface.commands().is_empty());
}

#[test]
fn pixel_ratio_and_size_are_reported() {
    let mut surface = RecordingSurface::new(200.0, 100.0).with_pixel_ratio(2.0);
    assert_eq!(surface.pixel_ratio(), 2.0);
    surface.set_size(300.0, 150.0);
    assert_eq!(surface.size().width, 300.0);
    assert_eq!(surface.size().height, 150.0);
}
