//! Drawing path data into kurbo paths.

#![cfg(feature = "kurbo")]

use kurbo::{BezPath, PathEl, Shape};
use path_data::{parse, parse_with, DrawingSink, PathCommand};

fn draw(data: &str) -> BezPath {
    let mut path = BezPath::new();
    parse_with(data, &mut DrawingSink::new(&mut path)).unwrap();
    path
}

/// Builds a path from normalized commands, which contain no arcs here.
fn normalized(data: &str) -> BezPath {
    let mut path = BezPath::new();
    for command in parse(data).unwrap() {
        match command {
            PathCommand::Move { x, y } => path.move_to((x, y)),
            PathCommand::Line { x, y } => path.line_to((x, y)),
            PathCommand::Cubic {
                x,
                y,
                x1,
                y1,
                x2,
                y2,
            } => path.curve_to((x1, y1), (x2, y2), (x, y)),
            PathCommand::Arc { .. } => panic!("unexpected arc"),
        }
    }
    path
}

#[test]
fn half_circle_bounds() {
    let path = draw("M 0 0 A 5 5 0 0 1 10 0 Z");
    let bounds = path.bounding_box();
    assert!(bounds.x0.abs() < 1e-6, "{bounds:?}");
    assert!((bounds.x1 - 10.0).abs() < 1e-6, "{bounds:?}");
    assert!((bounds.y0 + 5.0).abs() < 0.05, "{bounds:?}");
    assert!(bounds.y1.abs() < 1e-6, "{bounds:?}");
    assert!((path.area().abs() - 12.5 * std::f64::consts::PI).abs() < 0.1);
}

#[test]
fn large_arc_covers_three_quarters() {
    // Three quarters of a circle of radius 10 centered at (10, 0)
    let path = draw("M 0 0 A 10 10 0 1 1 10 10 L 10 0 Z");
    let quarter = 25.0 * std::f64::consts::PI;
    assert!((path.area().abs() - 3.0 * quarter).abs() < 0.5);
    let small = draw("M 0 0 A 10 10 0 0 0 10 10 L 10 0 Z");
    assert!((small.area().abs() - quarter).abs() < 0.5);
}

#[test]
fn quadratic_elevation_preserves_shape() {
    let data = "M 0 0 Q 5 10 10 0 T 20 0 V 20 H 0 Z";
    let drawn = draw(data);
    let elevated = normalized(data);
    assert!(drawn
        .elements()
        .iter()
        .any(|el| matches!(el, PathEl::QuadTo(..))));
    assert!((drawn.area() - elevated.area()).abs() < 1e-9);
    let a = drawn.bounding_box();
    let b = elevated.bounding_box();
    assert!((a.y0 - b.y0).abs() < 1e-9 && (a.y1 - b.y1).abs() < 1e-9);
}

#[test]
fn smooth_curves_match_between_sinks() {
    let data = "m 10 10 c 0 -5 10 -5 10 0 s 10 5 10 0 h -20";
    assert_eq!(draw(data).elements(), normalized(data).elements());
}
