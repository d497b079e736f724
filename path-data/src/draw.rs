//! Forwarding of path commands to a canvas-like drawing target.

use crate::{CenterArc, DrawTarget, PathSink, PathState, Point};

/// Sink that draws each command on a [`DrawTarget`].
///
/// Lines, curves and closes map directly to the corresponding target
/// methods after relative and smooth commands are resolved. Elliptical arcs
/// are converted from endpoint to center parameterization (see
/// [`CenterArc::from_endpoints`]) and drawn with
/// [`DrawTarget::ellipse`].
pub struct DrawingSink<'a, T: ?Sized> {
    state: PathState,
    target: &'a mut T,
}

impl<'a, T> DrawingSink<'a, T>
where
    T: DrawTarget + ?Sized,
{
    /// Creates a sink that draws on the given target.
    pub fn new(target: &'a mut T) -> Self {
        Self {
            state: PathState::default(),
            target,
        }
    }

    /// Returns the drawing target.
    pub fn target(&mut self) -> &mut T {
        self.target
    }

    fn line(&mut self, to: Point) {
        self.target.line_to(to.x, to.y);
        self.state.segment_to(to);
    }

    fn cubic(&mut self, c1: Point, c2: Point, to: Point) {
        self.target
            .bezier_curve_to(c1.x, c1.y, c2.x, c2.y, to.x, to.y);
        self.state.cubic_to(c2, to);
    }

    fn quad(&mut self, control: Point, to: Point) {
        self.target
            .quadratic_curve_to(control.x, control.y, to.x, to.y);
        self.state.quad_to(control, to);
    }
}

impl<T> PathSink for DrawingSink<'_, T>
where
    T: DrawTarget + ?Sized,
{
    fn init(&mut self) {
        self.state.reset();
    }

    fn state(&self) -> &PathState {
        &self.state
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.target.move_to(x, y);
        self.state.move_to(Point::new(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.line(Point::new(x, y));
    }

    fn hline_to(&mut self, x: f64) {
        self.line(Point::new(x, self.state.current().y));
    }

    fn vline_to(&mut self, y: f64) {
        self.line(Point::new(self.state.current().x, y));
    }

    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.cubic(Point::new(x1, y1), Point::new(x2, y2), Point::new(x, y));
    }

    fn smooth_curve_to(&mut self, x2: f64, y2: f64, x: f64, y: f64) {
        let c1 = self.state.reflected_cubic_control();
        self.cubic(c1, Point::new(x2, y2), Point::new(x, y));
    }

    fn quad_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
        self.quad(Point::new(x1, y1), Point::new(x, y));
    }

    fn smooth_quad_to(&mut self, x: f64, y: f64) {
        let control = self.state.reflected_quad_control();
        self.quad(control, Point::new(x, y));
    }

    fn arc_to(
        &mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) {
        let from = self.state.current();
        let to = Point::new(x, y);
        if from == to {
            return;
        }
        let (rx, ry) = (rx.abs(), ry.abs());
        if rx == 0.0 || ry == 0.0 {
            self.line(to);
            return;
        }
        let arc = CenterArc::from_endpoints(from, to, rx, ry, rotation, large_arc, sweep);
        self.target.ellipse(
            arc.center.x,
            arc.center.y,
            arc.radius_x,
            arc.radius_y,
            arc.rotation,
            arc.start_angle,
            arc.end_angle,
            arc.counter_clockwise,
        );
        self.state.segment_to(to);
    }

    fn close(&mut self) {
        self.target.close_path();
        self.state.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_with, DrawCommand};
    use core::f64::consts::PI;
    use pretty_assertions::assert_eq;
    use DrawCommand::*;

    fn draw(data: &str) -> Vec<DrawCommand> {
        let mut commands = Vec::new();
        parse_with(data, &mut DrawingSink::new(&mut commands)).unwrap();
        commands
    }

    #[test]
    fn lines_and_curves() {
        assert_eq!(
            draw("M 1 2 L 3 4 H 5 V 6 C 1 1 2 2 3 3 Q 4 4 5 5 Z"),
            [
                MoveTo { x: 1.0, y: 2.0 },
                LineTo { x: 3.0, y: 4.0 },
                LineTo { x: 5.0, y: 4.0 },
                LineTo { x: 5.0, y: 6.0 },
                BezierCurveTo {
                    x1: 1.0,
                    y1: 1.0,
                    x2: 2.0,
                    y2: 2.0,
                    x: 3.0,
                    y: 3.0
                },
                QuadraticCurveTo {
                    x1: 4.0,
                    y1: 4.0,
                    x: 5.0,
                    y: 5.0
                },
                ClosePath,
            ]
        );
    }

    #[test]
    fn smooth_cubic_reflects_second_control_point() {
        let commands = draw("M 0 0 C 1 0 2 2 3 3 S 4 4 5 5");
        assert_eq!(
            commands[2],
            BezierCurveTo {
                x1: 4.0,
                y1: 4.0,
                x2: 4.0,
                y2: 4.0,
                x: 5.0,
                y: 5.0
            }
        );
    }

    #[test]
    fn smooth_quadratic() {
        let commands = draw("M 0 0 Q 3 6 6 0 t 6 0");
        assert_eq!(
            commands[2],
            QuadraticCurveTo {
                x1: 9.0,
                y1: -6.0,
                x: 12.0,
                y: 0.0
            }
        );
    }

    #[test]
    fn close_resets_current_point() {
        let commands = draw("M 10 10 l 5 0 z l 0 5");
        assert_eq!(commands[3], LineTo { x: 10.0, y: 15.0 });
    }

    #[test]
    fn arc_orientation() {
        let commands = draw("M 0 0 A 5 5 0 0 1 10 0");
        let Ellipse {
            cx,
            cy,
            rx,
            ry,
            rotation,
            start_angle,
            end_angle,
            counter_clockwise,
        } = commands[1]
        else {
            panic!("expected an ellipse, found {:?}", commands[1]);
        };
        assert!((cx - 5.0).abs() < 1e-9);
        assert!(cy.abs() < 1e-9);
        assert_eq!((rx, ry, rotation), (5.0, 5.0, 0.0));
        assert!(!counter_clockwise);
        // the midpoint of the arc lies at negative y
        let mid = (start_angle + end_angle) / 2.0;
        assert!((cy + ry * mid.sin() + 5.0).abs() < 1e-9);
        assert!((end_angle - start_angle - PI).abs() < 1e-9);
    }

    #[test]
    fn arc_sweep_flag_selects_counter_clockwise() {
        let commands = draw("M 0 0 A 5 5 0 0 0 10 0");
        assert!(matches!(
            commands[1],
            Ellipse {
                counter_clockwise: true,
                ..
            }
        ));
    }

    #[test]
    fn relative_arc_updates_current_point() {
        let commands = draw("M 10 10 a 5 5 0 0 1 10 0 l 1 1");
        assert_eq!(commands[2], LineTo { x: 21.0, y: 11.0 });
    }

    #[test]
    fn degenerate_arcs() {
        // zero radius is a line, a zero length arc is omitted
        assert_eq!(
            draw("M 0 0 A 0 5 0 0 1 10 0 A 5 5 0 0 1 10 0"),
            [MoveTo { x: 0.0, y: 0.0 }, LineTo { x: 10.0, y: 0.0 }]
        );
    }

    #[test]
    fn negative_radii_use_absolute_value() {
        assert_eq!(
            draw("M 0 0 A -5 -5 0 0 1 10 0"),
            draw("M 0 0 A 5 5 0 0 1 10 0")
        );
    }
}
