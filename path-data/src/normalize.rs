//! Reduction of path data to a minimal set of absolute commands.

use alloc::vec::Vec;

use crate::{PathSink, PathState, Point};

/// Single element of a normalized path.
///
/// All coordinates are absolute.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum PathCommand {
    /// Begin a new subpath at (x, y).
    #[cfg_attr(feature = "serde", serde(rename = "M"))]
    Move { x: f64, y: f64 },
    /// Draw a line from the current point to (x, y).
    #[cfg_attr(feature = "serde", serde(rename = "L"))]
    Line { x: f64, y: f64 },
    /// Draw a cubic bezier from the current point with control points at
    /// (x1, y1) and (x2, y2) and ending at (x, y).
    #[cfg_attr(feature = "serde", serde(rename = "C"))]
    Cubic {
        x: f64,
        y: f64,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    /// Draw an elliptical arc from the current point to (x, y).
    ///
    /// The rotation of the ellipse's x axis is in degrees.
    #[cfg_attr(feature = "serde", serde(rename = "A"))]
    Arc {
        x: f64,
        y: f64,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
    },
}

impl PathCommand {
    /// Returns the end point of the command.
    pub fn end_point(&self) -> Point {
        match *self {
            Self::Move { x, y }
            | Self::Line { x, y }
            | Self::Cubic { x, y, .. }
            | Self::Arc { x, y, .. } => Point::new(x, y),
        }
    }
}

/// Sink that simplifies every command to a [`PathCommand`].
///
/// Horizontal and vertical lines and closes become lines, quadratic curves
/// are elevated to cubic curves, smooth curves have their reflected control
/// points resolved and relative coordinates are made absolute. Arcs are
/// kept as arcs.
#[derive(Clone, Default, Debug)]
pub struct NormalizingSink {
    state: PathState,
    commands: Vec<PathCommand>,
}

impl NormalizingSink {
    /// Creates a new sink with an empty command list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the commands collected so far.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Consumes the sink, returning the collected commands.
    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }

    fn cubic(&mut self, c1: Point, c2: Point, to: Point) {
        self.state.cubic_to(c2, to);
        self.commands.push(PathCommand::Cubic {
            x: to.x,
            y: to.y,
            x1: c1.x,
            y1: c1.y,
            x2: c2.x,
            y2: c2.y,
        });
    }

    fn quad(&mut self, control: Point, to: Point) {
        // Degree elevation: each cubic control point lies 2/3 of the way
        // from an end point to the quadratic control point.
        let from = self.state.current();
        let c1 = from.lerp(control, 2.0 / 3.0);
        let c2 = to.lerp(control, 2.0 / 3.0);
        self.commands.push(PathCommand::Cubic {
            x: to.x,
            y: to.y,
            x1: c1.x,
            y1: c1.y,
            x2: c2.x,
            y2: c2.y,
        });
        self.state.quad_to(control, to);
    }

    fn line(&mut self, to: Point) {
        self.state.segment_to(to);
        self.commands.push(PathCommand::Line { x: to.x, y: to.y });
    }
}

impl PathSink for NormalizingSink {
    fn init(&mut self) {
        self.state.reset();
        self.commands.clear();
    }

    fn state(&self) -> &PathState {
        &self.state
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.state.move_to(Point::new(x, y));
        self.commands.push(PathCommand::Move { x, y });
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
        self.state.segment_to(Point::new(x, y));
        self.commands.push(PathCommand::Arc {
            x,
            y,
            rx,
            ry,
            rotation,
            large_arc,
            sweep,
        });
    }

    fn close(&mut self) {
        self.line(self.state.start());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, parse_with, Command};
    use pretty_assertions::assert_eq;
    use PathCommand::*;

    #[test]
    fn minimal_commands_round_trip() {
        let commands =
            parse("M 1 2 L 3 4 C 5 6 7.25 8.5 9 10 A 5 6 30 1 0 11 12 M -1e2 0.5").unwrap();
        assert_eq!(
            commands,
            [
                Move { x: 1.0, y: 2.0 },
                Line { x: 3.0, y: 4.0 },
                Cubic {
                    x: 9.0,
                    y: 10.0,
                    x1: 5.0,
                    y1: 6.0,
                    x2: 7.25,
                    y2: 8.5
                },
                Arc {
                    x: 11.0,
                    y: 12.0,
                    rx: 5.0,
                    ry: 6.0,
                    rotation: 30.0,
                    large_arc: true,
                    sweep: false
                },
                Move { x: -100.0, y: 0.5 },
            ]
        );
    }

    #[test]
    fn repeated_line() {
        assert_eq!(
            parse("L 1 2 3 4 5 6").unwrap(),
            [
                Line { x: 1.0, y: 2.0 },
                Line { x: 3.0, y: 4.0 },
                Line { x: 5.0, y: 6.0 },
            ]
        );
    }

    #[test]
    fn implicit_line_after_move() {
        assert_eq!(
            parse("M 0 0 1 1 2 2").unwrap(),
            [
                Move { x: 0.0, y: 0.0 },
                Line { x: 1.0, y: 1.0 },
                Line { x: 2.0, y: 2.0 },
            ]
        );
    }

    #[test]
    fn smooth_cubic_reflection() {
        let commands = parse("C 1 1 2 2 3 3 S 4 4 5 5").unwrap();
        assert_eq!(
            commands[1],
            Cubic {
                x: 5.0,
                y: 5.0,
                x1: 4.0,
                y1: 4.0,
                x2: 4.0,
                y2: 4.0
            }
        );
    }

    #[test]
    fn smooth_cubic_without_previous_curve() {
        // reflects through the current point
        let commands = parse("M 1 1 L 3 2 S 4 4 5 5").unwrap();
        assert_eq!(
            commands[2],
            Cubic {
                x: 5.0,
                y: 5.0,
                x1: 3.0,
                y1: 2.0,
                x2: 4.0,
                y2: 4.0
            }
        );
    }

    #[test]
    fn close_path() {
        let mut sink = NormalizingSink::new();
        parse_with("M 0 0 L 5 5 Z", &mut sink).unwrap();
        assert_eq!(
            sink.commands(),
            &[
                Move { x: 0.0, y: 0.0 },
                Line { x: 5.0, y: 5.0 },
                Line { x: 0.0, y: 0.0 },
            ]
        );
        assert_eq!(sink.state().current(), Point::ZERO);
    }

    #[test]
    fn relative_accumulation() {
        let points = parse("M 0 0 l 1 1 l 1 1")
            .unwrap()
            .iter()
            .map(PathCommand::end_point)
            .collect::<Vec<_>>();
        assert_eq!(
            points,
            [
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(2.0, 2.0)
            ]
        );
    }

    #[test]
    fn relative_commands() {
        assert_eq!(
            parse("m 10 10 h 5 v -5 H 0 V 0 z m 1 1 c 1 0 2 1 2 2 a 3 3 0 0 1 4 0").unwrap(),
            [
                Move { x: 10.0, y: 10.0 },
                Line { x: 15.0, y: 10.0 },
                Line { x: 15.0, y: 5.0 },
                Line { x: 0.0, y: 5.0 },
                Line { x: 0.0, y: 0.0 },
                Line { x: 10.0, y: 10.0 },
                Move { x: 11.0, y: 11.0 },
                Cubic {
                    x: 13.0,
                    y: 13.0,
                    x1: 12.0,
                    y1: 11.0,
                    x2: 13.0,
                    y2: 12.0
                },
                Arc {
                    x: 17.0,
                    y: 13.0,
                    rx: 3.0,
                    ry: 3.0,
                    rotation: 0.0,
                    large_arc: false,
                    sweep: true
                },
            ]
        );
    }

    #[test]
    fn relative_curve_controls_use_current_point() {
        // Every offset of a relative curve is relative to the current point,
        // not to the previous control points.
        let commands = parse("M 0 0 C 10 0 20 0 30 0 c 1 1 2 2 3 3 s 4 4 5 5").unwrap();
        assert_eq!(
            commands[2],
            Cubic {
                x: 33.0,
                y: 3.0,
                x1: 31.0,
                y1: 1.0,
                x2: 32.0,
                y2: 2.0
            }
        );
        assert_eq!(
            commands[3],
            Cubic {
                x: 38.0,
                y: 8.0,
                x1: 34.0,
                y1: 4.0,
                x2: 37.0,
                y2: 7.0
            }
        );
    }

    #[test]
    fn quadratic_elevation() {
        // The conversion from quadratic to cubic is the standard degree
        // elevation rather than a duplicated control point.
        let commands = parse("M 0 0 Q 3 6 6 0").unwrap();
        assert_eq!(
            commands[1],
            Cubic {
                x: 6.0,
                y: 0.0,
                x1: 2.0,
                y1: 4.0,
                x2: 4.0,
                y2: 4.0
            }
        );
    }

    #[test]
    fn smooth_quadratic_reflection() {
        // T reflects (3, 6) through (6, 0) giving a control point of (9, -6)
        let commands = parse("M 0 0 Q 3 6 6 0 T 12 0").unwrap();
        assert_eq!(
            commands[2],
            Cubic {
                x: 12.0,
                y: 0.0,
                x1: 8.0,
                y1: -4.0,
                x2: 10.0,
                y2: -4.0
            }
        );
        // relative forms agree with absolute ones
        assert_eq!(commands, parse("m 0 0 q 3 6 6 0 t 6 0").unwrap());
    }

    #[test]
    fn init_resets_state_and_output() {
        let mut sink = NormalizingSink::new();
        parse_with("M 5 5 L 6 6", &mut sink).unwrap();
        parse_with("l 1 1", &mut sink).unwrap();
        assert_eq!(sink.commands(), &[Line { x: 1.0, y: 1.0 }]);
    }

    #[test]
    fn arity_violation() {
        let mut sink = NormalizingSink::new();
        let arity_errors = parse_with("L 1 2 3", &mut sink).unwrap();
        assert_eq!(arity_errors.len(), 1);
        assert_eq!(arity_errors[0].command, Command::LineTo);
        assert_eq!(arity_errors[0].args, [3.0]);
        assert_eq!(sink.into_commands(), [Line { x: 1.0, y: 2.0 }]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialize_commands() {
        let commands = parse("M 1 2 L 3 4 A 1 1 0 0 1 5 6").unwrap();
        let json = serde_json::to_value(&commands).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "type": "M", "x": 1.0, "y": 2.0 },
                { "type": "L", "x": 3.0, "y": 4.0 },
                {
                    "type": "A", "x": 5.0, "y": 6.0, "rx": 1.0, "ry": 1.0,
                    "rotation": 0.0, "large_arc": false, "sweep": true
                },
            ])
        );
        let round_trip: Vec<PathCommand> = serde_json::from_value(json).unwrap();
        assert_eq!(round_trip, commands);
    }
}
