//! Types for receiving the output of the [`DrawingSink`](crate::DrawingSink).

use alloc::vec::Vec;

/// Interface of a canvas-like 2D path.
///
/// The methods mirror the path methods of `CanvasRenderingContext2D` and
/// `Path2D`.
pub trait DrawTarget {
    /// Begin a new subpath at (x, y).
    fn move_to(&mut self, x: f64, y: f64);

    /// Add a line segment from the current point to (x, y).
    fn line_to(&mut self, x: f64, y: f64);

    /// Add a cubic bezier segment from the current point with control
    /// points at (x1, y1) and (x2, y2) and ending at (x, y).
    fn bezier_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64);

    /// Add a quadratic bezier segment from the current point with a control
    /// point at (x1, y1) and ending at (x, y).
    fn quadratic_curve_to(&mut self, x1: f64, y1: f64, x: f64, y: f64);

    /// Add an elliptical arc centered at (cx, cy) with the given radii and
    /// rotation (in radians), from `start_angle` to `end_angle`.
    ///
    /// As with the canvas method, a straight line connects the current point
    /// to the start of the arc.
    #[allow(clippy::too_many_arguments)]
    fn ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
        counter_clockwise: bool,
    );

    /// Close the current subpath.
    fn close_path(&mut self);
}

/// A single call on a [`DrawTarget`].
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawCommand {
    /// [`DrawTarget::move_to`]
    MoveTo {
        x: f64,
        y: f64,
    },
    /// [`DrawTarget::line_to`]
    LineTo {
        x: f64,
        y: f64,
    },
    /// [`DrawTarget::bezier_curve_to`]
    BezierCurveTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    /// [`DrawTarget::quadratic_curve_to`]
    QuadraticCurveTo {
        x1: f64,
        y1: f64,
        x: f64,
        y: f64,
    },
    /// [`DrawTarget::ellipse`]
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
        counter_clockwise: bool,
    },
    /// [`DrawTarget::close_path`]
    ClosePath,
}

impl DrawTarget for Vec<DrawCommand> {
    fn move_to(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::MoveTo { x, y })
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::LineTo { x, y })
    }

    fn bezier_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.push(DrawCommand::BezierCurveTo {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
        })
    }

    fn quadratic_curve_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
        self.push(DrawCommand::QuadraticCurveTo { x1, y1, x, y })
    }

    fn ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
        counter_clockwise: bool,
    ) {
        self.push(DrawCommand::Ellipse {
            cx,
            cy,
            rx,
            ry,
            rotation,
            start_angle,
            end_angle,
            counter_clockwise,
        })
    }

    fn close_path(&mut self) {
        self.push(DrawCommand::ClosePath)
    }
}

/// Target that drops all drawing output into the ether.
pub struct NullTarget;

impl DrawTarget for NullTarget {
    fn move_to(&mut self, _x: f64, _y: f64) {}
    fn line_to(&mut self, _x: f64, _y: f64) {}
    fn bezier_curve_to(&mut self, _x1: f64, _y1: f64, _x2: f64, _y2: f64, _x: f64, _y: f64) {}
    fn quadratic_curve_to(&mut self, _x1: f64, _y1: f64, _x: f64, _y: f64) {}
    fn ellipse(
        &mut self,
        _cx: f64,
        _cy: f64,
        _rx: f64,
        _ry: f64,
        _rotation: f64,
        _start_angle: f64,
        _end_angle: f64,
        _counter_clockwise: bool,
    ) {
    }
    fn close_path(&mut self) {}
}

#[cfg(feature = "kurbo")]
mod bez_path {
    use core::f64::consts::TAU;

    use kurbo::{BezPath, PathEl, Point};

    use super::DrawTarget;
    use crate::arc::ellipse_point;

    /// Maximum distance between an arc and its cubic approximation.
    const ARC_TOLERANCE: f64 = 0.01;

    /// Bound on the approximation error relative to the larger radius, which
    /// keeps the number of segments small for huge arcs.
    const ARC_RELATIVE_TOLERANCE: f64 = 1e-6;

    /// Arcs starting closer than this to the current point are not joined
    /// with a line.
    const JOIN_TOLERANCE: f64 = 1e-9;

    /// Returns the signed sweep of a canvas `ellipse` call.
    ///
    /// Clockwise arcs sweep through `(0, 2pi]` (zero only if the angles are
    /// equal) and counter-clockwise arcs through `[-2pi, 0)`, matching the
    /// canvas rules for out of range angles.
    pub(crate) fn canvas_sweep(start_angle: f64, end_angle: f64, counter_clockwise: bool) -> f64 {
        let delta = end_angle - start_angle;
        if !counter_clockwise {
            if delta >= TAU {
                TAU
            } else {
                delta.rem_euclid(TAU)
            }
        } else if -delta >= TAU {
            -TAU
        } else {
            -(-delta).rem_euclid(TAU)
        }
    }

    fn last_point(path: &BezPath) -> Option<Point> {
        match path.elements().last()? {
            PathEl::MoveTo(p) | PathEl::LineTo(p) | PathEl::QuadTo(_, p) => Some(*p),
            PathEl::CurveTo(_, _, p) => Some(*p),
            PathEl::ClosePath => None,
        }
    }

    /// Canvas paths treat drawing commands on an empty path as if they were
    /// preceded by a move to the given point.
    fn ensure_subpath(path: &mut BezPath, x: f64, y: f64) {
        if path.elements().is_empty() {
            path.move_to((x, y));
        }
    }

    impl DrawTarget for BezPath {
        fn move_to(&mut self, x: f64, y: f64) {
            BezPath::move_to(self, (x, y));
        }

        fn line_to(&mut self, x: f64, y: f64) {
            ensure_subpath(self, x, y);
            BezPath::line_to(self, (x, y));
        }

        fn bezier_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
            ensure_subpath(self, x1, y1);
            self.curve_to((x1, y1), (x2, y2), (x, y));
        }

        fn quadratic_curve_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
            ensure_subpath(self, x1, y1);
            self.quad_to((x1, y1), (x, y));
        }

        fn ellipse(
            &mut self,
            cx: f64,
            cy: f64,
            rx: f64,
            ry: f64,
            rotation: f64,
            start_angle: f64,
            end_angle: f64,
            counter_clockwise: bool,
        ) {
            let center = crate::Point::new(cx, cy);
            let start = ellipse_point(center, rx, ry, rotation, start_angle);
            let start = Point::new(start.x, start.y);
            match last_point(self) {
                None if self.elements().is_empty() => BezPath::move_to(self, start),
                Some(last) if last.distance(start) < JOIN_TOLERANCE => {}
                _ => BezPath::line_to(self, start),
            }
            let arc = kurbo::Arc {
                center: Point::new(cx, cy),
                radii: kurbo::Vec2::new(rx, ry),
                start_angle,
                sweep_angle: canvas_sweep(start_angle, end_angle, counter_clockwise),
                x_rotation: rotation,
            };
            let tolerance = ARC_TOLERANCE.max(rx.max(ry) * ARC_RELATIVE_TOLERANCE);
            self.extend(arc.append_iter(tolerance));
        }

        fn close_path(&mut self) {
            BezPath::close_path(self);
        }
    }

}
