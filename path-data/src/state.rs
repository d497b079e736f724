//! Current point and control point tracking.

use core::ops::{Add, Mul, Sub};

/// Two dimensional point.
#[derive(Copy, Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new point with the given x and y coordinates.
    #[inline(always)]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the reflection of `self` through `center`.
    #[inline(always)]
    pub fn reflect(self, center: Point) -> Self {
        center * 2.0 - self
    }

    /// Linear interpolation between `self` and `other` by `t`.
    #[inline(always)]
    pub fn lerp(self, other: Point, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Add for Point {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Points tracked by a sink while processing path commands.
///
/// Every sink owns one of these and resets it in [`PathSink::init`]. The
/// update methods are meant to be called from command handlers only; each
/// one applies the bookkeeping for one kind of segment.
///
/// Smooth commands reflect the last control point of the matching curve
/// type. After any other command, the tracked control point is the current
/// point so the reflection degenerates to the current point.
///
/// [`PathSink::init`]: crate::PathSink::init
#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub struct PathState {
    current: Point,
    start: Point,
    quad_control: Point,
    cubic_control: Point,
}

impl PathState {
    /// Returns the current point.
    pub fn current(&self) -> Point {
        self.current
    }

    /// Returns the start point of the current subpath.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Returns the control point of the last quadratic segment.
    pub fn quad_control(&self) -> Point {
        self.quad_control
    }

    /// Returns the second control point of the last cubic segment.
    pub fn cubic_control(&self) -> Point {
        self.cubic_control
    }

    /// Returns the first control point for a smooth cubic segment.
    pub fn reflected_cubic_control(&self) -> Point {
        self.cubic_control.reflect(self.current)
    }

    /// Returns the control point for a smooth quadratic segment.
    pub fn reflected_quad_control(&self) -> Point {
        self.quad_control.reflect(self.current)
    }

    /// Resets all tracked points to the origin.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Begins a new subpath at `to`.
    pub fn move_to(&mut self, to: Point) {
        self.start = to;
        self.segment_to(to);
    }

    /// Records a segment without control points (a line or an arc) ending
    /// at `to`.
    pub fn segment_to(&mut self, to: Point) {
        self.current = to;
        self.quad_control = to;
        self.cubic_control = to;
    }

    /// Records a cubic segment with second control point `control` ending
    /// at `to`.
    pub fn cubic_to(&mut self, control: Point, to: Point) {
        self.current = to;
        self.quad_control = to;
        self.cubic_control = control;
    }

    /// Records a quadratic segment with control point `control` ending at
    /// `to`.
    pub fn quad_to(&mut self, control: Point, to: Point) {
        self.current = to;
        self.quad_control = control;
        self.cubic_control = to;
    }

    /// Closes the current subpath, returning to its start point.
    pub fn close(&mut self) {
        self.segment_to(self.start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflection() {
        let p = Point::new(2.0, 2.0);
        assert_eq!(p.reflect(Point::new(3.0, 3.0)), Point::new(4.0, 4.0));
        assert_eq!(
            Point::new(0.0, 3.0).lerp(Point::new(3.0, 0.0), 0.5),
            Point::new(1.5, 1.5)
        );
    }

    #[test]
    fn control_points_follow_segment_kind() {
        let mut state = PathState::default();
        state.move_to(Point::new(1.0, 1.0));
        state.cubic_to(Point::new(2.0, 0.0), Point::new(3.0, 1.0));
        assert_eq!(state.reflected_cubic_control(), Point::new(4.0, 2.0));
        // not preceded by a quadratic, so reflection is the current point
        assert_eq!(state.reflected_quad_control(), state.current());
        state.quad_to(Point::new(4.0, 3.0), Point::new(5.0, 1.0));
        assert_eq!(state.reflected_quad_control(), Point::new(6.0, -1.0));
        assert_eq!(state.reflected_cubic_control(), state.current());
        state.close();
        assert_eq!(state.current(), Point::new(1.0, 1.0));
        assert_eq!(state.start(), Point::new(1.0, 1.0));
        state.reset();
        assert_eq!(state, PathState::default());
    }
}
