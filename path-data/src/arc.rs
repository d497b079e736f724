//! Endpoint to center parameterization of elliptical arcs.

use core::f64::consts::PI;

#[cfg(feature = "libm")]
#[allow(unused_imports)]
use core_maths::*;

use crate::Point;

/// An elliptical arc described by its center and angle range.
///
/// The fields correspond to the arguments of the canvas `ellipse` call:
/// a point on the ellipse at angle `t` is
/// `center + rotate(rotation) * (radius_x * cos t, radius_y * sin t)`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct CenterArc {
    /// Center of the ellipse.
    pub center: Point,
    /// Radius along the ellipse's own x axis.
    pub radius_x: f64,
    /// Radius along the ellipse's own y axis.
    pub radius_y: f64,
    /// Rotation of the ellipse's x axis in radians.
    pub rotation: f64,
    /// Angle of the start point in radians.
    pub start_angle: f64,
    /// Angle of the end point in radians.
    pub end_angle: f64,
    /// True if the arc runs towards decreasing angles.
    pub counter_clockwise: bool,
}

impl CenterArc {
    /// Converts an arc given by its end points, radii, rotation (in
    /// degrees) and flags to center parameterization.
    ///
    /// If the radii are too small to span the distance between the end
    /// points, they are scaled up uniformly until they do.
    ///
    /// Both radii must be positive and `from` must differ from `to`, or the
    /// result is meaningless. [`DrawingSink`](crate::DrawingSink) handles
    /// those cases before calling this.
    pub fn from_endpoints(
        from: Point,
        to: Point,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
    ) -> Self {
        let chord = to - from;
        let phi = rotation / 180.0 * PI;
        let (sin_phi, cos_phi) = if phi != 0.0 {
            (phi.sin(), phi.cos())
        } else {
            (0.0, 1.0)
        };
        let k = radius_y / radius_x;
        let sign = if sweep { 1.0 } else { -1.0 };
        // Negated chord in the ellipse's frame, mirrored for negative sweep.
        let nx = sign * (-chord.x * cos_phi - chord.y * sin_phi);
        let ny = sign * (-chord.x * sin_phi + chord.y * cos_phi);
        // Chord length after scaling the ellipse to a circle of radius_x.
        let norm = nx.hypot(ny / k);
        let radius = if 2.0 * radius_x > norm {
            radius_x
        } else {
            norm / 2.0
        };
        let mut sweep_angle = 2.0 * sign * (norm / 2.0 / radius).asin();
        if large_arc {
            sweep_angle = if sweep_angle > 0.0 {
                2.0 * PI - sweep_angle
            } else {
                -2.0 * PI - sweep_angle
            };
        }
        let start_angle = (k * nx).atan2(ny) - sweep_angle / 2.0;
        let (sin_t, cos_t) = (start_angle.sin(), start_angle.cos());
        let center = Point::new(
            from.x - radius * (cos_phi * cos_t - sin_phi * k * sin_t),
            from.y - radius * (sin_phi * cos_t + cos_phi * k * sin_t),
        );
        Self {
            center,
            radius_x: radius,
            radius_y: radius * k,
            rotation: phi,
            start_angle,
            end_angle: start_angle + sweep_angle,
            counter_clockwise: !sweep,
        }
    }

    /// Returns the signed angle swept from start to end.
    pub fn sweep_angle(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Returns the point on the ellipse at the given angle.
    pub fn point_at(&self, angle: f64) -> Point {
        ellipse_point(
            self.center,
            self.radius_x,
            self.radius_y,
            self.rotation,
            angle,
        )
    }
}

pub(crate) fn ellipse_point(
    center: Point,
    radius_x: f64,
    radius_y: f64,
    rotation: f64,
    angle: f64,
) -> Point {
    let (sin_phi, cos_phi) = (rotation.sin(), rotation.cos());
    let x = radius_x * angle.cos();
    let y = radius_y * angle.sin();
    Point::new(
        center.x + x * cos_phi - y * sin_phi,
        center.y + x * sin_phi + y * cos_phi,
    )
}
