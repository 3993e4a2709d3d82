//! Conversions between screen points and slider angles

use std::f64::consts::FRAC_PI_2;

use crate::Point;
use crate::consts::FULL_CIRCLE;

/// Angle of a screen point around `center`, in [0, 2π)
///
/// `atan2` measures from east, counterclockwise in math space; adding π/2
/// moves zero to the top, and screen y pointing down makes it clockwise.
/// Every drag rule goes through this one function.
#[inline]
pub fn point_to_angle(point: Point, center: Point) -> f64 {
    let mut angle = (point.y - center.y).atan2(point.x - center.x) + FRAC_PI_2;
    if angle < 0.0 {
        angle += FULL_CIRCLE;
    }
    // -ε + 2π can round up to exactly 2π
    if angle >= FULL_CIRCLE {
        angle -= FULL_CIRCLE;
    }
    angle
}

/// Point on a circle of `radius` at `angle`, relative to the center
#[inline]
pub fn arc_endpoint(angle: f64, radius: f64) -> Point {
    Point::new(radius * angle.sin(), -radius * angle.cos())
}
