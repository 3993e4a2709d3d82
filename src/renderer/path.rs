//! SVG path data for arc strokes

use std::f64::consts::PI;

use crate::Point;

/// Clockwise arc from `from` to `to` on a circle of `radius`
///
/// `sweep` is the clockwise angle between the two points; it picks the
/// large-arc flag, since the endpoints alone cannot tell a short arc from
/// its long complement.
pub fn arc_path(from: Point, to: Point, radius: f64, sweep: f64) -> String {
    let large_arc = u8::from(sweep > PI);
    format!(
        "M {:.2} {:.2} A {} {} 0 {} 1 {:.2} {:.2}",
        from.x, from.y, radius, radius, large_arc, to.x, to.y
    )
}

/// SVG transform placing a handle icon at `position`
pub fn translate(position: Point) -> String {
    format!("translate({}, {})", position.x, position.y)
}
