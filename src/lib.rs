//! Arc Slider - geometry and drag engine for a circular range slider
//!
//! Core modules:
//! - `geometry`: Pointer-to-angle conversion and arc endpoint math
//! - `model`: The two-angle arc value owned by the host
//! - `drag`: Gesture state machine (start handle, end handle, arc body)
//! - `layout`: Layout provider contract and circle center derivation
//! - `slider`: Host-facing facade wiring input callbacks to `on_update`
//! - `renderer`: Stroke segments, handle positions and SVG path data
//! - `platform`: Browser binding (wasm32 only)

pub mod drag;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod slider;

pub use drag::{DragController, DragError, DragKind, DragSession, DragState};
pub use layout::{LayoutProvider, LayoutRect};
pub use model::ArcModel;
pub use renderer::RenderPlan;
pub use settings::Settings;
pub use slider::CircularSlider;

use glam::DVec2;

/// Screen-space point
pub type Point = DVec2;

/// Slider configuration constants
pub mod consts {
    use std::f64::consts::TAU;

    /// One full revolution in radians
    pub const FULL_CIRCLE: f64 = TAU;

    /// Extra angle added to each rendered segment end so neighbours overlap
    pub const SEGMENT_OVERLAP: f64 = 0.005;

    /// Two half-arcs fill the slider solidly (each stays under π for SVG arcs)
    pub const DEFAULT_SEGMENTS: usize = 2;

    /// Padding between the stroke and the container edge
    pub const CONTAINER_PADDING: f64 = 1.0;

    /// Default track radius
    pub const DEFAULT_RADIUS: f64 = 80.0;

    /// Default stroke width of the track and the active arc
    pub const DEFAULT_STROKE_WIDTH: f64 = 20.0;
}

/// Normalize angle to [0, 2π)
///
/// In-range values pass through untouched, so normalizing twice is exact.
/// The second modulo folds the `-ε + 2π == 2π` rounding case back to zero.
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    use consts::FULL_CIRCLE;
    if (0.0..FULL_CIRCLE).contains(&angle) {
        return angle;
    }
    ((angle % FULL_CIRCLE) + FULL_CIRCLE) % FULL_CIRCLE
}

/// Shortest signed distance from `from` to `to` around the circle, in (-π, π]
#[cfg(test)]
pub(crate) fn angle_delta(from: f64, to: f64) -> f64 {
    use std::f64::consts::PI;
    let d = normalize_angle(to - from);
    if d > PI { d - consts::FULL_CIRCLE } else { d }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn test_normalize_angle_range() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert!((normalize_angle(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-12);
        assert!((normalize_angle(5.0 * PI) - PI).abs() < 1e-12);
        assert_eq!(normalize_angle(TAU), 0.0);
    }

    #[test]
    fn test_normalize_tiny_negative() {
        let a = normalize_angle(-1e-18);
        assert!((0.0..TAU).contains(&a));
    }

    #[test]
    fn test_angle_delta_wraps() {
        assert!((angle_delta(TAU - 0.1, 0.1) - 0.2).abs() < 1e-12);
        assert!((angle_delta(0.1, TAU - 0.1) + 0.2).abs() < 1e-12);
        assert!((angle_delta(0.0, PI) - PI).abs() < 1e-12);
    }
}
