//! The arc value exchanged with the host
//!
//! The host owns the model. Drag rules never mutate one in place; every
//! update is a fresh value handed back through the update callback.

use serde::{Deserialize, Serialize};

use crate::normalize_angle;

/// Active arc: a start angle plus the clockwise sweep to the end handle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ArcModel {
    /// Angle of the start handle (radians, [0, 2π))
    pub start_angle: f64,
    /// Clockwise span from start to end handle (radians, [0, 2π))
    pub angle_length: f64,
}

impl ArcModel {
    /// Build a model, normalizing both fields
    pub fn new(start_angle: f64, angle_length: f64) -> Self {
        Self {
            start_angle: normalize_angle(start_angle),
            angle_length: normalize_angle(angle_length),
        }
    }

    /// Map an angle into [0, 2π)
    #[inline]
    pub fn normalize(angle: f64) -> f64 {
        normalize_angle(angle)
    }

    /// Absolute angle of the end handle
    #[inline]
    pub fn end_angle(&self) -> f64 {
        normalize_angle(self.start_angle + self.angle_length)
    }

    /// Whether both fields are finite numbers
    pub fn is_finite(&self) -> bool {
        self.start_angle.is_finite() && self.angle_length.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn test_end_angle_wraps() {
        let model = ArcModel::new(3.0 * PI / 2.0, PI);
        assert!((model.end_angle() - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_new_normalizes() {
        let model = ArcModel::new(-PI / 2.0, TAU + 1.0);
        assert!((model.start_angle - 3.0 * PI / 2.0).abs() < 1e-12);
        assert!((model.angle_length - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_length_arc() {
        let model = ArcModel::new(1.0, 0.0);
        assert_eq!(model.end_angle(), 1.0);
        assert_eq!(model.start_angle, 1.0);
    }

    #[test]
    fn test_serde_field_names() {
        let model = ArcModel::new(1.0, 2.0);
        let json = serde_json::to_string(&model).unwrap();
        assert!(json.contains("start_angle"));
        let back: ArcModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, model);
    }

    proptest! {
        #[test]
        fn prop_normalize_idempotent(x in -1.0e6f64..1.0e6) {
            let once = ArcModel::normalize(x);
            prop_assert_eq!(ArcModel::normalize(once), once);
            prop_assert!((0.0..TAU).contains(&once));
        }
    }
}
