//! Per-frame stroke and handle geometry

use serde::{Deserialize, Serialize};

use super::path::{arc_path, translate};
use crate::Point;
use crate::geometry::{ArcSegmentPoints, arc_endpoint, compute_segment_with_overlap};
use crate::model::ArcModel;
use crate::settings::Settings;

/// Everything a drawing surface needs for one frame
///
/// Segment and handle points are relative to the circle center; `origin`
/// places that center inside the widget container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    /// Circle center relative to the container's top-left corner
    pub origin: Point,
    pub radius: f64,
    pub stroke_width: f64,
    /// Slices of the active arc, in clockwise order
    pub segments: Vec<ArcSegmentPoints>,
    pub start_handle: Point,
    pub end_handle: Point,
}

impl RenderPlan {
    pub fn build(model: &ArcModel, settings: &Settings) -> Self {
        let segments = (0..settings.segments)
            .map(|i| {
                compute_segment_with_overlap(
                    i,
                    settings.segments,
                    settings.radius,
                    model.start_angle,
                    model.angle_length,
                    settings.segment_overlap,
                )
            })
            .collect();

        Self {
            origin: settings.drawing_origin(),
            radius: settings.radius,
            stroke_width: settings.stroke_width,
            segments,
            start_handle: arc_endpoint(model.start_angle, settings.radius),
            end_handle: arc_endpoint(model.end_angle(), settings.radius),
        }
    }

    /// SVG path data for every slice, stroked to the overlapped end
    pub fn segment_paths(&self) -> Vec<String> {
        self.segments
            .iter()
            .map(|seg| arc_path(seg.from, seg.overlap_to, self.radius, seg.sweep))
            .collect()
    }

    /// SVG transform placing the start icon, inside a group centered on `origin`
    pub fn start_handle_transform(&self) -> String {
        translate(self.start_handle)
    }

    pub fn end_handle_transform(&self) -> String {
        translate(self.end_handle)
    }

    /// Handle position in container coordinates
    pub fn start_handle_in_container(&self) -> Point {
        self.origin + self.start_handle
    }

    pub fn end_handle_in_container(&self) -> Point {
        self.origin + self.end_handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    const EPS: f64 = 1e-9;

    #[test]
    fn test_default_plan_has_two_slices() {
        let plan = RenderPlan::build(&ArcModel::new(0.0, PI), &Settings::default());
        assert_eq!(plan.segments.len(), 2);
        assert_eq!(plan.segment_paths().len(), 2);
        // Slices meet at the middle of the arc
        assert!((plan.segments[0].to - plan.segments[1].from).length() < EPS);
    }

    #[test]
    fn test_handles_at_arc_ends() {
        let settings = Settings::with_size(50.0, 10.0);
        let plan = RenderPlan::build(&ArcModel::new(FRAC_PI_2, PI), &settings);
        assert!((plan.start_handle - Point::new(50.0, 0.0)).length() < EPS);
        assert!((plan.end_handle - Point::new(-50.0, 0.0)).length() < EPS);
        assert!((plan.start_handle_in_container() - Point::new(106.0, 56.0)).length() < EPS);
    }

    #[test]
    fn test_first_slice_starts_at_start_handle() {
        let settings = Settings::default();
        let model = ArcModel::new(1.0, 2.0);
        let plan = RenderPlan::build(&model, &settings);
        assert!((plan.segments[0].from - plan.start_handle).length() < EPS);
        assert!((plan.segments[1].to - plan.end_handle).length() < EPS);
    }

    #[test]
    fn test_single_slice_path() {
        let settings = Settings {
            segments: 1,
            ..Settings::default()
        };
        let plan = RenderPlan::build(&ArcModel::new(0.0, FRAC_PI_2), &settings);
        assert_eq!(plan.segment_paths()[0], "M 0.00 -80.00 A 80 80 0 0 1 80.00 0.40");
    }

    #[test]
    fn test_near_full_arc_uses_large_arc_flag() {
        // Each half plus the overshoot sweeps just past π
        let plan = RenderPlan::build(&ArcModel::new(0.0, TAU - 0.002), &Settings::default());
        for (seg, d) in plan.segments.iter().zip(plan.segment_paths()) {
            assert!(seg.sweep > PI);
            assert!(d.contains(" 0 1 1 "), "{d}");
        }
    }

    #[test]
    fn test_half_arc_keeps_small_arc_flag() {
        let plan = RenderPlan::build(&ArcModel::new(0.0, PI), &Settings::default());
        for d in plan.segment_paths() {
            assert!(d.contains(" 0 0 1 "), "{d}");
        }
    }

    #[test]
    fn test_handle_transforms() {
        let settings = Settings::with_size(50.0, 10.0);
        let plan = RenderPlan::build(&ArcModel::new(0.0, PI), &settings);
        assert_eq!(plan.start_handle_transform(), "translate(0, -50)");
        assert!(plan.end_handle_transform().starts_with("translate(0.0000"));
    }
}
