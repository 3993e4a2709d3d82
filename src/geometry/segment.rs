//! Splitting the active arc into equal slices for drawing
//!
//! A single SVG arc command cannot express a sweep of a full turn. Drawing
//! the active arc as several slices keeps each one short of that; the slices
//! overshoot slightly so no sub-pixel seam shows between them.

use serde::{Deserialize, Serialize};

use super::angle::arc_endpoint;
use crate::consts::SEGMENT_OVERLAP;
use crate::{Point, normalize_angle};

/// Endpoints of one rendered slice, relative to the circle center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSegmentPoints {
    /// Where the slice starts
    pub from: Point,
    /// True end of the slice
    pub to: Point,
    /// End advanced by the overlap angle, used for stroking
    pub overlap_to: Point,
    /// Clockwise angle stroked from `from` to `overlap_to` (radians)
    pub sweep: f64,
}

/// Compute slice `index` of `segment_count` equal slices of the arc
///
/// Both angles are normalized before slicing. A zero `segment_count`
/// collapses to a point at `start_angle`.
pub fn compute_segment(
    index: usize,
    segment_count: usize,
    radius: f64,
    start_angle: f64,
    angle_length: f64,
) -> ArcSegmentPoints {
    compute_segment_with_overlap(
        index,
        segment_count,
        radius,
        start_angle,
        angle_length,
        SEGMENT_OVERLAP,
    )
}

/// Same as [`compute_segment`] with an explicit overlap angle
pub fn compute_segment_with_overlap(
    index: usize,
    segment_count: usize,
    radius: f64,
    start_angle: f64,
    angle_length: f64,
    overlap: f64,
) -> ArcSegmentPoints {
    let start_angle = normalize_angle(start_angle);
    let angle_length = normalize_angle(angle_length);

    let (from_angle, to_angle) = if segment_count == 0 {
        (start_angle, start_angle)
    } else {
        let slice = angle_length / segment_count as f64;
        (
            slice * index as f64 + start_angle,
            slice * (index + 1) as f64 + start_angle,
        )
    };

    ArcSegmentPoints {
        from: arc_endpoint(from_angle, radius),
        to: arc_endpoint(to_angle, radius),
        overlap_to: arc_endpoint(to_angle + overlap, radius),
        sweep: to_angle + overlap - from_angle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point_to_angle;
    use std::f64::consts::{PI, TAU};

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn test_two_segments_split_arc() {
        // Quarter arc from the top to the right, split in half at 45°
        let first = compute_segment(0, 2, 100.0, 0.0, PI / 2.0);
        let second = compute_segment(1, 2, 100.0, 0.0, PI / 2.0);

        assert!(close(first.from, arc_endpoint(0.0, 100.0)));
        assert!(close(first.to, arc_endpoint(PI / 4.0, 100.0)));
        assert!(close(second.from, first.to));
        assert!(close(second.to, arc_endpoint(PI / 2.0, 100.0)));
    }

    #[test]
    fn test_overlap_overshoots_clockwise() {
        let seg = compute_segment(0, 1, 100.0, 0.0, PI / 2.0);
        let real = point_to_angle(seg.to, Point::ZERO);
        let over = point_to_angle(seg.overlap_to, Point::ZERO);
        assert!((over - real - SEGMENT_OVERLAP).abs() < 1e-9);
    }

    #[test]
    fn test_full_turn_normalized_before_slicing() {
        // A length of exactly 2π is treated as zero, not as a doubled sweep
        let seg = compute_segment(1, 2, 50.0, PI, TAU);
        assert!(close(seg.from, arc_endpoint(PI, 50.0)));
        assert!(close(seg.to, arc_endpoint(PI, 50.0)));
    }

    #[test]
    fn test_unnormalized_start_is_wrapped() {
        let a = compute_segment(0, 2, 50.0, PI / 3.0, PI / 2.0);
        let b = compute_segment(0, 2, 50.0, PI / 3.0 + TAU, PI / 2.0);
        assert!(close(a.from, b.from));
        assert!(close(a.to, b.to));
    }

    #[test]
    fn test_sweep_includes_overlap() {
        let seg = compute_segment(0, 2, 50.0, 1.0, PI);
        assert!((seg.sweep - (PI / 2.0 + SEGMENT_OVERLAP)).abs() < EPS);

        // Near-full arc: each half plus the overshoot passes π
        let seg = compute_segment(1, 2, 50.0, 0.0, TAU - 0.002);
        assert!(seg.sweep > PI);
    }

    #[test]
    fn test_zero_segment_count_is_degenerate() {
        let seg = compute_segment(0, 0, 50.0, PI / 2.0, PI);
        assert!(close(seg.from, seg.to));
        assert!(seg.from.x.is_finite());
    }

    #[test]
    fn test_zero_radius_collapses() {
        let seg = compute_segment(0, 2, 0.0, 1.0, 2.0);
        assert_eq!(seg.from, Point::ZERO);
        assert_eq!(seg.overlap_to, Point::ZERO);
    }
}
