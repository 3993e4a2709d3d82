//! Stateless angle math
//!
//! Slider convention: angle 0 points to the top of the circle and angles
//! increase clockwise in screen space (y grows downward).

pub mod angle;
pub mod segment;

pub use angle::{arc_endpoint, point_to_angle};
pub use segment::{ArcSegmentPoints, compute_segment, compute_segment_with_overlap};
