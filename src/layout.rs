//! Layout measurement and circle placement
//!
//! The widget's on-screen box is measured by the host. The circle center in
//! screen coordinates is the middle of that box.

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::consts::CONTAINER_PADDING;

/// On-screen bounding box of the slider widget
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Circle center in screen coordinates
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }
}

/// Source of widget measurements
///
/// Returns `None` while the widget has not been laid out. Hosts whose
/// measurement completes later push the result through
/// [`CircularSlider::on_layout`](crate::CircularSlider::on_layout) instead.
pub trait LayoutProvider {
    fn measure(&self) -> Option<LayoutRect>;
}

impl<F> LayoutProvider for F
where
    F: Fn() -> Option<LayoutRect>,
{
    fn measure(&self) -> Option<LayoutRect> {
        self()
    }
}

/// Side length of the square container holding the track and its stroke
#[inline]
pub fn container_size(radius: f64, stroke_width: f64) -> f64 {
    stroke_width + radius * 2.0 + CONTAINER_PADDING * 2.0
}

/// Circle center relative to the container's top-left corner
#[inline]
pub fn drawing_origin(radius: f64, stroke_width: f64) -> Point {
    let offset = stroke_width / 2.0 + radius + CONTAINER_PADDING;
    Point::new(offset, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_of_rect() {
        let rect = LayoutRect::new(20.0, 40.0, 100.0, 60.0);
        assert_eq!(rect.center(), Point::new(70.0, 70.0));
    }

    #[test]
    fn test_container_fits_stroke() {
        assert_eq!(container_size(80.0, 20.0), 182.0);
        assert_eq!(drawing_origin(80.0, 20.0), Point::new(91.0, 91.0));
        // Origin sits in the middle of the container
        assert_eq!(drawing_origin(80.0, 20.0).x * 2.0, container_size(80.0, 20.0));
    }

    #[test]
    fn test_closure_provider() {
        let provider = || Some(LayoutRect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(provider.measure().map(|r| r.center()), Some(Point::new(5.0, 5.0)));

        let unmeasured = || -> Option<LayoutRect> { None };
        assert!(LayoutProvider::measure(&unmeasured).is_none());
    }

    #[test]
    fn test_non_finite_rect() {
        assert!(!LayoutRect::new(f64::NAN, 0.0, 1.0, 1.0).is_finite());
        assert!(LayoutRect::default().is_finite());
    }
}
