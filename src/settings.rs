//! Slider settings
//!
//! Geometry only: colours and icons belong to the drawing surface.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Point;
use crate::consts::{DEFAULT_RADIUS, DEFAULT_SEGMENTS, DEFAULT_STROKE_WIDTH, SEGMENT_OVERLAP};
use crate::layout::{container_size, drawing_origin};

/// Errors from loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Slider geometry settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Track radius (centerline of the stroke)
    pub radius: f64,
    /// Stroke width of the track and the active arc
    pub stroke_width: f64,
    /// Number of slices the active arc is drawn with
    pub segments: usize,
    /// Angle each slice overshoots its true end by (radians)
    pub segment_overlap: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            stroke_width: DEFAULT_STROKE_WIDTH,
            segments: DEFAULT_SEGMENTS,
            segment_overlap: SEGMENT_OVERLAP,
        }
    }
}

impl Settings {
    /// Settings with a custom radius and stroke, everything else default
    pub fn with_size(radius: f64, stroke_width: f64) -> Self {
        Self {
            radius,
            stroke_width,
            ..Self::default()
        }
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        log::debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check ranges; a zero radius is a valid collapsed slider
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(SettingsError::Invalid {
                field: "radius",
                reason: "must be a finite, non-negative number",
            });
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(SettingsError::Invalid {
                field: "stroke_width",
                reason: "must be a finite, non-negative number",
            });
        }
        if self.segments == 0 {
            return Err(SettingsError::Invalid {
                field: "segments",
                reason: "must be at least 1",
            });
        }
        if !self.segment_overlap.is_finite() || self.segment_overlap < 0.0 {
            return Err(SettingsError::Invalid {
                field: "segment_overlap",
                reason: "must be a finite, non-negative angle",
            });
        }
        Ok(())
    }

    /// Side length of the square widget container
    pub fn container_size(&self) -> f64 {
        container_size(self.radius, self.stroke_width)
    }

    /// Circle center relative to the container's top-left corner
    pub fn drawing_origin(&self) -> Point {
        drawing_origin(self.radius, self.stroke_width)
    }
}
