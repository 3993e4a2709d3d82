//! Drag kinds, sessions and errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ArcModel;

/// Which element the pointer grabbed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragKind {
    /// Handle at the start of the arc; the end stays put
    StartHandle,
    /// Handle at the end of the arc; the start stays put
    EndHandle,
    /// The arc stroke itself; the whole arc rotates
    ArcBody,
}

impl DragKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DragKind::StartHandle => "start-handle",
            DragKind::EndHandle => "end-handle",
            DragKind::ArcBody => "arc-body",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" | "start-handle" => Some(DragKind::StartHandle),
            "end" | "end-handle" | "stop" => Some(DragKind::EndHandle),
            "arc" | "arc-body" | "body" => Some(DragKind::ArcBody),
            _ => None,
        }
    }
}

/// Grant-time memory for one gesture
///
/// Immutable once created; a new grant replaces it wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    pub kind: DragKind,
    /// Pointer angle at the moment of grant
    pub grant_angle: f64,
    /// Host model at the moment of grant
    pub model_at_grant: ArcModel,
}

impl DragSession {
    pub fn new(kind: DragKind, grant_angle: f64, model_at_grant: ArcModel) -> Self {
        Self {
            kind,
            grant_angle,
            model_at_grant,
        }
    }
}

/// Reasons a pointer event produced no update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DragError {
    /// Circle center has not been measured yet
    #[error("circle center not measured yet")]
    NotReady,
    /// Pointer or center coordinates are NaN or infinite
    #[error("non-finite pointer coordinates")]
    InvalidInput,
    /// A gesture is already in progress
    #[error("{} drag already active", .0.as_str())]
    GestureActive(DragKind),
    /// Move arrived with no active gesture
    #[error("no active drag")]
    NotDragging,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in [DragKind::StartHandle, DragKind::EndHandle, DragKind::ArcBody] {
            assert_eq!(DragKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(DragKind::from_str("STOP"), Some(DragKind::EndHandle));
        assert_eq!(DragKind::from_str("ring"), None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(DragError::NotReady.to_string(), "circle center not measured yet");
        assert_eq!(
            DragError::GestureActive(DragKind::ArcBody).to_string(),
            "arc-body drag already active"
        );
    }
}
