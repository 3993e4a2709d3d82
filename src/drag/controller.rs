//! Gesture state machine
//!
//! One session slot: a grant fills it, release or termination empties it,
//! and every move in between reads it.

use log::{debug, warn};

use super::rules::{apply_move, resolve_angle};
use super::session::{DragError, DragKind, DragSession};
use crate::Point;
use crate::model::ArcModel;

/// Current phase of the controller
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No gesture in progress
    #[default]
    Idle,
    /// A gesture was granted and has not ended yet
    Dragging(DragSession),
}

/// Turns grant/move/release sequences into model updates
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
    /// Circle center in screen coordinates, unset until layout is measured
    center: Option<Point>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Active session, if any
    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn center(&self) -> Option<Point> {
        self.center
    }

    /// Whether pointer input can be resolved to angles
    pub fn is_ready(&self) -> bool {
        self.center.is_some()
    }

    /// Set the circle center from a fresh layout measurement
    ///
    /// Non-finite centers are dropped so the previous value stays in use.
    pub fn set_center(&mut self, center: Point) {
        if !center.is_finite() {
            warn!("Ignoring non-finite circle center {:?}", center);
            return;
        }
        self.center = Some(center);
    }

    pub fn clear_center(&mut self) {
        self.center = None;
    }

    /// Begin a gesture on `kind` at `point`
    ///
    /// Rejected while another gesture is active, or when the grant point
    /// cannot be resolved; the controller then stays in its current state.
    pub fn grant(
        &mut self,
        kind: DragKind,
        point: Point,
        model: ArcModel,
    ) -> Result<DragSession, DragError> {
        if let DragState::Dragging(active) = &self.state {
            debug!("Rejecting {} grant, {} drag active", kind.as_str(), active.kind.as_str());
            return Err(DragError::GestureActive(active.kind));
        }
        if !model.is_finite() {
            return Err(DragError::InvalidInput);
        }

        let grant_angle = resolve_angle(point, self.center)?;
        debug!("{} grant at {:.4} rad", kind.as_str(), grant_angle);

        let session = DragSession::new(kind, grant_angle, model);
        self.state = DragState::Dragging(session);
        Ok(session)
    }

    /// Resolve a pointer move against the live host model
    pub fn drag_move(&self, point: Point, model: ArcModel) -> Result<ArcModel, DragError> {
        let session = self.session().ok_or(DragError::NotDragging)?;
        apply_move(session.kind, Some(session), model, point, self.center)
    }

    /// Gesture finished normally
    pub fn release(&mut self) {
        if let DragState::Dragging(session) = self.state {
            debug!("{} released", session.kind.as_str());
        }
        self.state = DragState::Idle;
    }

    /// Gesture interrupted; the session is discarded all the same
    pub fn terminate(&mut self) {
        if let DragState::Dragging(session) = self.state {
            debug!("{} terminated", session.kind.as_str());
        }
        self.state = DragState::Idle;
    }
}
