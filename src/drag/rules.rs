//! Per-move update rules
//!
//! All three gestures resolve the pointer through the same
//! [`point_to_angle`] and differ only in which part of the model follows it.

use log::trace;

use super::session::{DragError, DragKind, DragSession};
use crate::consts::FULL_CIRCLE;
use crate::geometry::point_to_angle;
use crate::model::ArcModel;
use crate::{Point, normalize_angle};

/// Resolve a screen point to a slider angle, failing closed
///
/// An unset center means layout has not been measured yet; computing against
/// the origin instead would make the arc jump.
pub fn resolve_angle(point: Point, center: Option<Point>) -> Result<f64, DragError> {
    let center = center.ok_or(DragError::NotReady)?;
    if !point.is_finite() || !center.is_finite() {
        return Err(DragError::InvalidInput);
    }
    Ok(point_to_angle(point, center))
}

/// Apply one pointer move for the given drag kind
///
/// `model` is the live host model. `session` is required for
/// [`DragKind::ArcBody`] only; the handle rules are stateless per move.
pub fn apply_move(
    kind: DragKind,
    session: Option<&DragSession>,
    model: ArcModel,
    point: Point,
    center: Option<Point>,
) -> Result<ArcModel, DragError> {
    if !model.is_finite() {
        return Err(DragError::InvalidInput);
    }
    let touch = resolve_angle(point, center)?;

    let next = match kind {
        DragKind::StartHandle => move_start_handle(model, touch),
        DragKind::EndHandle => move_end_handle(model, touch),
        DragKind::ArcBody => {
            let session = session.ok_or(DragError::NotDragging)?;
            move_arc_body(session, model, touch)
        }
    };

    trace!(
        "{} move: touch={:.4} -> start={:.4} length={:.4}",
        kind.as_str(),
        touch,
        next.start_angle,
        next.angle_length
    );
    Ok(next)
}

/// Start follows the pointer; the end stays at its absolute position
fn move_start_handle(model: ArcModel, touch: f64) -> ArcModel {
    let end = model.end_angle();
    ArcModel {
        start_angle: touch,
        angle_length: normalize_angle(end - touch),
    }
}

/// End follows the pointer; the start is copied through untouched
fn move_end_handle(model: ArcModel, touch: f64) -> ArcModel {
    ArcModel {
        start_angle: model.start_angle,
        angle_length: normalize_angle(touch - model.start_angle),
    }
}

/// Rotate the whole arc by the pointer's travel since grant
///
/// The delta is taken against the grant anchor rather than the previous
/// move, so the discontinuity of `touch` at the top of the circle only ever
/// shifts `next` by a whole turn, which the wrap below removes.
fn move_arc_body(session: &DragSession, model: ArcModel, touch: f64) -> ArcModel {
    let diff = touch - session.grant_angle;
    let mut next = session.model_at_grant.start_angle + diff;

    if next < 0.0 {
        next += FULL_CIRCLE;
    }
    // Anchor drift can carry next past one revolution
    if next >= FULL_CIRCLE {
        next %= FULL_CIRCLE;
    }

    ArcModel {
        start_angle: next,
        angle_length: model.angle_length,
    }
}
