//! Drag gesture interpretation
//!
//! - `session`: drag kinds, the grant-time anchor and the error taxonomy
//! - `rules`: the three per-move update rules behind one dispatch function
//! - `controller`: the Idle/Dragging state machine

pub mod controller;
pub mod rules;
pub mod session;

pub use controller::{DragController, DragState};
pub use rules::{apply_move, resolve_angle};
pub use session::{DragError, DragKind, DragSession};
