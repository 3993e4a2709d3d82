//! Rendering contract for an external vector-drawing surface
//!
//! Produces geometry only; stroking, colours and icons are up to the host.

pub mod path;
pub mod plan;

pub use path::{arc_path, translate};
pub use plan::RenderPlan;
