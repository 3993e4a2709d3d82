//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Layout measurement (DOM bounding box on web)
//! - Update delivery (JS callback on web)
//! - Logger setup

#[cfg(target_arch = "wasm32")]
pub mod web;
