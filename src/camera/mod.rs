//! Per-section perspective cameras.

/// Core camera struct and per-section placement.
pub mod core;

pub use self::core::Camera;
