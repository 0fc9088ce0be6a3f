//! Shared utilities.
//!
//! Currently just the frame clock that feeds clip mixers and the FPS
//! readout.

pub mod frame_timing;
