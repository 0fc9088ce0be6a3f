//! Progress-driven section animations.
//!
//! Each section implements [`SectionAnimation`]: it owns its model slots and
//! poses them from `(progress, previous progress)` once per frame. The math
//! lives in [`interpolation`] and [`easing`]; the per-section constants live
//! in [`crate::options::SectionOptions`].

pub mod easing;
pub mod interpolation;
pub mod sections;
mod traits;

pub use traits::{
    boxed, AnimationInput, BoxedAnimation, CompletionLatch, SectionAnimation,
};
