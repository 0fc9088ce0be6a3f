// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests assert with unwrap and panic on unexpected variants
#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]

//! Scroll-driven 3D narrative engine.
//!
//! A long page is split into five sections (bigbang, adn, humano, vitruvio,
//! newton), each with its own canvas, camera and animated models. Scrolling
//! selects the active section and sets its local progress in `[0, 1]`;
//! every animation frame, each section animates its models from its own
//! stored progress and hands them to a renderer.
//!
//! # Key entry points
//!
//! - [`engine::StoryEngine`] - scroll handling and the per-frame body
//! - [`progress::ProgressMapper`] - scroll offset → active section and
//!   local progress
//! - [`animation::sections`] - one animation per section
//! - [`scene::factory`] - procedural stand-ins and model dressing
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! The engine talks to the outside world through four ports:
//! [`layout::PageLayout`] (page geometry), [`render::SceneRenderer`]
//! (drawing), [`ui::UiSync`] (page chrome) and [`assets::ModelLoader`]
//! (model files). Loaders answer through a channel that the engine drains
//! at the start of each frame, so a model can arrive at any time without
//! blocking scroll handling or rendering.
//!
//! With the `web` feature, [`web::start_story`] wires all four ports to the
//! browser.

pub mod animation;
pub mod assets;
pub mod camera;
pub mod engine;
pub mod error;
pub mod layout;
pub mod options;
pub mod particles;
pub mod progress;
pub mod render;
pub mod scene;
pub mod section;
pub mod ui;
pub mod util;
#[cfg(feature = "web")]
pub mod web;
