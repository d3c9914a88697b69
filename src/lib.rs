#![warn(missing_docs, clippy::unwrap_used)]
//! Matrix rain background and team registration portal for the browser.
//!
//! The centerpiece is [`RainField`], a throttled, self-rescheduling rain of
//! glyph columns that brightens around the pointer and speeds up when
//! intensified. It draws through the small capability traits in
//! [`backend`], so it runs the same on a browser canvas ([`MatrixRain`]) and
//! on recording doubles in tests.
//!
//! Around it sit the pieces of the registration form: the credential check
//! ([`auth`]), the stored record ([`registration`]), the legacy spreadsheet
//! sink ([`sheet`]) and the submission flow that raises the intensify
//! signal ([`portal`]).

/// Custom error type.
pub mod error;

/// Event types.
pub mod event;

/// Web utility functions.
pub mod utils;

/// Backend.
pub mod backend;

/// Matrix rain.
pub mod rain;

/// Credential check.
pub mod auth;

/// Submission flow.
pub mod portal;

/// Team registrations.
pub mod registration;

/// Spreadsheet sink.
pub mod sheet;

/// Rendering.
mod render;

// Re-export web_sys crate.
pub use web_sys;

pub use backend::{
    canvas::CanvasSurface, scheduler::AnimationFrameScheduler, FrameScheduler, RandomSource,
    Surface,
};
pub use rain::{RainField, RainOptions};
pub use render::MatrixRain;
