//! ## Backends
//!
//! The rain field never talks to the browser directly. Everything it needs
//! from the host goes through three small capabilities:
//!
//! - [`Surface`]: an immediate-mode 2D drawing target. [`CanvasSurface`]
//!   implements it on top of `CanvasRenderingContext2d`.
//! - [`FrameScheduler`]: "call me before the next repaint" and its cancel
//!   counterpart. [`AnimationFrameScheduler`] maps it to
//!   `requestAnimationFrame`.
//! - [`RandomSource`]: uniform draws in `[0, 1)`. Implemented for
//!   [`SmallRng`].
//!
//! Swapping any of them for a recording double lets the whole frame loop run
//! synchronously on the host.
//!
//! [`CanvasSurface`]: canvas::CanvasSurface
//! [`AnimationFrameScheduler`]: scheduler::AnimationFrameScheduler

use rand::{rngs::SmallRng, Rng};

use crate::{event::ViewportSize, rain::Rgba};

/// Canvas backend.
pub mod canvas;

/// Frame scheduling.
pub mod scheduler;

/// Event listener lifecycle.
pub(crate) mod event_callback;

/// A 2D drawing target.
///
/// Drawing is best-effort: implementations swallow host failures instead of
/// reporting them, since a missed glyph only degrades a single frame.
pub trait Surface {
    /// Resizes the drawing target. Resizing may reset drawing state such as
    /// the font.
    fn resize(&mut self, size: ViewportSize);

    /// Sets the font used by [`Surface::fill_text`].
    fn set_font(&mut self, font: &str);

    /// Fills a rectangle.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba);

    /// Sets the glow applied to subsequent text. A zero blur disables it.
    fn set_shadow(&mut self, color: Rgba, blur: f64);

    /// Draws `text` from `(x, y)`, with `y` on the alphabetic baseline.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: Rgba);
}

/// Host primitive for running a callback before the next repaint.
///
/// The callback itself is owned by the scheduler; the rain field only asks
/// for the next frame and cancels the pending one.
pub trait FrameScheduler {
    /// Identifies a pending frame request.
    type Handle: Copy + std::fmt::Debug;

    /// Requests a frame. Returns [`None`] if the host refused.
    fn request_frame(&mut self) -> Option<Self::Handle>;

    /// Cancels a pending frame request.
    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Source of uniform random numbers.
pub trait RandomSource {
    /// Returns a uniformly distributed number in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

impl RandomSource for SmallRng {
    fn next_f64(&mut self) -> f64 {
        self.random::<f64>()
    }
}
