//! Matrix rain field.
//!
//! A [`RainField`] owns one [`Column`] per glyph cell across the viewport and
//! repaints them from a self-rescheduling frame loop. The surface is never
//! cleared: each painted frame lays a translucent dark rectangle over the
//! previous one, so older glyphs fade out exponentially and leave trails.

use crate::{
    backend::{FrameScheduler, RandomSource, Surface},
    event::{PointerPosition, ViewportSize},
};

/// Columns of the rain.
mod column;

/// Colors.
mod color;

/// Renderer options.
mod options;

pub use column::{column_count, init_columns, Column};
pub use color::Rgba;
pub use options::RainOptions;

/// Opacity of the per-frame fade.
const FADE_ALPHA: f64 = 0.05;

/// Opacity of the per-frame fade while intensified. Lower means longer trails.
const INTENSIFIED_FADE_ALPHA: f64 = 0.03;

/// Fall speed factor while intensified.
const INTENSIFIED_SPEEDUP: f64 = 1.8;

/// Chance of overdrawing a glyph as a bright leading character.
const LEADING_CHANCE: f64 = 0.02;

/// A column past the bottom edge is recycled only when a draw exceeds this.
const RESET_THRESHOLD: f64 = 0.975;

/// Extra alpha gain for glyphs near the pointer.
const POINTER_BRIGHTNESS: f64 = 1.8;

/// Maximum glow radius of glyphs near the pointer.
const POINTER_GLOW: f64 = 12.0;

/// Glow radius of leading characters.
const LEADING_GLOW: f64 = 8.0;

/// Near-black used for the fade.
const BACKDROP: (u8, u8, u8) = (5, 8, 15);

/// Glow color around highlighted and leading glyphs.
const GLOW: (u8, u8, u8) = (0, 255, 159);

/// Leading character color.
const LEADING: Rgba = Rgba::new(200, 255, 230, 0.9);

/// Leading character color while intensified.
const INTENSIFIED_LEADING: Rgba = Rgba::new(180, 255, 230, 0.95);

/// Highlight strength of a glyph `distance` pixels away from the pointer.
///
/// Falls linearly from `1.0` at the pointer to `0.0` at `radius` and beyond.
pub fn proximity(distance: f64, radius: f64) -> f64 {
    (1.0 - distance / radius).max(0.0)
}

/// Animated rain of glyph columns.
///
/// The field is generic over the host capabilities it uses, see
/// [`backend`](crate::backend). It is driven entirely from the outside:
/// the scheduler arranges for [`RainField::on_frame`] to be called, and
/// pointer, resize and intensify notifications simply overwrite state that
/// the next painted frame reads.
#[derive(Debug)]
pub struct RainField<S, F, R>
where
    F: FrameScheduler,
{
    /// Options.
    options: RainOptions,
    /// Drawing target. [`None`] until started.
    surface: Option<S>,
    /// Frame scheduler.
    scheduler: F,
    /// Random source for every draw made while painting.
    rng: R,
    /// Column state, one entry per cell across the viewport.
    columns: Vec<Column>,
    /// Current viewport size.
    viewport: ViewportSize,
    /// Last known pointer position.
    pointer: PointerPosition,
    /// Whether the intensified look is on.
    intensify: bool,
    /// Timestamp of the last painted frame, in milliseconds.
    last_paint: f64,
    /// The frame requested but not yet delivered.
    pending: Option<F::Handle>,
    /// Whether the loop is running.
    running: bool,
}

impl<S, F, R> RainField<S, F, R>
where
    S: Surface,
    F: FrameScheduler,
    R: RandomSource,
{
    /// Constructs a new, stopped [`RainField`].
    pub fn new(scheduler: F, rng: R) -> Self {
        Self::new_with_options(scheduler, rng, RainOptions::default())
    }

    /// Constructs a new, stopped [`RainField`] with the given options.
    pub fn new_with_options(scheduler: F, rng: R, options: RainOptions) -> Self {
        Self {
            options,
            surface: None,
            scheduler,
            rng,
            columns: Vec::new(),
            viewport: ViewportSize::default(),
            pointer: PointerPosition::OFF_SCREEN,
            intensify: false,
            last_paint: 0.0,
            pending: None,
            running: false,
        }
    }

    /// Starts the frame loop on `surface`, sized to `viewport`.
    ///
    /// Does nothing if no surface is available. Starting a running field
    /// restarts it from fresh columns.
    pub fn start(&mut self, surface: Option<S>, viewport: ViewportSize) {
        let Some(mut surface) = surface else {
            return;
        };
        self.stop();

        surface.resize(viewport);
        self.surface = Some(surface);
        self.viewport = viewport;
        self.columns = init_columns(viewport.width, self.options.cell_size, &mut self.rng);
        self.last_paint = 0.0;
        self.running = true;
        self.pending = self.scheduler.request_frame();
    }

    /// Resizes the surface and rebuilds every column for the new width.
    pub fn on_viewport_resize(&mut self, size: ViewportSize) {
        self.viewport = size;
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(size);
        }
        self.columns = init_columns(size.width, self.options.cell_size, &mut self.rng);
    }

    /// Records the pointer position for the next painted frame.
    pub fn on_pointer_move(&mut self, position: PointerPosition) {
        self.pointer = position;
    }

    /// Switches the intensified look on or off.
    pub fn set_intensify(&mut self, intensify: bool) {
        self.intensify = intensify;
    }

    /// Stops the frame loop.
    ///
    /// The pending frame, if any, is cancelled and no new one is requested.
    /// Calling this on a stopped field does nothing.
    pub fn stop(&mut self) {
        self.running = false;
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }

    /// Frame callback.
    ///
    /// Requests the next frame before anything else, then paints unless the
    /// previous paint happened less than the throttle interval ago.
    pub fn on_frame(&mut self, timestamp: f64) {
        if !self.running {
            return;
        }
        self.pending = self.scheduler.request_frame();

        if timestamp - self.last_paint < self.options.throttle_ms {
            return;
        }
        self.last_paint = timestamp;
        self.paint();
    }

    /// Returns whether the frame loop is running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns whether the intensified look is on.
    pub fn is_intensified(&self) -> bool {
        self.intensify
    }

    /// Returns the columns.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the last known pointer position.
    pub fn pointer(&self) -> PointerPosition {
        self.pointer
    }

    /// Returns the current viewport size.
    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    /// Returns the surface, if started.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Returns the frame scheduler.
    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    /// Opacity of the fade laid over each painted frame.
    pub fn fade_alpha(&self) -> f64 {
        if self.intensify {
            INTENSIFIED_FADE_ALPHA
        } else {
            FADE_ALPHA
        }
    }

    /// Cells a column with the given speed multiplier falls per painted frame.
    pub fn advance(&self, speed: f64) -> f64 {
        advance(speed, self.intensify)
    }

    /// Paints one frame and moves every column.
    fn paint(&mut self) {
        let fade = self.fade_alpha();
        let intensify = self.intensify;
        let ViewportSize { width, height } = self.viewport;
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let (r, g, b) = BACKDROP;

        surface.fill_rect(0.0, 0.0, width, height, Rgba::new(r, g, b, fade));
        surface.set_font(&self.options.font);

        let cell = self.options.cell_size;
        let glyphs = &self.options.glyphs;
        let mut buf = [0u8; 4];

        for (i, column) in self.columns.iter_mut().enumerate() {
            let x = i as f64 * cell;
            let y = column.offset * cell;

            let index = (self.rng.next_f64() * glyphs.len() as f64) as usize;
            let glyph = glyphs[index.min(glyphs.len() - 1)].encode_utf8(&mut buf);

            let near = proximity(
                self.pointer.distance_to(x, y),
                self.options.pointer_radius,
            );
            let color = if near > 0.0 {
                let (r, g, b) = GLOW;
                surface.set_shadow(Rgba::new(r, g, b, near * 0.8), POINTER_GLOW * near);
                highlight_color(near)
            } else {
                surface.set_shadow(Rgba::TRANSPARENT, 0.0);
                rain_color(&mut self.rng, intensify)
            };
            surface.fill_text(glyph, x, y, color);

            if self.rng.next_f64() < LEADING_CHANCE {
                let (r, g, b) = GLOW;
                surface.set_shadow(Rgba::new(r, g, b, 0.6), LEADING_GLOW);
                let lead = if intensify { INTENSIFIED_LEADING } else { LEADING };
                surface.fill_text(glyph, x, y, lead);
            }
            surface.set_shadow(Rgba::TRANSPARENT, 0.0);

            column.offset += advance(column.speed, intensify);

            if y > height && self.rng.next_f64() > RESET_THRESHOLD {
                column.recycle(&mut self.rng);
            }
        }
    }
}

fn advance(speed: f64, intensify: bool) -> f64 {
    if intensify {
        speed * INTENSIFIED_SPEEDUP
    } else {
        speed
    }
}

/// Cyan-shifted color of a glyph near the pointer.
fn highlight_color(proximity: f64) -> Rgba {
    let blue = 159 + (proximity * 96.0).floor() as u8;
    let alpha = (0.7 + proximity * 0.3 * POINTER_BRIGHTNESS).min(1.0);
    Rgba::new(0, 255, blue, alpha)
}

/// Jittered green of an ordinary glyph.
fn rain_color<R: RandomSource>(rng: &mut R, intensify: bool) -> Rgba {
    let green = 200 + (rng.next_f64() * 55.0).floor() as u8;
    let alpha = if intensify {
        0.7 + rng.next_f64() * 0.3
    } else {
        0.4 + rng.next_f64() * 0.35
    };
    Rgba::new(0, green, (green as f64 * 0.6).floor() as u8, alpha)
}
