/// Width and height of a single glyph cell, in pixels.
const CELL_SIZE: f64 = 14.0;

/// Minimum time between two painted frames, in milliseconds (~30 fps).
const THROTTLE_MS: f64 = 33.0;

/// Distance from the pointer within which glyphs are highlighted.
const POINTER_RADIUS: f64 = 180.0;

/// Characters the rain is made of.
const GLYPHS: &str = "01";

/// Font used for the glyphs.
const FONT: &str = "14px 'JetBrains Mono', monospace";

/// Options for the [`RainField`](super::RainField).
#[derive(Debug, Clone)]
pub struct RainOptions {
    /// Size of a glyph cell. Columns are this far apart and advance in
    /// multiples of it.
    pub(crate) cell_size: f64,
    /// Minimum interval between painted frames. Frames arriving sooner are
    /// skipped but still rescheduled.
    pub(crate) throttle_ms: f64,
    /// Pointer highlight radius.
    pub(crate) pointer_radius: f64,
    /// Glyph set.
    pub(crate) glyphs: Vec<char>,
    /// CSS font shorthand.
    pub(crate) font: String,
}

impl Default for RainOptions {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            throttle_ms: THROTTLE_MS,
            pointer_radius: POINTER_RADIUS,
            glyphs: GLYPHS.chars().collect(),
            font: FONT.to_string(),
        }
    }
}

impl RainOptions {
    /// Constructs a new [`RainOptions`].
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the cell size, in pixels.
    ///
    /// # Panics
    ///
    /// Panics if `size` is not positive.
    pub fn cell_size(mut self, size: f64) -> Self {
        if size <= 0.0 {
            panic!("Cell size must be greater than 0");
        }
        self.cell_size = size;
        self
    }

    /// Sets the minimum interval between painted frames, in milliseconds.
    pub fn throttle_ms(mut self, interval: f64) -> Self {
        self.throttle_ms = interval.max(0.0);
        self
    }

    /// Sets the pointer highlight radius, in pixels.
    ///
    /// # Panics
    ///
    /// Panics if `radius` is not positive.
    pub fn pointer_radius(mut self, radius: f64) -> Self {
        if radius <= 0.0 {
            panic!("Pointer radius must be greater than 0");
        }
        self.pointer_radius = radius;
        self
    }

    /// Sets the glyph set. An empty set falls back to the default.
    pub fn glyphs(mut self, glyphs: &str) -> Self {
        if !glyphs.is_empty() {
            self.glyphs = glyphs.chars().collect();
        }
        self
    }

    /// Sets the CSS font used to draw glyphs.
    pub fn font<T: Into<String>>(mut self, font: T) -> Self {
        self.font = font.into();
        self
    }
}
