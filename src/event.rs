/// Pointer coordinates in viewport space, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    /// The x coordinate of the pointer.
    pub x: f64,
    /// The y coordinate of the pointer.
    pub y: f64,
}

impl PointerPosition {
    /// Position reported before the pointer has ever moved.
    ///
    /// It lies far enough above and left of the viewport that no on-screen
    /// glyph is within the highlight radius.
    pub const OFF_SCREEN: Self = Self {
        x: -1000.0,
        y: -1000.0,
    };

    /// Constructs a new [`PointerPosition`].
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to the given point.
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        let dx = x - self.x;
        let dy = y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Default for PointerPosition {
    fn default() -> Self {
        Self::OFF_SCREEN
    }
}

/// Convert a [`web_sys::MouseEvent`] to a [`PointerPosition`].
impl From<&web_sys::MouseEvent> for PointerPosition {
    fn from(event: &web_sys::MouseEvent) -> Self {
        Self::new(event.client_x() as f64, event.client_y() as f64)
    }
}

/// Viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportSize {
    /// Width of the viewport.
    pub width: f64,
    /// Height of the viewport.
    pub height: f64,
}

impl ViewportSize {
    /// Constructs a new [`ViewportSize`].
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for ViewportSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width.into(), height.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let pointer = PointerPosition::new(3.0, 4.0);
        assert_eq!(pointer.distance_to(0.0, 0.0), 5.0);
        assert_eq!(pointer.distance_to(3.0, 4.0), 0.0);
    }

    #[test]
    fn test_default_is_off_screen() {
        assert_eq!(PointerPosition::default(), PointerPosition::OFF_SCREEN);
    }
}
