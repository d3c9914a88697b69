use web_sys::{wasm_bindgen::JsCast, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::{backend::Surface, error::Error, event::ViewportSize, rain::Rgba};

/// A [`Surface`] backed by a HTML canvas element.
#[derive(Debug)]
pub struct CanvasSurface {
    /// Canvas element.
    inner: HtmlCanvasElement,
    /// Rendering context.
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Constructs a new [`CanvasSurface`] drawing on `canvas`.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, Error> {
        let context = canvas
            .get_context("2d")?
            .ok_or(Error::UnableToRetrieveCanvasContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| Error::UnableToRetrieveCanvasContext)?;

        Ok(Self {
            inner: canvas,
            context,
        })
    }

    /// Returns the canvas element.
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.inner
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, size: ViewportSize) {
        self.inner.set_width(size.width.max(0.0) as u32);
        self.inner.set_height(size.height.max(0.0) as u32);
    }

    fn set_font(&mut self, font: &str) {
        self.context.set_font(font);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) {
        self.context.set_fill_style_str(&color.to_string());
        self.context.fill_rect(x, y, width, height);
    }

    fn set_shadow(&mut self, color: Rgba, blur: f64) {
        self.context.set_shadow_color(&color.to_string());
        self.context.set_shadow_blur(blur);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: Rgba) {
        self.context.set_fill_style_str(&color.to_string());
        let _ = self.context.fill_text(text, x, y);
    }
}
