use web_sys::{
    wasm_bindgen::{JsCast, JsValue},
    window, HtmlCanvasElement, Window,
};

use crate::{error::Error, event::ViewportSize};

/// Returns the window.
pub fn get_window() -> Result<Window, Error> {
    window().ok_or(Error::UnableToRetrieveWindow)
}

/// Returns the inner size of the window in CSS pixels.
///
/// Falls back to a zero size if the window cannot be measured.
pub fn get_window_size(window: &Window) -> ViewportSize {
    fn dimension(value: Result<JsValue, JsValue>) -> f64 {
        value.ok().and_then(|value| value.as_f64()).unwrap_or(0.0)
    }
    ViewportSize::new(
        dimension(window.inner_width()),
        dimension(window.inner_height()),
    )
}

/// Returns the canvas element with the given id.
pub fn get_canvas_by_id(id: &str) -> Result<HtmlCanvasElement, Error> {
    let document = get_window()?
        .document()
        .ok_or(Error::UnableToRetrieveDocument)?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| Error::UnableToRetrieveElement(id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| Error::NotACanvas(id.to_string()))
}

/// Routes panics to the browser console.
pub fn set_panic_hook() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
}

/// Logs a warning to the browser console.
pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}
