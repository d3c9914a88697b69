use thiserror::Error as ThisError;
use web_sys::wasm_bindgen::JsValue;

/// Error type.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Unable to retrieve the window.
    #[error("Unable to retrieve window")]
    UnableToRetrieveWindow,

    /// Unable to retrieve the document.
    #[error("Unable to retrieve document")]
    UnableToRetrieveDocument,

    /// Unable to retrieve an element by its id.
    #[error("Unable to retrieve element: {0}")]
    UnableToRetrieveElement(String),

    /// The element exists but is not a canvas.
    #[error("Element is not a canvas: {0}")]
    NotACanvas(String),

    /// Unable to retrieve the 2D drawing context of the canvas.
    #[error("Unable to retrieve canvas context")]
    UnableToRetrieveCanvasContext,

    /// A registration payload could not be decoded.
    #[error("Invalid payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Error from the browser.
    #[error("{0}")]
    Js(String),
}

/// Convert a [`JsValue`] to an [`Error`].
impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
