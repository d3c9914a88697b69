use std::{cell::RefCell, rc::Rc};

use web_sys::{
    wasm_bindgen::{prelude::Closure, JsCast},
    Window,
};

use crate::backend::FrameScheduler;

/// Frame callback, shared so it can re-arm itself.
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// [`FrameScheduler`] backed by [`requestAnimationFrame`].
///
/// The scheduler starts without a callback; requests made before one is
/// installed with [`AnimationFrameScheduler::set_callback`] are refused.
///
/// [`requestAnimationFrame`]: https://developer.mozilla.org/en-US/docs/Web/API/Window/requestAnimationFrame
#[derive(Debug)]
pub struct AnimationFrameScheduler {
    /// Window.
    window: Window,
    /// Callback run on every animation frame.
    callback: FrameCallback,
}

impl AnimationFrameScheduler {
    /// Constructs a new [`AnimationFrameScheduler`] without a callback.
    pub fn new(window: Window) -> Self {
        Self {
            window,
            callback: Rc::new(RefCell::new(None)),
        }
    }

    /// Installs the frame callback. It receives the frame timestamp in
    /// milliseconds.
    pub fn set_callback<F>(&self, callback: F)
    where
        F: FnMut(f64) + 'static,
    {
        *self.callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(callback));
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let callback = self.callback.borrow();
        let callback = callback.as_ref()?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_frame(&mut self, handle: i32) {
        let _ = self.window.cancel_animation_frame(handle);
    }
}
