use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use rand::{rngs::SmallRng, SeedableRng};
use web_sys::{js_sys::Math, EventTarget, HtmlCanvasElement};

use crate::{
    backend::{
        canvas::CanvasSurface,
        event_callback::{EventCallback, POINTER_EVENT_TYPES, RESIZE_EVENT_TYPES},
        scheduler::AnimationFrameScheduler,
    },
    error::Error,
    event::PointerPosition,
    rain::{RainField, RainOptions},
    utils::{get_canvas_by_id, get_window, get_window_size, warn},
};

/// Rain field as it runs in the browser.
type WebRainField = RainField<CanvasSurface, AnimationFrameScheduler, SmallRng>;

/// Matrix rain running on a canvas in the browser.
///
/// Mounting sizes the canvas to the window, follows the pointer and window
/// resizes and paints from `requestAnimationFrame` until the handle is
/// stopped or dropped.
///
/// The rain is decorative: if the canvas cannot be used, mounting logs a
/// warning to the console and returns an inert handle instead of failing.
///
/// ```no_run
/// use killswitch::MatrixRain;
///
/// let rain = MatrixRain::mount_by_id("matrix");
/// // Later, once the team has been authenticated:
/// rain.set_intensify(true);
/// ```
#[derive(Debug, Default)]
pub struct MatrixRain {
    /// The running field. [`None`] once stopped or if mounting failed.
    field: Option<Rc<RefCell<WebRainField>>>,
    /// `mousemove` listener on the window.
    pointer_listener: Option<EventCallback<web_sys::MouseEvent>>,
    /// `resize` listener on the window.
    resize_listener: Option<EventCallback<web_sys::Event>>,
}

impl MatrixRain {
    /// Mounts the rain on the given canvas.
    pub fn mount(canvas: HtmlCanvasElement) -> Self {
        Self::mount_with_options(canvas, RainOptions::default())
    }

    /// Mounts the rain on the canvas with the given element id.
    pub fn mount_by_id(id: &str) -> Self {
        match get_canvas_by_id(id) {
            Ok(canvas) => Self::mount(canvas),
            Err(error) => {
                warn(&format!("[MatrixRain] not mounted: {error}"));
                Self::default()
            }
        }
    }

    /// Mounts the rain on the given canvas with the given options.
    pub fn mount_with_options(canvas: HtmlCanvasElement, options: RainOptions) -> Self {
        Self::try_mount(canvas, options).unwrap_or_else(|error| {
            warn(&format!("[MatrixRain] not mounted: {error}"));
            Self::default()
        })
    }

    fn try_mount(canvas: HtmlCanvasElement, options: RainOptions) -> Result<Self, Error> {
        let window = get_window()?;
        let surface = CanvasSurface::new(canvas)?;
        let rng = SmallRng::seed_from_u64((Math::random() * u64::MAX as f64) as u64);

        let field = Rc::new(RefCell::new(RainField::new_with_options(
            AnimationFrameScheduler::new(window.clone()),
            rng,
            options,
        )));

        field.borrow().scheduler().set_callback({
            let field = Rc::downgrade(&field);
            move |timestamp| with_field(&field, |field| field.on_frame(timestamp))
        });

        let pointer_listener = EventCallback::new(
            EventTarget::from(window.clone()),
            POINTER_EVENT_TYPES,
            {
                let field = Rc::downgrade(&field);
                move |event: web_sys::MouseEvent| {
                    let position = PointerPosition::from(&event);
                    with_field(&field, |field| field.on_pointer_move(position));
                }
            },
        )?;

        let resize_listener = EventCallback::new(
            EventTarget::from(window.clone()),
            RESIZE_EVENT_TYPES,
            {
                let field = Rc::downgrade(&field);
                let window = window.clone();
                move |_: web_sys::Event| {
                    let size = get_window_size(&window);
                    with_field(&field, |field| field.on_viewport_resize(size));
                }
            },
        )?;

        field
            .borrow_mut()
            .start(Some(surface), get_window_size(&window));

        Ok(Self {
            field: Some(field),
            pointer_listener: Some(pointer_listener),
            resize_listener: Some(resize_listener),
        })
    }

    /// Switches the intensified look on or off.
    pub fn set_intensify(&self, intensify: bool) {
        if let Some(field) = &self.field {
            with_field(&Rc::downgrade(field), |field| field.set_intensify(intensify));
        }
    }

    /// Returns whether the rain is animating.
    pub fn is_running(&self) -> bool {
        self.field
            .as_ref()
            .and_then(|field| field.try_borrow().ok().map(|field| field.is_running()))
            .unwrap_or(false)
    }

    /// Stops the animation and detaches the window listeners.
    ///
    /// Calling this more than once does nothing.
    pub fn stop(&mut self) {
        self.pointer_listener.take();
        self.resize_listener.take();
        if let Some(field) = self.field.take() {
            with_field(&Rc::downgrade(&field), |field| field.stop());
        }
    }
}

impl Drop for MatrixRain {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Runs `f` on the field if it is still alive and not already borrowed.
///
/// A notification that arrives while the field is busy is dropped; the next
/// one carries the same kind of state.
fn with_field<F>(field: &Weak<RefCell<WebRainField>>, f: F)
where
    F: FnOnce(&mut WebRainField),
{
    if let Some(field) = field.upgrade() {
        if let Ok(mut field) = field.try_borrow_mut() {
            f(&mut field);
        }
    }
}
