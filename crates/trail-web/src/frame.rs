use std::cell::RefCell;
use std::rc::Rc;
use trail_core::{FrameHandle, FrameScheduler};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Slot holding the per-frame callback. Filled after the owner exists so the
/// closure can hold a weak handle back to it.
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// [`FrameScheduler`] over `requestAnimationFrame`.
pub struct RafScheduler {
    window: web::Window,
    callback: FrameCallback,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            callback: Rc::new(RefCell::new(None)),
        }
    }

    /// Install the callback invoked on every granted frame.
    pub fn set_callback(&self, handler: impl FnMut(f64) + 'static) {
        *self.callback.borrow_mut() = Some(Closure::wrap(Box::new(handler) as Box<dyn FnMut(f64)>));
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let slot = self.callback.borrow();
        let callback: &js_sys::Function = slot.as_ref()?.as_ref().unchecked_ref();
        match self.window.request_animation_frame(callback) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::warn!("[frame] requestAnimationFrame refused: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle);
    }
}
