use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use leptos::logging::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::extract_error;

struct FrameState {
    request_id: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameState {
    fn schedule(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => self.request_id.set(Some(id)),
            Err(e) => warn!("requestAnimationFrame failed: {}", extract_error(e)),
        }
    }
}

/// A `requestAnimationFrame` chain calling `tick` once per display refresh.
///
/// Cancelling, or dropping the loop, revokes the pending frame and frees the
/// callback, so no tick runs afterwards.
pub struct FrameLoop {
    state: Rc<FrameState>,
}

impl FrameLoop {
    pub fn start(mut tick: impl FnMut(f64) + 'static) -> Self {
        let state = Rc::new(FrameState {
            request_id: Cell::new(None),
            callback: RefCell::new(None),
        });

        let weak: Weak<FrameState> = Rc::downgrade(&state);
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.request_id.set(None);
            tick(timestamp);
            state.schedule();
        }) as Box<dyn FnMut(f64)>);

        *state.callback.borrow_mut() = Some(callback);
        state.schedule();
        Self { state }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.state.request_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.state.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
