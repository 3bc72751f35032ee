//! [`FrameScheduler`] backed by the browser's `requestAnimationFrame`.
//!
//! Each requested frame owns a JS closure. A cancelled frame frees its
//! closure right away. A frame that ran cannot free the closure it is
//! running in, so it parks it and the next request frees it.

use std::cell::RefCell;
use std::rc::Rc;

use folio_app::ports::{FrameCallback, FrameScheduler};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

type JsFrame = Closure<dyn FnMut(f64)>;

/// Shared between a frame's handle and the closure body.
type Slot<C> = Rc<RefCell<Option<C>>>;

thread_local! {
    static SPENT: RefCell<Option<JsFrame>> = const { RefCell::new(None) };
}

/// A requested animation frame and the closure it will run.
pub struct RafFrame {
    id: i32,
    closure: Slot<JsFrame>,
}

/// Schedules counter frames on the display refresh of the current window.
///
/// Without a window (or if the browser refuses the request) no frame is
/// scheduled and the handle is `None`, which cancels as a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct RafScheduler;

impl FrameScheduler for RafScheduler {
    type Handle = Option<RafFrame>;

    fn request_frame(&self, callback: FrameCallback) -> Self::Handle {
        let window = web_sys::window()?;
        SPENT.with(release_spent);

        let slot: Slot<JsFrame> = Rc::new(RefCell::new(None));
        let own = Rc::clone(&slot);
        let mut callback = Some(callback);
        let closure: JsFrame = Closure::new(move |now: f64| {
            if let Some(callback) = callback.take() {
                callback(now);
            }
            SPENT.with(|spent| park(&own, spent));
        });

        let requested = window.request_animation_frame(closure.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(closure);
        match requested {
            Ok(id) => Some(RafFrame { id, closure: slot }),
            Err(err) => {
                leptos::logging::error!("requestAnimationFrame failed: {err:?}");
                release(&slot);
                None
            }
        }
    }

    fn cancel_frame(&self, handle: Self::Handle) {
        let Some(frame) = handle else {
            return;
        };
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.cancel_animation_frame(frame.id) {
                leptos::logging::warn!("cancelAnimationFrame failed: {err:?}");
            }
        }
        release(&frame.closure);
    }
}

/// Move a frame's closure out of its slot into `spent`, freeing whatever
/// was parked there before.
fn park<C>(slot: &Slot<C>, spent: &RefCell<Option<C>>) {
    let closure = slot.borrow_mut().take();
    if closure.is_some() {
        drop(spent.replace(closure));
    }
}

/// Free the parked closure of the last frame that ran.
fn release_spent<C>(spent: &RefCell<Option<C>>) {
    drop(spent.take());
}

/// Free a closure that will never run. Returns `true` if one was held.
fn release<C>(slot: &Slot<C>) -> bool {
    slot.borrow_mut().take().is_some()
}
