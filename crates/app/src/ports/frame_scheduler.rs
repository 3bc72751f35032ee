//! Frame scheduler port: the host's per-frame animation clock.

use std::rc::Rc;

/// Work to run once before the next repaint. Receives the frame timestamp
/// in milliseconds.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Schedules one-shot frame callbacks on the host's display clock.
///
/// Schedulers are single-threaded: callbacks run on the thread that
/// requested them, never synchronously from inside `request_frame`.
pub trait FrameScheduler {
    /// Token identifying a requested frame.
    type Handle;

    /// Run `callback` on the next frame.
    fn request_frame(&self, callback: FrameCallback) -> Self::Handle;

    /// Cancel a frame that has not run yet. Cancelling a frame that already
    /// ran is a no-op.
    fn cancel_frame(&self, handle: Self::Handle);
}

impl<T: FrameScheduler + ?Sized> FrameScheduler for Rc<T> {
    type Handle = T::Handle;

    fn request_frame(&self, callback: FrameCallback) -> Self::Handle {
        (**self).request_frame(callback)
    }

    fn cancel_frame(&self, handle: Self::Handle) {
        (**self).cancel_frame(handle);
    }
}
