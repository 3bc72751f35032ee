//! Viewport visibility reports from an `IntersectionObserver`.

use folio_domain::counter::VisibilitySample;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Guard that disconnects the observer on drop.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl VisibilityObserver {
    /// Watch `target`, calling `on_sample` for every intersection change
    /// around `threshold`.
    ///
    /// When `on_sample` returns `true` the observer disconnects itself: the
    /// caller has what it waited for.
    ///
    /// # Errors
    ///
    /// Returns the browser's exception if the observer cannot be created.
    pub fn observe(
        target: &Element,
        threshold: f64,
        mut on_sample: impl FnMut(VisibilitySample) -> bool + 'static,
    ) -> Result<Self, JsValue> {
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let sample = VisibilitySample {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    };
                    if on_sample(sample) {
                        observer.disconnect();
                        break;
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}
