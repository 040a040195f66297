//! WASM utilities for browser interop
//!
//! # Observer Cleanup Pattern
//!
//! A JavaScript `IntersectionObserver` keeps calling back into Rust for as
//! long as it is connected, so the `Closure` it calls must outlive it. Rather
//! than `closure.forget()` (which leaks and never disconnects), the observer
//! and its closure live together in a struct that disconnects on `Drop`:
//!
//! ```ignore
//! // Observation starts when the VisibilityObserver is created
//! let observer = VisibilityObserver::attach(&element, on_visible);
//!
//! // ...and stops when it is dropped
//! drop(observer);
//! ```
//!
//! Store it in a `Signal<Option<VisibilityObserver>>`. Replacing the value
//! disconnects the previous observer, and so does the owning component
//! unmounting.

use wasm_bindgen::prelude::*;

/// Watches one element and fires a callback each time it scrolls into view.
pub struct VisibilityObserver {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl VisibilityObserver {
    /// Starts observing `target`.
    ///
    /// `on_visible` runs whenever an observation reports the target as
    /// intersecting the viewport, including the initial one if it already is.
    /// Returns `None` if the browser refuses to create the observer.
    pub fn attach(target: &web_sys::Element, mut on_visible: impl FnMut() + 'static) -> Option<Self> {
        let callback: Closure<dyn FnMut(js_sys::Array)> =
            Closure::wrap(Box::new(move |entries: js_sys::Array| {
                let visible = entries.iter().any(|entry| {
                    entry
                        .dyn_ref::<web_sys::IntersectionObserverEntry>()
                        .is_some_and(|entry| entry.is_intersecting())
                });
                if visible {
                    on_visible();
                }
            }) as Box<dyn FnMut(js_sys::Array)>);

        let observer =
            match web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
                Ok(observer) => observer,
                Err(e) => {
                    tracing::warn!("Failed to create IntersectionObserver: {e:?}");
                    return None;
                }
            };
        observer.observe(target);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
