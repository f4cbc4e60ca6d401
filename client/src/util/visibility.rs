//! One-shot "has this element been on screen" tracking.
//!
//! [`VisibilityLatch`] holds the rule: the flag flips to `true` on the
//! first intersecting report while observing and never flips back.
//! [`use_on_screen`] binds the latch to a browser `IntersectionObserver`
//! for the lifetime of the calling component.
//!
//! TRADE-OFFS
//! ==========
//! Server rendering has no viewport, so the signal stays `false` until the
//! page hydrates and the observer reports.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

use leptos::prelude::*;

/// Fraction of the target that must be inside the viewport to reveal it.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Monotonic visibility flag with a one-shot guard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityLatch {
    visible: bool,
    observing: bool,
}

impl VisibilityLatch {
    /// Start observing. A latch that already fired stays detached.
    pub fn attach(&mut self) {
        if !self.visible {
            self.observing = true;
        }
    }

    /// Feed one intersection report. Returns `true` only for the report that
    /// flips the latch; observation ends at that point.
    pub fn report(&mut self, intersecting: bool) -> bool {
        if !self.observing || !intersecting {
            return false;
        }
        self.visible = true;
        self.observing = false;
        true
    }

    /// Stop observing (component teardown).
    pub fn detach(&mut self) {
        self.observing = false;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.observing
    }
}

/// Report whether the element behind `node_ref` has entered the viewport.
///
/// The returned signal starts `false` and becomes `true` once, the first
/// time at least `threshold` of the element intersects the viewport.
pub fn use_on_screen(node_ref: NodeRef<leptos::html::Div>, threshold: f64) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);

    #[cfg(feature = "hydrate")]
    browser::watch(node_ref, threshold, set_visible);
    #[cfg(not(feature = "hydrate"))]
    let _ = (node_ref, threshold, set_visible);

    visible
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use leptos::prelude::*;
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::VisibilityLatch;

    type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// Live observer plus the JS callback it references. Dropping the handle
    /// disconnects the observer.
    pub(super) struct ObserverHandle {
        observer: IntersectionObserver,
        latch: Rc<RefCell<VisibilityLatch>>,
        _callback: EntriesCallback,
    }

    impl ObserverHandle {
        fn observe(
            target: &web_sys::Element,
            threshold: f64,
            on_visible: impl Fn() + 'static,
        ) -> Result<Self, JsValue> {
            let latch = Rc::new(RefCell::new(VisibilityLatch::default()));
            latch.borrow_mut().attach();

            let latch_for_cb = Rc::clone(&latch);
            let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if latch_for_cb.borrow_mut().report(entry.is_intersecting()) {
                        observer.unobserve(&entry.target());
                        on_visible();
                    }
                }
            }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(threshold));
            let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
            observer.observe(target);

            Ok(Self { observer, latch, _callback: callback })
        }
    }

    impl Drop for ObserverHandle {
        fn drop(&mut self) {
            self.latch.borrow_mut().detach();
            self.observer.disconnect();
        }
    }

    pub(super) fn watch(node_ref: NodeRef<leptos::html::Div>, threshold: f64, set_visible: WriteSignal<bool>) {
        let handle = StoredValue::new_local(None::<ObserverHandle>);

        Effect::new(move |_| {
            let Some(target) = node_ref.get() else {
                return;
            };
            if handle.with_value(Option::is_some) {
                return;
            }
            match ObserverHandle::observe(&target, threshold, move || set_visible.set(true)) {
                Ok(observer) => handle.set_value(Some(observer)),
                Err(err) => {
                    log::warn!("IntersectionObserver unavailable, revealing immediately: {err:?}");
                    set_visible.set(true);
                }
            }
        });

        on_cleanup(move || {
            let _ = handle.try_update_value(Option::take);
        });
    }
}
