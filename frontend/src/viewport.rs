// Viewport visibility signals for a mounted element.

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::NodeRef;

use crate::error::ObserveError;

/// One IntersectionObserver registration. Dropping it disconnects the observer.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    /// Observe `node` and pass every intersecting ratio to `on_sighting`.
    /// Once `on_sighting` returns `true` the observer disconnects itself.
    pub fn watch<F>(node: &NodeRef, threshold: f64, mut on_sighting: F) -> Result<Self, ObserveError>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let window = web_sys::window().ok_or(ObserveError::NoWindow)?;
        if !Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))? {
            return Err(ObserveError::Unsupported);
        }
        let element = node.cast::<Element>().ok_or(ObserveError::Detached)?;

        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                if on_sighting(entry.intersection_ratio()) {
                    observer.disconnect();
                    break;
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(&element);
        debug!("watching element at threshold {}", threshold);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
