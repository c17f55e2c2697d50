use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    AddEventListenerOptions, Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use super::platform::{PlatformError, Subscription, Viewport, VisibilityOptions};

fn js_error(what: &'static str) -> impl FnOnce(JsValue) -> PlatformError {
    move |value| PlatformError::Js {
        what,
        message: format!("{:?}", value),
    }
}

/// Builds an intersection observer that reports the ids of entering targets.
fn intersection_observer(
    threshold: f64,
    root_margin: Option<&str>,
    on_enter: Box<dyn Fn(&str)>,
) -> Result<(IntersectionObserver, Closure<dyn FnMut(Array, IntersectionObserver)>), PlatformError> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::wrap(Box::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_enter(&entry.target().id());
                }
            }
        },
    ));

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|_| PlatformError::Unsupported("IntersectionObserver"))?;
    Ok((observer, callback))
}

/// Observes a single element, used by the reveal-on-view sections.
pub fn observe_element(
    element: &Element,
    threshold: f64,
    on_enter: Box<dyn Fn()>,
) -> Result<Subscription, PlatformError> {
    let (observer, callback) = intersection_observer(threshold, None, Box::new(move |_: &str| on_enter()))?;
    observer.observe(element);
    Ok(Subscription::new(move || {
        observer.disconnect();
        drop(callback);
    }))
}

/// The browser window as seen by the navigation controller.
pub struct DomViewport {
    window: Window,
    document: Document,
}

impl DomViewport {
    pub fn new() -> Result<Self, PlatformError> {
        let window = web_sys::window().ok_or(PlatformError::NoWindow)?;
        let document = window.document().ok_or(PlatformError::NoDocument)?;
        Ok(Self { window, document })
    }
}

impl Viewport for DomViewport {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn section_top(&self, id: &str) -> Option<f64> {
        let element = self.document.get_element_by_id(id)?;
        let element = element.dyn_into::<HtmlElement>().ok()?;
        Some(f64::from(element.offset_top()))
    }

    fn scroll_into_view(&self, id: &str) -> bool {
        let Some(element) = self.document.get_element_by_id(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn listen_scroll(&self, on_scroll: Box<dyn Fn()>) -> Result<Subscription, PlatformError> {
        let callback = Closure::<dyn Fn()>::wrap(on_scroll);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        self.window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(js_error("scroll listener"))?;

        let window = self.window.clone();
        Ok(Subscription::new(move || {
            let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
        }))
    }

    fn observe_visibility(
        &self,
        ids: &[&'static str],
        options: &VisibilityOptions,
        on_enter: Box<dyn Fn(&str)>,
    ) -> Result<Subscription, PlatformError> {
        let (observer, callback) = intersection_observer(options.threshold, Some(options.root_margin), on_enter)?;
        for id in ids {
            if let Some(element) = self.document.get_element_by_id(id) {
                observer.observe(&element);
            }
        }
        Ok(Subscription::new(move || {
            observer.disconnect();
            drop(callback);
        }))
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<Subscription, PlatformError> {
        // owned by the subscription so a cancelled frame frees it too
        let callback = Closure::once(callback);
        let handle = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(js_error("requestAnimationFrame"))?;

        let window = self.window.clone();
        Ok(Subscription::new(move || {
            let _ = window.cancel_animation_frame(handle);
            drop(callback);
        }))
    }

    fn set_timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Result<Subscription, PlatformError> {
        let timeout = Timeout::new(millis, callback);
        Ok(Subscription::new(move || drop(timeout)))
    }
}
