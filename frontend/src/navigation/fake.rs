//! Scripted viewport for driving the controller without a browser.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::platform::{PlatformError, Subscription, Viewport, VisibilityOptions};

type Queue<T> = RefCell<Vec<(u32, T)>>;

#[derive(Default)]
struct State {
    scroll_y: Cell<f64>,
    tops: RefCell<HashMap<String, f64>>,
    scroll_listeners: Queue<Rc<dyn Fn()>>,
    visibility_listeners: Queue<Rc<dyn Fn(&str)>>,
    observed: RefCell<Vec<&'static str>>,
    visibility_options: RefCell<Option<VisibilityOptions>>,
    frames: Queue<Box<dyn FnOnce()>>,
    timers: Queue<(u32, Box<dyn FnOnce()>)>,
    scroll_requests: RefCell<Vec<String>>,
    next_id: Cell<u32>,
    refuse_scroll_listener: Cell<bool>,
    refuse_visibility: Cell<bool>,
    refuse_frames: Cell<bool>,
}

impl State {
    fn next_id(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }
}

/// Cloning shares the same scripted page, so a test can keep one handle
/// while the controller owns another.
#[derive(Clone, Default)]
pub struct FakeViewport {
    state: Rc<State>,
}

fn remove_entry<T>(queue: &Queue<T>, id: u32) {
    queue.borrow_mut().retain(|(entry, _)| *entry != id);
}

impl FakeViewport {
    pub fn with_tops(tops: &[(&str, f64)]) -> Self {
        let fake = Self::default();
        for (id, top) in tops {
            fake.set_top(id, *top);
        }
        fake
    }

    pub fn set_top(&self, id: &str, top: f64) {
        self.state.tops.borrow_mut().insert(id.to_string(), top);
    }

    pub fn unmount(&self, id: &str) {
        self.state.tops.borrow_mut().remove(id);
    }

    /// Moves the viewport without notifying anyone, like a restored scroll position.
    pub fn set_scroll_y(&self, y: f64) {
        self.state.scroll_y.set(y);
    }

    /// Moves the viewport and fires every attached scroll listener.
    pub fn scroll_to(&self, y: f64) {
        self.set_scroll_y(y);
        for listener in self.scroll_listeners() {
            listener();
        }
    }

    /// Reports `id` entering the shrunken viewport.
    pub fn intersect(&self, id: &str) {
        for listener in self.visibility_listeners() {
            listener(id);
        }
    }

    pub fn scroll_listeners(&self) -> Vec<Rc<dyn Fn()>> {
        self.state.scroll_listeners.borrow().iter().map(|(_, l)| l.clone()).collect()
    }

    pub fn visibility_listeners(&self) -> Vec<Rc<dyn Fn(&str)>> {
        self.state.visibility_listeners.borrow().iter().map(|(_, l)| l.clone()).collect()
    }

    pub fn observed(&self) -> Vec<&'static str> {
        self.state.observed.borrow().clone()
    }

    pub fn visibility_options(&self) -> Option<VisibilityOptions> {
        self.state.visibility_options.borrow().clone()
    }

    pub fn pending_frames(&self) -> usize {
        self.state.frames.borrow().len()
    }

    pub fn pending_timers(&self) -> Vec<u32> {
        self.state.timers.borrow().iter().map(|(_, (ms, _))| *ms).collect()
    }

    /// Runs every queued animation frame callback, returns how many ran.
    pub fn run_frames(&self) -> usize {
        let queued = std::mem::take(&mut *self.state.frames.borrow_mut());
        let count = queued.len();
        for (_, callback) in queued {
            callback();
        }
        count
    }

    /// Fires every pending timer regardless of its delay.
    pub fn run_timers(&self) -> usize {
        let queued = std::mem::take(&mut *self.state.timers.borrow_mut());
        let count = queued.len();
        for (_, (_, callback)) in queued {
            callback();
        }
        count
    }

    pub fn scroll_requests(&self) -> Vec<String> {
        self.state.scroll_requests.borrow().clone()
    }

    pub fn refuse_scroll_listener(&self) {
        self.state.refuse_scroll_listener.set(true);
    }

    pub fn refuse_visibility(&self) {
        self.state.refuse_visibility.set(true);
    }

    pub fn refuse_frames(&self) {
        self.state.refuse_frames.set(true);
    }
}

impl Viewport for FakeViewport {
    fn scroll_y(&self) -> f64 {
        self.state.scroll_y.get()
    }

    fn section_top(&self, id: &str) -> Option<f64> {
        self.state.tops.borrow().get(id).copied()
    }

    fn scroll_into_view(&self, id: &str) -> bool {
        if !self.state.tops.borrow().contains_key(id) {
            return false;
        }
        self.state.scroll_requests.borrow_mut().push(id.to_string());
        true
    }

    fn listen_scroll(&self, on_scroll: Box<dyn Fn()>) -> Result<Subscription, PlatformError> {
        if self.state.refuse_scroll_listener.get() {
            return Err(PlatformError::Unsupported("scroll events"));
        }
        let id = self.state.next_id();
        self.state.scroll_listeners.borrow_mut().push((id, Rc::from(on_scroll)));
        let state = self.state.clone();
        Ok(Subscription::new(move || remove_entry(&state.scroll_listeners, id)))
    }

    fn observe_visibility(
        &self,
        ids: &[&'static str],
        options: &VisibilityOptions,
        on_enter: Box<dyn Fn(&str)>,
    ) -> Result<Subscription, PlatformError> {
        if self.state.refuse_visibility.get() {
            return Err(PlatformError::Unsupported("IntersectionObserver"));
        }
        let id = self.state.next_id();
        self.state.observed.borrow_mut().extend_from_slice(ids);
        *self.state.visibility_options.borrow_mut() = Some(options.clone());
        self.state.visibility_listeners.borrow_mut().push((id, Rc::from(on_enter)));
        let state = self.state.clone();
        Ok(Subscription::new(move || {
            remove_entry(&state.visibility_listeners, id);
            state.observed.borrow_mut().clear();
        }))
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<Subscription, PlatformError> {
        if self.state.refuse_frames.get() {
            return Err(PlatformError::Js {
                what: "requestAnimationFrame",
                message: "refused".into(),
            });
        }
        let id = self.state.next_id();
        self.state.frames.borrow_mut().push((id, callback));
        let state = self.state.clone();
        Ok(Subscription::new(move || remove_entry(&state.frames, id)))
    }

    fn set_timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Result<Subscription, PlatformError> {
        let id = self.state.next_id();
        self.state.timers.borrow_mut().push((id, (millis, callback)));
        let state = self.state.clone();
        Ok(Subscription::new(move || remove_entry(&state.timers, id)))
    }
}
