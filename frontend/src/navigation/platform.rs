use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("{0} is not supported here")]
    Unsupported(&'static str),
    #[error("{what} failed: {message}")]
    Js { what: &'static str, message: String },
}

/// Options for the visibility source, mirroring an intersection observer.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

/// Handle to a registered listener, observer, timer or frame request.
///
/// Dropping it (or calling [`Subscription::dispose`]) detaches whatever it
/// guards. The disposer runs at most once.
#[must_use = "dropping a Subscription detaches it immediately"]
pub struct Subscription {
    dispose: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(dispose: impl FnOnce() + 'static) -> Self {
        Self {
            dispose: Some(Box::new(dispose)),
        }
    }

    pub fn dispose(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(dispose) = self.dispose.take() {
            dispose();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.dispose.is_some())
            .finish()
    }
}

/// Everything the navigation controller needs from the page it runs in.
///
/// The browser implementation lives in `dom`; tests drive a scripted fake.
pub trait Viewport {
    /// Vertical scroll distance from the top of the document.
    fn scroll_y(&self) -> f64;

    /// Top edge of the section element in document coordinates, `None` when
    /// the element is not mounted.
    fn section_top(&self, id: &str) -> Option<f64>;

    /// Starts a smooth scroll bringing the element's top to the viewport top.
    /// Returns `false` when no such element exists.
    fn scroll_into_view(&self, id: &str) -> bool;

    fn listen_scroll(&self, on_scroll: Box<dyn Fn()>) -> Result<Subscription, PlatformError>;

    /// Calls `on_enter` with the element id every time one of `ids` enters the
    /// (margin-adjusted) viewport.
    fn observe_visibility(
        &self,
        ids: &[&'static str],
        options: &VisibilityOptions,
        on_enter: Box<dyn Fn(&str)>,
    ) -> Result<Subscription, PlatformError>;

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<Subscription, PlatformError>;

    fn set_timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Result<Subscription, PlatformError>;
}
