//! Section navigation controller.
//!
//! Owns the page's [`NavigationState`], wires the viewport's scroll and
//! visibility signals into the two resolvers and performs smooth-scroll
//! navigation. Every observation handle is released on teardown and callbacks
//! that still arrive afterwards are ignored.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, info, warn};

use crate::config::NavConfig;
use crate::navigation::platform::{PlatformError, Subscription, Viewport, VisibilityOptions};
use crate::navigation::resolver::{
    chrome_visible, navbar_scrolled, resolve_by_offset, resolve_by_visibility, trigger_line,
};
use crate::navigation::section::SectionRegistry;

/// UI-facing navigation state, one instance per mounted page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    /// Highlighted in the floating dock, driven by visibility events.
    pub dock_section: &'static str,
    /// Highlighted in the sticky top bar, driven by the scroll offset.
    pub navbar_section: &'static str,
    pub chrome_visible: bool,
    pub navbar_scrolled: bool,
    pub mobile_menu_open: bool,
}

impl NavigationState {
    pub fn initial(registry: &SectionRegistry) -> Self {
        let first = registry.first_id();
        Self {
            dock_section: first,
            navbar_section: first,
            chrome_visible: false,
            navbar_scrolled: false,
            mobile_menu_open: false,
        }
    }
}

struct Inner<V> {
    viewport: V,
    registry: SectionRegistry,
    config: NavConfig,
    state: RefCell<NavigationState>,
    // pending animation frame; at most one resolution per frame
    frame: RefCell<Option<Subscription>>,
    subscriptions: RefCell<Vec<Subscription>>,
    alive: Cell<bool>,
    on_change: Box<dyn Fn(&NavigationState)>,
}

impl<V: Viewport + 'static> Inner<V> {
    fn update(&self, apply: impl FnOnce(&mut NavigationState)) {
        if !self.alive.get() {
            return;
        }
        let changed = {
            let mut state = self.state.borrow_mut();
            let before = state.clone();
            apply(&mut *state);
            (*state != before).then(|| (*state).clone())
        };
        if let Some(state) = changed {
            (self.on_change)(&state);
        }
    }

    fn on_scroll(self: &Rc<Self>) {
        if !self.alive.get() {
            return;
        }
        let scroll_y = self.viewport.scroll_y();
        let visible = chrome_visible(scroll_y, &self.config);
        self.update(|state| state.chrome_visible = visible);
        self.schedule_frame();
    }

    fn schedule_frame(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }
        let weak = Rc::downgrade(self);
        let callback = Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.run_frame();
            }
        });
        match self.viewport.request_frame(callback) {
            Ok(handle) => *self.frame.borrow_mut() = Some(handle),
            Err(err) => warn!("Could not schedule section resolution: {}", err),
        }
    }

    fn run_frame(&self) {
        self.frame.borrow_mut().take();
        self.resolve_offset();
    }

    fn resolve_offset(&self) {
        if !self.alive.get() {
            return;
        }
        let scroll_y = self.viewport.scroll_y();
        let line = trigger_line(scroll_y, &self.config);
        // only linked sections can be highlighted in the top bar
        let active = resolve_by_offset(self.registry.navbar_links(), line, |id| self.viewport.section_top(id));
        let scrolled = navbar_scrolled(scroll_y, &self.config);
        self.update(|state| {
            if let Some(active) = active {
                if state.navbar_section != active {
                    debug!("Navbar section {} -> {} at trigger line {}", state.navbar_section, active, line);
                }
                state.navbar_section = active;
            }
            state.navbar_scrolled = scrolled;
        });
    }

    fn on_visible(&self, candidate: &str) {
        if !self.alive.get() {
            return;
        }
        self.update(|state| {
            state.dock_section = resolve_by_visibility(&self.registry, state.dock_section, candidate);
        });
    }

    fn attach(&self, what: &str, result: Result<Subscription, PlatformError>) {
        match result {
            Ok(subscription) => self.subscriptions.borrow_mut().push(subscription),
            Err(err) => warn!("Section navigation running without {}: {}", what, err),
        }
    }
}

/// Active-section tracker and smooth-scroll navigator for one mounted page.
///
/// Dropping the controller tears it down.
pub struct NavigationController<V: Viewport + 'static> {
    inner: Rc<Inner<V>>,
}

impl<V: Viewport + 'static> NavigationController<V> {
    /// Attaches scroll, visibility and settle-timer observation.
    ///
    /// A primitive that cannot be installed is logged and skipped, the
    /// matching part of the state then stays at its initial value.
    pub fn mount(
        viewport: V,
        registry: SectionRegistry,
        config: NavConfig,
        on_change: impl Fn(&NavigationState) + 'static,
    ) -> Self {
        let inner = Rc::new(Inner {
            state: RefCell::new(NavigationState::initial(&registry)),
            viewport,
            registry,
            config,
            frame: RefCell::new(None),
            subscriptions: RefCell::new(Vec::new()),
            alive: Cell::new(true),
            on_change: Box::new(on_change),
        });

        let scroll_y = inner.viewport.scroll_y();
        let visible = chrome_visible(scroll_y, &inner.config);
        inner.update(|state| state.chrome_visible = visible);

        let weak: Weak<Inner<V>> = Rc::downgrade(&inner);
        let listener = inner.viewport.listen_scroll(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.on_scroll();
            }
        }));
        inner.attach("scroll tracking", listener);

        let weak = Rc::downgrade(&inner);
        let options = VisibilityOptions {
            threshold: inner.config.visibility_threshold,
            root_margin: inner.config.visibility_root_margin,
        };
        let observer = inner.viewport.observe_visibility(
            &inner.registry.ids(),
            &options,
            Box::new(move |id: &str| {
                if let Some(inner) = weak.upgrade() {
                    inner.on_visible(id);
                }
            }),
        );
        inner.attach("visibility tracking", observer);

        let weak = Rc::downgrade(&inner);
        let settle = inner.viewport.set_timeout(
            inner.config.settle_delay_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.resolve_offset();
                }
            }),
        );
        inner.attach("initial resolution", settle);

        info!(
            "Section navigation mounted with {} sections",
            inner.registry.sections().len()
        );
        Self { inner }
    }

    pub fn state(&self) -> NavigationState {
        self.inner.state.borrow().clone()
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.inner.registry
    }

    /// Smooth-scrolls to the section and closes the mobile menu.
    ///
    /// Unknown or unmounted sections are ignored. Scroll events produced by the
    /// animation flow through the normal resolution path.
    pub fn navigate_to(&self, id: &str) {
        let inner = &self.inner;
        if !inner.alive.get() {
            return;
        }
        if !inner.registry.contains(id) || !inner.viewport.scroll_into_view(id) {
            debug!("Ignoring navigation to unmounted section {}", id);
            return;
        }
        debug!("Navigating to {}", id);
        inner.update(|state| state.mobile_menu_open = false);
    }

    pub fn toggle_mobile_menu(&self) {
        self.inner
            .update(|state| state.mobile_menu_open = !state.mobile_menu_open);
    }

    /// Releases every listener, observer, timer and pending frame. Idempotent.
    pub fn teardown(&self) {
        let inner = &self.inner;
        if !inner.alive.replace(false) {
            return;
        }
        let pending = inner.frame.borrow_mut().take();
        drop(pending);
        let subscriptions = std::mem::take(&mut *inner.subscriptions.borrow_mut());
        drop(subscriptions);
        info!("Section navigation torn down");
    }
}

impl<V: Viewport + 'static> Drop for NavigationController<V> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::fake::FakeViewport;
    use crate::navigation::section::{Section, COUNTRIES, CTA, HERO, LEARN, MISSION};

    fn landing_page() -> FakeViewport {
        FakeViewport::with_tops(&[
            (HERO, 0.0),
            (LEARN, 800.0),
            (COUNTRIES, 1600.0),
            (MISSION, 2400.0),
            (CTA, 3200.0),
        ])
    }

    fn mount(fake: &FakeViewport) -> (NavigationController<FakeViewport>, Rc<RefCell<Vec<NavigationState>>>) {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let log = changes.clone();
        let controller = NavigationController::mount(
            fake.clone(),
            SectionRegistry::landing(),
            NavConfig::default(),
            move |state: &NavigationState| log.borrow_mut().push(state.clone()),
        );
        (controller, changes)
    }

    #[test]
    fn starts_on_the_first_section() {
        let fake = landing_page();
        let (controller, changes) = mount(&fake);
        assert_eq!(controller.state(), NavigationState::initial(controller.registry()));
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn mount_attaches_every_source() {
        let fake = landing_page();
        let (_controller, _) = mount(&fake);
        assert_eq!(fake.scroll_listeners().len(), 1);
        assert_eq!(fake.visibility_listeners().len(), 1);
        assert_eq!(fake.observed(), SectionRegistry::landing().ids());
        assert_eq!(
            fake.visibility_options(),
            Some(VisibilityOptions {
                threshold: 0.01,
                root_margin: "-10% 0px -60% 0px",
            })
        );
        assert_eq!(fake.pending_timers(), vec![200]);
    }

    #[test]
    fn settle_delay_resolves_restored_scroll_position() {
        let fake = landing_page();
        fake.set_scroll_y(1530.0);
        let (controller, _) = mount(&fake);

        assert_eq!(controller.state().navbar_section, HERO);
        assert!(controller.state().chrome_visible);

        fake.run_timers();
        let state = controller.state();
        assert_eq!(state.navbar_section, COUNTRIES);
        assert!(state.navbar_scrolled);
        assert_eq!(state.dock_section, HERO);
    }

    #[test]
    fn scroll_resolution_waits_for_the_next_frame() {
        let fake = landing_page();
        let (controller, _) = mount(&fake);

        fake.scroll_to(750.0);
        assert_eq!(controller.state().navbar_section, HERO);
        assert_eq!(fake.pending_frames(), 1);

        assert_eq!(fake.run_frames(), 1);
        assert_eq!(controller.state().navbar_section, LEARN);
    }

    #[test]
    fn bursts_of_scroll_events_share_one_frame_and_use_the_latest_position() {
        let fake = landing_page();
        let (controller, _) = mount(&fake);

        for y in [100.0, 900.0, 1530.0] {
            fake.scroll_to(y);
        }
        assert_eq!(fake.pending_frames(), 1);
        fake.run_frames();
        assert_eq!(controller.state().navbar_section, COUNTRIES);

        fake.scroll_to(2500.0);
        assert_eq!(fake.pending_frames(), 1);
        fake.run_frames();
        assert_eq!(controller.state().navbar_section, MISSION);
    }

    #[test]
    fn dock_visibility_follows_scroll_distance_immediately() {
        let fake = landing_page();
        let (controller, _) = mount(&fake);

        let mut seen = Vec::new();
        for y in [0.0, 119.0, 120.0, 121.0, 100.0] {
            fake.scroll_to(y);
            seen.push(controller.state().chrome_visible);
        }
        assert_eq!(seen, vec![false, false, false, true, false]);
    }

    #[test]
    fn latest_visibility_event_drives_the_dock_only() {
        let fake = landing_page();
        let (controller, _) = mount(&fake);

        fake.intersect(COUNTRIES);
        fake.intersect(LEARN);
        let state = controller.state();
        assert_eq!(state.dock_section, LEARN);
        assert_eq!(state.navbar_section, HERO);

        fake.intersect("newsletter-banner");
        assert_eq!(controller.state().dock_section, LEARN);
    }

    #[test]
    fn strategies_may_disagree() {
        let fake = landing_page();
        let (controller, _) = mount(&fake);

        fake.scroll_to(2450.0);
        fake.run_frames();
        fake.intersect(COUNTRIES);

        let state = controller.state();
        assert_eq!(state.navbar_section, MISSION);
        assert_eq!(state.dock_section, COUNTRIES);
    }

    #[test]
    fn unmounted_sections_are_skipped_during_resolution() {
        let fake = landing_page();
        fake.unmount(MISSION);
        fake.unmount(CTA);
        let (controller, _) = mount(&fake);

        fake.scroll_to(4000.0);
        fake.run_frames();
        assert_eq!(controller.state().navbar_section, COUNTRIES);
    }

    #[test]
    fn footer_keeps_the_last_navbar_link_highlighted() {
        let fake = landing_page();
        let (controller, _) = mount(&fake);

        fake.scroll_to(3300.0);
        fake.intersect(CTA);
        fake.run_frames();

        let state = controller.state();
        assert_eq!(state.navbar_section, MISSION);
        assert!(controller.registry().navbar_links().iter().any(|link| link.id == state.navbar_section));
        assert_eq!(state.dock_section, CTA);
    }

    #[test]
    fn layout_is_measured_on_every_pass() {
        let fake = landing_page();
        let (controller, _) = mount(&fake);

        fake.scroll_to(750.0);
        fake.run_frames();
        assert_eq!(controller.state().navbar_section, LEARN);

        fake.set_top(LEARN, 1000.0);
        fake.scroll_to(760.0);
        fake.run_frames();
        assert_eq!(controller.state().navbar_section, HERO);
    }

    #[test]
    fn navigation_scrolls_and_closes_the_menu() {
        let fake = landing_page();
        let (controller, _) = mount(&fake);

        controller.toggle_mobile_menu();
        assert!(controller.state().mobile_menu_open);

        controller.navigate_to(MISSION);
        assert_eq!(fake.scroll_requests(), vec![MISSION.to_string()]);
        let state = controller.state();
        assert!(!state.mobile_menu_open);
        assert_eq!(state.navbar_section, HERO);
    }

    #[test]
    fn navigation_to_unknown_or_unmounted_sections_is_ignored() {
        let fake = landing_page();
        fake.unmount(CTA);
        let (controller, changes) = mount(&fake);
        controller.toggle_mobile_menu();
        let before = controller.state();

        controller.navigate_to("nonexistent-id");
        controller.navigate_to(CTA);

        assert!(fake.scroll_requests().is_empty());
        assert_eq!(controller.state(), before);
        assert_eq!(changes.borrow().len(), 1);
    }

    #[test]
    fn retargeting_mid_animation_just_issues_another_scroll() {
        let fake = landing_page();
        let (controller, _) = mount(&fake);

        controller.navigate_to(CTA);
        fake.scroll_to(1200.0);
        controller.navigate_to(LEARN);
        fake.run_frames();

        assert_eq!(fake.scroll_requests(), vec![CTA.to_string(), LEARN.to_string()]);
        assert_eq!(controller.state().navbar_section, LEARN);
    }

    #[test]
    fn menu_toggles_back_and_forth() {
        let fake = landing_page();
        let (controller, changes) = mount(&fake);
        controller.toggle_mobile_menu();
        controller.toggle_mobile_menu();
        assert!(!controller.state().mobile_menu_open);
        assert_eq!(changes.borrow().len(), 2);
    }

    #[test]
    fn only_real_changes_are_published() {
        let fake = landing_page();
        let (_controller, changes) = mount(&fake);

        fake.scroll_to(10.0);
        fake.run_frames();
        fake.scroll_to(15.0);
        fake.run_frames();
        assert!(changes.borrow().is_empty());

        fake.scroll_to(30.0);
        fake.run_frames();
        assert_eq!(changes.borrow().len(), 1);
        assert!(changes.borrow()[0].navbar_scrolled);
    }

    #[test]
    fn missing_visibility_source_leaves_the_dock_on_its_initial_section() {
        let fake = landing_page();
        fake.refuse_visibility();
        let (controller, _) = mount(&fake);

        fake.intersect(MISSION);
        fake.scroll_to(2450.0);
        fake.run_frames();

        let state = controller.state();
        assert_eq!(state.dock_section, HERO);
        assert_eq!(state.navbar_section, MISSION);
    }

    #[test]
    fn missing_scroll_source_still_resolves_once_after_settling() {
        let fake = landing_page();
        fake.refuse_scroll_listener();
        fake.set_scroll_y(900.0);
        let (controller, _) = mount(&fake);

        fake.scroll_to(2450.0);
        assert_eq!(fake.pending_frames(), 0);
        fake.run_timers();
        assert_eq!(controller.state().navbar_section, MISSION);
    }

    #[test]
    fn refused_frames_leave_the_navbar_alone() {
        let fake = landing_page();
        fake.refuse_frames();
        let (controller, _) = mount(&fake);

        fake.scroll_to(1700.0);
        let state = controller.state();
        assert_eq!(state.navbar_section, HERO);
        assert!(state.chrome_visible);
    }

    #[test]
    fn teardown_releases_every_handle() {
        let fake = landing_page();
        let (controller, _) = mount(&fake);
        fake.scroll_to(900.0);

        controller.teardown();
        assert!(fake.scroll_listeners().is_empty());
        assert!(fake.visibility_listeners().is_empty());
        assert!(fake.observed().is_empty());
        assert_eq!(fake.pending_frames(), 0);
        assert!(fake.pending_timers().is_empty());

        controller.teardown();
    }

    #[test]
    fn late_callbacks_after_teardown_change_nothing() {
        let fake = landing_page();
        let (controller, changes) = mount(&fake);
        let scroll = fake.scroll_listeners();
        let visible = fake.visibility_listeners();
        controller.toggle_mobile_menu();
        let before = controller.state();
        let published = changes.borrow().len();

        controller.teardown();
        fake.set_scroll_y(3000.0);
        scroll.iter().for_each(|listener| listener());
        visible.iter().for_each(|listener| listener(CTA));
        controller.navigate_to(LEARN);
        controller.toggle_mobile_menu();

        assert_eq!(controller.state(), before);
        assert_eq!(changes.borrow().len(), published);
        assert!(fake.scroll_requests().is_empty());
        assert_eq!(fake.pending_frames(), 0);
    }

    #[test]
    fn dropping_the_controller_tears_it_down() {
        let fake = landing_page();
        let (controller, _) = mount(&fake);
        let scroll = fake.scroll_listeners();
        drop(controller);

        assert!(fake.scroll_listeners().is_empty());
        scroll.iter().for_each(|listener| listener());
        assert_eq!(fake.pending_frames(), 0);
    }

    #[test]
    fn works_with_a_custom_registry_and_geometry() {
        let fake = FakeViewport::with_tops(&[("intro", 0.0), ("pricing", 500.0)]);
        let registry = SectionRegistry::new(vec![
            Section::new("intro", "Intro"),
            Section::new("pricing", "Pricing"),
        ])
        .unwrap();
        let config = NavConfig {
            navbar_height: 0.0,
            lead_in: 0.0,
            ..NavConfig::default()
        };
        let controller = NavigationController::mount(fake.clone(), registry, config, |_: &NavigationState| {});

        fake.scroll_to(499.0);
        fake.run_frames();
        assert_eq!(controller.state().navbar_section, "intro");
        fake.scroll_to(500.0);
        fake.run_frames();
        assert_eq!(controller.state().navbar_section, "pricing");
    }
}
