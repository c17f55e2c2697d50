//! Pure functions that turn raw scroll signals into a canonical active section.
//!
//! The bottom dock follows visibility events, the top bar follows the scroll
//! offset. The two are kept apart on purpose: they may disagree while the user
//! scrolls fast.

use crate::config::NavConfig;
use crate::navigation::section::{Section, SectionRegistry};

/// Document-coordinate line a section top has to cross to become active.
pub fn trigger_line(scroll_y: f64, config: &NavConfig) -> f64 {
    scroll_y + config.navbar_height + config.lead_in
}

/// Offset-driven resolution over `sections`: the last one in document order
/// whose top is at or above `trigger_line`, or the first one when none
/// qualifies. `None` only for an empty slice.
///
/// `top_of` measures a section's top edge; `None` means the element is not in
/// the document and the section never qualifies.
pub fn resolve_by_offset<F>(sections: &[Section], trigger_line: f64, top_of: F) -> Option<&'static str>
where
    F: Fn(&str) -> Option<f64>,
{
    let mut active = sections.first()?.id;
    for section in sections {
        let top = top_of(section.id).unwrap_or(f64::INFINITY);
        if top <= trigger_line {
            active = section.id;
        }
    }
    Some(active)
}

/// Visibility-driven resolution: the latest candidate wins as long as it names
/// a registered section.
pub fn resolve_by_visibility(registry: &SectionRegistry, current: &'static str, candidate: &str) -> &'static str {
    registry.get(candidate).map_or(current, |section| section.id)
}

pub fn chrome_visible(scroll_y: f64, config: &NavConfig) -> bool {
    scroll_y > config.chrome_threshold
}

pub fn navbar_scrolled(scroll_y: f64, config: &NavConfig) -> bool {
    scroll_y > config.scrolled_threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::section::{COUNTRIES, CTA, HERO, LEARN, MISSION};
    use std::collections::HashMap;

    fn evenly_spaced() -> (SectionRegistry, HashMap<&'static str, f64>) {
        let registry = SectionRegistry::landing();
        let tops = registry
            .ids()
            .into_iter()
            .zip([0.0, 800.0, 1600.0, 2400.0, 3200.0])
            .collect();
        (registry, tops)
    }

    #[test]
    fn trigger_line_adds_navbar_and_lead_in() {
        let config = NavConfig::default();
        assert_eq!(trigger_line(750.0, &config), 824.0);
        assert_eq!(trigger_line(1530.0, &config), 1604.0);
    }

    #[test]
    fn resolves_evenly_spaced_sections() {
        let (registry, tops) = evenly_spaced();
        let config = NavConfig::default();
        let top_of = |id: &str| tops.get(id).copied();

        assert_eq!(resolve_by_offset(registry.sections(), trigger_line(750.0, &config), top_of), Some(LEARN));
        assert_eq!(resolve_by_offset(registry.sections(), trigger_line(1530.0, &config), top_of), Some(COUNTRIES));
        assert_eq!(resolve_by_offset(registry.sections(), trigger_line(5000.0, &config), top_of), Some(CTA));
    }

    #[test]
    fn section_top_exactly_on_the_line_is_active() {
        let (registry, tops) = evenly_spaced();
        assert_eq!(resolve_by_offset(registry.sections(), 2400.0, |id| tops.get(id).copied()), Some(MISSION));
        assert_eq!(resolve_by_offset(registry.sections(), 2399.5, |id| tops.get(id).copied()), Some(COUNTRIES));
    }

    #[test]
    fn falls_back_to_first_section_above_every_top() {
        let registry = SectionRegistry::landing();
        let tops: HashMap<&str, f64> = registry
            .ids()
            .into_iter()
            .zip([300.0, 900.0, 1500.0, 2100.0, 2700.0])
            .collect();
        for line in [-50.0, 0.0, 120.0, 299.0] {
            assert_eq!(resolve_by_offset(registry.sections(), line, |id| tops.get(id).copied()), Some(HERO));
        }
    }

    #[test]
    fn resolution_never_moves_backwards_as_the_line_advances() {
        let (registry, tops) = evenly_spaced();
        let mut previous = 0;
        for step in 0..500 {
            let line = f64::from(step) * 9.5 - 200.0;
            let id = resolve_by_offset(registry.sections(), line, |id| tops.get(id).copied()).unwrap();
            let index = registry.position(id).unwrap();
            assert!(index >= previous, "line {line} moved back to {id}");
            previous = index;
        }
        assert_eq!(previous, 4);
    }

    #[test]
    fn repeated_resolution_is_stable() {
        let (registry, tops) = evenly_spaced();
        let first = resolve_by_offset(registry.sections(), 1700.0, |id| tops.get(id).copied());
        let second = resolve_by_offset(registry.sections(), 1700.0, |id| tops.get(id).copied());
        assert_eq!(first, second);
    }

    #[test]
    fn missing_elements_never_qualify() {
        let (registry, mut tops) = evenly_spaced();
        tops.remove(MISSION);
        tops.remove(CTA);
        assert_eq!(resolve_by_offset(registry.sections(), 9000.0, |id| tops.get(id).copied()), Some(COUNTRIES));

        assert_eq!(resolve_by_offset(registry.sections(), 9000.0, |_| None), Some(HERO));
    }

    #[test]
    fn navbar_links_stop_at_the_last_linked_section() {
        let (registry, tops) = evenly_spaced();
        let top_of = |id: &str| tops.get(id).copied();
        assert_eq!(resolve_by_offset(registry.navbar_links(), 3300.0, top_of), Some(MISSION));
        assert_eq!(resolve_by_offset(registry.sections(), 3300.0, top_of), Some(CTA));
        assert_eq!(resolve_by_offset(&[], 3300.0, top_of), None);
    }

    #[test]
    fn visibility_candidate_wins_only_when_registered() {
        let registry = SectionRegistry::landing();
        assert_eq!(resolve_by_visibility(&registry, HERO, MISSION), MISSION);
        assert_eq!(resolve_by_visibility(&registry, MISSION, LEARN), LEARN);
        assert_eq!(resolve_by_visibility(&registry, LEARN, "section-pricing"), LEARN);

        let custom = SectionRegistry::new(vec![Section::new("top", "Top")]).unwrap();
        assert_eq!(resolve_by_visibility(&custom, "top", HERO), "top");
    }

    #[test]
    fn chrome_threshold_is_strict() {
        let config = NavConfig::default();
        for d in [0.0, 60.0, 119.0, 120.0] {
            assert!(!chrome_visible(d, &config), "shown at {d}");
        }
        assert!(chrome_visible(120.5, &config));
        assert!(chrome_visible(121.0, &config));
    }

    #[test]
    fn navbar_turns_solid_past_twenty_pixels() {
        let config = NavConfig::default();
        assert!(!navbar_scrolled(20.0, &config));
        assert!(navbar_scrolled(21.0, &config));
    }
}
