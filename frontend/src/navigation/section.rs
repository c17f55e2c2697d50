use std::collections::HashSet;

use thiserror::Error;

/// A named region of the landing page, addressed by its element id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

impl Section {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

pub const HERO: &str = "section-hero";
pub const LEARN: &str = "section-learn";
pub const COUNTRIES: &str = "section-countries";
pub const MISSION: &str = "section-mission";
pub const CTA: &str = "section-cta";

// document order, top to bottom
const LANDING_SECTIONS: [Section; 5] = [
    Section::new(HERO, "Home"),
    Section::new(LEARN, "Learn"),
    Section::new(COUNTRIES, "Countries"),
    Section::new(MISSION, "Mission"),
    Section::new(CTA, "Start"),
];

// the top bar leaves the call to action to its own button
const NAVBAR_LINK_COUNT: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("a section registry needs at least one section")]
    Empty,
    #[error("section id {0:?} is registered twice")]
    DuplicateId(&'static str),
}

/// Ordered, non-empty set of sections with unique ids.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    pub fn new(sections: Vec<Section>) -> Result<Self, RegistryError> {
        if sections.is_empty() {
            return Err(RegistryError::Empty);
        }
        let mut seen = HashSet::new();
        for section in &sections {
            if !seen.insert(section.id) {
                return Err(RegistryError::DuplicateId(section.id));
            }
        }
        Ok(Self { sections })
    }

    /// The five sections of the SkillSwap landing page.
    pub fn landing() -> Self {
        Self {
            sections: LANDING_SECTIONS.to_vec(),
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Links shown in the sticky top bar.
    pub fn navbar_links(&self) -> &[Section] {
        &self.sections[..self.sections.len().min(NAVBAR_LINK_COUNT)]
    }

    pub fn first_id(&self) -> &'static str {
        self.sections[0].id
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.sections.iter().map(|section| section.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_registry_passes_validation() {
        let landing = SectionRegistry::landing();
        assert_eq!(SectionRegistry::new(LANDING_SECTIONS.to_vec()), Ok(landing.clone()));
        assert_eq!(landing.first_id(), HERO);
        assert_eq!(landing.ids(), vec![HERO, LEARN, COUNTRIES, MISSION, CTA]);
    }

    #[test]
    fn navbar_shows_everything_but_the_call_to_action() {
        let landing = SectionRegistry::landing();
        let labels: Vec<_> = landing.navbar_links().iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Home", "Learn", "Countries", "Mission"]);

        let short = SectionRegistry::new(vec![Section::new("a", "A")]).unwrap();
        assert_eq!(short.navbar_links().len(), 1);
    }

    #[test]
    fn rejects_empty_and_duplicate_registries() {
        assert_eq!(SectionRegistry::new(Vec::new()), Err(RegistryError::Empty));
        assert_eq!(
            SectionRegistry::new(vec![Section::new("a", "A"), Section::new("a", "Again")]),
            Err(RegistryError::DuplicateId("a"))
        );
    }

    #[test]
    fn lookups_follow_document_order() {
        let landing = SectionRegistry::landing();
        assert_eq!(landing.position(COUNTRIES), Some(2));
        assert_eq!(landing.get(CTA).map(|s| s.label), Some("Start"));
        assert!(!landing.contains("section-pricing"));
        assert_eq!(landing.position("section-pricing"), None);
    }
}
