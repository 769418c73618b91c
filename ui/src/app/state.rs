use crate::theme::{DesignSystem, ThemeCatalog};

/// The three site pages. The set is closed: an out-of-range page cannot be
/// expressed, so the router needs no fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Legal,
    Profile,
}

impl Page {
    pub fn all() -> [Page; 3] {
        [Page::Home, Page::Legal, Page::Profile]
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::Home
    }
}

/// Process-lifetime UI state: the active design system, the active page and
/// the picker-panel visibility flag. Nothing here survives a restart.
///
/// The state is owned by the application model and passed explicitly to
/// whoever renders from it; there is deliberately no global access.
///
/// Any page may navigate to any page. The site's affordances only exercise
/// home→legal, home→profile and back, but the transition graph is fully
/// connected: forbidding the unused pairs would buy nothing and cost a
/// guard.
#[derive(Debug, Clone)]
pub struct SiteState {
    current_system: DesignSystem,
    current_page: Page,
    selector_open: bool,
}

impl SiteState {
    /// Fresh state: catalog entry 0, home page, picker closed.
    pub fn new(catalog: &ThemeCatalog) -> Self {
        Self {
            current_system: catalog.default_system().clone(),
            current_page: Page::Home,
            selector_open: false,
        }
    }

    pub fn current_system(&self) -> &DesignSystem {
        &self.current_system
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn is_selector_open(&self) -> bool {
        self.selector_open
    }

    /// Replace the active design system with the catalog entry of the given
    /// id. An id absent from the catalog is ignored and the state is left
    /// unchanged; returns whether the system was replaced.
    pub fn select_system(&mut self, catalog: &ThemeCatalog, id: &str) -> bool {
        match catalog.get(id) {
            Some(system) => {
                self.current_system = system.clone();
                true
            }
            None => {
                log::warn!("Ignoring unknown design-system id '{id}'");
                false
            }
        }
    }

    /// Unconditional page replacement.
    pub fn navigate(&mut self, page: Page) {
        self.current_page = page;
    }

    pub fn toggle_selector(&mut self) {
        self.selector_open = !self.selector_open;
    }

    pub fn set_selector_open(&mut self, open: bool) {
        self.selector_open = open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> (ThemeCatalog, SiteState) {
        let catalog = ThemeCatalog::load_embedded().unwrap();
        let state = SiteState::new(&catalog);
        (catalog, state)
    }

    #[test]
    fn test_initial_state() {
        let (catalog, state) = fresh();
        assert_eq!(state.current_page(), Page::Home);
        assert_eq!(state.current_system().id(), catalog.default_system().id());
        assert!(!state.is_selector_open());
    }

    #[test]
    fn test_select_system_round_trips_for_every_catalog_entry() {
        let (catalog, mut state) = fresh();
        for system in catalog.systems() {
            assert!(state.select_system(&catalog, system.id()));
            assert_eq!(state.current_system(), system);
        }
    }

    #[test]
    fn test_select_unknown_system_is_ignored() {
        let (catalog, mut state) = fresh();
        let before = state.current_system().clone();
        assert!(!state.select_system(&catalog, "vaporwave-sunset"));
        assert_eq!(state.current_system(), &before);
    }

    #[test]
    fn test_navigate_round_trips_from_every_starting_page() {
        let (_, mut state) = fresh();
        for from in Page::all() {
            for to in Page::all() {
                state.navigate(from);
                state.navigate(to);
                assert_eq!(state.current_page(), to);
            }
        }
    }

    #[test]
    fn test_toggle_selector_is_an_involution() {
        let (_, mut state) = fresh();
        let initial = state.is_selector_open();
        state.toggle_selector();
        assert_ne!(state.is_selector_open(), initial);
        state.toggle_selector();
        assert_eq!(state.is_selector_open(), initial);
    }

    #[test]
    fn test_navigation_and_theme_are_independent() {
        let (catalog, mut state) = fresh();
        assert_eq!(state.current_system().id(), "sovereign-gold");

        state.navigate(Page::Legal);
        assert_eq!(state.current_page(), Page::Legal);
        assert_eq!(state.current_system().id(), "sovereign-gold");

        let second = catalog.systems()[1].id().to_string();
        assert!(state.select_system(&catalog, &second));
        assert_eq!(state.current_system().id(), second);
        assert_eq!(state.current_page(), Page::Legal);
    }
}
