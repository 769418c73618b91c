use hlal::app::state::{Page, SiteState};
use hlal::theme::ThemeCatalog;

fn fresh() -> (ThemeCatalog, SiteState) {
    let catalog = ThemeCatalog::load_embedded().unwrap();
    let state = SiteState::new(&catalog);
    (catalog, state)
}

#[test]
fn initial_state_matches_contract() {
    let (catalog, state) = fresh();
    assert_eq!(state.current_page(), Page::Home);
    assert_eq!(state.current_system(), catalog.default_system());
    assert!(!state.is_selector_open());
}

#[test]
fn select_system_round_trips_for_every_catalog_entry() {
    let (catalog, mut state) = fresh();
    for system in catalog.systems() {
        assert!(state.select_system(&catalog, system.id()));
        assert_eq!(state.current_system(), system);
    }
}

#[test]
fn full_transition_matrix_is_legal() {
    // All nine ordered pairs, not just the five the UI exercises.
    let (_, mut state) = fresh();
    for from in Page::all() {
        for to in Page::all() {
            state.navigate(from);
            assert_eq!(state.current_page(), from);
            state.navigate(to);
            assert_eq!(state.current_page(), to);
        }
    }
}

#[test]
fn selector_toggle_is_an_involution() {
    let (_, mut state) = fresh();
    for _ in 0..2 {
        let before = state.is_selector_open();
        state.toggle_selector();
        state.toggle_selector();
        assert_eq!(state.is_selector_open(), before);
        state.toggle_selector();
    }
}

#[test]
fn selector_flag_does_not_touch_domain_state() {
    let (catalog, mut state) = fresh();
    state.navigate(Page::Profile);
    state.select_system(&catalog, "obsidian-stealth");

    state.toggle_selector();
    state.set_selector_open(false);
    state.set_selector_open(true);

    assert_eq!(state.current_page(), Page::Profile);
    assert_eq!(state.current_system().id(), "obsidian-stealth");
}

#[test]
fn unknown_system_id_is_silently_rejected() {
    let (catalog, mut state) = fresh();
    let before = state.current_system().clone();

    assert!(!state.select_system(&catalog, ""));
    assert!(!state.select_system(&catalog, "SOVEREIGN-GOLD"));
    assert!(!state.select_system(&catalog, "not-in-catalog"));

    assert_eq!(state.current_system(), &before);
}

#[test]
fn navigation_and_theme_selection_are_independent() {
    // The end-to-end scenario: navigate, then re-theme.
    let (catalog, mut state) = fresh();
    assert_eq!(state.current_system().id(), "sovereign-gold");

    state.navigate(Page::Legal);
    assert_eq!(state.current_page(), Page::Legal);
    assert_eq!(
        state.current_system().id(),
        "sovereign-gold",
        "navigation must not affect the active design system"
    );

    let second = catalog.systems()[1].clone();
    assert!(state.select_system(&catalog, second.id()));
    assert_eq!(state.current_system().id(), second.id());
    assert_eq!(
        state.current_page(),
        Page::Legal,
        "theme change must not affect the current page"
    );
}
