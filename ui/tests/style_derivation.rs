use hlal::theme::ThemeCatalog;
use hlal::theme::styles::{
    self, BORDER_ALPHA_SUFFIX, CARD_ALPHA_SUFFIX, NAV_ALPHA_SUFFIX, compose_alpha,
};

#[test]
fn derivation_is_deterministic_for_every_system_and_surface() {
    let catalog = ThemeCatalog::load_embedded().unwrap();
    for system in catalog.systems() {
        assert_eq!(styles::page_style(system), styles::page_style(system));
        assert_eq!(styles::card_style(system), styles::card_style(system));
        assert_eq!(styles::nav_style(system), styles::nav_style(system));
        assert_eq!(
            styles::accent_text_style(system),
            styles::accent_text_style(system)
        );
    }
}

#[test]
fn card_compositing_appends_the_fixed_alpha_suffix() {
    let catalog = ThemeCatalog::load_embedded().unwrap();
    let mut system = catalog.default_system().clone();
    system.colors.bg_secondary = "#0f172a".to_string();

    system.surface.glassmorphism = true;
    let card = styles::card_style(&system);
    assert_eq!(card.background, "#0f172a80");
    assert!(card.blur);

    system.surface.glassmorphism = false;
    let card = styles::card_style(&system);
    assert_eq!(card.background, "#0f172a");
    assert!(!card.blur);
}

#[test]
fn page_style_uses_primary_slots() {
    let catalog = ThemeCatalog::load_embedded().unwrap();
    for system in catalog.systems() {
        let page = styles::page_style(system);
        assert_eq!(page.background, system.colors.bg_primary);
        assert_eq!(page.text, system.colors.text_primary);
    }
}

#[test]
fn nav_blurs_for_every_system_and_composites_at_eighty_percent() {
    let catalog = ThemeCatalog::load_embedded().unwrap();
    for system in catalog.systems() {
        let nav = styles::nav_style(system);
        assert!(nav.blur, "{}: navigation always blurs", system.id());
        assert_eq!(
            nav.background,
            compose_alpha(&system.colors.bg_primary, NAV_ALPHA_SUFFIX)
        );
        assert_eq!(
            nav.border,
            compose_alpha(&system.colors.border, BORDER_ALPHA_SUFFIX)
        );
    }
}

#[test]
fn cta_style_is_identical_across_all_catalog_systems() {
    let catalog = ThemeCatalog::load_embedded().unwrap();
    let reference = styles::cta_style();

    for system in catalog.systems() {
        // Activating a different system changes every derived surface
        // except the call-to-action.
        let _ = styles::card_style(system);
        assert_eq!(styles::cta_style(), reference);
    }

    assert_eq!(reference.gradient_from, "#064e3b");
    assert_eq!(reference.gradient_to, "#047857");
    assert_eq!(reference.border, "#059669");
    assert_eq!(reference.text, "#ffffff");
}

#[test]
fn accent_text_follows_the_accent_slot() {
    let catalog = ThemeCatalog::load_embedded().unwrap();
    for system in catalog.systems() {
        assert_eq!(
            styles::accent_text_style(system).text,
            system.colors.accent
        );
    }
}

#[test]
fn alpha_suffixes_are_two_hex_digits() {
    for suffix in [CARD_ALPHA_SUFFIX, NAV_ALPHA_SUFFIX, BORDER_ALPHA_SUFFIX] {
        assert_eq!(suffix.len(), 2);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
