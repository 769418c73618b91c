use claims::{assert_err, assert_ok};
use hlal::theme::ThemeCatalog;
use hlal::theme::catalog;
use std::collections::HashSet;

#[test]
fn catalog_is_non_empty_with_unique_ids() {
    let catalog = assert_ok!(ThemeCatalog::load_embedded());
    assert!(!catalog.is_empty());

    let ids: HashSet<_> = catalog.systems().iter().map(|s| s.id()).collect();
    assert_eq!(ids.len(), catalog.len(), "design-system ids must be unique");
}

#[test]
fn catalog_ships_the_three_production_systems_in_order() {
    let catalog = ThemeCatalog::load_embedded().unwrap();
    assert_eq!(
        catalog.ids(),
        vec!["sovereign-gold", "neural-emerald", "obsidian-stealth"]
    );
    assert_eq!(catalog.default_system().id(), "sovereign-gold");
}

#[test]
fn every_system_carries_a_complete_palette() {
    let catalog = ThemeCatalog::load_embedded().unwrap();
    for system in catalog.systems() {
        for token in [
            &system.colors.bg_primary,
            &system.colors.bg_secondary,
            &system.colors.text_primary,
            &system.colors.text_secondary,
            &system.colors.accent,
            &system.colors.accent_secondary,
            &system.colors.border,
        ] {
            assert!(
                token.starts_with('#') && token.len() == 7,
                "{}: token '{token}' is not a 6-hex-digit color",
                system.id()
            );
        }
        assert!(!system.name().is_empty());
        assert!(!system.description().is_empty());
        assert!(!system.typography.font_heading.is_empty());
        assert!(!system.typography.font_body.is_empty());
        assert_eq!(system.surface.border_radius, "2px");
    }
}

#[test]
fn catalog_rejects_duplicates_and_emptiness() {
    let loaded = ThemeCatalog::load_embedded().unwrap();

    let mut doubled = loaded.systems().to_vec();
    doubled.push(doubled[1].clone());
    assert_err!(catalog::ThemeCatalog::from_systems(doubled));

    assert_err!(catalog::ThemeCatalog::from_systems(Vec::new()));
}

#[test]
fn catalog_rejects_uncompositable_background_tokens() {
    let loaded = ThemeCatalog::load_embedded().unwrap();
    let mut systems = loaded.systems().to_vec();
    // A named color is a legal token elsewhere, but the composited slots
    // need raw hex for the alpha-suffix convention.
    systems[0].colors.bg_secondary = "black".to_string();
    assert_err!(catalog::ThemeCatalog::from_systems(systems));
}
