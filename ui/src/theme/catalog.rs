use crate::error::{AppError, AppResult};
use crate::theme::types::DesignSystem;
use crate::theme::validation::{CatalogValidationError, DesignSystemValidator};
use crate::validation::Validator;
use std::collections::HashSet;

/// The production design systems, embedded at compile time.
///
/// Order matters: the first entry is the default system a fresh session
/// starts on.
const EMBEDDED_SYSTEMS: &[&str] = &[
    include_str!("../../themes/sovereign-gold.toml"),
    include_str!("../../themes/neural-emerald.toml"),
    include_str!("../../themes/obsidian-stealth.toml"),
];

/// Immutable, ordered collection of design systems.
///
/// Loaded once at startup and owned by the application model; every entry
/// has passed [`DesignSystemValidator`] and the catalog-level invariants
/// (non-empty, unique ids) before the TUI starts.
#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    systems: Vec<DesignSystem>,
}

impl ThemeCatalog {
    /// Load and validate the embedded catalog. Any defect aborts startup.
    pub fn load_embedded() -> AppResult<Self> {
        let mut systems = Vec::with_capacity(EMBEDDED_SYSTEMS.len());

        for document in EMBEDDED_SYSTEMS {
            let system: DesignSystem = toml::from_str(document).map_err(|e| {
                AppError::Config(format!("Failed to parse embedded design system: {e}"))
            })?;
            systems.push(system);
        }

        let catalog = Self::from_systems(systems)?;
        log::info!(
            "Design-system catalog loaded: {}",
            catalog
                .systems
                .iter()
                .map(|s| s.id())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(catalog)
    }

    /// Build a catalog from already-parsed systems, enforcing the catalog
    /// invariants.
    pub fn from_systems(systems: Vec<DesignSystem>) -> Result<Self, CatalogValidationError> {
        if systems.is_empty() {
            return Err(CatalogValidationError::EmptyCatalog);
        }

        let validator = DesignSystemValidator;
        let mut seen = HashSet::new();
        for system in &systems {
            validator.validate(system)?;
            if !seen.insert(system.id().to_string()) {
                return Err(CatalogValidationError::DuplicateId {
                    id: system.id().to_string(),
                });
            }
        }

        Ok(Self { systems })
    }

    /// The system a fresh session starts on: catalog index 0.
    pub fn default_system(&self) -> &DesignSystem {
        // from_systems rejects an empty catalog
        &self.systems[0]
    }

    pub fn get(&self, id: &str) -> Option<&DesignSystem> {
        self.systems.iter().find(|s| s.id() == id)
    }

    pub fn systems(&self) -> &[DesignSystem] {
        &self.systems
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.systems.iter().map(|s| s.id()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads_and_validates() {
        let catalog = ThemeCatalog::load_embedded().expect("embedded catalog must be valid");
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.ids(),
            vec!["sovereign-gold", "neural-emerald", "obsidian-stealth"]
        );
    }

    #[test]
    fn test_default_system_is_first_entry() {
        let catalog = ThemeCatalog::load_embedded().unwrap();
        assert_eq!(catalog.default_system().id(), "sovereign-gold");
        assert_eq!(catalog.default_system().name(), "Sovereign Azure");
    }

    #[test]
    fn test_get_by_id() {
        let catalog = ThemeCatalog::load_embedded().unwrap();
        assert!(catalog.get("neural-emerald").is_some());
        assert!(catalog.get("no-such-system").is_none());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let catalog = ThemeCatalog::load_embedded().unwrap();
        let mut systems = catalog.systems().to_vec();
        systems.push(systems[0].clone());

        let result = ThemeCatalog::from_systems(systems);
        assert!(matches!(
            result,
            Err(CatalogValidationError::DuplicateId { .. })
        ));
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        let result = ThemeCatalog::from_systems(Vec::new());
        assert!(matches!(result, Err(CatalogValidationError::EmptyCatalog)));
    }

    #[test]
    fn test_malformed_color_token_is_rejected() {
        let catalog = ThemeCatalog::load_embedded().unwrap();
        let mut systems = catalog.systems().to_vec();
        systems[0].colors.bg_primary = "#02061".to_string();

        let result = ThemeCatalog::from_systems(systems);
        assert!(matches!(
            result,
            Err(CatalogValidationError::InvalidColorToken { .. })
        ));
    }
}
