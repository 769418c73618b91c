use crate::error::AppError;
use crate::theme::types::{DesignSystem, Palette};
use crate::validation::Validator;

const NAMED_COLORS: &[&str] = &[
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "white",
    "gray",
    "grey",
    "darkgray",
    "darkgrey",
    "lightred",
    "lightgreen",
    "lightyellow",
    "lightblue",
    "lightmagenta",
    "lightcyan",
    "reset",
];

/// Validation errors specific to the design-system catalog.
///
/// The catalog is static, embedded data, so every one of these is a
/// data-entry defect: they are raised once at startup and abort the launch.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogValidationError {
    #[error("Invalid design-system id '{id}': {reason}")]
    InvalidSystemId { id: String, reason: String },

    #[error("Design system '{id}' is missing metadata field '{field}'")]
    MissingMetadata { id: String, field: String },

    #[error("Design system '{id}' has an invalid color token in slot '{slot}': '{token}'")]
    InvalidColorToken {
        id: String,
        slot: String,
        token: String,
    },

    #[error(
        "Design system '{id}' slot '{slot}' holds '{token}', but alpha compositing requires a #rrggbb token"
    )]
    NotCompositable {
        id: String,
        slot: String,
        token: String,
    },

    #[error("Duplicate design-system id '{id}' in catalog")]
    DuplicateId { id: String },

    #[error("The design-system catalog is empty")]
    EmptyCatalog,
}

impl From<CatalogValidationError> for AppError {
    fn from(error: CatalogValidationError) -> Self {
        AppError::Config(error.to_string())
    }
}

/// Validator for design-system ids
pub struct SystemIdValidator;

impl Validator<str> for SystemIdValidator {
    type Error = CatalogValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if input.is_empty() {
            return Err(CatalogValidationError::InvalidSystemId {
                id: input.to_string(),
                reason: "id cannot be empty".to_string(),
            });
        }

        if input.len() > 50 {
            return Err(CatalogValidationError::InvalidSystemId {
                id: input.to_string(),
                reason: "id too long (max 50 characters)".to_string(),
            });
        }

        if !input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(CatalogValidationError::InvalidSystemId {
                id: input.to_string(),
                reason: "id contains invalid characters (only alphanumeric, hyphens, and underscores allowed)"
                    .to_string(),
            });
        }

        if input.starts_with('-')
            || input.starts_with('_')
            || input.ends_with('-')
            || input.ends_with('_')
        {
            return Err(CatalogValidationError::InvalidSystemId {
                id: input.to_string(),
                reason: "id cannot start or end with hyphens or underscores".to_string(),
            });
        }

        Ok(())
    }
}

/// Validator for a single color token: a standard color name or `#rrggbb`.
pub struct ColorTokenValidator;

impl ColorTokenValidator {
    fn is_strict_hex(token: &str) -> bool {
        token.len() == 7
            && token.starts_with('#')
            && token[1..].chars().all(|c| c.is_ascii_hexdigit())
    }
}

impl Validator<str> for ColorTokenValidator {
    type Error = ();

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if NAMED_COLORS.contains(&input.to_lowercase().as_str()) {
            return Ok(());
        }
        if Self::is_strict_hex(input) {
            return Ok(());
        }
        Err(())
    }
}

/// Validator for a loaded design system.
///
/// All seven palette slots must hold a valid token; the slots the style
/// deriver alpha-composites (`bg_primary`, `bg_secondary`, `border`) must be
/// 6-hex-digit tokens, because the compositing convention appends a
/// two-hex-digit suffix.
pub struct DesignSystemValidator;

impl DesignSystemValidator {
    fn palette_slots(palette: &Palette) -> [(&'static str, &str); 7] {
        [
            ("bg_primary", palette.bg_primary.as_str()),
            ("bg_secondary", palette.bg_secondary.as_str()),
            ("text_primary", palette.text_primary.as_str()),
            ("text_secondary", palette.text_secondary.as_str()),
            ("accent", palette.accent.as_str()),
            ("accent_secondary", palette.accent_secondary.as_str()),
            ("border", palette.border.as_str()),
        ]
    }

    const COMPOSITED_SLOTS: &'static [&'static str] = &["bg_primary", "bg_secondary", "border"];
}

impl Validator<DesignSystem> for DesignSystemValidator {
    type Error = CatalogValidationError;

    fn validate(&self, input: &DesignSystem) -> Result<(), Self::Error> {
        SystemIdValidator.validate(input.id())?;

        if input.metadata.name.is_empty() {
            return Err(CatalogValidationError::MissingMetadata {
                id: input.id().to_string(),
                field: "name".to_string(),
            });
        }

        if input.metadata.description.is_empty() {
            return Err(CatalogValidationError::MissingMetadata {
                id: input.id().to_string(),
                field: "description".to_string(),
            });
        }

        if input.surface.border_radius.is_empty() {
            return Err(CatalogValidationError::MissingMetadata {
                id: input.id().to_string(),
                field: "border_radius".to_string(),
            });
        }

        let token_validator = ColorTokenValidator;
        for (slot, token) in Self::palette_slots(&input.colors) {
            if token_validator.validate(token).is_err() {
                return Err(CatalogValidationError::InvalidColorToken {
                    id: input.id().to_string(),
                    slot: slot.to_string(),
                    token: token.to_string(),
                });
            }

            if Self::COMPOSITED_SLOTS.contains(&slot) && !ColorTokenValidator::is_strict_hex(token)
            {
                return Err(CatalogValidationError::NotCompositable {
                    id: input.id().to_string(),
                    slot: slot.to_string(),
                    token: token.to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_id_validator() {
        let validator = SystemIdValidator;

        assert!(validator.validate("sovereign-gold").is_ok());
        assert!(validator.validate("neural_emerald").is_ok());
        assert!(validator.validate("theme123").is_ok());

        assert!(validator.validate("").is_err());
        assert!(validator.validate("_invalid").is_err());
        assert!(validator.validate("invalid-").is_err());
        assert!(validator.validate("invalid@id").is_err());
        assert!(validator.validate(&"a".repeat(51)).is_err());
    }

    #[test]
    fn test_color_token_validator() {
        let validator = ColorTokenValidator;

        assert!(validator.validate("#d4af37").is_ok());
        assert!(validator.validate("#000000").is_ok());
        assert!(validator.validate("white").is_ok());
        assert!(validator.validate("darkgrey").is_ok());

        assert!(validator.validate("").is_err());
        assert!(validator.validate("#d4af").is_err());
        assert!(validator.validate("#d4af3780").is_err()); // catalog tokens are base colors
        assert!(validator.validate("d4af37").is_err());
        assert!(validator.validate("#d4af3z").is_err());
    }
}
