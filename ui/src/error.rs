use std::fmt::Display;

/// Application-wide error types for the HLAL terminal user interface.
///
/// Every fault in this application is non-fatal by design except startup
/// configuration problems: the design-system catalog is static data, so a
/// malformed catalog is reported loudly before the TUI starts instead of
/// being recovered from at run time.
///
/// # Error Categories
///
/// - [`AppError::Component`] - UI component lifecycle and rendering errors
/// - [`AppError::State`] - Application state management issues
/// - [`AppError::Config`] - Configuration and catalog loading/validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// UI component lifecycle and rendering errors.
    ///
    /// These should generally not disrupt the overall application flow but
    /// are logged for debugging.
    Component(String),

    /// Application state management issues.
    ///
    /// Problems with state consistency or state transitions between
    /// components.
    State(String),

    /// Configuration and catalog loading/validation errors.
    ///
    /// Covers the config file, environment overrides, and the embedded
    /// design-system catalog. Catalog errors are startup-fatal.
    Config(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Component(msg) => write!(f, "Component Error: {msg}"),
            AppError::State(msg) => write!(f, "State Error: {msg}"),
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Last-resort error handling for when the UI cannot display the error
/// itself (e.g. terminal bridge failures during startup or shutdown).
pub fn handle_error(e: AppError) {
    log::error!("Unrecoverable error: {e}");
    eprintln!("{e}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_category() {
        let e = AppError::Config("missing color token".to_string());
        assert_eq!(e.to_string(), "Configuration Error: missing color token");

        let e = AppError::Component("mount failed".to_string());
        assert!(e.to_string().starts_with("Component Error:"));
    }
}
