//! # HLAL UI Library
//!
//! Terminal rendition of the HLAL (HumanLife : AI Logic) health-coaching
//! site. Three content pages (landing, legal disclosure, profile) and a
//! run-time design-system switcher that re-skins the whole interface
//! without touching content or navigation, built with Ratatui and tui-realm.
//!
//! ## Features
//!
//! - Three presentational pages driven by static copy
//! - Swappable design systems (colors, font tokens, radius, glassmorphism)
//! - Pure style derivation shared by all surfaces
//! - Design picker panel with live swatches
//! - External call-to-action link launched through the OS opener
//!
//! ## Modules
//!
//! - [`app`] - Main application logic and component orchestration
//! - [`components`] - UI components and message handling
//! - [`config`] - Configuration management
//! - [`content`] - Static page copy
//! - [`error`] - Error types
//! - [`logger`] - Logging configuration
//! - [`theme`] - Design-system catalog and style derivation
//! - [`validation`] - Input validation
//!
//! This library interface enables integration testing by providing access
//! to internal modules.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod logger;
pub mod theme;
pub mod validation;

// Re-export commonly used types for easier access in tests
pub use error::AppError;

// Re-export the Msg type that tests commonly need
pub use components::common::Msg;

// Re-export validation trait for broader use
pub use validation::Validator;
