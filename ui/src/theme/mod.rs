//! # Design-System Module
//!
//! Theming for the HLAL terminal site. A design system is a named, complete
//! bundle of visual parameters (colors, font tokens, radius, glassmorphism
//! flag) that can be swapped as a unit at run time without touching content
//! or navigation.
//!
//! ## Architecture
//!
//! - **[`ThemeCatalog`]** - the immutable, ordered set of design systems,
//!   embedded at compile time and validated at startup
//! - **[`types::DesignSystem`]** - one complete visual configuration
//! - **[`styles`]** - pure derivation of surface styles (page, card,
//!   navigation, accent, call-to-action) from the active system
//! - **Validation** - startup checks for ids, color tokens, and catalog
//!   invariants
//!
//! ## Shipped Design Systems
//!
//! - **Sovereign Azure** (`sovereign-gold`) - midnight blue with gold,
//!   the default
//! - **Neural Emerald** (`neural-emerald`) - near-black green with emerald
//!   accents
//! - **Obsidian Stealth** (`obsidian-stealth`) - pure black minimalism
//!
//! There is no global theme state: the active [`types::DesignSystem`] lives
//! in the application model and is handed to components when they are
//! (re)mounted.

pub mod catalog;
pub mod styles;
pub mod types;
pub mod validation;

pub use catalog::ThemeCatalog;
pub use types::DesignSystem;
