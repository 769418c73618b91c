//! # Application Module
//!
//! Core application logic for the HLAL terminal site. The application
//! follows a model-view-update architecture:
//! - **Model** - the owned [`state::SiteState`] plus the mounted components
//! - **View** - layout and rendering of the active page, picker and chrome
//! - **Updates** - message handling and state transitions
//!
//! ## Core Components
//!
//! - [`model`] - application model and the page router
//! - [`state`] - the site state holder (active system, page, picker flag)
//! - [`view`] - UI rendering and layout logic
//! - [`updates`] - message processing and state updates
//! - [`remount`] - component remounting when the design system changes

/// Core application model and the page router
pub mod model;
/// Component remounting and view management
pub mod remount;
/// The site state holder
pub mod state;
/// Message dispatch
pub mod update;
/// Message processing and state update logic
pub mod updates;
/// UI rendering and view composition
pub mod view;
