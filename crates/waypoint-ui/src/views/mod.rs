// crates/waypoint-ui/src/views/mod.rs
// ============================================================================
// Module: View Locators
// Description: Per-screen locator constants for the planner UI.
// Purpose: Keep selectors in one place so page objects stay readable.
// Dependencies: none
// ============================================================================

//! ## Overview
//! One module per logical screen. Selectors are CSS strings; page objects
//! wrap them in `By::Css` (or XPath for text matching) at the call site.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod application;
pub mod common;
pub mod credentials;
pub mod jira;
pub mod keycloak;
pub mod login;
pub mod migration_wave;
pub mod navigation;
