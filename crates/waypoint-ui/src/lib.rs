// crates/waypoint-ui/src/lib.rs
// ============================================================================
// Module: Waypoint UI Page Objects
// Description: Page-object models and element helpers for the planner UI.
// Purpose: Wrap locators and UI actions into typed methods over a WebDriver.
// Dependencies: thirtyfour, thiserror, time, tokio, waypoint-config
// ============================================================================

//! ## Overview
//! One page-object model per UI entity (application, migration wave,
//! credential, tracker connection, auth-console user), each wrapping element
//! locators and UI actions into method calls over a shared [`Session`].
//! Every element lookup auto-waits with a bounded timeout; there are no
//! fixed-duration sleeps anywhere in this crate.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod controls;
mod error;
pub mod models;
mod session;
pub mod views;
pub mod waits;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use error::UiError;
pub use session::Section;
pub use session::Session;
