// crates/waypoint-ui/src/models/mod.rs
// ============================================================================
// Module: Page-Object Models
// Description: One model per UI entity of the planner and auth console.
// Purpose: Wrap create/edit/delete/export flows into typed methods.
// Dependencies: crate::controls, crate::session, crate::views
// ============================================================================

//! ## Overview
//! Models are plain value bags mirroring UI form fields. Methods drive the
//! browser through a [`crate::Session`]; they hold no driver state of their
//! own, so a model can outlive the session that created it.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod application;
mod jira;
mod jira_credential;
mod migration_wave;
mod user;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use application::Application;
pub use jira::Jira;
pub use jira::JiraKind;
pub use jira_credential::JiraCredential;
pub use migration_wave::MigrationWave;
pub use user::User;
