// crates/waypoint-jira/src/lib.rs
// ============================================================================
// Module: Waypoint Jira Client
// Description: Thin REST client for the external issue tracker.
// Purpose: Look up projects and issue types, search issues, delete issues.
// Dependencies: reqwest, serde, thiserror, url
// ============================================================================

//! ## Overview
//! The suite never creates issues directly; the planner's export action does.
//! This client covers the read and cleanup surface only: project lookup,
//! issue-type lookup, JQL search, and issue deletion. Responses are decoded
//! into simple record structs mirroring the wire JSON.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod client;
mod error;
mod models;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use client::JiraApi;
pub use error::JiraError;
pub use models::JiraIssue;
pub use models::JiraIssueFields;
pub use models::JiraIssueType;
pub use models::JiraProject;
