// crates/waypoint-jira/src/models.rs
// ============================================================================
// Module: Jira Wire Models
// Description: Record structs mirroring the tracker's REST JSON.
// Purpose: Decode only the fields the suite asserts on.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! These are value bags, not domain types. Unknown fields are ignored so the
//! suite stays insensitive to tracker-side additions.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Wire Models
// ============================================================================

/// A tracker project as returned by the project lookup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JiraProject {
    /// Opaque project identifier.
    pub id: String,
    /// Short project key used in JQL.
    pub key: String,
    /// Human-readable project name.
    pub name: String,
}

/// A tracker issue type as returned by the issue-type lookup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JiraIssueType {
    /// Opaque issue-type identifier.
    pub id: String,
    /// Localized issue-type name.
    pub name: String,
    /// Untranslated name, present on cloud instances.
    #[serde(rename = "untranslatedName", default)]
    pub untranslated_name: Option<String>,
    /// Whether this type is a subtask type.
    #[serde(default)]
    pub subtask: bool,
}

impl JiraIssueType {
    /// Returns the untranslated name, falling back to the localized one.
    #[must_use]
    pub fn wire_name(&self) -> &str {
        self.untranslated_name.as_deref().unwrap_or(&self.name)
    }
}

/// The asserted subset of an issue's fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JiraIssueFields {
    /// Issue summary line; the planner writes the application name into it.
    pub summary: String,
}

/// A tracker issue as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JiraIssue {
    /// Opaque issue identifier, used for deletion.
    pub id: String,
    /// Human-readable issue key.
    pub key: String,
    /// Asserted field subset.
    pub fields: JiraIssueFields,
}

/// Envelope for JQL search responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct SearchPage {
    /// Issues on this page.
    pub issues: Vec<JiraIssue>,
}
