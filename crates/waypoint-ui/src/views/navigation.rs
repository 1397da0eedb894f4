// crates/waypoint-ui/src/views/navigation.rs
// ============================================================================
// Module: Navigation View
// Description: Locators and link labels for the planner sidebar.
// Purpose: Keep section names beside the selectors that reach them.
// Dependencies: none
// ============================================================================

//! Link labels of the planner sidebar navigation.

/// Sidebar navigation link tag.
pub const NAV_LINK_TAG: &str = "a";

/// Link label for the application inventory screen.
pub const APPLICATION_INVENTORY_LINK: &str = "Application inventory";

/// Link label for the migration waves screen.
pub const MIGRATION_WAVES_LINK: &str = "Migration waves";

/// Link label for the credentials administration screen.
pub const CREDENTIALS_LINK: &str = "Credentials";

/// Link label for the issue-tracker administration screen.
pub const JIRA_CONFIGURATION_LINK: &str = "Jira";
