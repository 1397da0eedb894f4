// crates/waypoint-ui/src/views/migration_wave.rs
// ============================================================================
// Module: Migration Wave View
// Description: Locators for the migration waves screen.
// Purpose: Cover the wave form, application management, and export dialogs.
// Dependencies: none
// ============================================================================

//! Locators for the migration waves screen and its dialogs.

/// Wave name input on the create/edit form (optional field).
pub const NAME_INPUT: &str = "#name";

/// Wave start-date input (MM/DD/YYYY).
pub const START_DATE_INPUT: &str = "input[aria-label='startDateStr']";

/// Wave end-date input (MM/DD/YYYY).
pub const END_DATE_INPUT: &str = "input[aria-label='endDateStr']";

/// Row action label that opens the manage-applications dialog.
pub const MANAGE_APPLICATIONS_ACTION: &str = "Manage applications";

/// Row action label that opens the export dialog.
pub const EXPORT_ACTION: &str = "Export to Issue Manager";

/// Instance-type select on the export dialog.
pub const EXPORT_INSTANCE_TYPE_SELECT: &str = "#issue-manager-select";

/// Instance-name select on the export dialog.
pub const EXPORT_INSTANCE_SELECT: &str = "#instance-select";

/// Project typeahead input on the export dialog.
pub const EXPORT_PROJECT_INPUT: &str = "#project-select-toggle input";

/// Issue-type typeahead input on the export dialog.
pub const EXPORT_ISSUE_TYPE_INPUT: &str = "#issue-type-select-toggle input";
