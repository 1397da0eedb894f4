// crates/waypoint-ui/src/views/common.rs
// ============================================================================
// Module: Common View
// Description: Locators shared across planner screens.
// Purpose: Centralize table, toolbar, and modal selectors.
// Dependencies: none
// ============================================================================

//! Locators shared across planner screens: shell, dialogs, and tables.

/// Application shell sidebar; present once any screen has rendered.
pub const PAGE_SIDEBAR: &str = "#page-sidebar";

/// Primary toolbar button that opens a create form.
pub const CREATE_NEW_BUTTON: &str = "button[aria-label='create-new']";

/// Kebab toggle inside a table row.
pub const ROW_KEBAB_TOGGLE: &str = "button[aria-label='Kebab toggle']";

/// Confirm button on destructive-action dialogs.
pub const CONFIRM_DIALOG_BUTTON: &str = "#confirm-dialog-button";

/// Submit button on modal forms.
pub const MODAL_SUBMIT_BUTTON: &str = "#modal-submit-button";

/// Table cell tag, used when matching rows by cell text.
pub const TD_TAG: &str = "td";

/// Table row tag.
pub const TR_TAG: &str = "tr";
