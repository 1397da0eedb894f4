// crates/waypoint-ui/src/views/application.rs
// ============================================================================
// Module: Application Inventory View
// Description: Locators for the application inventory screen.
// Purpose: Cover the create form and row actions for applications.
// Dependencies: none
// ============================================================================

//! Locators for the application inventory screen.

/// Application name input on the create/edit form.
pub const NAME_INPUT: &str = "#name";

/// Application description input on the create/edit form.
pub const DESCRIPTION_INPUT: &str = "#description";
