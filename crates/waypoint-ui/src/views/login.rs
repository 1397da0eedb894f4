// crates/waypoint-ui/src/views/login.rs
// ============================================================================
// Module: Login View
// Description: Locators for the planner and auth-console login forms.
// Purpose: Share the credential form selectors across login flows.
// Dependencies: none
// ============================================================================

//! Locators for the planner login form.

/// Username input on the login form.
pub const USERNAME_INPUT: &str = "#username";

/// Password input on the login form.
pub const PASSWORD_INPUT: &str = "#password";

/// Submit button on the login form.
pub const LOGIN_BUTTON: &str = "button[type='submit']";
