// crates/waypoint-ui/src/views/credentials.rs
// ============================================================================
// Module: Credentials View
// Description: Locators for the credentials administration screen.
// Purpose: Cover the credential create/edit form.
// Dependencies: none
// ============================================================================

//! Locators for the credentials administration screen.

/// Credential name input.
pub const NAME_INPUT: &str = "#name";

/// Credential type select.
pub const TYPE_SELECT: &str = "#type-select";

/// Option label for basic-auth tracker credentials.
pub const JIRA_BASIC_TYPE_LABEL: &str = "Basic Auth (Jira)";

/// Email input for basic-auth credentials.
pub const EMAIL_INPUT: &str = "#user";

/// API-token input for basic-auth credentials.
pub const TOKEN_INPUT: &str = "#token";
