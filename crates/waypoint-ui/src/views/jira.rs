// crates/waypoint-ui/src/views/jira.rs
// ============================================================================
// Module: Jira Administration View
// Description: Locators for the issue-tracker instance screen.
// Purpose: Cover the instance create/edit form and connection state.
// Dependencies: none
// ============================================================================

//! Locators for the issue-tracker instance administration screen.

/// Instance name input.
pub const NAME_INPUT: &str = "#name";

/// Instance base-URL input.
pub const URL_INPUT: &str = "#url";

/// Instance kind select (cloud or server/datacenter).
pub const KIND_SELECT: &str = "#type-select";

/// Credential select.
pub const CREDENTIAL_SELECT: &str = "#credentials-select";

/// Insecure-connection checkbox.
pub const INSECURE_CHECKBOX: &str = "#insecure-switch";

/// Connection-state label text once the instance is reachable.
pub const CONNECTED_LABEL: &str = "Connected";

/// Option label for cloud instances.
pub const CLOUD_KIND_LABEL: &str = "Jira Cloud";

/// Option label for server/datacenter instances.
pub const SERVER_KIND_LABEL: &str = "Jira Server/Datacenter";
