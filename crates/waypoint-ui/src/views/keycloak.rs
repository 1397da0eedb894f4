// crates/waypoint-ui/src/views/keycloak.rs
// ============================================================================
// Module: Auth Console View
// Description: Locators for the auth-console user administration screens.
// Purpose: Cover user creation, credentials, and role mapping.
// Dependencies: none
// ============================================================================

//! Locators for the auth-console user administration screens.

/// Relative path of the auth console under the planner base URL.
pub const CONSOLE_PATH: &str = "auth/";

/// Welcome-page heading text, used to detect the console landing page.
pub const WELCOME_HEADING: &str = "Welcome to Keycloak";

/// Link label that opens the administration console.
pub const ADMIN_CONSOLE_LINK: &str = "Administration Console";

/// Login page title element.
pub const LOGIN_PAGE_TITLE: &str = "#kc-page-title";

/// Link label for the users section.
pub const USERS_LINK: &str = "Users";

/// Button that lists all users.
pub const VIEW_ALL_USERS_BUTTON: &str = "#viewAllUsers";

/// Button that opens the create-user form.
pub const ADD_USER_BUTTON: &str = "#createUser";

/// Username input on the user form.
pub const USERNAME_INPUT: &str = "#username";

/// First-name input on the user form.
pub const FIRST_NAME_INPUT: &str = "#firstName";

/// Last-name input on the user form.
pub const LAST_NAME_INPUT: &str = "#lastName";

/// Email input on the user form.
pub const EMAIL_INPUT: &str = "#email";

/// New-password input on the credentials tab.
pub const NEW_PASSWORD_INPUT: &str = "#newPas";

/// Confirm-password input on the credentials tab.
pub const CONFIRM_PASSWORD_INPUT: &str = "#confirmPas";

/// Tab label for the credentials section of a user.
pub const CREDENTIALS_TAB: &str = "Credentials";

/// Tab label for the role-mapping section of a user.
pub const ROLE_MAPPINGS_TAB: &str = "Role Mappings";

/// Available-roles multi-select on the role-mapping tab.
pub const AVAILABLE_ROLES_SELECT: &str = "#available";

/// Assigned-roles multi-select on the role-mapping tab.
pub const ASSIGNED_ROLES_SELECT: &str = "#assigned";

/// Confirm button on the console's delete dialog.
pub const MODAL_DANGER_BUTTON: &str = "div.modal-footer button.btn-danger";
