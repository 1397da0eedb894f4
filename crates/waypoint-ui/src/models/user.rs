// crates/waypoint-ui/src/models/user.rs
// ============================================================================
// Module: Auth Console User Model
// Description: Page object for user administration in the auth console.
// Purpose: Create users, set passwords, and manage role mappings.
// Dependencies: crate::controls, crate::session, crate::views
// ============================================================================

//! ## Overview
//! The auth console lives under the planner base URL at `auth/` and uses its
//! own table layout: row actions are plain cells, not kebab menus, and the
//! delete confirmation is a modal danger button. Role changes mutate the
//! in-memory `roles` list alongside the UI action so assertions can compare
//! against the model.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thirtyfour::By;

use crate::controls;
use crate::error::UiError;
use crate::session::Session;
use crate::views::keycloak as view;
use crate::views::login;

// ============================================================================
// SECTION: Model
// ============================================================================

/// A user managed through the auth console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Login name; unique per realm.
    pub username: String,
    /// Password applied via the credentials tab.
    pub password: String,
    /// First name shown in the user table.
    pub first_name: String,
    /// Last name shown in the user table.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Whether the account is enabled.
    pub enabled: bool,
    /// Roles granted so far, mirrored from UI actions.
    pub roles: Vec<String>,
}

impl User {
    /// Creates a model from its form fields; the account starts enabled with
    /// no roles.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            enabled: true,
            roles: Vec::new(),
        }
    }

    /// Opens the auth console and logs in as the console admin.
    ///
    /// # Errors
    ///
    /// Returns a [`UiError`] when the console or login form cannot be driven.
    pub async fn login_admin(session: &Session, admin_password: &str) -> Result<(), UiError> {
        session.goto_path(view::CONSOLE_PATH).await?;
        controls::click_by_text(session, "h1", view::WELCOME_HEADING).await?;
        controls::click_by_text(session, "a", view::ADMIN_CONSOLE_LINK).await?;
        controls::find(session, view::LOGIN_PAGE_TITLE).await?;
        controls::input_text(session, login::USERNAME_INPUT, "admin").await?;
        controls::input_text(session, login::PASSWORD_INPUT, admin_password).await?;
        controls::click(session, login::LOGIN_BUTTON).await?;
        Ok(())
    }

    /// Opens the full user list.
    ///
    /// # Errors
    ///
    /// Returns a [`UiError`] when the users section cannot be reached.
    pub async fn open_list(session: &Session) -> Result<(), UiError> {
        controls::click_by_text(session, "a", view::USERS_LINK).await?;
        controls::click(session, view::VIEW_ALL_USERS_BUTTON).await?;
        Ok(())
    }

    /// Creates the user through the console form.
    ///
    /// # Errors
    ///
    /// Returns a [`UiError`] when the form cannot be driven.
    pub async fn create(&self, session: &Session) -> Result<(), UiError> {
        Self::open_list(session).await?;
        controls::click(session, view::ADD_USER_BUTTON).await?;
        controls::input_text(session, view::USERNAME_INPUT, &self.username).await?;
        controls::input_text(session, view::EMAIL_INPUT, &self.email).await?;
        controls::input_text(session, view::FIRST_NAME_INPUT, &self.first_name).await?;
        controls::input_text(session, view::LAST_NAME_INPUT, &self.last_name).await?;
        controls::click_by_text(session, "button", "Save").await
    }

    /// Sets the user's password through the credentials tab.
    ///
    /// # Errors
    ///
    /// Returns a [`UiError`] when the credentials tab cannot be driven.
    pub async fn define_password(&self, session: &Session) -> Result<(), UiError> {
        self.open_edit(session).await?;
        controls::click_by_text(session, "a", view::CREDENTIALS_TAB).await?;
        controls::input_text(session, view::NEW_PASSWORD_INPUT, &self.password).await?;
        controls::input_text(session, view::CONFIRM_PASSWORD_INPUT, &self.password).await?;
        controls::click_by_text(session, "button", "Set Password").await?;
        controls::click_by_text(session, "button", "Set password").await
    }

    /// Grants a realm role and records it on the model.
    ///
    /// # Errors
    ///
    /// Returns a [`UiError`] when the role-mapping tab cannot be driven.
    pub async fn add_role(&mut self, session: &Session, role: &str) -> Result<(), UiError> {
        self.open_edit(session).await?;
        controls::click_by_text(session, "a", view::ROLE_MAPPINGS_TAB).await?;
        controls::select_by_text(session, view::AVAILABLE_ROLES_SELECT, role).await?;
        controls::click_by_text(session, "button", "Add selected").await?;
        controls::select_by_text(session, view::ASSIGNED_ROLES_SELECT, role).await?;
        self.roles.push(role.to_string());
        Ok(())
    }

    /// Revokes a realm role and removes it from the model.
    ///
    /// # Errors
    ///
    /// Returns a [`UiError`] when the role-mapping tab cannot be driven.
    pub async fn remove_role(&mut self, session: &Session, role: &str) -> Result<(), UiError> {
        self.open_edit(session).await?;
        controls::click_by_text(session, "a", view::ROLE_MAPPINGS_TAB).await?;
        controls::select_by_text(session, view::ASSIGNED_ROLES_SELECT, role).await?;
        controls::click_by_text(session, "button", "Remove selected").await?;
        controls::select_by_text(session, view::AVAILABLE_ROLES_SELECT, role).await?;
        self.roles.retain(|granted| granted != role);
        Ok(())
    }

    /// Deletes the user through its row action and the danger dialog.
    ///
    /// # Errors
    ///
    /// Returns a [`UiError`] when the row action cannot be driven.
    pub async fn delete(&self, session: &Session) -> Result<(), UiError> {
        Self::open_list(session).await?;
        Self::apply_row_action(session, &self.username, "Delete").await?;
        controls::click(session, view::MODAL_DANGER_BUTTON).await?;
        Ok(())
    }

    /// Opens the edit screen for this user.
    async fn open_edit(&self, session: &Session) -> Result<(), UiError> {
        Self::open_list(session).await?;
        Self::apply_row_action(session, &self.username, "Edit").await
    }

    /// Clicks an action cell inside the row matching `username`. The console
    /// renders actions as table cells, not kebab menus.
    async fn apply_row_action(
        session: &Session,
        username: &str,
        action: &str,
    ) -> Result<(), UiError> {
        let row = controls::row_by_cell_text(session, username).await?;
        let action_xpath = format!(".//td[normalize-space(.)='{action}']");
        row.find(By::XPath(action_xpath)).await?.click().await?;
        Ok(())
    }
}
