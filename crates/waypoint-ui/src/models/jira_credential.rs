// crates/waypoint-ui/src/models/jira_credential.rs
// ============================================================================
// Module: Jira Credential Model
// Description: Page object for tracker basic-auth credentials.
// Purpose: Create, update, and delete credentials on the admin screen.
// Dependencies: crate::controls, crate::session, crate::views
// ============================================================================

//! ## Overview
//! A credential is a named email/token pair referenced by tracker instances.
//! Delete order matters in teardown: instances first, then their credential.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::controls;
use crate::error::UiError;
use crate::session::Section;
use crate::session::Session;
use crate::views::common;
use crate::views::credentials as view;
use crate::waits::wait_until;

// ============================================================================
// SECTION: Model
// ============================================================================

/// A basic-auth tracker credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JiraCredential {
    /// Credential name; unique per environment.
    pub name: String,
    /// Tracker account email.
    pub email: String,
    /// Tracker API token. Never asserted on, only typed into the form.
    pub token: String,
}

impl JiraCredential {
    /// Creates a model from its form fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            token: token.into(),
        }
    }

    /// Creates the credential through the admin form and waits for its row.
    ///
    /// # Errors
    ///
    /// Returns a [`UiError`] when the form cannot be driven or the row never
    /// appears.
    pub async fn create(&self, session: &Session) -> Result<(), UiError> {
        session.open_section(Section::Credentials).await?;
        controls::click(session, common::CREATE_NEW_BUTTON).await?;
        self.fill_form(session).await?;
        controls::click_by_text(session, "button", "Create").await?;
        wait_until(
            &format!("credential row '{}'", self.name),
            session.timeout(),
            session.poll(),
            || controls::row_exists_now(session, &self.name),
        )
        .await
    }

    /// Re-enters email and token through the edit form.
    ///
    /// # Errors
    ///
    /// Returns a [`UiError`] when the edit form cannot be driven.
    pub async fn update(&mut self, session: &Session, email: &str, token: &str) -> Result<(), UiError> {
        session.open_section(Section::Credentials).await?;
        controls::row_action(session, &self.name, "Edit").await?;
        controls::input_text(session, view::EMAIL_INPUT, email).await?;
        controls::input_text(session, view::TOKEN_INPUT, token).await?;
        controls::click_by_text(session, "button", "Save").await?;
        self.email = email.to_string();
        self.token = token.to_string();
        Ok(())
    }

    /// Deletes the credential via its row action.
    ///
    /// # Errors
    ///
    /// Returns a [`UiError`] when the row action cannot be driven.
    pub async fn delete(&self, session: &Session) -> Result<(), UiError> {
        session.open_section(Section::Credentials).await?;
        controls::row_action(session, &self.name, "Delete").await?;
        controls::confirm_danger(session).await?;
        wait_until(
            &format!("credential row '{}' removed", self.name),
            session.timeout(),
            session.poll(),
            || controls::row_absent_now(session, &self.name),
        )
        .await
    }

    /// Fills the credential form from the model.
    async fn fill_form(&self, session: &Session) -> Result<(), UiError> {
        controls::input_text(session, view::NAME_INPUT, &self.name).await?;
        controls::select_by_text(session, view::TYPE_SELECT, view::JIRA_BASIC_TYPE_LABEL)
            .await?;
        controls::input_text(session, view::EMAIL_INPUT, &self.email).await?;
        controls::input_text(session, view::TOKEN_INPUT, &self.token).await?;
        Ok(())
    }
}
