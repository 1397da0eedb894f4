// crates/waypoint-ui/src/models/jira.rs
// ============================================================================
// Module: Jira Instance Model
// Description: Page object for issue-tracker instance connections.
// Purpose: Create, edit, and delete tracker instances; await connectivity.
// Dependencies: crate::controls, crate::session, crate::views
// ============================================================================

//! ## Overview
//! A tracker instance binds a name, a base URL, a credential reference, and a
//! kind (cloud or server/datacenter). After creation the planner probes the
//! instance asynchronously; [`Jira::create`] waits for the row to report
//! Connected with a bounded poll rather than a fixed sleep.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thirtyfour::By;

use crate::controls;
use crate::error::UiError;
use crate::session::Section;
use crate::session::Session;
use crate::views::common;
use crate::views::jira as view;
use crate::waits::wait_until;

// ============================================================================
// SECTION: Instance Kind
// ============================================================================

/// Kind of tracker instance the planner connects to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JiraKind {
    /// Cloud-hosted instance.
    Cloud,
    /// Server or datacenter instance.
    Server,
}

impl JiraKind {
    /// Returns the option label the instance-kind select renders.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cloud => view::CLOUD_KIND_LABEL,
            Self::Server => view::SERVER_KIND_LABEL,
        }
    }
}

// ============================================================================
// SECTION: Model
// ============================================================================

/// An issue-tracker instance connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jira {
    /// Instance name; unique per environment.
    pub name: String,
    /// Tracker base URL.
    pub url: String,
    /// Name of the credential this instance authenticates with.
    pub credential_name: String,
    /// Instance kind.
    pub kind: JiraKind,
    /// Skip TLS verification when connecting.
    pub insecure: bool,
}

impl Jira {
    /// Creates a model from its form fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        credential_name: impl Into<String>,
        kind: JiraKind,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            credential_name: credential_name.into(),
            kind,
            insecure: false,
        }
    }

    /// Creates the instance and waits for its row to report Connected.
    ///
    /// # Errors
    ///
    /// Returns a [`UiError`] when the form cannot be driven or the instance
    /// never connects within the wait budget.
    pub async fn create(&self, session: &Session) -> Result<(), UiError> {
        session.open_section(Section::JiraConfiguration).await?;
        controls::click(session, common::CREATE_NEW_BUTTON).await?;
        self.fill_form(session).await?;
        controls::click_by_text(session, "button", "Create").await?;
        wait_until(
            &format!("instance '{}' reports {}", self.name, view::CONNECTED_LABEL),
            session.timeout(),
            session.poll(),
            || self.row_is_connected(session),
        )
        .await
    }

    /// Points the instance at a different URL through the edit form.
    ///
    /// # Errors
    ///
    /// Returns a [`UiError`] when the edit form cannot be driven.
    pub async fn edit_url(&mut self, session: &Session, url: &str) -> Result<(), UiError> {
        session.open_section(Section::JiraConfiguration).await?;
        controls::row_action(session, &self.name, "Edit").await?;
        controls::input_text(session, view::URL_INPUT, url).await?;
        controls::click_by_text(session, "button", "Save").await?;
        self.url = url.to_string();
        Ok(())
    }

    /// Deletes the instance via its row action.
    ///
    /// # Errors
    ///
    /// Returns a [`UiError`] when the row action cannot be driven.
    pub async fn delete(&self, session: &Session) -> Result<(), UiError> {
        session.open_section(Section::JiraConfiguration).await?;
        controls::row_action(session, &self.name, "Delete").await?;
        controls::confirm_danger(session).await?;
        wait_until(
            &format!("instance row '{}' removed", self.name),
            session.timeout(),
            session.poll(),
            || controls::row_absent_now(session, &self.name),
        )
        .await
    }

    /// Fills the instance form from the model.
    async fn fill_form(&self, session: &Session) -> Result<(), UiError> {
        controls::input_text(session, view::NAME_INPUT, &self.name).await?;
        controls::input_text(session, view::URL_INPUT, &self.url).await?;
        controls::select_by_text(session, view::KIND_SELECT, self.kind.label()).await?;
        controls::select_by_text(session, view::CREDENTIAL_SELECT, &self.credential_name)
            .await?;
        controls::set_checkbox(session, view::INSECURE_CHECKBOX, self.insecure).await?;
        Ok(())
    }

    /// Probes whether the instance row currently shows the Connected label.
    async fn row_is_connected(&self, session: &Session) -> Result<bool, UiError> {
        let row = controls::row_by_cell_text(session, &self.name).await?;
        let cells = row.find_all(By::Css(common::TD_TAG)).await?;
        for cell in cells {
            if cell.text().await?.contains(view::CONNECTED_LABEL) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
