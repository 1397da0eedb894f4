// crates/waypoint-ui/src/models/application.rs
// ============================================================================
// Module: Application Model
// Description: Page object for the application inventory.
// Purpose: Create and delete applications used to seed waves.
// Dependencies: crate::controls, crate::session, crate::views
// ============================================================================

//! ## Overview
//! Applications are the leaf fixtures of every wave scenario: created first,
//! deleted last. Only the fields the suite asserts on are modeled.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::controls;
use crate::error::UiError;
use crate::session::Section;
use crate::session::Session;
use crate::views::application as view;
use crate::views::common;
use crate::waits::wait_until;

// ============================================================================
// SECTION: Model
// ============================================================================

/// An application in the planner's inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    /// Application name; unique per environment.
    pub name: String,
    /// Optional description shown in the inventory table.
    pub description: Option<String>,
}

impl Application {
    /// Creates a model with a name and no description.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Creates the application through the inventory form and waits for its
    /// row to appear.
    ///
    /// # Errors
    ///
    /// Returns a [`UiError`] when the form cannot be driven or the row never
    /// appears.
    pub async fn create(&self, session: &Session) -> Result<(), UiError> {
        session.open_section(Section::ApplicationInventory).await?;
        controls::click(session, common::CREATE_NEW_BUTTON).await?;
        controls::input_text(session, view::NAME_INPUT, &self.name).await?;
        if let Some(description) = &self.description {
            controls::input_text(session, view::DESCRIPTION_INPUT, description).await?;
        }
        controls::click_by_text(session, "button", "Create").await?;
        wait_until(
            &format!("application row '{}'", self.name),
            session.timeout(),
            session.poll(),
            || controls::row_exists_now(session, &self.name),
        )
        .await
    }

    /// Deletes the application via its row action and waits for the row to
    /// disappear.
    ///
    /// # Errors
    ///
    /// Returns a [`UiError`] when the row action cannot be driven.
    pub async fn delete(&self, session: &Session) -> Result<(), UiError> {
        session.open_section(Section::ApplicationInventory).await?;
        controls::row_action(session, &self.name, "Delete").await?;
        controls::confirm_danger(session).await?;
        wait_until(
            &format!("application row '{}' removed", self.name),
            session.timeout(),
            session.poll(),
            || controls::row_absent_now(session, &self.name),
        )
        .await
    }
}
