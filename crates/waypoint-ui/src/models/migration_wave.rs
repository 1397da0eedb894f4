// crates/waypoint-ui/src/models/migration_wave.rs
// ============================================================================
// Module: Migration Wave Model
// Description: Page object for migration waves.
// Purpose: Create, edit, manage applications, export, and delete waves.
// Dependencies: crate::controls, crate::session, crate::views, time
// ============================================================================

//! ## Overview
//! A wave groups applications scheduled for migration between a start and an
//! end date. The UI shows unnamed waves by their rendered date range, so row
//! lookups key on [`MigrationWave::display_name`]. Exporting a wave hands its
//! applications to an external issue-manager instance; verification of the
//! resulting issues happens through the tracker's REST API, not here.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thirtyfour::By;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::controls;
use crate::error::UiError;
use crate::models::jira::JiraKind;
use crate::session::Section;
use crate::session::Session;
use crate::views::common;
use crate::views::migration_wave as view;
use crate::waits::wait_until;

// ============================================================================
// SECTION: Date Formatting
// ============================================================================

/// Date format the wave form and table use (MM/DD/YYYY).
const UI_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[month]/[day]/[year]");

/// Formats a date the way the wave form expects it.
///
/// # Errors
///
/// Returns [`UiError::InvalidInput`] when the date cannot be rendered.
pub(crate) fn format_ui_date(date: Date) -> Result<String, UiError> {
    date.format(&UI_DATE_FORMAT).map_err(|err| UiError::InvalidInput {
        field: "date",
        reason: err.to_string(),
    })
}

// ============================================================================
// SECTION: Model
// ============================================================================

/// A migration wave in the planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationWave {
    /// Optional wave name; unnamed waves render as their date range.
    pub name: Option<String>,
    /// Scheduled start date.
    pub start: Date,
    /// Scheduled end date; the UI requires it to be after the start.
    pub end: Date,
    /// Names of the applications associated with this wave.
    pub applications: Vec<String>,
}

impl MigrationWave {
    /// Creates a model with the given schedule and applications.
    #[must_use]
    pub fn new(
        name: Option<String>,
        start: Date,
        end: Date,
        applications: Vec<String>,
    ) -> Self {
        Self {
            name,
            start,
            end,
            applications,
        }
    }

    /// Returns the text the wave's table row is keyed on: the name when set,
    /// otherwise the rendered date range.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidInput`] when a date cannot be rendered.
    pub fn display_name(&self) -> Result<String, UiError> {
        if let Some(name) = &self.name {
            return Ok(name.clone());
        }
        Ok(format!("{} - {}", format_ui_date(self.start)?, format_ui_date(self.end)?))
    }

    /// Creates the wave through the form, then associates its applications.
    ///
    /// # Errors
    ///
    /// Returns a [`UiError`] when the form cannot be driven or the row never
    /// appears.
    pub async fn create(&self, session: &Session) -> Result<(), UiError> {
        session.open_section(Section::MigrationWaves).await?;
        controls::click(session, common::CREATE_NEW_BUTTON).await?;
        self.fill_form(session).await?;
        controls::click(session, common::MODAL_SUBMIT_BUTTON).await?;
        let row_key = self.display_name()?;
        wait_until(
            &format!("wave row '{row_key}'"),
            session.timeout(),
            session.poll(),
            || controls::row_exists_now(session, &row_key),
        )
        .await?;
        if !self.applications.is_empty() {
            self.set_applications(session, &self.applications, true).await?;
        }
        Ok(())
    }

    /// Edits the wave's name and schedule, then updates the model in place.
    ///
    /// # Errors
    ///
    /// Returns a [`UiError`] when the edit form cannot be driven.
    pub async fn edit(
        &mut self,
        session: &Session,
        name: Option<String>,
        start: Date,
        end: Date,
    ) -> Result<(), UiError> {
        session.open_section(Section::MigrationWaves).await?;
        let row_key = self.display_name()?;
        controls::row_action(session, &row_key, "Edit").await?;
        let updated = Self {
            name,
            start,
            end,
            applications: self.applications.clone(),
        };
        updated.fill_form(session).await?;
        controls::click(session, common::MODAL_SUBMIT_BUTTON).await?;
        let new_key = updated.display_name()?;
        wait_until(
            &format!("wave row '{new_key}'"),
            session.timeout(),
            session.poll(),
            || controls::row_exists_now(session, &new_key),
        )
        .await?;
        *self = updated;
        Ok(())
    }

    /// Associates additional applications with the wave.
    ///
    /// # Errors
    ///
    /// Returns a [`UiError`] when the manage-applications dialog cannot be
    /// driven.
    pub async fn add_applications(
        &mut self,
        session: &Session,
        applications: &[String],
    ) -> Result<(), UiError> {
        self.set_applications(session, applications, true).await?;
        self.applications.extend(applications.iter().cloned());
        Ok(())
    }

    /// Removes applications from the wave.
    ///
    /// # Errors
    ///
    /// Returns a [`UiError`] when the manage-applications dialog cannot be
    /// driven.
    pub async fn remove_applications(
        &mut self,
        session: &Session,
        applications: &[String],
    ) -> Result<(), UiError> {
        self.set_applications(session, applications, false).await?;
        self.applications.retain(|name| !applications.contains(name));
        Ok(())
    }

    /// Exports the wave to a configured issue-manager instance.
    ///
    /// The caller resolves the project name and issue type through the
    /// tracker's REST API beforehand; this method only drives the dialog.
    ///
    /// # Errors
    ///
    /// Returns a [`UiError`] when the export dialog cannot be driven.
    pub async fn export_to_issue_manager(
        &self,
        session: &Session,
        kind: JiraKind,
        instance_name: &str,
        project: &str,
        issue_type: &str,
    ) -> Result<(), UiError> {
        session.open_section(Section::MigrationWaves).await?;
        let row_key = self.display_name()?;
        controls::row_action(session, &row_key, view::EXPORT_ACTION).await?;
        controls::select_by_text(session, view::EXPORT_INSTANCE_TYPE_SELECT, kind.label())
            .await?;
        controls::select_by_text(session, view::EXPORT_INSTANCE_SELECT, instance_name).await?;
        controls::pick_typeahead(session, view::EXPORT_PROJECT_INPUT, project).await?;
        controls::pick_typeahead(session, view::EXPORT_ISSUE_TYPE_INPUT, issue_type).await?;
        controls::click_by_text(session, "button", "Export").await
    }

    /// Deletes the wave via its row action and waits for the row to
    /// disappear.
    ///
    /// # Errors
    ///
    /// Returns a [`UiError`] when the row action cannot be driven.
    pub async fn delete(&self, session: &Session) -> Result<(), UiError> {
        session.open_section(Section::MigrationWaves).await?;
        let row_key = self.display_name()?;
        controls::row_action(session, &row_key, "Delete").await?;
        controls::confirm_danger(session).await?;
        wait_until(
            &format!("wave row '{row_key}' removed"),
            session.timeout(),
            session.poll(),
            || controls::row_absent_now(session, &row_key),
        )
        .await
    }

    /// Fills the wave form fields from the model.
    async fn fill_form(&self, session: &Session) -> Result<(), UiError> {
        if let Some(name) = &self.name {
            controls::input_text(session, view::NAME_INPUT, name).await?;
        }
        controls::input_text(session, view::START_DATE_INPUT, &format_ui_date(self.start)?)
            .await?;
        controls::input_text(session, view::END_DATE_INPUT, &format_ui_date(self.end)?).await?;
        Ok(())
    }

    /// Checks or unchecks application rows in the manage-applications dialog.
    async fn set_applications(
        &self,
        session: &Session,
        applications: &[String],
        checked: bool,
    ) -> Result<(), UiError> {
        session.open_section(Section::MigrationWaves).await?;
        let row_key = self.display_name()?;
        controls::row_action(session, &row_key, view::MANAGE_APPLICATIONS_ACTION).await?;
        for application in applications {
            let row = controls::row_by_cell_text(session, application).await?;
            let checkbox = row.find(By::Css("input[type='checkbox']")).await?;
            if checkbox.is_selected().await? != checked {
                checkbox.click().await?;
            }
        }
        controls::click_by_text(session, "button", "Save").await
    }
}
