// crates/waypoint-ui/src/session.rs
// ============================================================================
// Module: Browser Session
// Description: WebDriver session bound to one planner deployment.
// Purpose: Own the driver, the base URL, and the wait budget.
// Dependencies: thirtyfour, waypoint-config
// ============================================================================

//! ## Overview
//! One `Session` per scenario: connect, log in, drive page objects, quit.
//! The session carries the wait budget so every element lookup and bounded
//! poll shares the same timeout floor.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use thirtyfour::ChromiumLikeCapabilities;
use thirtyfour::DesiredCapabilities;
use thirtyfour::WebDriver;
use waypoint_config::EnvConfig;

use crate::controls;
use crate::error::UiError;
use crate::views::common;
use crate::views::login;
use crate::views::navigation;
use crate::waits::DEFAULT_POLL_INTERVAL;
use crate::waits::DEFAULT_WAIT_TIMEOUT;

// ============================================================================
// SECTION: Navigation Sections
// ============================================================================

/// Sidebar sections of the planner UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Application inventory screen.
    ApplicationInventory,
    /// Migration waves screen.
    MigrationWaves,
    /// Credentials administration screen.
    Credentials,
    /// Issue-tracker administration screen.
    JiraConfiguration,
}

impl Section {
    /// Returns the sidebar link label for this section.
    #[must_use]
    pub const fn link_label(self) -> &'static str {
        match self {
            Self::ApplicationInventory => navigation::APPLICATION_INVENTORY_LINK,
            Self::MigrationWaves => navigation::MIGRATION_WAVES_LINK,
            Self::Credentials => navigation::CREDENTIALS_LINK,
            Self::JiraConfiguration => navigation::JIRA_CONFIGURATION_LINK,
        }
    }
}

// ============================================================================
// SECTION: Session
// ============================================================================

/// WebDriver session bound to one planner deployment.
#[derive(Debug)]
pub struct Session {
    /// Underlying WebDriver connection.
    driver: WebDriver,
    /// Planner base URL, normalized without a trailing slash.
    base_url: String,
    /// Time budget for element lookups and bounded waits.
    timeout: Duration,
    /// Poll interval for bounded waits.
    poll: Duration,
}

impl Session {
    /// Connects a browser session using the suite configuration.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] when the planner URL is unset and
    /// [`UiError::Driver`] when the WebDriver handshake fails.
    pub async fn connect(config: &EnvConfig) -> Result<Self, UiError> {
        let base_url =
            config.require_ui_url().map_err(UiError::Config)?.trim_end_matches('/').to_string();
        let mut caps = DesiredCapabilities::chrome();
        if config.headless {
            caps.set_headless()?;
        }
        let driver = WebDriver::new(config.webdriver_url.as_str(), caps).await?;
        Ok(Self {
            driver,
            base_url,
            timeout: config.timeout.unwrap_or(DEFAULT_WAIT_TIMEOUT),
            poll: DEFAULT_POLL_INTERVAL,
        })
    }

    /// Returns the underlying driver.
    #[must_use]
    pub const fn driver(&self) -> &WebDriver {
        &self.driver
    }

    /// Returns the planner base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the wait budget for element lookups and bounded waits.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the poll interval for bounded waits.
    #[must_use]
    pub const fn poll(&self) -> Duration {
        self.poll
    }

    /// Navigates to a path under the planner base URL.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Driver`] when navigation fails.
    pub async fn goto_path(&self, path: &str) -> Result<(), UiError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        self.driver.goto(url.as_str()).await?;
        Ok(())
    }

    /// Logs into the planner and waits for the shell to render.
    ///
    /// # Errors
    ///
    /// Returns a [`UiError`] when the form cannot be driven or the shell does
    /// not appear within the wait budget.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), UiError> {
        self.driver.goto(self.base_url.as_str()).await?;
        controls::input_text(self, login::USERNAME_INPUT, username).await?;
        controls::input_text(self, login::PASSWORD_INPUT, password).await?;
        controls::click(self, login::LOGIN_BUTTON).await?;
        controls::find(self, common::PAGE_SIDEBAR).await?;
        Ok(())
    }

    /// Opens a sidebar section by its link label.
    ///
    /// # Errors
    ///
    /// Returns a [`UiError`] when the link cannot be found or clicked.
    pub async fn open_section(&self, section: Section) -> Result<(), UiError> {
        controls::click_by_text(self, navigation::NAV_LINK_TAG, section.link_label()).await
    }

    /// Closes the browser. Best-effort teardown swallows nothing: the caller
    /// decides whether a quit failure matters.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Driver`] when the session cannot be closed.
    pub async fn quit(self) -> Result<(), UiError> {
        self.driver.quit().await?;
        Ok(())
    }
}
