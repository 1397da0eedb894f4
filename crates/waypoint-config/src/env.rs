// crates/waypoint-config/src/env.rs
// ============================================================================
// Module: Suite Environment
// Description: Environment-backed configuration for the end-to-end suite.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid silent
//! misconfiguration. Invalid UTF-8 fails closed. Credentials are never logged
//! or echoed back in error messages; errors name the variable only.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for end-to-end suite configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvKey {
    /// Base URL of the migration planner under test.
    UiUrl,
    /// Planner admin username (defaults to `admin`).
    AdminUser,
    /// Planner admin password.
    AdminPassword,
    /// Auth-console admin password.
    KeycloakAdminPassword,
    /// Issue-tracker cloud base URL.
    JiraCloudUrl,
    /// Issue-tracker account email for basic auth.
    JiraCloudEmail,
    /// Issue-tracker API token for basic auth.
    JiraCloudToken,
    /// WebDriver endpoint (defaults to `http://localhost:4444`).
    WebdriverUrl,
    /// Run the browser headless (`true`/`false` or `1`/`0`).
    Headless,
    /// Wait-timeout floor in seconds (positive integer).
    TimeoutSeconds,
}

impl EnvKey {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UiUrl => "WAYPOINT_E2E_UI_URL",
            Self::AdminUser => "WAYPOINT_E2E_ADMIN_USER",
            Self::AdminPassword => "WAYPOINT_E2E_ADMIN_PASSWORD",
            Self::KeycloakAdminPassword => "WAYPOINT_E2E_KEYCLOAK_ADMIN_PASSWORD",
            Self::JiraCloudUrl => "WAYPOINT_E2E_JIRA_CLOUD_URL",
            Self::JiraCloudEmail => "WAYPOINT_E2E_JIRA_CLOUD_EMAIL",
            Self::JiraCloudToken => "WAYPOINT_E2E_JIRA_CLOUD_TOKEN",
            Self::WebdriverUrl => "WAYPOINT_E2E_WEBDRIVER_URL",
            Self::Headless => "WAYPOINT_E2E_HEADLESS",
            Self::TimeoutSeconds => "WAYPOINT_E2E_TIMEOUT_SEC",
        }
    }
}

/// Default planner admin username when the variable is unset.
const DEFAULT_ADMIN_USER: &str = "admin";

/// Default WebDriver endpoint when the variable is unset.
const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed suite configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    /// Base URL of the migration planner under test.
    pub ui_url: Option<String>,
    /// Planner admin username.
    pub admin_user: String,
    /// Planner admin password.
    pub admin_password: Option<String>,
    /// Auth-console admin password.
    pub keycloak_admin_password: Option<String>,
    /// Issue-tracker cloud base URL.
    pub jira_cloud_url: Option<String>,
    /// Issue-tracker account email for basic auth.
    pub jira_cloud_email: Option<String>,
    /// Issue-tracker API token for basic auth.
    pub jira_cloud_token: Option<String>,
    /// WebDriver endpoint.
    pub webdriver_url: String,
    /// Run the browser headless.
    pub headless: bool,
    /// Wait-timeout floor (positive integer seconds).
    pub timeout: Option<Duration>,
}

impl EnvConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is empty,
    /// or fails validation (for example, an invalid timeout or boolean value).
    pub fn load() -> Result<Self, String> {
        let ui_url = read_env_nonempty(EnvKey::UiUrl.as_str())?;
        let admin_user = read_env_nonempty(EnvKey::AdminUser.as_str())?
            .unwrap_or_else(|| DEFAULT_ADMIN_USER.to_string());
        let admin_password = read_env_nonempty(EnvKey::AdminPassword.as_str())?;
        let keycloak_admin_password =
            read_env_nonempty(EnvKey::KeycloakAdminPassword.as_str())?;
        let jira_cloud_url = read_env_nonempty(EnvKey::JiraCloudUrl.as_str())?;
        let jira_cloud_email = read_env_nonempty(EnvKey::JiraCloudEmail.as_str())?;
        let jira_cloud_token = read_env_nonempty(EnvKey::JiraCloudToken.as_str())?;
        let webdriver_url = read_env_nonempty(EnvKey::WebdriverUrl.as_str())?
            .unwrap_or_else(|| DEFAULT_WEBDRIVER_URL.to_string());
        let headless = parse_bool_env(
            EnvKey::Headless.as_str(),
            read_env_nonempty(EnvKey::Headless.as_str())?,
        )?;
        let timeout = read_env_nonempty(EnvKey::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(EnvKey::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        Ok(Self {
            ui_url,
            admin_user,
            admin_password,
            keycloak_admin_password,
            jira_cloud_url,
            jira_cloud_email,
            jira_cloud_token,
            webdriver_url,
            headless,
            timeout,
        })
    }

    /// Returns the planner base URL or an error naming the variable.
    ///
    /// # Errors
    ///
    /// Returns an error when the variable is unset.
    pub fn require_ui_url(&self) -> Result<&str, String> {
        required(self.ui_url.as_deref(), EnvKey::UiUrl)
    }

    /// Returns the planner admin password or an error naming the variable.
    ///
    /// # Errors
    ///
    /// Returns an error when the variable is unset.
    pub fn require_admin_password(&self) -> Result<&str, String> {
        required(self.admin_password.as_deref(), EnvKey::AdminPassword)
    }

    /// Returns the auth-console admin password or an error naming the variable.
    ///
    /// # Errors
    ///
    /// Returns an error when the variable is unset.
    pub fn require_keycloak_admin_password(&self) -> Result<&str, String> {
        required(self.keycloak_admin_password.as_deref(), EnvKey::KeycloakAdminPassword)
    }

    /// Returns the tracker base URL or an error naming the variable.
    ///
    /// # Errors
    ///
    /// Returns an error when the variable is unset.
    pub fn require_jira_cloud_url(&self) -> Result<&str, String> {
        required(self.jira_cloud_url.as_deref(), EnvKey::JiraCloudUrl)
    }

    /// Returns the tracker account email or an error naming the variable.
    ///
    /// # Errors
    ///
    /// Returns an error when the variable is unset.
    pub fn require_jira_cloud_email(&self) -> Result<&str, String> {
        required(self.jira_cloud_email.as_deref(), EnvKey::JiraCloudEmail)
    }

    /// Returns the tracker API token or an error naming the variable.
    ///
    /// # Errors
    ///
    /// Returns an error when the variable is unset.
    pub fn require_jira_cloud_token(&self) -> Result<&str, String> {
        required(self.jira_cloud_token.as_deref(), EnvKey::JiraCloudToken)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Converts an optional value into a result naming the missing variable.
fn required(value: Option<&str>, key: EnvKey) -> Result<&str, String> {
    value.ok_or_else(|| format!("{} must be set", key.as_str()))
}

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is missing, non-numeric, or zero.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{name} must be a positive integer number of seconds"));
    }
    let secs: u64 = trimmed
        .parse()
        .map_err(|_| format!("{name} must be a positive integer number of seconds"))?;
    if secs == 0 {
        return Err(format!("{name} must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}

/// Parses a boolean environment variable with permissive defaults.
///
/// # Errors
///
/// Returns an error when the value is not a recognized boolean literal.
fn parse_bool_env(name: &str, raw: Option<String>) -> Result<bool, String> {
    let Some(value) = raw else {
        return Ok(false);
    };
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
        return Ok(true);
    }
    if trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
        return Ok(false);
    }
    Err(format!("{name} must be 1, 0, true, or false"))
}
