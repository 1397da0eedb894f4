// crates/waypoint-jira/src/client.rs
// ============================================================================
// Module: Jira REST Client
// Description: Async HTTP wrapper for the tracker's REST surface.
// Purpose: Issue project/issue-type lookups, JQL searches, and deletions.
// Dependencies: reqwest, serde, url
// ============================================================================

//! ## Overview
//! One `reqwest::Client` per `JiraApi`, basic auth on every request, a fixed
//! request timeout, and no retry logic. Eventual-consistency waiting belongs
//! to the calling scenario, not the client.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::JiraError;
use crate::models::JiraIssue;
use crate::models::JiraIssueType;
use crate::models::JiraProject;
use crate::models::SearchPage;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Project lookup endpoint, relative to the tracker base URL.
const PROJECT_ENDPOINT: &str = "rest/api/2/project";

/// Issue-type lookup endpoint, relative to the tracker base URL.
const ISSUE_TYPE_ENDPOINT: &str = "rest/api/2/issuetype";

/// JQL search endpoint, relative to the tracker base URL.
const SEARCH_ENDPOINT: &str = "rest/api/2/search";

/// Issue endpoint prefix, relative to the tracker base URL.
const ISSUE_ENDPOINT: &str = "rest/api/2/issue";

/// Page size for JQL searches; suites create far fewer issues per run.
const SEARCH_PAGE_SIZE: &str = "100";

// ============================================================================
// SECTION: Client
// ============================================================================

/// Thin REST client for one tracker instance.
#[derive(Debug, Clone)]
pub struct JiraApi {
    /// Normalized base URL ending in a slash.
    base: Url,
    /// Shared HTTP client with a request timeout.
    client: Client,
    /// Account email for basic auth.
    email: String,
    /// API token for basic auth.
    token: String,
}

impl JiraApi {
    /// Creates a client for the tracker at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`JiraError::InvalidUrl`] for an unparseable base URL and
    /// [`JiraError::ClientBuild`] when the HTTP client cannot be constructed.
    pub fn new(
        base_url: &str,
        email: &str,
        token: &str,
        timeout: Duration,
    ) -> Result<Self, JiraError> {
        let base = normalize_base(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(JiraError::ClientBuild)?;
        Ok(Self {
            base,
            client,
            email: email.to_string(),
            token: token.to_string(),
        })
    }

    /// Returns all projects visible to the authenticated account.
    ///
    /// # Errors
    ///
    /// Returns a [`JiraError`] on transport, status, or decode failure.
    pub async fn projects(&self) -> Result<Vec<JiraProject>, JiraError> {
        self.get_json(PROJECT_ENDPOINT, &[]).await
    }

    /// Returns the first visible project.
    ///
    /// # Errors
    ///
    /// Returns [`JiraError::NotFound`] when the account sees no projects.
    pub async fn first_project(&self) -> Result<JiraProject, JiraError> {
        self.projects().await?.into_iter().next().ok_or(JiraError::NotFound {
            entity: "project",
            query: "any".to_string(),
        })
    }

    /// Returns all issue types defined on the instance.
    ///
    /// # Errors
    ///
    /// Returns a [`JiraError`] on transport, status, or decode failure.
    pub async fn issue_types(&self) -> Result<Vec<JiraIssueType>, JiraError> {
        self.get_json(ISSUE_TYPE_ENDPOINT, &[]).await
    }

    /// Returns the issue type with the given localized or untranslated name.
    ///
    /// # Errors
    ///
    /// Returns [`JiraError::NotFound`] when no issue type matches.
    pub async fn issue_type_by_name(&self, name: &str) -> Result<JiraIssueType, JiraError> {
        self.issue_types()
            .await?
            .into_iter()
            .find(|kind| kind.name == name || kind.untranslated_name.as_deref() == Some(name))
            .ok_or_else(|| JiraError::NotFound {
                entity: "issue type",
                query: name.to_string(),
            })
    }

    /// Returns the issues currently in the named project, newest first.
    ///
    /// # Errors
    ///
    /// Returns a [`JiraError`] on transport, status, or decode failure.
    pub async fn issues_in_project(&self, project_key: &str) -> Result<Vec<JiraIssue>, JiraError> {
        let jql = jql_for_project(project_key);
        let page: SearchPage = self
            .get_json(
                SEARCH_ENDPOINT,
                &[("jql", &jql), ("maxResults", SEARCH_PAGE_SIZE), ("fields", "summary")],
            )
            .await?;
        Ok(page.issues)
    }

    /// Deletes one issue by identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`JiraError`] on transport or status failure.
    pub async fn delete_issue(&self, issue_id: &str) -> Result<(), JiraError> {
        let endpoint = format!("{ISSUE_ENDPOINT}/{issue_id}");
        let url = self.endpoint_url(&endpoint)?;
        let response = self
            .client
            .delete(url)
            .basic_auth(&self.email, Some(&self.token))
            .send()
            .await
            .map_err(|source| JiraError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(JiraError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    /// Deletes many issues, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first [`JiraError`] encountered.
    pub async fn delete_issues<I>(&self, issue_ids: I) -> Result<(), JiraError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for issue_id in issue_ids {
            self.delete_issue(issue_id.as_ref()).await?;
        }
        Ok(())
    }

    /// Issues an authenticated GET and decodes the JSON response.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, JiraError> {
        let url = self.endpoint_url(endpoint)?;
        let response = self
            .client
            .get(url)
            .basic_auth(&self.email, Some(&self.token))
            .query(query)
            .send()
            .await
            .map_err(|source| JiraError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(JiraError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }
        response.json::<T>().await.map_err(|source| JiraError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    /// Resolves a relative endpoint against the normalized base URL.
    fn endpoint_url(&self, endpoint: &str) -> Result<Url, JiraError> {
        self.base
            .join(endpoint)
            .map_err(|err| JiraError::InvalidUrl(format!("{endpoint}: {err}")))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Parses the base URL and guarantees a trailing slash so joins keep the path.
pub(crate) fn normalize_base(raw: &str) -> Result<Url, JiraError> {
    let trimmed = raw.trim();
    let text = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    Url::parse(&text).map_err(|err| JiraError::InvalidUrl(format!("{raw}: {err}")))
}

/// Builds the JQL query for all issues in a project, newest first.
///
/// The key is quoted and escaped so generated project names cannot change the
/// query structure.
pub(crate) fn jql_for_project(project_key: &str) -> String {
    let escaped = project_key.replace('\\', "\\\\").replace('"', "\\\"");
    format!("project = \"{escaped}\" ORDER BY created DESC")
}
