// crates/waypoint-jira/src/error.rs
// ============================================================================
// Module: Jira Client Errors
// Description: Error surface for issue-tracker REST calls.
// Purpose: Keep variants stable for programmatic handling in tests.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Error variants distinguish transport failures, non-success HTTP statuses,
//! and payload decode failures so scenarios can report which layer broke.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Error Types
// ============================================================================

/// Issue-tracker client errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum JiraError {
    /// The base URL or a derived endpoint URL is invalid.
    #[error("invalid tracker url: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// A request failed at the transport layer.
    #[error("tracker request failed for {endpoint}: {source}")]
    Transport {
        /// Endpoint path that was requested.
        endpoint: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The tracker answered with a non-success status.
    #[error("tracker returned {status} for {endpoint}")]
    Status {
        /// Endpoint path that was requested.
        endpoint: String,
        /// HTTP status code.
        status: u16,
    },

    /// A response body could not be decoded into the expected shape.
    #[error("invalid tracker payload for {endpoint}: {source}")]
    Decode {
        /// Endpoint path that was requested.
        endpoint: String,
        /// Underlying decode error.
        #[source]
        source: reqwest::Error,
    },

    /// A lookup matched nothing.
    #[error("tracker has no {entity} matching {query}")]
    NotFound {
        /// Entity kind that was searched (project, issue type).
        entity: &'static str,
        /// The lookup that matched nothing.
        query: String,
    },
}
