// crates/waypoint-ui/src/error.rs
// ============================================================================
// Module: UI Errors
// Description: Error surface for page-object actions.
// Purpose: Keep variants stable for programmatic handling in tests.
// Dependencies: thiserror, thirtyfour
// ============================================================================

//! ## Overview
//! Page-object failures are either driver-level (element missing, session
//! gone), bounded-wait timeouts, or misconfiguration. Assertions live in the
//! scenarios, not here.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use thiserror::Error;
use thirtyfour::error::WebDriverError;

// ============================================================================
// SECTION: Error Types
// ============================================================================

/// Renders the trailing last-error fragment of a timeout message.
fn timeout_detail(last_error: &Option<String>) -> String {
    last_error.as_ref().map_or_else(String::new, |err| format!("; last error: {err}"))
}

/// Page-object errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum UiError {
    /// The underlying WebDriver call failed.
    #[error("webdriver error: {0}")]
    Driver(#[from] WebDriverError),

    /// A bounded wait expired before its condition held.
    #[error(
        "timed out after {timeout:?} waiting for {what} ({attempts} attempts){detail}",
        detail = timeout_detail(.last_error)
    )]
    Timeout {
        /// Human-readable description of the awaited condition.
        what: String,
        /// Total time budget that expired.
        timeout: Duration,
        /// Number of poll attempts made.
        attempts: u32,
        /// Rendered error from the most recent failed condition check.
        last_error: Option<String>,
    },

    /// Required configuration was missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// A value could not be rendered into the form the UI expects.
    #[error("invalid input for {field}: {reason}")]
    InvalidInput {
        /// Form field being filled.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}
