// crates/waypoint-ui/src/waits.rs
// ============================================================================
// Module: Bounded Waits
// Description: Condition-based polling with timeout for UI state.
// Purpose: Replace fixed-duration sleeps with bounded condition polls.
// Dependencies: tokio
// ============================================================================

//! ## Overview
//! Every wait in the suite is a bounded poll: re-evaluate a condition at a
//! short interval until it holds or the time budget expires. The timeout is
//! part of the error so a flaking environment is visible in the failure.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::future::Future;
use std::time::Duration;
use std::time::Instant;

use tokio::time::sleep;

use crate::error::UiError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default poll interval between condition checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Default time budget for a single bounded wait.
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// SECTION: Polling
// ============================================================================

/// Polls `check` until it returns `true` or the timeout expires.
///
/// Condition errors are treated as "not yet" while budget remains, so a
/// condition may probe elements that do not exist yet; the most recent
/// condition error rides along in the timeout when the budget runs out.
///
/// # Errors
///
/// Returns [`UiError::Timeout`] when the budget expires before the condition
/// holds.
pub async fn wait_until<F, Fut>(
    what: &str,
    timeout: Duration,
    poll: Duration,
    mut check: F,
) -> Result<(), UiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, UiError>>,
{
    let start = Instant::now();
    let mut attempts = 0u32;
    let mut last_error: Option<String> = None;
    loop {
        attempts = attempts.saturating_add(1);
        match check().await {
            Ok(true) => return Ok(()),
            Ok(false) => {}
            Err(err) => last_error = Some(err.to_string()),
        }
        if start.elapsed() > timeout {
            return Err(UiError::Timeout {
                what: what.to_string(),
                timeout,
                attempts,
                last_error,
            });
        }
        sleep(poll).await;
    }
}

/// Polls `probe` until it yields a value or the timeout expires.
///
/// # Errors
///
/// Returns [`UiError::Timeout`] when the budget expires before a value is
/// produced.
pub async fn wait_for_value<T, F, Fut>(
    what: &str,
    timeout: Duration,
    poll: Duration,
    mut probe: F,
) -> Result<T, UiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>, UiError>>,
{
    let start = Instant::now();
    let mut attempts = 0u32;
    let mut last_error: Option<String> = None;
    loop {
        attempts = attempts.saturating_add(1);
        match probe().await {
            Ok(Some(value)) => return Ok(value),
            Ok(None) => {}
            Err(err) => last_error = Some(err.to_string()),
        }
        if start.elapsed() > timeout {
            return Err(UiError::Timeout {
                what: what.to_string(),
                timeout,
                attempts,
                last_error,
            });
        }
        sleep(poll).await;
    }
}
