// system-tests/tests/helpers/consistency.rs
// ============================================================================
// Module: Consistency Helpers
// Description: Bounded polls for cross-system eventual consistency.
// Purpose: Verify external side effects without arbitrary sleeps.
// Dependencies: tokio
// ============================================================================

//! ## Overview
//! After the planner triggers an external side effect (an export), the
//! tracker becomes consistent eventually. These polls re-query until a value
//! appears or the budget expires; the budget and attempt count end up in the
//! error so a slow environment is visible in the failure.

use std::future::Future;
use std::time::Duration;
use std::time::Instant;

use tokio::time::sleep;

/// Poll interval between cross-system probes.
const CROSS_SYSTEM_POLL: Duration = Duration::from_secs(2);

/// Polls `probe` until it yields a value or the timeout expires.
pub async fn poll_until_some<T, F, Fut>(
    what: &str,
    timeout: Duration,
    mut probe: F,
) -> Result<T, String>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>, String>>,
{
    let start = Instant::now();
    let mut attempts = 0u32;
    let mut last_error: Option<String> = None;
    loop {
        attempts = attempts.saturating_add(1);
        match probe().await {
            Ok(Some(value)) => return Ok(value),
            Ok(None) => {}
            Err(err) => last_error = Some(err),
        }
        if start.elapsed() > timeout {
            let detail = last_error.map_or(String::new(), |err| format!("; last error: {err}"));
            return Err(format!(
                "timed out after {attempts} attempts waiting for {what}{detail}"
            ));
        }
        sleep(CROSS_SYSTEM_POLL).await;
    }
}
