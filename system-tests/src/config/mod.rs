// system-tests/src/config/mod.rs
// ============================================================================
// Module: Suite Run Configuration
// Description: Run-root resolution for test artifacts.
// Purpose: Let CI redirect per-test artifact roots via the environment.
// Dependencies: waypoint-config
// ============================================================================

//! ## Overview
//! Artifact roots default to `target/system-tests/run_{stamp}` and may be
//! overridden with `WAYPOINT_E2E_RUN_ROOT`. Values are read strictly; invalid
//! UTF-8 fails closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use waypoint_config::read_env_strict;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable overriding the artifact run root.
pub const ENV_RUN_ROOT: &str = "WAYPOINT_E2E_RUN_ROOT";

// ============================================================================
// SECTION: Run Root
// ============================================================================

/// Returns the configured run-root override, if any.
///
/// # Errors
///
/// Returns an error when the value is set but not valid UTF-8 or empty.
pub fn run_root_override() -> Result<Option<PathBuf>, String> {
    match read_env_strict(ENV_RUN_ROOT)? {
        Some(value) if value.trim().is_empty() => {
            Err(format!("{ENV_RUN_ROOT} must not be empty"))
        }
        Some(value) => Ok(Some(PathBuf::from(value))),
        None => Ok(None),
    }
}
