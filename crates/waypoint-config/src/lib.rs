// crates/waypoint-config/src/lib.rs
// ============================================================================
// Module: Waypoint E2E Configuration
// Description: Environment-backed configuration for the end-to-end suite.
// Purpose: Provide typed access to planner, tracker, and WebDriver settings.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Suite configuration is read from environment variables and mapped into a
//! small typed structure shared by page objects and test scenarios. Values
//! are parsed strictly and fail closed on invalid input.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod env;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use env::EnvConfig;
pub use env::EnvKey;
pub use env::read_env_strict;
