// system-tests/src/lib.rs
// ============================================================================
// Module: Waypoint System Tests Library
// Description: Shared configuration for end-to-end test scenarios.
// Purpose: Provide run-root resolution for the suite binaries.
// Dependencies: waypoint-config
// ============================================================================

//! ## Overview
//! This crate hosts shared configuration used by the end-to-end suite
//! binaries in `system-tests/tests`. The scenarios themselves drive a live
//! planner deployment and are gated behind the `system-tests` feature.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
