// crates/waypoint-data/src/lib.rs
// ============================================================================
// Module: Waypoint Test Data
// Description: Random test-data generators for end-to-end fixtures.
// Purpose: Keep fixture names unique across repeated suite runs.
// Dependencies: rand
// ============================================================================

//! ## Overview
//! Pure random generators used to name fixtures (applications, waves,
//! credentials, connections) so repeated runs against a shared environment do
//! not collide. Generators perform no I/O.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod random;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use random::CredentialKind;
pub use random::CredentialPayload;
pub use random::random_credential;
pub use random::random_email;
pub use random::random_number;
pub use random::random_url;
pub use random::random_word;
