// crates/waypoint-data/src/random.rs
// ============================================================================
// Module: Random Generators
// Description: Random words, numbers, emails, and URLs for fixtures.
// Purpose: Provide collision-resistant fixture values without I/O.
// Dependencies: rand
// ============================================================================

//! ## Overview
//! Generators draw from the thread-local RNG. Words are lowercase ASCII so
//! they are safe in form fields, table lookups, and JQL quoting.

// ============================================================================
// SECTION: Imports
// ============================================================================

use rand::Rng;

// ============================================================================
// SECTION: Generators
// ============================================================================

/// Returns a random lowercase ASCII word of the requested length.
#[must_use]
pub fn random_word(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length).map(|_| char::from(rng.gen_range(b'a'..=b'z'))).collect()
}

/// Returns a random number in the inclusive range `[min, max]`.
///
/// The bounds are swapped when given in reverse order so callers cannot
/// trigger an empty-range panic.
#[must_use]
pub fn random_number(min: u64, max: u64) -> u64 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    rand::thread_rng().gen_range(low..=high)
}

/// Returns a random email address on an example domain.
#[must_use]
pub fn random_email() -> String {
    format!("{}.{}@example.com", random_word(6), random_word(8))
}

/// Returns a random HTTPS URL on an example domain.
#[must_use]
pub fn random_url() -> String {
    format!("https://{}.example.com", random_word(10))
}

// ============================================================================
// SECTION: Credential Payloads
// ============================================================================

/// Shortest random API token the generator produces.
const MIN_TOKEN_LENGTH: u64 = 24;

/// Longest random API token the generator produces.
const MAX_TOKEN_LENGTH: u64 = 32;

/// Kinds of credential payloads the planner's credential form accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    /// Basic-auth pair (email + API token) for an issue tracker.
    JiraBasic,
}

/// A filled credential form: a unique name plus the secret fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPayload {
    /// Generated credential name; unique per run.
    pub name: String,
    /// Account email, supplied or random.
    pub email: String,
    /// API token, supplied or random.
    pub token: String,
}

/// Builds a credential payload of the given kind.
///
/// Supplied values are used as-is; missing ones fall back to random data so
/// a payload can always be generated, with or without a live tracker.
#[must_use]
pub fn random_credential(
    kind: CredentialKind,
    email: Option<&str>,
    token: Option<&str>,
) -> CredentialPayload {
    match kind {
        CredentialKind::JiraBasic => CredentialPayload {
            name: format!("cred-{}", random_word(5)),
            email: email.map_or_else(random_email, ToString::to_string),
            token: token.map_or_else(random_token, ToString::to_string),
        },
    }
}

/// Returns a random API-token-shaped string.
fn random_token() -> String {
    let length =
        usize::try_from(random_number(MIN_TOKEN_LENGTH, MAX_TOKEN_LENGTH)).unwrap_or(24);
    random_word(length)
}
