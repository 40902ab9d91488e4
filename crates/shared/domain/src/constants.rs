//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Upper bound for percentage fields (supplier cost savings, storefront completion)
pub const MAX_PERCENTAGE: i32 = 100;

// =============================================================================
// Storefront
// =============================================================================

/// Number of named storefront setup steps
pub const SETUP_STEP_COUNT: u32 = 5;

// =============================================================================
// Recommendations
// =============================================================================

/// Items per collection returned by the dashboard recommendations view
pub const RECOMMENDATION_LIMIT: usize = 3;

// =============================================================================
// Credentials
// =============================================================================

/// Prefix marking a credential stored in the clear (non-production scheme only)
pub const PLAINTEXT_CREDENTIAL_PREFIX: &str = "plain$";

/// Well-formed Argon2id hash that matches no password.
///
/// Verified against when a login names an unknown user so both failure
/// paths cost one Argon2 evaluation.
pub const DUMMY_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c2hldHJhZGUtZHVtbXkhIQ$AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8";
