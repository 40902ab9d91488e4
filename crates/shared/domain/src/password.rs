//! Password credential value object.
//!
//! Credentials are hashed with Argon2id unless the deployment explicitly opts
//! into the non-production plaintext scheme. The encoded form is
//! self-describing, so verification never needs to know which scheme wrote it.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::constants::PLAINTEXT_CREDENTIAL_PREFIX;
use crate::error::{DomainError, DomainResult};

/// How new credentials are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordScheme {
    /// Salted Argon2id hash (PHC string format)
    #[default]
    Argon2,
    /// NON-PRODUCTION: the password is kept in the clear and compared as a string
    Plaintext,
}

impl PasswordScheme {
    /// Encode a plain text password under this scheme.
    pub fn hash(&self, plain_text: &str) -> DomainResult<Password> {
        if plain_text.is_empty() {
            return Err(DomainError::password("Password must not be empty"));
        }

        let encoded = match self {
            PasswordScheme::Argon2 => {
                let salt = SaltString::generate(&mut OsRng);
                Argon2::default()
                    .hash_password(plain_text.as_bytes(), &salt)
                    .map_err(|e| DomainError::internal(format!("Password hash failed: {}", e)))?
                    .to_string()
            }
            PasswordScheme::Plaintext => format!("{}{}", PLAINTEXT_CREDENTIAL_PREFIX, plain_text),
        };

        Ok(Password { encoded })
    }

    /// Whether this scheme is only fit for local development.
    pub fn is_production_safe(&self) -> bool {
        matches!(self, PasswordScheme::Argon2)
    }
}

/// Stored credential.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    encoded: String,
}

// Don't expose the credential in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("encoded", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Wrap an already encoded credential.
    pub fn from_encoded(encoded: impl Into<String>) -> Self {
        Self {
            encoded: encoded.into(),
        }
    }

    /// Get the encoded credential for storage.
    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    /// True when the credential was written by the plaintext scheme.
    pub fn is_plaintext(&self) -> bool {
        self.encoded.starts_with(PLAINTEXT_CREDENTIAL_PREFIX)
    }

    /// Verify a plain text password against this credential.
    pub fn verify(&self, plain_text: &str) -> bool {
        match self.encoded.strip_prefix(PLAINTEXT_CREDENTIAL_PREFIX) {
            Some(stored) => stored == plain_text,
            None => match PasswordHash::new(&self.encoded) {
                Ok(parsed) => Argon2::default()
                    .verify_password(plain_text.as_bytes(), &parsed)
                    .is_ok(),
                Err(_) => false,
            },
        }
    }
}
