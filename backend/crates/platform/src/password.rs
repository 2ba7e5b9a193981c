//! Password Hashing and Verification
//!
//! Argon2id hashing with:
//! - Random per-password salt, embedded in the PHC output (verification
//!   needs only the stored hash and the candidate)
//! - Zeroization of plaintext material
//! - Constant-time comparison (inside argon2)
//!
//! Password policy (minimum length etc.) is deliberately NOT enforced
//! here; it belongs to the registration caller.

use std::fmt;

use argon2::{Argon2, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Invalid hash format
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Plaintext (Zeroized on drop)
// ============================================================================

/// Plaintext password with automatic memory zeroization
///
/// Securely erased from memory when dropped. Does not implement `Clone`
/// to prevent accidental copies; `Debug` output is redacted. Unicode is
/// normalized with NFKC so the same visual password always hashes the
/// same bytes.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Plaintext(String);

impl Plaintext {
    pub fn new(raw: String) -> Self {
        Self(raw.nfkc().collect())
    }

    /// Number of Unicode code points (for caller-side policy checks)
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for Plaintext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Plaintext").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Password hash (safe to store)
// ============================================================================

/// Password hash in PHC string format
///
/// The PHC string carries the algorithm identifier, parameters, salt, and
/// hash, so verification is self-contained.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash {
    hash: String,
}

impl PasswordHash {
    /// Hash a plaintext password with Argon2id and a fresh random salt.
    pub fn hash(password: &Plaintext) -> Result<Self, PasswordHashError> {
        let salt = SaltString::generate(OsRng);

        // argon2's defaults are the OWASP-recommended Argon2id parameters
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Create from a PHC string loaded from the store.
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        argon2::PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Self { hash })
    }

    /// Get the PHC string for storage.
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a candidate password against this hash.
    ///
    /// Never errors: a malformed stored hash verifies as `false`.
    pub fn verify(&self, candidate: &Plaintext) -> bool {
        let parsed_hash = match argon2::PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        // Argon2 uses constant-time comparison internally
        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHash")
            .field("hash", &"[HASH]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = Plaintext::new("correct horse battery".to_string());
        let hashed = PasswordHash::hash(&password).unwrap();

        assert!(hashed.verify(&password));

        let wrong = Plaintext::new("wrong horse battery".to_string());
        assert!(!hashed.verify(&wrong));
    }

    #[test]
    fn test_salt_varies() {
        let password = Plaintext::new("same input".to_string());
        let a = PasswordHash::hash(&password).unwrap();
        let b = PasswordHash::hash(&password).unwrap();
        assert_ne!(a.as_phc_string(), b.as_phc_string());
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let password = Plaintext::new("roundtrip pass".to_string());
        let hashed = PasswordHash::hash(&password).unwrap();

        let restored = PasswordHash::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&password));
    }

    #[test]
    fn test_invalid_phc_string_rejected() {
        assert!(PasswordHash::from_phc_string("not_a_valid_hash").is_err());
    }

    #[test]
    fn test_verify_malformed_hash_is_false() {
        // Bypass from_phc_string validation to simulate a corrupted row
        let corrupted = PasswordHash {
            hash: "garbage".to_string(),
        };
        let password = Plaintext::new("whatever pass".to_string());
        assert!(!corrupted.verify(&password));
    }

    #[test]
    fn test_nfkc_normalization() {
        // U+FF41 FULLWIDTH LATIN SMALL LETTER A normalizes to 'a'
        let fullwidth = Plaintext::new("\u{ff41}bcdefgh".to_string());
        let ascii = Plaintext::new("abcdefgh".to_string());
        let hashed = PasswordHash::hash(&ascii).unwrap();
        assert!(hashed.verify(&fullwidth));
    }

    #[test]
    fn test_debug_redaction() {
        let password = Plaintext::new("topsecret".to_string());
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("topsecret"));
    }
}
