//! Raw Password Value Object
//!
//! Policy-checked plaintext accepted at registration. The minimum length
//! lives here, with the caller, not in the hasher (platform::password
//! hashes whatever it is given).

use platform::password::Plaintext;

use crate::error::{AuthError, AuthResult};

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Validated plaintext password. Not `Clone`, `Debug`-redacted, zeroized
/// on drop (all inherited from [`Plaintext`]).
#[derive(Debug)]
pub struct RawPassword(Plaintext);

impl RawPassword {
    /// Create with policy validation.
    pub fn new(raw: String) -> AuthResult<Self> {
        let plaintext = Plaintext::new(raw);
        let char_count = plaintext.char_count();

        if char_count < MIN_PASSWORD_LENGTH {
            return Err(AuthError::Validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        if char_count > MAX_PASSWORD_LENGTH {
            return Err(AuthError::Validation(format!(
                "Password must be at most {} characters",
                MAX_PASSWORD_LENGTH
            )));
        }

        Ok(Self(plaintext))
    }

    pub fn plaintext(&self) -> &Plaintext {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_too_short() {
        assert!(RawPassword::new("12345".to_string()).is_err());
        assert!(RawPassword::new("".to_string()).is_err());
    }

    #[test]
    fn test_password_minimum_length() {
        assert!(RawPassword::new("123456".to_string()).is_ok());
    }

    #[test]
    fn test_password_too_long() {
        assert!(RawPassword::new("a".repeat(129)).is_err());
        assert!(RawPassword::new("a".repeat(128)).is_ok());
    }
}
