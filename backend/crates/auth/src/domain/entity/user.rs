//! User Entity
//!
//! The credential store record: identity plus password hash. Created on
//! registration, read on login and on every authenticated request; never
//! updated or deleted by any in-scope operation.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::PasswordHash;

use crate::domain::value_object::{display_name::DisplayName, email::Email};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Opaque unique identifier, immutable after creation
    pub user_id: UserId,
    /// Unique, case-normalized email
    pub email: Email,
    /// Display name
    pub name: DisplayName,
    /// Argon2id hash; never serialized, never logged
    pub password_hash: PasswordHash,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a freshly assigned id.
    pub fn new(email: Email, name: DisplayName, password_hash: PasswordHash) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            email,
            name,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// The request-facing view of this user: the password hash is
    /// stripped before anything leaves the auth core.
    pub fn identity(&self) -> Identity {
        Identity {
            user_id: self.user_id,
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// Verified request identity, attached to request extensions by the
/// authentication gate. Carries no secret material.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: UserId,
    pub email: Email,
    pub name: DisplayName,
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::Plaintext;

    fn sample_user() -> User {
        User::new(
            Email::new("ann@example.com").unwrap(),
            DisplayName::new("Ann").unwrap(),
            PasswordHash::hash(&Plaintext::new("secret1".to_string())).unwrap(),
        )
    }

    #[test]
    fn test_new_assigns_id_and_timestamps() {
        let user = sample_user();
        assert_eq!(user.created_at, user.updated_at);
        assert_eq!(user.user_id.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn test_identity_carries_no_hash() {
        let user = sample_user();
        let identity = user.identity();
        assert_eq!(identity.user_id, user.user_id);
        assert_eq!(identity.email, user.email);
        // The Identity type has no password field; make sure debug output
        // leaks nothing either.
        let debug = format!("{:?}", identity);
        assert!(!debug.contains("argon2"));
    }
}
