//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use platform::password::{PasswordHash, Plaintext};

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{display_name::DisplayName, email::Email, password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Register output
pub struct RegisterOutput {
    pub user_id: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Validate inputs before touching the store
        let email = Email::new(&input.email)?;
        let name = DisplayName::new(&input.name)?;
        let password = RawPassword::new(input.password)?;

        // Friendly duplicate check; the unique index is the real arbiter
        // under concurrent registration (see PgUserRepository::create).
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::DuplicateEmail);
        }

        let password_hash = PasswordHash::hash(password.plaintext())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(email, name, password_hash);
        self.repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User registered"
        );

        Ok(RegisterOutput {
            user_id: user.user_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plaintext(s: &str) -> Plaintext {
        Plaintext::new(s.to_string())
    }

    #[test]
    fn test_hash_then_verify_roundtrip() {
        let hash = PasswordHash::hash(&plaintext("secret1")).unwrap();
        assert!(hash.verify(&plaintext("secret1")));
        assert!(!hash.verify(&plaintext("secret2")));
    }
}
