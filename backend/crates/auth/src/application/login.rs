//! Login Use Case
//!
//! Verifies credentials and issues a signed token.

use std::sync::Arc;

use platform::password::Plaintext;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::Identity;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    pub token: String,
    pub user: Identity,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    /// Every failure path collapses to `InvalidCredentials` so the
    /// response never reveals whether the email exists.
    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let email = Email::new(&input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let candidate = Plaintext::new(input.password);
        if !user.password_hash.verify(&candidate) {
            tracing::warn!(email = %email, "Login failed: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.config.signer().issue(
            *user.user_id.as_uuid(),
            user.email.as_str(),
            self.config.token_ttl,
        );

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput {
            token,
            user: user.identity(),
        })
    }
}
