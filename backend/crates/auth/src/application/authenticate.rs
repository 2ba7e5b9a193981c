//! Authenticate Use Case
//!
//! The per-request step behind the authentication gate: extract the
//! bearer token, verify the signature and expiry, then load the user it
//! names. Runs in a fixed order so each failure maps to one error.

use std::sync::Arc;

use axum::http::HeaderMap;
use kernel::id::UserId;
use platform::bearer::extract_bearer;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::Identity;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Authenticate use case
pub struct AuthenticateUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> AuthenticateUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, headers: &HeaderMap) -> AuthResult<Identity> {
        let token = extract_bearer(headers)?;
        let claims = self.config.signer().verify(&token)?;

        // A valid token can outlive its user; treat that as unauthorized,
        // not as a server error.
        let user_id = UserId::from_uuid(claims.user_id);
        let user = self
            .repo
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::UnknownUser)?;

        Ok(user.identity())
    }
}
