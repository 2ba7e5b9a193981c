//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::token::TokenSigner;

/// Fallback signing secret used when `AUTH_TOKEN_SECRET` is unset.
/// Fine for local development; a deployment must override it.
const DEV_TOKEN_SECRET: &str = "streetcats-dev-secret";

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret for token signing
    pub token_secret: Vec<u8>,
    /// Token lifetime (1 hour)
    pub token_ttl: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: DEV_TOKEN_SECRET.as_bytes().to_vec(),
            token_ttl: Duration::from_secs(3600),
        }
    }
}

impl AuthConfig {
    pub fn new(token_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: token_secret.into(),
            ..Default::default()
        }
    }

    /// Build config from the environment. Missing `AUTH_TOKEN_SECRET`
    /// falls back to the development secret with a warning rather than
    /// refusing to start.
    pub fn from_env() -> Self {
        match std::env::var("AUTH_TOKEN_SECRET") {
            Ok(secret) if !secret.is_empty() => Self::new(secret),
            _ => {
                tracing::warn!(
                    "AUTH_TOKEN_SECRET not set, using development secret; \
                     tokens are forgeable by anyone who reads the source"
                );
                Self::default()
            }
        }
    }

    /// Token signer bound to this config's secret.
    pub fn signer(&self) -> TokenSigner {
        TokenSigner::new(self.token_secret.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_dev_secret() {
        let config = AuthConfig::default();
        assert_eq!(config.token_secret, DEV_TOKEN_SECRET.as_bytes());
        assert_eq!(config.token_ttl, Duration::from_secs(3600));
    }

    #[test]
    fn test_new_overrides_secret_keeps_ttl() {
        let config = AuthConfig::new("deploy-secret");
        assert_eq!(config.token_secret, b"deploy-secret");
        assert_eq!(config.token_ttl, Duration::from_secs(3600));
    }
}
