//! Signed Bearer Tokens
//!
//! A token is `base64url(claims-json) . base64url(hmac-sha256(payload))`,
//! signed with a process-wide secret. The claims assert a user identity
//! for a fixed validity window; tokens are not renewable and there is no
//! revocation list, so expiry is the only termination mechanism.

use std::time::Duration;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Claims embedded in a signed token.
///
/// Invariant: `expires_at = issued_at + ttl` (unix seconds, fixed ttl).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Asserted user identity
    pub user_id: Uuid,
    /// Email denormalized at issuance time
    pub email: String,
    /// Issuance time (unix seconds)
    pub issued_at: i64,
    /// Expiry time (unix seconds)
    pub expires_at: i64,
}

/// Closed verification failure set, matched exhaustively by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Token cannot be parsed or its signature does not verify
    #[error("Token is malformed")]
    Malformed,

    /// Token is well-formed but past its validity window
    #[error("Token has expired")]
    Expired,
}

/// Issues and verifies signed tokens with a process-wide secret.
///
/// The secret is read-only after construction; a verifier built with a
/// different secret rejects every token this signer issues.
#[derive(Clone)]
pub struct TokenSigner {
    secret: Vec<u8>,
}

impl TokenSigner {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Issue a token asserting `user_id` for `ttl` from now.
    pub fn issue(&self, user_id: Uuid, email: &str, ttl: Duration) -> String {
        let now = Utc::now().timestamp();
        self.issue_claims(&TokenClaims {
            user_id,
            email: email.to_string(),
            issued_at: now,
            expires_at: now + ttl.as_secs() as i64,
        })
    }

    /// Sign explicit claims. Exposed so tests can construct tokens with
    /// arbitrary validity windows.
    pub fn issue_claims(&self, claims: &TokenClaims) -> String {
        let payload = URL_SAFE_NO_PAD.encode(
            serde_json::to_vec(claims).expect("token claims always serialize"),
        );

        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        let signature = mac.finalize().into_bytes();

        format!("{}.{}", payload, URL_SAFE_NO_PAD.encode(signature))
    }

    /// Verify signature and expiry, returning the embedded claims.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let (payload_b64, signature_b64) =
            token.split_once('.').ok_or(TokenError::Malformed)?;

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| TokenError::Malformed)?;

        // Signature check first: claims from an unverified payload are
        // never inspected.
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload_b64.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| TokenError::Malformed)?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| TokenError::Malformed)?;
        let claims: TokenClaims =
            serde_json::from_slice(&payload).map_err(|_| TokenError::Malformed)?;

        if Utc::now().timestamp() > claims.expires_at {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("secret", &"[SECRET]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(3600);

    fn signer() -> TokenSigner {
        TokenSigner::new(*b"test-secret-key-for-token-tests!")
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let user_id = Uuid::new_v4();
        let token = signer().issue(user_id, "ann@example.com", TTL);

        let claims = signer().verify(&token).unwrap();
        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.email, "ann@example.com");
        assert_eq!(claims.expires_at, claims.issued_at + 3600);
    }

    #[test]
    fn test_expired_token() {
        let now = Utc::now().timestamp();
        let token = signer().issue_claims(&TokenClaims {
            user_id: Uuid::new_v4(),
            email: "ann@example.com".to_string(),
            issued_at: now - 7200,
            expires_at: now - 3600,
        });

        assert_eq!(signer().verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_one_second_before_expiry_is_valid() {
        let now = Utc::now().timestamp();
        let token = signer().issue_claims(&TokenClaims {
            user_id: Uuid::new_v4(),
            email: "ann@example.com".to_string(),
            issued_at: now - 3599,
            expires_at: now + 1,
        });

        assert!(signer().verify(&token).is_ok());
    }

    #[test]
    fn test_tampered_signature_is_malformed() {
        let token = signer().issue(Uuid::new_v4(), "ann@example.com", TTL);
        let (payload, signature) = token.split_once('.').unwrap();

        // Flip every character of the signature segment in turn; none may
        // verify.
        for (i, c) in signature.char_indices() {
            let replacement = if c == 'A' { 'B' } else { 'A' };
            let mut tampered = signature.to_string();
            tampered.replace_range(i..i + c.len_utf8(), &replacement.to_string());

            let forged = format!("{}.{}", payload, tampered);
            assert_eq!(
                signer().verify(&forged),
                Err(TokenError::Malformed),
                "tampered signature at index {i} must not verify"
            );
        }
    }

    #[test]
    fn test_tampered_payload_is_malformed() {
        let token = signer().issue(Uuid::new_v4(), "ann@example.com", TTL);
        let (payload, signature) = token.split_once('.').unwrap();

        let mut tampered = payload.to_string();
        tampered.replace_range(0..1, "x");
        let forged = format!("{}.{}", tampered, signature);

        assert_eq!(signer().verify(&forged), Err(TokenError::Malformed));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = signer().issue(Uuid::new_v4(), "ann@example.com", TTL);
        let other = TokenSigner::new(*b"a-completely-different-secret!!!");

        assert_eq!(other.verify(&token), Err(TokenError::Malformed));
    }

    #[test]
    fn test_garbage_is_malformed() {
        assert_eq!(signer().verify("garbage"), Err(TokenError::Malformed));
        assert_eq!(signer().verify(""), Err(TokenError::Malformed));
        assert_eq!(signer().verify("a.b.c"), Err(TokenError::Malformed));
        assert_eq!(signer().verify("!!.!!"), Err(TokenError::Malformed));
    }
}
