//! Bearer Credential Extraction
//!
//! Pulls the raw token string out of an `Authorization: Bearer <token>`
//! header. Missing and malformed headers are distinct failures because
//! they surface as distinct client errors.

use axum::http::{HeaderMap, header};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BearerError {
    /// Request carries no Authorization header at all
    #[error("Authorization header is missing")]
    MissingHeader,

    /// Header present but not a usable `Bearer <token>` value
    #[error("Authorization header is not a valid Bearer credential")]
    MalformedHeader,
}

/// Extract the bearer token from request headers.
pub fn extract_bearer(headers: &HeaderMap) -> Result<String, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::MissingHeader)?
        .to_str()
        .map_err(|_| BearerError::MalformedHeader)?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or(BearerError::MalformedHeader)?
        .trim();

    if token.is_empty() {
        return Err(BearerError::MalformedHeader);
    }

    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extract_ok() {
        let headers = headers_with("Bearer abc.def");
        assert_eq!(extract_bearer(&headers).unwrap(), "abc.def");
    }

    #[test]
    fn test_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(extract_bearer(&headers), Err(BearerError::MissingHeader));
    }

    #[test]
    fn test_wrong_scheme() {
        let headers = headers_with("Basic dXNlcjpwYXNz");
        assert_eq!(extract_bearer(&headers), Err(BearerError::MalformedHeader));
    }

    #[test]
    fn test_empty_token() {
        let headers = headers_with("Bearer ");
        assert_eq!(extract_bearer(&headers), Err(BearerError::MalformedHeader));

        let headers = headers_with("Bearer    ");
        assert_eq!(extract_bearer(&headers), Err(BearerError::MalformedHeader));
    }

    #[test]
    fn test_bare_scheme() {
        let headers = headers_with("Bearer");
        assert_eq!(extract_bearer(&headers), Err(BearerError::MalformedHeader));
    }
}
