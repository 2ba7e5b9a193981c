//! Authentication Gate
//!
//! Middleware for requiring a verified identity on protected routes.
//! Checks run in a fixed order: header presence, header shape, token
//! signature and expiry, then user existence. On success the `Identity`
//! is attached to request extensions for handlers downstream.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::AuthenticateUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;

/// Gate state
#[derive(Clone)]
pub struct AuthGateState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Middleware that rejects the request unless it carries a valid bearer
/// token naming an existing user.
pub async fn require_auth<R>(
    State(state): State<AuthGateState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.config.clone());

    let identity = use_case
        .execute(req.headers())
        .await
        .map_err(|e| e.into_response())?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
