//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository trait, ownership guard
//! - `application/` - Use cases (register, login, authenticate)
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, gate middleware
//!
//! ## Features
//! - Registration and login with email + password
//! - Stateless signed bearer tokens (1 hour, non-renewable)
//! - Per-request identity resolution against the credential store
//! - Ownership guard for author-only mutations
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, salt embedded in the stored hash
//! - Unknown email and wrong password produce the same client error
//! - Whoever holds a token holds the identity until expiry; there is no
//!   revocation list, the token secret must stay process configuration

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::entity::user::Identity;
pub use domain::ownership::check_ownership;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::middleware::{AuthGateState, require_auth};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
