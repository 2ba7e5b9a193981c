//! Repository Trait
//!
//! The credential store contract. Implementation is in the infrastructure
//! layer; no other component may read or write user records directly.

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user. Fails with `DuplicateEmail` when another record
    /// shares the normalized email; under concurrent registrations the
    /// store resolves the race atomically (unique constraint), not by
    /// pre-checking.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by normalized email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Resolve a token's claimed identity to a live record. Called per
    /// request and never cached, so a deleted user takes effect
    /// immediately.
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;
}
