//! Domain Layer
//!
//! Contains entities, value objects, the repository trait, and the
//! ownership guard.

pub mod entity;
pub mod ownership;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::user::{Identity, User};
pub use ownership::check_ownership;
pub use repository::UserRepository;
