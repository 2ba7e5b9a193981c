//! Cats (Sightings and Comments) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases (report, list, remove, comment)
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! Authoring is the only business rule here: each sighting and comment
//! records its author at creation, the field never changes, and deletes
//! go through the ownership guard before touching the store.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use domain::entity::{Cat, Comment, Coordinates};
pub use error::{CatsError, CatsResult};
pub use infra::postgres::PgCatsRepository;
pub use presentation::router::{cats_router, comments_router};
