//! Domain Layer

pub mod entity;
pub mod repository;

pub use entity::{Cat, Comment, Coordinates};
pub use repository::{CatRepository, CommentRepository};
