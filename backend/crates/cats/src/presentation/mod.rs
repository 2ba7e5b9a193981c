//! Presentation Layer

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::CatsAppState;
pub use router::{cats_router, comments_router};
