//! Application Layer
//!
//! Use cases for sightings and comments. Delete use cases fetch the
//! resource and run the ownership guard before touching the store.

pub mod comments;
pub mod sightings;

pub use comments::{AddCommentInput, AddCommentUseCase, RemoveCommentUseCase};
pub use sightings::{ReportSightingInput, ReportSightingUseCase, RemoveSightingUseCase};
