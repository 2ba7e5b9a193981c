//! Repository Traits

use kernel::id::{CatId, CommentId};

use crate::domain::entity::{Cat, Comment};
use crate::error::CatsResult;

/// Sighting persistence contract
#[trait_variant::make(CatRepository: Send)]
pub trait LocalCatRepository {
    async fn create(&self, cat: &Cat) -> CatsResult<()>;

    /// All sightings, newest first.
    async fn find_all(&self) -> CatsResult<Vec<Cat>>;

    async fn find_by_id(&self, cat_id: &CatId) -> CatsResult<Option<Cat>>;

    /// Deleting a sighting also removes its comments (cascade).
    async fn delete(&self, cat_id: &CatId) -> CatsResult<()>;
}

/// Comment persistence contract
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    async fn create(&self, comment: &Comment) -> CatsResult<()>;

    /// Comments for one sighting, newest first.
    async fn find_by_cat(&self, cat_id: &CatId) -> CatsResult<Vec<Comment>>;

    async fn find_by_id(&self, comment_id: &CommentId) -> CatsResult<Option<Comment>>;

    async fn delete(&self, comment_id: &CommentId) -> CatsResult<()>;
}
