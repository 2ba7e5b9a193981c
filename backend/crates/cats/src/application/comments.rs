//! Comment Use Cases

use std::sync::Arc;

use auth::{Identity, check_ownership};
use kernel::id::{CatId, CommentId};

use crate::domain::entity::Comment;
use crate::domain::repository::{CatRepository, CommentRepository};
use crate::error::{CatsError, CatsResult};

/// Add comment input
pub struct AddCommentInput {
    pub text: String,
}

/// Add comment use case
pub struct AddCommentUseCase<C, M>
where
    C: CatRepository,
    M: CommentRepository,
{
    cat_repo: Arc<C>,
    comment_repo: Arc<M>,
}

impl<C, M> AddCommentUseCase<C, M>
where
    C: CatRepository,
    M: CommentRepository,
{
    pub fn new(cat_repo: Arc<C>, comment_repo: Arc<M>) -> Self {
        Self {
            cat_repo,
            comment_repo,
        }
    }

    pub async fn execute(
        &self,
        identity: &Identity,
        cat_id: &CatId,
        input: AddCommentInput,
    ) -> CatsResult<Comment> {
        // Commenting on a missing sighting is a 404, not a validation error
        if self.cat_repo.find_by_id(cat_id).await?.is_none() {
            return Err(CatsError::CatNotFound);
        }

        let comment = Comment::new(input.text, identity.user_id, *cat_id)?;
        self.comment_repo.create(&comment).await?;

        tracing::info!(
            comment_id = %comment.comment_id,
            cat_id = %cat_id,
            "Comment added"
        );

        Ok(comment)
    }
}

/// Remove comment use case
pub struct RemoveCommentUseCase<M>
where
    M: CommentRepository,
{
    repo: Arc<M>,
}

impl<M> RemoveCommentUseCase<M>
where
    M: CommentRepository,
{
    pub fn new(repo: Arc<M>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, identity: &Identity, comment_id: &CommentId) -> CatsResult<()> {
        let comment = self
            .repo
            .find_by_id(comment_id)
            .await?
            .ok_or(CatsError::CommentNotFound)?;

        if !check_ownership(&comment.author, identity) {
            return Err(CatsError::Forbidden);
        }

        self.repo.delete(comment_id).await?;

        tracing::info!(comment_id = %comment_id, "Comment removed by author");

        Ok(())
    }
}
