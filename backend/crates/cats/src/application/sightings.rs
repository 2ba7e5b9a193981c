//! Sighting Use Cases

use std::sync::Arc;

use auth::{Identity, check_ownership};
use kernel::id::CatId;

use crate::domain::entity::{Cat, Coordinates};
use crate::domain::repository::CatRepository;
use crate::error::{CatsError, CatsResult};

/// Report sighting input
pub struct ReportSightingInput {
    pub name: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
    pub photo: Option<String>,
}

/// Report sighting use case
pub struct ReportSightingUseCase<C>
where
    C: CatRepository,
{
    repo: Arc<C>,
}

impl<C> ReportSightingUseCase<C>
where
    C: CatRepository,
{
    pub fn new(repo: Arc<C>) -> Self {
        Self { repo }
    }

    /// The author comes from the verified identity, never from the body.
    pub async fn execute(&self, identity: &Identity, input: ReportSightingInput) -> CatsResult<Cat> {
        let location = Coordinates::new(input.lat, input.lng)?;
        // An omitted photo field fails the same validation as an empty one
        let cat = Cat::new(
            input.name,
            input.description,
            location,
            input.photo.unwrap_or_default(),
            identity.user_id,
        )?;

        self.repo.create(&cat).await?;

        tracing::info!(cat_id = %cat.cat_id, author = %cat.author, "Sighting reported");

        Ok(cat)
    }
}

/// Remove sighting use case
pub struct RemoveSightingUseCase<C>
where
    C: CatRepository,
{
    repo: Arc<C>,
}

impl<C> RemoveSightingUseCase<C>
where
    C: CatRepository,
{
    pub fn new(repo: Arc<C>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, identity: &Identity, cat_id: &CatId) -> CatsResult<()> {
        let cat = self
            .repo
            .find_by_id(cat_id)
            .await?
            .ok_or(CatsError::CatNotFound)?;

        if !check_ownership(&cat.author, identity) {
            return Err(CatsError::Forbidden);
        }

        self.repo.delete(cat_id).await?;

        tracing::info!(cat_id = %cat_id, "Sighting removed by author");

        Ok(())
    }
}
