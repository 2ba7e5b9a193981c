//! Sighting and Comment Entities
//!
//! Both carry an `author` set at creation from the authenticated
//! identity. Nothing in this crate mutates it afterwards.

use chrono::{DateTime, Utc};
use kernel::id::{CatId, CommentId, UserId};

use crate::error::{CatsError, CatsResult};

pub const CAT_NAME_MAX_LENGTH: usize = 100;
pub const DESCRIPTION_MAX_LENGTH: usize = 1000;
pub const COMMENT_MAX_LENGTH: usize = 500;

/// WGS84 coordinates of a sighting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> CatsResult<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(CatsError::Validation(
                "Latitude must be between -90 and 90".to_string(),
            ));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(CatsError::Validation(
                "Longitude must be between -180 and 180".to_string(),
            ));
        }
        Ok(Self { lat, lng })
    }
}

/// Cat sighting entity
#[derive(Debug, Clone)]
pub struct Cat {
    pub cat_id: CatId,
    pub name: String,
    pub description: String,
    pub location: Coordinates,
    /// Opaque reference to a stored photo; this crate never interprets it
    pub photo: String,
    /// Reporting user, immutable after creation
    pub author: UserId,
    pub created_at: DateTime<Utc>,
}

impl Cat {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        location: Coordinates,
        photo: impl Into<String>,
        author: UserId,
    ) -> CatsResult<Self> {
        let name: String = name.into();
        let name = name.trim().to_string();
        if name.is_empty() || name.chars().count() > CAT_NAME_MAX_LENGTH {
            return Err(CatsError::Validation(format!(
                "Name must be 1 to {CAT_NAME_MAX_LENGTH} characters"
            )));
        }

        let description: String = description.into();
        let description = description.trim().to_string();
        if description.chars().count() > DESCRIPTION_MAX_LENGTH {
            return Err(CatsError::Validation(format!(
                "Description must be at most {DESCRIPTION_MAX_LENGTH} characters"
            )));
        }

        // Every sighting carries a photo reference
        let photo: String = photo.into();
        let photo = photo.trim().to_string();
        if photo.is_empty() {
            return Err(CatsError::Validation("Photo is required".to_string()));
        }

        Ok(Self {
            cat_id: CatId::new(),
            name,
            description,
            location,
            photo,
            author,
            created_at: Utc::now(),
        })
    }
}

/// Comment entity
#[derive(Debug, Clone)]
pub struct Comment {
    pub comment_id: CommentId,
    pub text: String,
    /// Commenting user, immutable after creation
    pub author: UserId,
    /// Sighting this comment belongs to
    pub cat: CatId,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(text: impl Into<String>, author: UserId, cat: CatId) -> CatsResult<Self> {
        let text: String = text.into();
        let text = text.trim().to_string();
        if text.is_empty() || text.chars().count() > COMMENT_MAX_LENGTH {
            return Err(CatsError::Validation(format!(
                "Comment must be 1 to {COMMENT_MAX_LENGTH} characters"
            )));
        }

        Ok(Self {
            comment_id: CommentId::new(),
            text,
            author,
            cat,
            created_at: Utc::now(),
        })
    }
}
