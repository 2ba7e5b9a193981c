//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::{Cat, Comment};

// ============================================================================
// Sightings
// ============================================================================

/// Report sighting request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSightingRequest {
    pub name: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
    /// Required; optional here only so an omitted field surfaces as the
    /// domain's validation error instead of a body-deserialization reject
    pub photo: Option<String>,
}

/// Sighting response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
    pub photo: String,
    /// Author's user id; clients resolve names themselves
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl From<Cat> for CatDto {
    fn from(cat: Cat) -> Self {
        Self {
            id: cat.cat_id.to_string(),
            name: cat.name,
            description: cat.description,
            lat: cat.location.lat,
            lng: cat.location.lng,
            photo: cat.photo,
            author: cat.author.to_string(),
            created_at: cat.created_at,
        }
    }
}

// ============================================================================
// Comments
// ============================================================================

/// Add comment request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentRequest {
    pub text: String,
}

/// Comment response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: String,
    pub text: String,
    pub author: String,
    pub cat: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.comment_id.to_string(),
            text: comment.text,
            author: comment.author.to_string(),
            cat: comment.cat.to_string(),
            created_at: comment.created_at,
        }
    }
}
