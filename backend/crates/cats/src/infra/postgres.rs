//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{CatId, CommentId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{Cat, Comment, Coordinates};
use crate::domain::repository::{CatRepository, CommentRepository};
use crate::error::CatsResult;

/// PostgreSQL-backed repository for sightings and comments
#[derive(Clone)]
pub struct PgCatsRepository {
    pool: PgPool,
}

impl PgCatsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Cat Repository Implementation
// ============================================================================

impl CatRepository for PgCatsRepository {
    async fn create(&self, cat: &Cat) -> CatsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO cats (
                cat_id,
                name,
                description,
                lat,
                lng,
                photo,
                author,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(cat.cat_id.as_uuid())
        .bind(&cat.name)
        .bind(&cat.description)
        .bind(cat.location.lat)
        .bind(cat.location.lng)
        .bind(&cat.photo)
        .bind(cat.author.as_uuid())
        .bind(cat.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_all(&self) -> CatsResult<Vec<Cat>> {
        let rows = sqlx::query_as::<_, CatRow>(
            r#"
            SELECT cat_id, name, description, lat, lng, photo, author, created_at
            FROM cats
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CatRow::into_cat).collect())
    }

    async fn find_by_id(&self, cat_id: &CatId) -> CatsResult<Option<Cat>> {
        let row = sqlx::query_as::<_, CatRow>(
            r#"
            SELECT cat_id, name, description, lat, lng, photo, author, created_at
            FROM cats
            WHERE cat_id = $1
            "#,
        )
        .bind(cat_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CatRow::into_cat))
    }

    async fn delete(&self, cat_id: &CatId) -> CatsResult<()> {
        // Comments go with the sighting via ON DELETE CASCADE
        sqlx::query("DELETE FROM cats WHERE cat_id = $1")
            .bind(cat_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Comment Repository Implementation
// ============================================================================

impl CommentRepository for PgCatsRepository {
    async fn create(&self, comment: &Comment) -> CatsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (comment_id, text, author, cat, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(comment.comment_id.as_uuid())
        .bind(&comment.text)
        .bind(comment.author.as_uuid())
        .bind(comment.cat.as_uuid())
        .bind(comment.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_cat(&self, cat_id: &CatId) -> CatsResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT comment_id, text, author, cat, created_at
            FROM comments
            WHERE cat = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(cat_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CommentRow::into_comment).collect())
    }

    async fn find_by_id(&self, comment_id: &CommentId) -> CatsResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT comment_id, text, author, cat, created_at
            FROM comments
            WHERE comment_id = $1
            "#,
        )
        .bind(comment_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CommentRow::into_comment))
    }

    async fn delete(&self, comment_id: &CommentId) -> CatsResult<()> {
        sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(comment_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// Database row for the cats table
#[derive(sqlx::FromRow)]
struct CatRow {
    cat_id: Uuid,
    name: String,
    description: String,
    lat: f64,
    lng: f64,
    photo: String,
    author: Uuid,
    created_at: DateTime<Utc>,
}

impl CatRow {
    fn into_cat(self) -> Cat {
        Cat {
            cat_id: CatId::from_uuid(self.cat_id),
            name: self.name,
            description: self.description,
            // Range was checked on the way in; rows are trusted
            location: Coordinates {
                lat: self.lat,
                lng: self.lng,
            },
            photo: self.photo,
            author: UserId::from_uuid(self.author),
            created_at: self.created_at,
        }
    }
}

/// Database row for the comments table
#[derive(sqlx::FromRow)]
struct CommentRow {
    comment_id: Uuid,
    text: String,
    author: Uuid,
    cat: Uuid,
    created_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            comment_id: CommentId::from_uuid(self.comment_id),
            text: self.text,
            author: UserId::from_uuid(self.author),
            cat: CatId::from_uuid(self.cat),
            created_at: self.created_at,
        }
    }
}
