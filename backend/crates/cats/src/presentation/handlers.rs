//! HTTP Handlers
//!
//! Protected handlers take `Extension<Identity>`, inserted by the auth
//! gate that the router mounts in front of them.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json, response::IntoResponse};
use std::sync::Arc;

use auth::Identity;
use kernel::id::{CatId, CommentId};

use crate::application::{
    AddCommentInput, AddCommentUseCase, RemoveCommentUseCase, RemoveSightingUseCase,
    ReportSightingInput, ReportSightingUseCase,
};
use crate::domain::repository::{CatRepository, CommentRepository};
use crate::error::{CatsError, CatsResult};
use crate::presentation::dto::{AddCommentRequest, CatDto, CommentDto, ReportSightingRequest};

/// Shared state for cats handlers
#[derive(Clone)]
pub struct CatsAppState<R>
where
    R: CatRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Sightings
// ============================================================================

/// GET /cats
pub async fn list_cats<R>(State(state): State<CatsAppState<R>>) -> CatsResult<Json<Vec<CatDto>>>
where
    R: CatRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let cats = state.repo.find_all().await?;
    Ok(Json(cats.into_iter().map(CatDto::from).collect()))
}

/// GET /cats/{id}
pub async fn get_cat<R>(
    State(state): State<CatsAppState<R>>,
    Path(id): Path<CatId>,
) -> CatsResult<Json<CatDto>>
where
    R: CatRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let cat = CatRepository::find_by_id(state.repo.as_ref(), &id)
        .await?
        .ok_or(CatsError::CatNotFound)?;
    Ok(Json(cat.into()))
}

/// POST /cats
pub async fn report_cat<R>(
    State(state): State<CatsAppState<R>>,
    Extension(identity): Extension<Identity>,
    Json(req): Json<ReportSightingRequest>,
) -> CatsResult<impl IntoResponse>
where
    R: CatRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = ReportSightingUseCase::new(state.repo.clone());

    let input = ReportSightingInput {
        name: req.name,
        description: req.description,
        lat: req.lat,
        lng: req.lng,
        photo: req.photo,
    };

    let cat = use_case.execute(&identity, input).await?;

    Ok((StatusCode::CREATED, Json(CatDto::from(cat))))
}

/// DELETE /cats/{id}
pub async fn delete_cat<R>(
    State(state): State<CatsAppState<R>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<CatId>,
) -> CatsResult<StatusCode>
where
    R: CatRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = RemoveSightingUseCase::new(state.repo.clone());
    use_case.execute(&identity, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Comments
// ============================================================================

/// GET /comments/{catId}
pub async fn list_comments<R>(
    State(state): State<CatsAppState<R>>,
    Path(cat_id): Path<CatId>,
) -> CatsResult<Json<Vec<CommentDto>>>
where
    R: CatRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let comments = state.repo.find_by_cat(&cat_id).await?;
    Ok(Json(comments.into_iter().map(CommentDto::from).collect()))
}

/// POST /comments/{catId}
pub async fn add_comment<R>(
    State(state): State<CatsAppState<R>>,
    Extension(identity): Extension<Identity>,
    Path(cat_id): Path<CatId>,
    Json(req): Json<AddCommentRequest>,
) -> CatsResult<impl IntoResponse>
where
    R: CatRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = AddCommentUseCase::new(state.repo.clone(), state.repo.clone());

    let comment = use_case
        .execute(&identity, &cat_id, AddCommentInput { text: req.text })
        .await?;

    Ok((StatusCode::CREATED, Json(CommentDto::from(comment))))
}

/// DELETE /comments/{id}
pub async fn delete_comment<R>(
    State(state): State<CatsAppState<R>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<CommentId>,
) -> CatsResult<StatusCode>
where
    R: CatRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = RemoveCommentUseCase::new(state.repo.clone());
    use_case.execute(&identity, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
