//! Cats and Comments Routers
//!
//! Read routes are public. Create and delete routes sit behind the auth
//! gate, which supplies the `Identity` the handlers require.

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::presentation::middleware::{AuthGateState, require_auth};
use auth::{AuthConfig, PgUserRepository};

use crate::domain::repository::{CatRepository, CommentRepository};
use crate::infra::postgres::PgCatsRepository;
use crate::presentation::handlers::{self, CatsAppState};

/// Create the cats router with PostgreSQL repositories
pub fn cats_router(repo: PgCatsRepository, auth_repo: PgUserRepository, config: AuthConfig) -> Router {
    cats_router_generic(repo, auth_repo, config)
}

/// Create the comments router with PostgreSQL repositories
pub fn comments_router(
    repo: PgCatsRepository,
    auth_repo: PgUserRepository,
    config: AuthConfig,
) -> Router {
    comments_router_generic(repo, auth_repo, config)
}

/// Generic cats router for any repository implementations
pub fn cats_router_generic<R, U>(repo: R, auth_repo: U, config: AuthConfig) -> Router
where
    R: CatRepository + CommentRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = CatsAppState {
        repo: Arc::new(repo),
    };
    let gate = AuthGateState {
        repo: Arc::new(auth_repo),
        config: Arc::new(config),
    };

    let protected = Router::new()
        .route("/", post(handlers::report_cat::<R>))
        .route("/{id}", delete(handlers::delete_cat::<R>))
        .route_layer(middleware::from_fn_with_state(gate, require_auth::<U>));

    Router::new()
        .route("/", get(handlers::list_cats::<R>))
        .route("/{id}", get(handlers::get_cat::<R>))
        .merge(protected)
        .with_state(state)
}

/// Generic comments router for any repository implementations
pub fn comments_router_generic<R, U>(repo: R, auth_repo: U, config: AuthConfig) -> Router
where
    R: CatRepository + CommentRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = CatsAppState {
        repo: Arc::new(repo),
    };
    let gate = AuthGateState {
        repo: Arc::new(auth_repo),
        config: Arc::new(config),
    };

    // One param name for the whole position: the id names a cat on GET
    // and POST, a comment on DELETE.
    let protected = Router::new()
        .route("/{id}", post(handlers::add_comment::<R>))
        .route("/{id}", delete(handlers::delete_comment::<R>))
        .route_layer(middleware::from_fn_with_state(gate, require_auth::<U>));

    Router::new()
        .route("/{id}", get(handlers::list_comments::<R>))
        .merge(protected)
        .with_state(state)
}
