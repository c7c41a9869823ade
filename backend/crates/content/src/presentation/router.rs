//! Content Router

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::application::config::ContentConfig;
use crate::domain::repository::PostRepository;
use crate::infra::fs::FsPostRepository;
use crate::presentation::handlers::{self, ContentAppState};

/// Create the Content router reading from the configured directory
pub fn content_router(config: &ContentConfig) -> Router {
    content_router_generic(FsPostRepository::new(config.content_root.clone()))
}

/// Create a generic Content router for any repository implementation
pub fn content_router_generic<R>(repo: R) -> Router
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let state = ContentAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/{locale}", get(handlers::list_posts::<R>))
        .route("/{locale}/categories", get(handlers::list_categories::<R>))
        .route("/{locale}/posts/{slug}", get(handlers::get_post::<R>))
        .with_state(state)
}
