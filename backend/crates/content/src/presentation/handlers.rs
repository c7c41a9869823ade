//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};

use crate::application::{GetPostUseCase, ListPostsUseCase};
use crate::domain::entities::{Post, PostSummary};
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::Locale;
use crate::error::ContentResult;
use crate::presentation::dto::ListPostsQuery;

/// Shared state for content handlers
#[derive(Clone)]
pub struct ContentAppState<R>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /api/blog/{locale}
pub async fn list_posts<R>(
    State(state): State<ContentAppState<R>>,
    Path(locale): Path<String>,
    Query(query): Query<ListPostsQuery>,
) -> ContentResult<Json<Vec<PostSummary>>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let locale = Locale::parse(&locale)?;
    let use_case = ListPostsUseCase::new(state.repo.clone());

    let posts = match query.category.as_deref() {
        Some(category) => use_case.list_records_by_category(category, &locale).await?,
        None => use_case.list_records(&locale).await?,
    };

    Ok(Json(posts))
}

/// GET /api/blog/{locale}/categories
pub async fn list_categories<R>(
    State(state): State<ContentAppState<R>>,
    Path(locale): Path<String>,
) -> ContentResult<Json<Vec<String>>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let locale = Locale::parse(&locale)?;
    let categories = ListPostsUseCase::new(state.repo.clone())
        .list_categories(&locale)
        .await?;

    Ok(Json(categories.into_iter().collect()))
}

/// GET /api/blog/{locale}/posts/{slug}
pub async fn get_post<R>(
    State(state): State<ContentAppState<R>>,
    Path((locale, slug)): Path<(String, String)>,
) -> ContentResult<Json<Post>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let locale = Locale::parse(&locale)?;
    let post = GetPostUseCase::new(state.repo.clone())
        .execute(&slug, &locale)
        .await?;

    Ok(Json(post))
}
