//! Post endpoints
//!
//! Success bodies are the bare post (or array of posts), no envelope.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use grapevine_core::Post;
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::{PostBody, PostIdParam};
use crate::http::server::AppState;

/// Delete confirmation
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

/// GET /api/posts - all posts, ascending by id
async fn list_posts(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = state.store.list().await?;
    Ok(Json(posts))
}

/// GET /api/posts/{id} - a single post
async fn show_post(
    State(state): State<Arc<AppState>>,
    PostIdParam(id): PostIdParam,
) -> Result<Json<Post>, ApiError> {
    let post = state.store.get(id).await?;
    Ok(Json(post))
}

/// POST /api/posts - create a post
async fn create_post(
    State(state): State<Arc<AppState>>,
    PostBody(input): PostBody,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let post = state.store.create(input).await?;
    tracing::info!(id = post.id, "post created");

    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /api/posts/{id} - replace a post's fields
async fn update_post(
    State(state): State<Arc<AppState>>,
    PostIdParam(id): PostIdParam,
    PostBody(input): PostBody,
) -> Result<Json<Post>, ApiError> {
    let post = state.store.update(id, input).await?;
    tracing::info!(id, "post updated");

    Ok(Json(post))
}

/// DELETE /api/posts/{id} - remove a post (no-op if absent)
async fn delete_post(
    State(state): State<Arc<AppState>>,
    PostIdParam(id): PostIdParam,
) -> Result<Json<DeleteResponse>, ApiError> {
    let deleted = state.store.delete(id).await?;
    tracing::info!(id, "post deleted");

    Ok(Json(DeleteResponse { deleted }))
}

/// Post routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/posts", get(list_posts).post(create_post))
        .route(
            "/api/posts/{id}",
            get(show_post).put(update_post).delete(delete_post),
        )
}
