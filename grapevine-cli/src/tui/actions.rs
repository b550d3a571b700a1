//! Server round-trips triggered from the UI
//!
//! Every successful mutation is followed by a full re-fetch of the feed.
//! Failures are logged and leave the view, form and feed untouched.

use grapevine_core::{Navigate, PostId, Submission};

use super::app::App;
use crate::client::PostsApi;

const FAILURE_STATUS: &str = "request failed, see ~/.grapevine/ui.log";
const GONE_STATUS: &str = "that post is gone, Esc and r to reload";

/// Re-fetch the feed
pub async fn refresh(app: &mut App, api: &dyn PostsApi) {
    match api.list().await {
        Ok(posts) => {
            tracing::debug!(count = posts.len(), "fetched posts");
            app.set_posts(posts);
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to fetch posts");
            app.set_status(FAILURE_STATUS);
        }
    }
}

/// Send the form, then return home and re-fetch
pub async fn submit(app: &mut App, api: &dyn PostsApi, submission: Submission) {
    let result = match &submission {
        Submission::Create(input) => api.create(input).await,
        Submission::Update(id, input) => api.update(*id, input).await,
    };

    match result {
        Ok(post) => {
            tracing::info!(id = post.id, "saved post");
            app.navigate(Navigate::Home);
            refresh(app, api).await;
        }
        Err(e) if e.is_not_found() => {
            tracing::warn!(error = %e, ?submission, "post vanished before save");
            app.set_status(GONE_STATUS);
        }
        Err(e) => {
            tracing::warn!(error = %e, ?submission, "failed to save post");
            app.set_status(FAILURE_STATUS);
        }
    }
}

/// Delete a post, then re-fetch
pub async fn delete(app: &mut App, api: &dyn PostsApi, id: PostId) {
    match api.delete(id).await {
        Ok(_) => {
            tracing::info!(id, "deleted post");
            refresh(app, api).await;
        }
        Err(e) => {
            tracing::warn!(error = %e, id, "failed to delete post");
            app.set_status(FAILURE_STATUS);
        }
    }
}
