//! HTTP client for the posts API
//!
//! [`PostsApi`] is the seam the terminal UI talks to; [`PostsClient`] is the
//! reqwest implementation used by both the UI and the `posts` commands.

use async_trait::async_trait;
use grapevine_core::{Post, PostId, PostInput};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Client-side error
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{status}: {message}")]
    Api { status: StatusCode, message: String },
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Operations the client performs against the posts API
#[async_trait]
pub trait PostsApi: Send + Sync {
    async fn list(&self) -> ClientResult<Vec<Post>>;

    async fn get(&self, id: PostId) -> ClientResult<Post>;

    async fn create(&self, input: &PostInput) -> ClientResult<Post>;

    async fn update(&self, id: PostId, input: &PostInput) -> ClientResult<Post>;

    /// Returns the server's `deleted` flag
    async fn delete(&self, id: PostId) -> ClientResult<bool>;
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Deserialize)]
struct DeleteResponse {
    deleted: bool,
}

/// reqwest-backed [`PostsApi`]
#[derive(Debug, Clone)]
pub struct PostsClient {
    http: Client,
    endpoint: String,
}

impl PostsClient {
    pub fn new(endpoint: impl Into<String>) -> ClientResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("grapevine/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(http, endpoint))
    }

    pub fn with_client(http: Client, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn posts_url(&self) -> String {
        format!("{}/api/posts", self.endpoint)
    }

    fn post_url(&self, id: PostId) -> String {
        format!("{}/api/posts/{}", self.endpoint, id)
    }
}

async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();

    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    let message = match serde_json::from_str::<ErrorResponse>(&error_text) {
        Ok(error_resp) => error_resp.error,
        Err(_) => error_text,
    };

    Err(ClientError::Api { status, message })
}

#[async_trait]
impl PostsApi for PostsClient {
    async fn list(&self) -> ClientResult<Vec<Post>> {
        let response = self.http.get(self.posts_url()).send().await?;
        handle_response(response).await
    }

    async fn get(&self, id: PostId) -> ClientResult<Post> {
        let response = self.http.get(self.post_url(id)).send().await?;
        handle_response(response).await
    }

    async fn create(&self, input: &PostInput) -> ClientResult<Post> {
        tracing::debug!(name = %input.name, "creating post");
        let response = self.http.post(self.posts_url()).json(input).send().await?;
        handle_response(response).await
    }

    async fn update(&self, id: PostId, input: &PostInput) -> ClientResult<Post> {
        tracing::debug!(id, name = %input.name, "updating post");
        let response = self.http.put(self.post_url(id)).json(input).send().await?;
        handle_response(response).await
    }

    async fn delete(&self, id: PostId) -> ClientResult<bool> {
        tracing::debug!(id, "deleting post");
        let response = self.http.delete(self.post_url(id)).send().await?;
        let body: DeleteResponse = handle_response(response).await?;
        Ok(body.deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_trailing_slash_is_trimmed() {
        let client = PostsClient::new("http://127.0.0.1:3000/").unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:3000");
        assert_eq!(client.posts_url(), "http://127.0.0.1:3000/api/posts");
        assert_eq!(client.post_url(7), "http://127.0.0.1:3000/api/posts/7");
    }

    #[tokio::test]
    async fn unreachable_server_is_http_error() {
        // Port 9 (discard) is never served in test environments
        let client = PostsClient::new("http://127.0.0.1:9").unwrap();
        let err = client.list().await.unwrap_err();
        assert!(matches!(err, ClientError::Http(_)));
        assert!(!err.is_not_found());
    }

    #[cfg(feature = "server")]
    mod against_server {
        use super::*;
        use grapevine_server::{build_router, AppState, MemoryStore, ServerConfig};
        use tokio::net::TcpListener;

        async fn spawn_server() -> PostsClient {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            let app = build_router(AppState::new(MemoryStore::new()), &ServerConfig::default());
            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });
            PostsClient::new(format!("http://{}", addr)).unwrap()
        }

        #[tokio::test]
        async fn crud_through_the_wire() {
            let client = spawn_server().await;
            assert!(client.list().await.unwrap().is_empty());

            let created = client
                .create(&PostInput::new("Rosa Diaz", "r.png", "I don't like people"))
                .await
                .unwrap();
            assert_eq!(created.id, 1);
            assert_eq!(client.get(1).await.unwrap(), created);

            let updated = client
                .update(1, &PostInput::new("Rosa Diaz", "r.png", "I like pie"))
                .await
                .unwrap();
            assert_eq!(updated.body, "I like pie");

            assert!(client.delete(1).await.unwrap());
            assert!(client.list().await.unwrap().is_empty());
        }

        #[tokio::test]
        async fn missing_post_carries_server_message() {
            let client = spawn_server().await;
            let err = client.get(999).await.unwrap_err();

            assert!(err.is_not_found());
            match err {
                ClientError::Api { message, .. } => {
                    assert_eq!(message, "no such post, check the id!")
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }
}
