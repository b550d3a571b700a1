//! Post store - persistence contract for posts
//!
//! Handlers only ever see `dyn PostStore`; the concrete store is chosen at
//! start-up and injected into the router state:
//! - `PostRepo` (db::repos) for Postgres
//! - `MemoryStore` for tests and database-less runs
//!
//! Every operation is a single-row statement. There are no transactions.

pub mod memory;

use async_trait::async_trait;
use grapevine_core::{Post, PostId, PostInput};

pub use memory::MemoryStore;

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("not found: post '{id}'")]
    NotFound { id: PostId },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// CRUD operations on posts
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Short backend name, reported by the health endpoint
    fn backend(&self) -> &'static str;

    /// All posts, ascending by id. Empty when there are none.
    async fn list(&self) -> StoreResult<Vec<Post>>;

    /// A single post, or `NotFound`.
    async fn get(&self, id: PostId) -> StoreResult<Post>;

    /// Insert a post under a freshly assigned id and return the full record.
    async fn create(&self, input: PostInput) -> StoreResult<Post>;

    /// Replace all writable fields of a post. `NotFound` if the id is absent.
    async fn update(&self, id: PostId, input: PostInput) -> StoreResult<Post>;

    /// Remove a post. Deleting an absent id is a no-op and still confirms.
    async fn delete(&self, id: PostId) -> StoreResult<bool>;
}
