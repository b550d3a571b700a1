//! In-memory post store
//!
//! Ids start at 1 and are never reused, matching a fresh `serial` column.

use std::collections::BTreeMap;

use async_trait::async_trait;
use grapevine_core::{Post, PostId, PostInput};
use tokio::sync::RwLock;

use super::{PostStore, StoreError, StoreResult};

/// Post store backed by a `BTreeMap` (keeps id order for `list`)
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<MemoryInner>,
}

#[derive(Debug)]
struct MemoryInner {
    posts: BTreeMap<PostId, Post>,
    next_id: PostId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryInner {
                posts: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn list(&self) -> StoreResult<Vec<Post>> {
        let inner = self.inner.read().await;
        Ok(inner.posts.values().cloned().collect())
    }

    async fn get(&self, id: PostId) -> StoreResult<Post> {
        let inner = self.inner.read().await;
        inner
            .posts
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn create(&self, input: PostInput) -> StoreResult<Post> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let post = Post::from_input(id, input);
        inner.posts.insert(id, post.clone());
        Ok(post)
    }

    async fn update(&self, id: PostId, input: PostInput) -> StoreResult<Post> {
        let mut inner = self.inner.write().await;
        let slot = inner
            .posts
            .get_mut(&id)
            .ok_or(StoreError::NotFound { id })?;

        *slot = Post::from_input(id, input);
        Ok(slot.clone())
    }

    async fn delete(&self, id: PostId) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        inner.posts.remove(&id);
        Ok(true)
    }
}
