//! Post repository - Postgres implementation of `PostStore`
//!
//! Every statement is parameterized and touches a single row (or, for
//! `list`, reads the table once). NULL text columns read back as `''`.

use async_trait::async_trait;
use grapevine_core::{Post, PostId, PostInput};
use sqlx::{FromRow, PgPool};

use crate::store::{PostStore, StoreError, StoreResult};

/// Post row as read from the database
#[derive(Debug, Clone, FromRow)]
struct PostRow {
    id: i32,
    name: String,
    image: String,
    body: String,
}

impl From<PostRow> for Post {
    fn from(r: PostRow) -> Self {
        Post {
            id: r.id,
            name: r.name,
            image: r.image,
            body: r.body,
        }
    }
}

/// Post repository
#[derive(Debug, Clone)]
pub struct PostRepo {
    pool: PgPool,
}

impl PostRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl PostStore for PostRepo {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn list(&self) -> StoreResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id,
                   COALESCE(name, '') AS name,
                   COALESCE(image, '') AS image,
                   COALESCE(body, '') AS body
            FROM posts
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn get(&self, id: PostId) -> StoreResult<Post> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id,
                   COALESCE(name, '') AS name,
                   COALESCE(image, '') AS image,
                   COALESCE(body, '') AS body
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound { id })?;

        Ok(row.into())
    }

    async fn create(&self, input: PostInput) -> StoreResult<Post> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (name, image, body)
            VALUES ($1, $2, $3)
            RETURNING id,
                      COALESCE(name, '') AS name,
                      COALESCE(image, '') AS image,
                      COALESCE(body, '') AS body
            "#,
        )
        .bind(&input.name)
        .bind(&input.image)
        .bind(&input.body)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: PostId, input: PostInput) -> StoreResult<Post> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE posts
            SET name = $2, image = $3, body = $4
            WHERE id = $1
            RETURNING id,
                      COALESCE(name, '') AS name,
                      COALESCE(image, '') AS image,
                      COALESCE(body, '') AS body
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.image)
        .bind(&input.body)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound { id })?;

        Ok(row.into())
    }

    async fn delete(&self, id: PostId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::debug!(id, rows = result.rows_affected(), "delete post");
        Ok(true)
    }
}
