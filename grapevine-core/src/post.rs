//! Post records
//!
//! A post is a single quote: who said it, a picture of them, and what they said.

use serde::{Deserialize, Serialize};

/// Store-assigned post identifier (Postgres `serial`).
pub type PostId = i32;

/// A persisted quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    /// Who said it
    pub name: String,
    /// Image URL, stored as given
    pub image: String,
    /// The quote itself
    pub body: String,
}

impl Post {
    /// Build a post from an id and the fields written for it.
    pub fn from_input(id: PostId, input: PostInput) -> Self {
        Self {
            id,
            name: input.name,
            image: input.image,
            body: input.body,
        }
    }

    /// The writable fields of this post.
    pub fn input(&self) -> PostInput {
        PostInput {
            name: self.name.clone(),
            image: self.image.clone(),
            body: self.body.clone(),
        }
    }
}

/// Writable fields of a post, as sent on create and update.
///
/// Missing fields default to the empty string. Unknown fields (such as an
/// echoed `id`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub body: String,
}

impl PostInput {
    pub fn new(name: impl Into<String>, image: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            body: body.into(),
        }
    }
}

/// Request body accepted by the write endpoints.
///
/// Both the flat `{name, image, body}` form and the wrapped
/// `{"post": {name, image, body}}` form are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PostPayload {
    Wrapped { post: PostInput },
    Flat(PostInput),
}

impl From<PostPayload> for PostInput {
    fn from(payload: PostPayload) -> Self {
        match payload {
            PostPayload::Wrapped { post } => post,
            PostPayload::Flat(input) => input,
        }
    }
}
