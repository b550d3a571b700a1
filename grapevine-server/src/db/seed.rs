//! Starter quotes
//!
//! Inserted through the `PostStore` contract so any backend can be seeded.

use grapevine_core::{Post, PostInput};

use crate::store::{PostStore, StoreResult};

/// (name, image, body)
pub const SEED_POSTS: &[(&str, &str, &str)] = &[
    (
        "Jake Peralta",
        "https://imgur.com/TDgdUdZ.png",
        "The doctor said all my bleeding was internal -- that's where the blood's supposed to be",
    ),
    (
        "Captain Raymond Holt",
        "https://imgur.com/VagShzS.png",
        "When people say 'how are you', they mean 'hello'. When people say 'what's up', they mean 'I am a person not worth talking to'",
    ),
    (
        "Amy Santiago",
        "https://imgur.com/gFy5uQ1.png",
        "Some say Latin is a dead language, I say it's just taking a long nap",
    ),
    (
        "Terry Jeffords",
        "https://imgur.com/cZN6s8Z.png",
        "Don't give candy to a baby. They can't brush their teeth!",
    ),
    (
        "Rosa Diaz",
        "https://imgur.com/zthqRdS.png",
        "I'm fine at parties. I just stand in the middle of the room and don't say anything",
    ),
    (
        "Charles Boyle",
        "https://imgur.com/IO2NtfC.png",
        "Succulent",
    ),
    (
        "Gina Linetti",
        "https://imgur.com/QP9hUfU.png",
        "Not only have I been through hell, I was assistant manager there",
    ),
    (
        "Kevin Cozner",
        "https://imgur.com/Wylg6zh.png",
        "Do you know what it means to clap back? Be 👏 cause 👏 I 👏 do",
    ),
    (
        "Doug Judy",
        "https://imgur.com/mW4xFJ7.png",
        "New York's finest just got a whole lot finer",
    ),
];

/// Insert the starter quotes.
///
/// With `only_if_empty`, nothing is inserted when the store already has posts.
/// Returns the posts that were created.
pub async fn run(store: &dyn PostStore, only_if_empty: bool) -> StoreResult<Vec<Post>> {
    if only_if_empty && !store.list().await?.is_empty() {
        tracing::info!("Store already has posts, skipping seed");
        return Ok(Vec::new());
    }

    let mut created = Vec::with_capacity(SEED_POSTS.len());
    for (name, image, body) in SEED_POSTS {
        created.push(store.create(PostInput::new(*name, *image, *body)).await?);
    }

    tracing::info!(count = created.len(), "Seeded posts");
    Ok(created)
}
