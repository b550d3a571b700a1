//! Repository implementations for database access
//!
//! Repositories implement the `PostStore` contract on top of a `PgPool`:
//! - Parameterized statements only
//! - `RETURNING` instead of a follow-up read
//! - No check-then-write; a missing row comes back as `NotFound`

pub mod posts;

pub use posts::PostRepo;
