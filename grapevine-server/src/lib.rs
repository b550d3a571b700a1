//! grapevine-server: HTTP server for the grapevine quote board
//!
//! Stores posts behind the `PostStore` trait (Postgres or in-memory) and
//! exposes them as a JSON CRUD API under `/api/posts`.

pub mod db;
pub mod http;
pub mod store;

pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use store::{MemoryStore, PostStore, StoreError, StoreResult};
