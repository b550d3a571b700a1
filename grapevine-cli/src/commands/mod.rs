//! Command implementations for the grapevine CLI

#[cfg(feature = "server")]
pub mod db;
pub mod posts;
#[cfg(feature = "server")]
pub mod serve;
pub mod ui;

// Re-export main dispatcher functions for flat access from main.rs
#[cfg(feature = "server")]
pub use db::{run_migrate, run_seed};
pub use posts::run_posts;
#[cfg(feature = "server")]
pub use serve::run_serve;
pub use ui::run_ui;
