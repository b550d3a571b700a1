//! grapevine terminal UI
//!
//! Three pages driven by the view reducer in `grapevine-core`:
//! - the feed of everything heard so far
//! - a blank form to add a post
//! - a pre-filled form to edit the selected post

pub mod actions;
pub mod app;
pub mod event;
pub mod terminal;
pub mod ui;

pub use terminal::run;
