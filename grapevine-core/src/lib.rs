//! grapevine-core: shared types for the grapevine quote board
//!
//! Holds the `Post` record exchanged between the server and its clients,
//! and the client-side view state machine. Nothing in here touches the
//! network or the database.

pub mod post;
pub mod view;

pub use post::{Post, PostId, PostInput, PostPayload};
pub use view::{reduce, FormInputs, Navigate, Page, Submission, View, ViewState};
