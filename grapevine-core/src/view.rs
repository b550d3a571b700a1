//! Client view state
//!
//! The client shows one of three pages: the feed, a blank form for a new
//! post, or a form pre-filled from an existing post. Every navigation goes
//! through [`reduce`], which resets the form snapshot each time.

use serde::{Deserialize, Serialize};

use crate::post::{Post, PostId, PostInput};

/// Page the client is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Page {
    /// Feed of all posts
    #[default]
    Home,
    /// Blank form for a new post
    AddPost,
    /// Form pre-filled from an existing post
    EditPost,
}

impl Page {
    /// Heading shown above the page content
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "i heard that...",
            Page::AddPost => "what did you say?",
            Page::EditPost => "what did you really say?",
        }
    }

    /// Short label for status lines
    pub fn display_name(&self) -> &'static str {
        match self {
            Page::Home => "HOME",
            Page::AddPost => "ADD POST",
            Page::EditPost => "EDIT POST",
        }
    }

    /// Whether this page shows the post form
    pub fn is_form(&self) -> bool {
        matches!(self, Page::AddPost | Page::EditPost)
    }
}

/// Current page and its heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub page: Page,
    pub page_title: String,
}

impl ViewState {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            page_title: page.title().to_string(),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Page::Home)
    }
}

/// Snapshot of the post form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInputs {
    pub name: String,
    pub image: String,
    pub body: String,
    /// Set only when editing an existing post
    pub id: Option<PostId>,
}

impl FormInputs {
    /// Copy a post's fields into the form
    pub fn from_post(post: &Post) -> Self {
        Self {
            name: post.name.clone(),
            image: post.image.clone(),
            body: post.body.clone(),
            id: Some(post.id),
        }
    }

    /// Writable fields as they would be sent to the server
    pub fn to_input(&self) -> PostInput {
        PostInput::new(self.name.clone(), self.image.clone(), self.body.clone())
    }
}

/// Navigation action, tagged by target page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigate {
    Home,
    AddPost,
    /// Edit the given post
    EditPost(Post),
}

impl Navigate {
    pub fn target(&self) -> Page {
        match self {
            Navigate::Home => Page::Home,
            Navigate::AddPost => Page::AddPost,
            Navigate::EditPost(_) => Page::EditPost,
        }
    }
}

/// Full client view: page plus form snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    pub view: ViewState,
    pub form_inputs: FormInputs,
}

impl View {
    pub fn page(&self) -> Page {
        self.view.page
    }

    /// What submitting the form on this page would do.
    ///
    /// `None` on the feed, or on an edit form that lost its post id.
    pub fn submission(&self) -> Option<Submission> {
        match self.view.page {
            Page::Home => None,
            Page::AddPost => Some(Submission::Create(self.form_inputs.to_input())),
            Page::EditPost => self
                .form_inputs
                .id
                .map(|id| Submission::Update(id, self.form_inputs.to_input())),
        }
    }
}

/// A form submission, resolved against the page it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(PostInput),
    Update(PostId, PostInput),
}

/// Apply a navigation action.
///
/// The form snapshot never survives navigation: it is blank for `Home` and
/// `AddPost` and copied from the selected post for `EditPost`.
pub fn reduce(current: &View, action: Navigate) -> View {
    let page = action.target();
    tracing::debug!(from = ?current.page(), to = ?page, "navigate");

    let form_inputs = match action {
        Navigate::EditPost(post) => FormInputs::from_post(&post),
        Navigate::Home | Navigate::AddPost => FormInputs::default(),
    };

    View {
        view: ViewState::new(page),
        form_inputs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post::from_input(
            3,
            PostInput::new("Amy Santiago", "https://imgur.com/gFy5uQ1.png", "Latin is napping"),
        )
    }

    #[test]
    fn initial_state_is_home() {
        let view = View::default();
        assert_eq!(view.page(), Page::Home);
        assert_eq!(view.view.page_title, "i heard that...");
        assert_eq!(view.form_inputs, FormInputs::default());
    }

    #[test]
    fn add_post_starts_blank() {
        let editing = reduce(&View::default(), Navigate::EditPost(sample_post()));
        let adding = reduce(&editing, Navigate::AddPost);

        assert_eq!(adding.page(), Page::AddPost);
        assert_eq!(adding.view.page_title, "what did you say?");
        assert_eq!(adding.form_inputs, FormInputs::default());
    }

    #[test]
    fn edit_post_copies_fields() {
        let post = sample_post();
        let view = reduce(&View::default(), Navigate::EditPost(post.clone()));

        assert_eq!(view.page(), Page::EditPost);
        assert_eq!(view.view.page_title, "what did you really say?");
        assert_eq!(view.form_inputs.name, post.name);
        assert_eq!(view.form_inputs.image, post.image);
        assert_eq!(view.form_inputs.body, post.body);
        assert_eq!(view.form_inputs.id, Some(3));
    }

    #[test]
    fn home_resets_form() {
        let editing = reduce(&View::default(), Navigate::EditPost(sample_post()));
        let home = reduce(&editing, Navigate::Home);
        assert_eq!(home, View::default());
    }

    #[test]
    fn submission_follows_page() {
        let home = View::default();
        assert_eq!(home.submission(), None);

        let mut adding = reduce(&home, Navigate::AddPost);
        adding.form_inputs.name = "Terry".into();
        assert_eq!(
            adding.submission(),
            Some(Submission::Create(PostInput::new("Terry", "", "")))
        );

        let editing = reduce(&home, Navigate::EditPost(sample_post()));
        assert_eq!(
            editing.submission(),
            Some(Submission::Update(3, sample_post().input()))
        );
    }

    #[test]
    fn edit_without_id_does_not_submit() {
        let mut editing = reduce(&View::default(), Navigate::EditPost(sample_post()));
        editing.form_inputs.id = None;
        assert_eq!(editing.submission(), None);
    }

    #[test]
    fn page_serializes_camel_case() {
        let view = reduce(&View::default(), Navigate::AddPost);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["view"]["page"], "addPost");
        assert_eq!(json["view"]["pageTitle"], "what did you say?");
        assert!(json["formInputs"]["id"].is_null());
    }
}
