//! Core application state for the terminal UI

use grapevine_core::{reduce, Navigate, Page, Post, View};

/// Form field with keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Image,
    Body,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Image,
            FormField::Image => FormField::Body,
            FormField::Body => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Body,
            FormField::Image => FormField::Name,
            FormField::Body => FormField::Image,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Image => "image",
            FormField::Body => "body",
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct App {
    /// Page and form snapshot, only changed through `navigate`
    pub view: View,
    /// Last list fetched from the server
    pub posts: Vec<Post>,
    /// Highlighted post in the feed
    pub selected: usize,
    /// Focused form field
    pub focused_field: FormField,
    /// Status message (shown in the hint bar)
    pub status_message: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.view.page()
    }

    /// Apply a navigation action through the view reducer
    pub fn navigate(&mut self, action: Navigate) {
        self.view = reduce(&self.view, action);
        self.focused_field = FormField::Name;
    }

    /// Edit the highlighted post, if any
    pub fn edit_selected(&mut self) {
        if let Some(post) = self.selected_post().cloned() {
            self.navigate(Navigate::EditPost(post));
        }
    }

    /// Replace the feed, keeping the selection in range
    pub fn set_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        if self.selected >= self.posts.len() {
            self.selected = self.posts.len().saturating_sub(1);
        }
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.posts.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.posts.is_empty() {
            self.selected = (self.selected + 1).min(self.posts.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn focus_next(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    fn focused_value(&mut self) -> &mut String {
        let form = &mut self.view.form_inputs;
        match self.focused_field {
            FormField::Name => &mut form.name,
            FormField::Image => &mut form.image,
            FormField::Body => &mut form.body,
        }
    }

    pub fn form_insert(&mut self, c: char) {
        self.focused_value().push(c);
    }

    pub fn form_backspace(&mut self) {
        self.focused_value().pop();
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
