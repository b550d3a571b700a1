//! Event handling for the TUI

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use grapevine_core::{Navigate, PostId, Submission};

use super::app::App;

/// Poll for events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Result of handling a key event
#[derive(Debug, PartialEq, Eq)]
pub enum HandleResult {
    /// Continue running
    Continue,
    /// Quit the application
    Quit,
    /// Re-fetch the feed
    Refresh,
    /// Send the form to the server
    Submit(Submission),
    /// Delete a post
    Delete(PostId),
}

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) -> HandleResult {
    if key.kind == KeyEventKind::Release {
        return HandleResult::Continue;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return HandleResult::Quit,
            // "add post" from the form pages, where plain letters are text
            KeyCode::Char('n') => {
                app.navigate(Navigate::AddPost);
                return HandleResult::Continue;
            }
            _ => return HandleResult::Continue,
        }
    }

    if app.page().is_form() {
        handle_form(app, key)
    } else {
        handle_feed(app, key)
    }
}

/// Keys on the feed page
fn handle_feed(app: &mut App, key: KeyEvent) -> HandleResult {
    app.clear_status();

    match key.code {
        KeyCode::Char('q') => HandleResult::Quit,

        KeyCode::Char('h') => {
            app.navigate(Navigate::Home);
            HandleResult::Continue
        }
        KeyCode::Char('a') => {
            app.navigate(Navigate::AddPost);
            HandleResult::Continue
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            app.edit_selected();
            HandleResult::Continue
        }
        KeyCode::Char('d') => match app.selected_post() {
            Some(post) => HandleResult::Delete(post.id),
            None => HandleResult::Continue,
        },
        KeyCode::Char('r') => HandleResult::Refresh,

        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
            HandleResult::Continue
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_prev();
            HandleResult::Continue
        }

        _ => HandleResult::Continue,
    }
}

/// Keys on the add/edit form
fn handle_form(app: &mut App, key: KeyEvent) -> HandleResult {
    app.clear_status();

    match key.code {
        KeyCode::Esc => {
            app.navigate(Navigate::Home);
            HandleResult::Continue
        }
        KeyCode::Tab | KeyCode::Down => {
            app.focus_next();
            HandleResult::Continue
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.focus_prev();
            HandleResult::Continue
        }
        KeyCode::Enter => match app.view.submission() {
            Some(submission) => HandleResult::Submit(submission),
            None => HandleResult::Continue,
        },
        KeyCode::Backspace => {
            app.form_backspace();
            HandleResult::Continue
        }
        KeyCode::Char(c) => {
            app.form_insert(c);
            HandleResult::Continue
        }
        _ => HandleResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grapevine_core::{Page, Post, PostInput};

    fn press(app: &mut App, code: KeyCode) -> HandleResult {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app_with_posts() -> App {
        let mut app = App::new();
        app.set_posts(vec![
            Post::from_input(1, PostInput::new("Jake", "j.png", "cool cool cool")),
            Post::from_input(5, PostInput::new("Amy", "a.png", "binders")),
        ]);
        app
    }

    #[test]
    fn q_quits_from_feed() {
        let mut app = App::new();
        assert_eq!(press(&mut app, KeyCode::Char('q')), HandleResult::Quit);
    }

    #[test]
    fn q_is_text_in_form() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(press(&mut app, KeyCode::Char('q')), HandleResult::Continue);
        assert_eq!(app.view.form_inputs.name, "q");
    }

    #[test]
    fn ctrl_c_quits_anywhere() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('a'));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut app, ctrl_c), HandleResult::Quit);
    }

    #[test]
    fn add_post_submits_create() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.page(), Page::AddPost);

        type_text(&mut app, "Holt");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "h.png");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Hot damn");

        assert_eq!(
            press(&mut app, KeyCode::Enter),
            HandleResult::Submit(Submission::Create(PostInput::new("Holt", "h.png", "Hot damn")))
        );
    }

    #[test]
    fn edit_submits_update_of_selected_post() {
        let mut app = app_with_posts();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.page(), Page::EditPost);

        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "s!");

        assert_eq!(
            press(&mut app, KeyCode::Enter),
            HandleResult::Submit(Submission::Update(5, PostInput::new("Amy", "a.png", "binders!")))
        );
    }

    #[test]
    fn esc_abandons_form() {
        let mut app = app_with_posts();
        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "xyz");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.page(), Page::Home);
        assert_eq!(app.view.form_inputs.name, "");
        assert_eq!(app.posts[0].name, "Jake");
    }

    #[test]
    fn ctrl_n_opens_blank_form_from_edit() {
        let mut app = app_with_posts();
        press(&mut app, KeyCode::Char('e'));
        let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        handle_key(&mut app, ctrl_n);

        assert_eq!(app.page(), Page::AddPost);
        assert_eq!(app.view.form_inputs.name, "");
        assert_eq!(app.view.form_inputs.id, None);
    }

    #[test]
    fn d_deletes_selected_post() {
        let mut app = app_with_posts();
        press(&mut app, KeyCode::Down);
        assert_eq!(press(&mut app, KeyCode::Char('d')), HandleResult::Delete(5));
    }

    #[test]
    fn d_on_empty_feed_does_nothing() {
        let mut app = App::new();
        assert_eq!(press(&mut app, KeyCode::Char('d')), HandleResult::Continue);
    }

    #[test]
    fn unbound_ctrl_keys_are_not_typed() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('a'));
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);

        assert_eq!(handle_key(&mut app, ctrl_a), HandleResult::Continue);
        assert_eq!(app.page(), Page::AddPost);
        assert_eq!(app.view.form_inputs.name, "");
    }

    #[test]
    fn typing_in_form_clears_status() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('a'));
        app.set_status("request failed");

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.status_message, None);
        assert_eq!(app.view.form_inputs.name, "x");
    }

    #[test]
    fn r_refreshes() {
        let mut app = App::new();
        assert_eq!(press(&mut app, KeyCode::Char('r')), HandleResult::Refresh);
    }
}
