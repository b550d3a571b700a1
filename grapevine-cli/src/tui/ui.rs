//! UI rendering using ratatui

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use grapevine_core::Page;

use super::app::{App, FormField};

/// Primary accent color
const ACCENT: Color = Color::Magenta;
/// Secondary color for less important elements
const SECONDARY: Color = Color::DarkGray;
/// Highlight color for selected items
const HIGHLIGHT: Color = Color::Yellow;
/// Dim text color
const DIM: Color = Color::Rgb(100, 100, 100);

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(8),    // Aside + main
            Constraint::Length(1), // Hint bar
        ])
        .split(frame.area());

    render_header(frame, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(20)])
        .split(rows[1]);

    render_aside(frame, app, columns[0]);

    if app.page().is_form() {
        render_form(frame, app, columns[1]);
    } else {
        render_feed(frame, app, columns[1]);
    }

    render_hint_bar(frame, app, rows[2]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::from(Span::styled("heard it through the", Style::default().fg(DIM))),
        Line::from(Span::styled(
            "GRAPEVINE",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
    ]);

    let header = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(SECONDARY)),
    );

    frame.render_widget(header, area);
}

/// Left navigation: home / add post
fn render_aside(frame: &mut Frame, app: &App, area: Rect) {
    let entry = |label: &'static str, key: &'static str, active: bool| {
        let style = if active {
            Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        Line::from(vec![
            Span::styled(format!("{key} "), Style::default().fg(DIM)),
            Span::styled(label, style),
        ])
    };

    let lines = vec![
        entry("home", "h", app.page() == Page::Home),
        entry("add post", "a", app.page() == Page::AddPost),
    ];

    let aside = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(SECONDARY)),
    );

    frame.render_widget(aside, area);
}

fn page_block(app: &App) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", app.view.view.page_title))
        .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SECONDARY))
}

/// Feed of posts, newest last
fn render_feed(frame: &mut Frame, app: &App, area: Rect) {
    let block = page_block(app);

    if app.posts.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "nothing heard yet - press 'a' to add a post",
            Style::default().fg(DIM),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .posts
        .iter()
        .map(|post| {
            let mut lines = vec![
                Line::from(Span::styled(
                    format!("{} said...", post.name),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("  {}", post.body)),
            ];
            if !post.image.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", post.image),
                    Style::default().fg(DIM),
                )));
            }
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(HIGHLIGHT))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Name / image / body form
fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let block = page_block(app);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(inner);

    let form = &app.view.form_inputs;
    let entries = [
        (FormField::Name, form.name.as_str()),
        (FormField::Image, form.image.as_str()),
        (FormField::Body, form.body.as_str()),
    ];

    for ((field, value), area) in entries.into_iter().zip(fields.iter()) {
        let focused = app.focused_field == field;
        let border_style = if focused {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(SECONDARY)
        };

        let content = if focused {
            format!("{value}|")
        } else {
            value.to_string()
        };

        let input = Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(format!(" {} ", field.label()))
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );

        frame.render_widget(input, *area);
    }
}

fn render_hint_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hints = if app.page().is_form() {
        "Tab next field | Enter submit | Esc home | Ctrl+N new post"
    } else {
        "j/k select | e edit | d delete | a add | r refresh | q quit"
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.page().display_name()),
            Style::default().fg(Color::Black).bg(ACCENT),
        ),
        Span::raw(" "),
    ];

    match &app.status_message {
        Some(msg) => spans.push(Span::styled(msg.clone(), Style::default().fg(HIGHLIGHT))),
        None => spans.push(Span::styled(hints, Style::default().fg(DIM))),
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use grapevine_core::{Navigate, Post, PostInput};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn feed_shows_who_said_what() {
        let mut app = App::new();
        app.set_posts(vec![Post::from_input(
            1,
            PostInput::new("Charles Boyle", "", "Succulent"),
        )]);

        let text = screen(&app);
        assert!(text.contains("GRAPEVINE"));
        assert!(text.contains("i heard that..."));
        assert!(text.contains("Charles Boyle said..."));
        assert!(text.contains("Succulent"));
    }

    #[test]
    fn edit_form_shows_post_fields() {
        let mut app = App::new();
        app.navigate(Navigate::EditPost(Post::from_input(
            2,
            PostInput::new("Gina", "g.png", "toit nups"),
        )));

        let text = screen(&app);
        assert!(text.contains("what did you really say?"));
        assert!(text.contains("Gina|"));
        assert!(text.contains("toit nups"));
    }
}
