//! Input bar rendering.
//!
//! Displays the keyword or URL input of the active tab.

use crate::app::{App, Tab, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the input bar of the active tab.
///
/// # Details
/// Highlights when editing. The title turns into a loading indicator while
/// the tab's request is in flight.
pub fn render_input(app: &App, area: Rect, buf: &mut Buffer) {
    let is_active = app.mode == UiMode::Editing;
    let (label, loading_title, idle_title) = match app.active_tab {
        Tab::Search => ("Keyword", "Searching...", "Search"),
        Tab::Url => ("YouTube URL", "Looking up...", "URL lookup"),
    };
    let prompt = if is_active {
        format!("{}: ", label)
    } else {
        format!("{} (press '/'): ", label)
    };

    let line = Line::from(vec![
        Span::styled(prompt, Style::default().fg(Color::Yellow)),
        Span::styled(
            app.active_input(),
            Style::default().fg(if is_active { Color::White } else { Color::Gray }),
        ),
        Span::styled(
            if is_active { "_" } else { "" },
            Style::default().fg(Color::Yellow),
        ),
    ]);

    let title = if app.is_loading() {
        loading_title
    } else if is_active {
        "Enter to submit, Esc to cancel"
    } else {
        idle_title
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(if is_active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            }),
    );

    Widget::render(paragraph, area, buf);
}
