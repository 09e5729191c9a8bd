//! Error banner rendering.

use crate::app::App;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Height of the banner for the current state; zero hides it.
pub fn banner_height(app: &App) -> u16 {
    if app.error.is_some() { 3 } else { 0 }
}

/// Render the error banner if an error is held.
pub fn render_banner(app: &App, area: Rect, buf: &mut Buffer) {
    let Some(ref error) = app.error else {
        return;
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(
        error.as_str(),
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title("Error")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Red)),
    );

    Widget::render(paragraph, area, buf);
}
