//! URL lookup result rendering.
//!
//! Displays the single detail card of the latest URL lookup.

use crate::app::App;
use crate::youtube::Video;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Render the detail card.
///
/// # Details
/// Header lines (title, channel, publish date), a row of four stat boxes
/// (views, likes, comments, duration) and the wrapped description.
pub fn render_detail(app: &App, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title("Video (Enter/o to open in YouTube)")
        .borders(Borders::ALL);

    let Some(video) = app.url_result.as_ref() else {
        let placeholder = if app.lookup_loading {
            "Looking up..."
        } else {
            "Paste a YouTube URL and press Enter"
        };
        Widget::render(Paragraph::new(placeholder).block(block), area, buf);
        return;
    };

    let inner = block.inner(area);
    Widget::render(block, area, buf);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(4), // Stats
            Constraint::Min(0),    // Description
        ])
        .split(inner);

    render_header(video, rows[0], buf);
    render_stats(video, rows[1], buf);

    let description = Paragraph::new(video.snippet.description.as_str())
        .wrap(Wrap { trim: false })
        .block(Block::default().title("Description").borders(Borders::TOP));
    Widget::render(description, rows[2], buf);
}

fn render_header(video: &Video, area: Rect, buf: &mut Buffer) {
    let label = Style::default().fg(Color::Cyan);
    let mut lines = vec![
        Line::from(Span::styled(
            video.snippet.title.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Channel: ", label),
            Span::raw(video.snippet.channel_title.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Published: ", label),
            Span::raw(video.format_date()),
        ]),
    ];
    if let Some(thumb) = video.thumbnail_url() {
        lines.push(Line::from(vec![
            Span::styled("Thumbnail: ", label),
            Span::styled(thumb, Style::default().fg(Color::DarkGray)),
        ]));
    }

    Widget::render(Paragraph::new(lines), area, buf);
}

fn render_stats(video: &Video, area: Rect, buf: &mut Buffer) {
    let stats = [
        ("Views", video.format_views(), Color::Red),
        ("Likes", video.format_likes(), Color::Green),
        ("Comments", video.format_comments(), Color::Blue),
        ("Duration", video.format_duration(), Color::Magenta),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((label, value, color), column) in stats.into_iter().zip(columns.iter()) {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().title(label).borders(Borders::ALL));
        Widget::render(paragraph, *column, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Tab;
    use crate::youtube::models::{ContentDetails, Snippet, Statistics};

    #[test]
    fn test_render_detail_shows_defaults_for_missing_stats() {
        let mut app = App::new();
        app.active_tab = Tab::Url;
        app.url_result = Some(Video {
            id: "abc".to_string(),
            snippet: Snippet {
                title: "Restricted video".to_string(),
                channel_title: "Chan".to_string(),
                ..Snippet::default()
            },
            statistics: Statistics {
                view_count: Some("1234567".to_string()),
                ..Statistics::default()
            },
            content_details: ContentDetails::default(),
        });

        let area = Rect::new(0, 0, 80, 16);
        let mut buf = Buffer::empty(area);
        render_detail(&app, area, &mut buf);

        let rendered: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(rendered.contains("Restricted video"));
        assert!(rendered.contains("1.2M"));
        assert!(rendered.contains(crate::format::UNKNOWN_DURATION));
    }
}
