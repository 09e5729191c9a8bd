//! Search result list rendering.
//!
//! Displays a scrollable list of video cards with selection highlighting.

use crate::app::App;
use crate::youtube::Video;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

/// Lines taken by one card, separator included.
pub const LINES_PER_VIDEO: u16 = 6;

/// Render the search result list.
///
/// # Details
/// Each video is a card of [`LINES_PER_VIDEO`] lines:
/// - Line 1: Title (bold)
/// - Line 2: Channel
/// - Line 3: First line of the description
/// - Line 4: Badges for views, likes and duration (only those present)
/// - Line 5: Publish date
/// - Line 6: Separator
///
/// The selected card is kept centered while scrolling.
pub fn render_list(app: &App, area: Rect, buf: &mut Buffer) {
    let videos = &app.search_results;
    let title = format!("Results ({}) - Enter/o to open in YouTube", videos.len());

    if videos.is_empty() {
        let placeholder = if app.search_loading {
            "Searching..."
        } else {
            "No videos to display"
        };
        let list = List::new(vec![ListItem::new(placeholder)])
            .block(Block::default().title(title).borders(Borders::ALL));
        Widget::render(list, area, buf);
        return;
    }

    let selected_index = app.selected_index.min(videos.len().saturating_sub(1));

    let separator_width = area.width.saturating_sub(2).max(10) as usize;
    let separator_line = "─".repeat(separator_width);

    let available_height = area.height.saturating_sub(2);
    let visible_videos = (available_height / LINES_PER_VIDEO).max(1) as usize;
    let center_offset = visible_videos / 2;

    let scroll_offset = selected_index.saturating_sub(center_offset);
    let max_scroll = videos.len().saturating_sub(visible_videos);
    let scroll_offset = scroll_offset.min(max_scroll);

    let end_idx = (scroll_offset + visible_videos).min(videos.len());

    let items: Vec<ListItem> = videos
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(end_idx - scroll_offset)
        .map(|(idx, video)| video_card(video, idx == selected_index, &separator_line))
        .collect();

    let relative_selected = (selected_index >= scroll_offset
        && selected_index < scroll_offset + items.len())
    .then(|| selected_index - scroll_offset);

    let mut list_state = ListState::default();
    list_state.select(relative_selected);

    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD));

    StatefulWidget::render(list, area, buf, &mut list_state);
}

fn video_card<'a>(video: &'a Video, is_selected: bool, separator_line: &str) -> ListItem<'a> {
    let base_style = if is_selected {
        Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let title = Line::from(Span::styled(
        &video.snippet.title,
        Style::default()
            .fg(if is_selected { Color::Yellow } else { Color::White })
            .add_modifier(Modifier::BOLD),
    ));

    let channel = Line::from(Span::styled(
        &video.snippet.channel_title,
        Style::default().fg(Color::Cyan),
    ));

    let description = Line::from(Span::styled(
        video.snippet.description.lines().next().unwrap_or(""),
        Style::default().fg(Color::Gray),
    ));

    let published = Line::from(Span::styled(
        format!("Published: {}", video.format_date()),
        Style::default().fg(Color::Yellow),
    ));

    let separator = Line::from(Span::styled(
        separator_line.to_string(),
        Style::default().fg(if is_selected {
            Color::Blue
        } else {
            Color::DarkGray
        }),
    ));

    ListItem::new(vec![
        title,
        channel,
        description,
        badges(video),
        published,
        separator,
    ])
    .style(base_style)
}

/// Badges for the counters and duration the API returned.
fn badges(video: &Video) -> Line<'static> {
    let badge_style = Style::default().fg(Color::Black).bg(Color::Gray);
    let mut spans = Vec::new();

    let mut push = |text: String| {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!(" {} ", text), badge_style));
    };

    if video.statistics.view_count.is_some() {
        push(format!("{} views", video.format_views()));
    }
    if video.statistics.like_count.is_some() {
        push(format!("{} likes", video.format_likes()));
    }
    if video.content_details.duration.is_some() {
        push(video.format_duration());
    }

    Line::from(spans)
}
