//! YouTube URL parsing.

use regex::Regex;
use std::sync::LazyLock;

/// Recognised URL shapes, tried in order. The first capture group is the id.
static VIDEO_ID_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&\n?#]+)",
        r"youtube\.com/v/([^&\n?#]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("video id pattern is valid"))
    .collect()
});

/// Extract the video id from a watch, short-link, embed or `/v/` URL.
///
/// # Arguments
/// * `url` - Raw user input
///
/// # Returns
/// * `Option<String>` - The id, or `None` if no known URL shape matches
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_PATTERNS
        .iter()
        .find_map(|re| re.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Public watch page for a video id.
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}
