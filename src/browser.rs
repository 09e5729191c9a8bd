//! Browser integration.
//!
//! Opens YouTube watch pages in the system's default browser.

use anyhow::{Context, Result};

/// Open a YouTube video in the default browser.
///
/// # Arguments
/// * `video_url` - YouTube video URL (e.g., https://www.youtube.com/watch?v=VIDEO_ID)
///
/// # Details
/// Only `https://www.youtube.com/` URLs are handed to the system opener.
pub fn open_in_browser(video_url: &str) -> Result<()> {
    if !is_watch_url(video_url) {
        return Err(anyhow::anyhow!("Refusing to open non-YouTube URL: {}", video_url));
    }

    tracing::info!(url = video_url, "opening in browser");
    open::that_detached(video_url)
        .with_context(|| format!("Failed to open browser for {}", video_url))?;

    Ok(())
}

fn is_watch_url(url: &str) -> bool {
    url.starts_with("https://www.youtube.com/watch?v=")
}
