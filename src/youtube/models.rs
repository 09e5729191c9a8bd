//! YouTube Data API v3 models and data structures.
//!
//! Contains the wire types for the `search` and `videos` endpoints and the
//! merged [`Video`] type used for display.

use crate::format;
use crate::youtube::url::watch_url;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents a YouTube video as shown in a result card.
///
/// Used both for search results (search snippet merged with a details item)
/// and for the single URL lookup result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Video {
    /// YouTube video ID
    pub id: String,
    /// Descriptive metadata
    pub snippet: Snippet,
    /// Engagement counters, empty when the API omitted them
    pub statistics: Statistics,
    /// Technical metadata, empty when the API omitted it
    pub content_details: ContentDetails,
}

/// Descriptive metadata of a video.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Snippet {
    /// Video title
    pub title: String,
    /// Video description
    pub description: String,
    /// Channel name
    pub channel_title: String,
    /// Channel ID
    pub channel_id: String,
    /// Publish date, if present and parseable
    pub published_at: Option<DateTime<Utc>>,
    /// Thumbnail URLs by size
    pub thumbnails: Thumbnails,
}

/// Thumbnail URLs by size.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Thumbnails {
    pub default: Option<String>,
    pub medium: Option<String>,
    pub high: Option<String>,
}

/// Engagement counters, each independently optional.
///
/// The API returns counters as decimal strings and omits them for videos
/// with restricted statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    #[serde(default)]
    pub view_count: Option<String>,
    #[serde(default)]
    pub like_count: Option<String>,
    #[serde(default)]
    pub comment_count: Option<String>,
}

/// Content details (duration).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentDetails {
    /// Video duration in ISO 8601 format (PT4M13S)
    #[serde(default)]
    pub duration: Option<String>,
}

impl Video {
    /// Build a video from a search item and its optional details item.
    ///
    /// # Returns
    /// * `Option<Video>` - `None` if the search item carries no video id
    ///
    /// # Details
    /// A missing details item leaves statistics and content details empty.
    pub fn from_search(item: ApiSearchItem, details: Option<ApiVideoItem>) -> Option<Self> {
        let id = item.id.video_id?;
        let (statistics, content_details) = details
            .map(|d| {
                (
                    d.statistics.unwrap_or_default(),
                    d.content_details.unwrap_or_default(),
                )
            })
            .unwrap_or_default();

        Some(Self {
            id,
            snippet: item.snippet.into(),
            statistics,
            content_details,
        })
    }

    /// YouTube watch page URL.
    pub fn url(&self) -> String {
        watch_url(&self.id)
    }

    pub fn format_views(&self) -> String {
        format::format_count(self.statistics.view_count.as_deref())
    }

    pub fn format_likes(&self) -> String {
        format::format_count(self.statistics.like_count.as_deref())
    }

    pub fn format_comments(&self) -> String {
        format::format_count(self.statistics.comment_count.as_deref())
    }

    pub fn format_duration(&self) -> String {
        format::format_duration(self.content_details.duration.as_deref())
    }

    pub fn format_date(&self) -> String {
        format::format_date(self.snippet.published_at.as_ref())
    }

    /// Largest available thumbnail URL.
    pub fn thumbnail_url(&self) -> Option<&str> {
        let thumbs = &self.snippet.thumbnails;
        thumbs
            .high
            .as_deref()
            .or(thumbs.medium.as_deref())
            .or(thumbs.default.as_deref())
    }
}

impl From<ApiVideoItem> for Video {
    fn from(item: ApiVideoItem) -> Self {
        Self {
            id: item.id,
            snippet: item.snippet.unwrap_or_default().into(),
            statistics: item.statistics.unwrap_or_default(),
            content_details: item.content_details.unwrap_or_default(),
        }
    }
}

/// Join search items with their details items by video id.
///
/// Keeps the order of `items`; search items without a video id are dropped.
pub fn merge_details(items: Vec<ApiSearchItem>, details: Vec<ApiVideoItem>) -> Vec<Video> {
    let mut by_id: HashMap<String, ApiVideoItem> =
        details.into_iter().map(|d| (d.id.clone(), d)).collect();

    items
        .into_iter()
        .filter_map(|item| {
            let detail = item
                .id
                .video_id
                .as_ref()
                .and_then(|id| by_id.remove(id));
            Video::from_search(item, detail)
        })
        .collect()
}

/// YouTube API list response wrapper.
///
/// A body carrying an `error` object is a failure even with a 2xx status.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    /// Response items
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// API-level error payload
    #[serde(default)]
    pub error: Option<ApiError>,
}

/// Error payload of a Google API response.
#[derive(Debug, Deserialize)]
pub struct ApiError {
    /// Numeric error code (mirrors the HTTP status)
    #[serde(default)]
    pub code: Option<u16>,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
}

/// Envelope of an error-only body, used for non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

/// Item of a search.list response.
#[derive(Debug, Deserialize)]
pub struct ApiSearchItem {
    pub id: ApiSearchItemId,
    #[serde(default)]
    pub snippet: ApiSnippet,
}

#[derive(Debug, Deserialize)]
pub struct ApiSearchItemId {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

/// Item of a videos.list response.
#[derive(Debug, Deserialize)]
pub struct ApiVideoItem {
    /// Video ID
    pub id: String,
    /// Snippet, only when `part` includes it
    #[serde(default)]
    pub snippet: Option<ApiSnippet>,
    /// Statistics (view count, etc.)
    #[serde(default)]
    pub statistics: Option<Statistics>,
    /// Content details (duration, etc.)
    #[serde(rename = "contentDetails", default)]
    pub content_details: Option<ContentDetails>,
}

/// Video snippet from API response.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApiSnippet {
    pub title: String,
    pub description: String,
    #[serde(rename = "channelTitle")]
    pub channel_title: String,
    #[serde(rename = "channelId")]
    pub channel_id: String,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    pub thumbnails: ApiThumbnails,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApiThumbnails {
    pub default: Option<ApiThumbnail>,
    pub medium: Option<ApiThumbnail>,
    pub high: Option<ApiThumbnail>,
}

#[derive(Debug, Deserialize)]
pub struct ApiThumbnail {
    pub url: String,
}

impl From<ApiSnippet> for Snippet {
    fn from(snippet: ApiSnippet) -> Self {
        let published_at = snippet
            .published_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|d| d.with_timezone(&Utc));

        Self {
            title: snippet.title,
            description: snippet.description,
            channel_title: snippet.channel_title,
            channel_id: snippet.channel_id,
            published_at,
            thumbnails: Thumbnails {
                default: snippet.thumbnails.default.map(|t| t.url),
                medium: snippet.thumbnails.medium.map(|t| t.url),
                high: snippet.thumbnails.high.map(|t| t.url),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_item(id: &str, title: &str) -> ApiSearchItem {
        ApiSearchItem {
            id: ApiSearchItemId {
                video_id: Some(id.to_string()),
            },
            snippet: ApiSnippet {
                title: title.to_string(),
                ..ApiSnippet::default()
            },
        }
    }

    fn details_item(id: &str, views: &str, duration: &str) -> ApiVideoItem {
        ApiVideoItem {
            id: id.to_string(),
            snippet: None,
            statistics: Some(Statistics {
                view_count: Some(views.to_string()),
                ..Statistics::default()
            }),
            content_details: Some(ContentDetails {
                duration: Some(duration.to_string()),
            }),
        }
    }

    #[test]
    fn test_merge_keeps_search_order_and_defaults_missing_details() {
        let items = vec![search_item("a", "First"), search_item("b", "Second")];
        let details = vec![details_item("b", "2500", "PT5M9S")];

        let merged = merge_details(items, details);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].id, "a");
        assert_eq!(merged[0].snippet.title, "First");
        assert_eq!(merged[0].statistics, Statistics::default());
        assert_eq!(merged[0].content_details, ContentDetails::default());
        assert_eq!(merged[0].format_views(), "0");

        assert_eq!(merged[1].id, "b");
        assert_eq!(merged[1].format_views(), "2.5K");
        assert_eq!(merged[1].format_duration(), "5:09");
    }

    #[test]
    fn test_merge_drops_items_without_video_id() {
        let items = vec![
            ApiSearchItem {
                id: ApiSearchItemId { video_id: None },
                snippet: ApiSnippet::default(),
            },
            search_item("a", "Only"),
        ];
        let merged = merge_details(items, Vec::new());
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].id, "a");
    }

    #[test]
    fn test_video_item_deserializes_with_missing_parts() {
        let json = r#"{
            "id": "abc123",
            "snippet": {
                "title": "Restricted",
                "channelTitle": "Someone",
                "publishedAt": "2024-01-15T09:30:00Z",
                "thumbnails": { "high": { "url": "https://i.ytimg.com/hq.jpg" } }
            }
        }"#;
        let item: ApiVideoItem = serde_json::from_str(json).unwrap();
        let video = Video::from(item);
        assert_eq!(video.snippet.title, "Restricted");
        assert_eq!(video.format_views(), "0");
        assert_eq!(video.format_likes(), "0");
        assert_eq!(video.format_comments(), "0");
        assert_eq!(video.format_duration(), format::UNKNOWN_DURATION);
        assert_eq!(video.format_date(), "2024/01/15");
        assert_eq!(video.thumbnail_url(), Some("https://i.ytimg.com/hq.jpg"));
        assert_eq!(video.url(), "https://www.youtube.com/watch?v=abc123");
    }

    #[test]
    fn test_bad_published_at_is_kept_as_none() {
        let snippet = ApiSnippet {
            published_at: Some("yesterday".to_string()),
            ..ApiSnippet::default()
        };
        let snippet = Snippet::from(snippet);
        assert!(snippet.published_at.is_none());
    }

    #[test]
    fn test_response_with_error_payload() {
        let json = r#"{"error": {"code": 400, "message": "API key not valid."}}"#;
        let parsed: ApiResponse<ApiVideoItem> = serde_json::from_str(json).unwrap();
        assert!(parsed.items.is_empty());
        let error = parsed.error.unwrap();
        assert_eq!(error.code, Some(400));
        assert_eq!(error.message, "API key not valid.");
    }
}
