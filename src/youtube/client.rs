//! YouTube Data API v3 client implementation.
//!
//! Provides the two lookup operations: keyword search (search.list followed by
//! a batched videos.list) and single-video lookup from a pasted URL.

use crate::config::Config;
use crate::error::LookupError;
use crate::youtube::models::{
    self, ApiErrorResponse, ApiResponse, ApiSearchItem, ApiVideoItem, Video,
};
use crate::youtube::url::extract_video_id;
use anyhow::Context;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

const SEARCH_DETAILS_PART: &str = "statistics,contentDetails";
const LOOKUP_PART: &str = "snippet,statistics,contentDetails";

/// YouTube Data API v3 client.
///
/// Holds the resolved API key; a missing key is reported per operation as
/// [`LookupError::Configuration`] so the UI can show it like any other error.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    /// HTTP client for API requests
    client: Client,
    /// API key, `None` when unconfigured
    api_key: Option<String>,
    /// Base URL for YouTube Data API
    base_url: String,
    /// Results requested per keyword search
    max_results: u32,
}

impl YouTubeClient {
    /// Create a new YouTube client from configuration.
    ///
    /// # Details
    /// Resolves the API key through [`Config::resolved_api_key`].
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Self::with_api_key(config, config.resolved_api_key())
    }

    /// Create a client with an explicitly resolved API key.
    pub fn with_api_key(config: &Config, api_key: Option<String>) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            max_results: config.max_results,
        })
    }

    /// Whether an API key is available.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Search for videos by keyword.
    ///
    /// # Arguments
    /// * `query` - Search keyword
    ///
    /// # Returns
    /// * `Result<Vec<Video>, LookupError>` - Videos in search order, each merged
    ///   with its statistics and duration
    ///
    /// # Details
    /// Checks the API key before the query. Videos the details call does not
    /// return keep empty statistics and content details.
    pub async fn search_by_keyword(&self, query: &str) -> Result<Vec<Video>, LookupError> {
        let api_key = self.api_key()?;
        let query = query.trim();
        if query.is_empty() {
            return Err(LookupError::validation("Enter a search keyword"));
        }

        let max_results = self.max_results.to_string();
        let search: ApiResponse<ApiSearchItem> = self
            .get(
                "search",
                &[
                    ("part", "snippet"),
                    ("maxResults", &max_results),
                    ("q", query),
                    ("type", "video"),
                    ("key", api_key),
                ],
            )
            .await?;

        let video_ids: Vec<String> = search
            .items
            .iter()
            .filter_map(|item| item.id.video_id.clone())
            .collect();

        if video_ids.is_empty() {
            tracing::info!(query, "search returned no videos");
            return Ok(Vec::new());
        }

        let details = self
            .fetch_video_details(&video_ids, SEARCH_DETAILS_PART, api_key)
            .await?;
        let videos = models::merge_details(search.items, details);

        tracing::info!(query, count = videos.len(), "search completed");
        Ok(videos)
    }

    /// Look up a single video from a pasted YouTube URL.
    ///
    /// # Arguments
    /// * `url` - Watch, short-link, embed or `/v/` URL
    ///
    /// # Returns
    /// * `Result<Video, LookupError>` - The video with snippet, statistics and duration
    pub async fn lookup_by_url(&self, url: &str) -> Result<Video, LookupError> {
        let api_key = self.api_key()?;
        let url = url.trim();
        if url.is_empty() {
            return Err(LookupError::validation("Enter a YouTube URL"));
        }
        let video_id = extract_video_id(url)
            .ok_or_else(|| LookupError::validation("Enter a valid YouTube URL"))?;

        let items = self
            .fetch_video_details(std::slice::from_ref(&video_id), LOOKUP_PART, api_key)
            .await?;

        let item = items
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::NotFound(video_id.clone()))?;

        tracing::info!(video_id = %video_id, "lookup completed");
        Ok(Video::from(item))
    }

    /// Fetch videos.list items for a batch of ids.
    async fn fetch_video_details(
        &self,
        video_ids: &[String],
        part: &str,
        api_key: &str,
    ) -> Result<Vec<ApiVideoItem>, LookupError> {
        let ids = video_ids.join(",");
        let response: ApiResponse<ApiVideoItem> = self
            .get("videos", &[("part", part), ("id", &ids), ("key", api_key)])
            .await?;
        Ok(response.items)
    }

    fn api_key(&self) -> Result<&str, LookupError> {
        self.api_key
            .as_deref()
            .ok_or(LookupError::Configuration)
    }

    /// Issue a GET against an API endpoint and decode the list response.
    ///
    /// # Details
    /// Non-2xx statuses and bodies carrying an `error` object both become
    /// [`LookupError::Upstream`], preferring the API-provided message.
    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse<T>, LookupError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!(endpoint, "sending request");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .inspect_err(|e| tracing::warn!(endpoint, error = %e, "request failed"))?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|parsed| parsed.error.message)
                .unwrap_or_default();
            tracing::warn!(endpoint, status = status.as_u16(), api_message = %message, "upstream error");
            return Err(LookupError::Upstream {
                status: Some(status.as_u16()),
                message,
            });
        }

        let mut parsed: ApiResponse<T> =
            serde_json::from_str(&body).map_err(|e| LookupError::Upstream {
                status: Some(status.as_u16()),
                message: format!("Failed to parse {} response: {}", endpoint, e),
            })?;

        if let Some(error) = parsed.error.take() {
            tracing::warn!(endpoint, code = ?error.code, api_message = %error.message, "api error payload");
            return Err(LookupError::Upstream {
                status: error.code.or(Some(status.as_u16())),
                message: error.message,
            });
        }

        Ok(parsed)
    }
}
