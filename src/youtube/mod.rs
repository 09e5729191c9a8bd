//! YouTube Data API v3 integration module.
//!
//! Provides the lookup client, API models and URL parsing.

pub mod client;
pub mod models;
pub mod url;

pub use client::YouTubeClient;
pub use models::Video;
