//! Application state management.
//!
//! Holds the query inputs, result holders, loading flags and error banner, and
//! decides which completed lookups are allowed to update them.

use crate::error::LookupError;
use crate::youtube::Video;

/// Input mode of the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Navigating results
    Normal,
    /// Typing into the input of the active tab
    Editing,
}

/// Tab mode for the two lookup views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Keyword search with a list of result cards
    Search,
    /// URL lookup with a single detail card
    Url,
}

impl Tab {
    /// The other tab.
    pub fn toggled(self) -> Self {
        match self {
            Tab::Search => Tab::Url,
            Tab::Url => Tab::Search,
        }
    }
}

/// Result of a finished lookup task, tagged with the sequence number that
/// was handed out when the task started.
#[derive(Debug)]
pub enum Outcome {
    Search {
        seq: u64,
        result: Result<Vec<Video>, LookupError>,
    },
    Lookup {
        seq: u64,
        result: Result<Video, LookupError>,
    },
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Active tab
    pub active_tab: Tab,
    /// Current UI mode
    pub mode: UiMode,
    /// Keyword search input
    pub search_query: String,
    /// URL lookup input
    pub url_query: String,
    /// Results of the latest successful search
    pub search_results: Vec<Video>,
    /// Result of the latest successful URL lookup
    pub url_result: Option<Video>,
    /// Error banner text
    pub error: Option<String>,
    /// Currently selected index in search_results
    pub selected_index: usize,
    /// Status message to display
    pub status_message: Option<String>,
    /// Whether a search is in flight
    pub search_loading: bool,
    /// Whether a URL lookup is in flight
    pub lookup_loading: bool,
    /// Sequence number of the latest started search
    search_seq: u64,
    /// Sequence number of the latest started URL lookup
    lookup_seq: u64,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application state.
    pub fn new() -> Self {
        Self {
            active_tab: Tab::Search,
            mode: UiMode::Normal,
            search_query: String::new(),
            url_query: String::new(),
            search_results: Vec::new(),
            url_result: None,
            error: None,
            selected_index: 0,
            status_message: None,
            search_loading: false,
            lookup_loading: false,
            search_seq: 0,
            lookup_seq: 0,
        }
    }

    /// Mark a search as started.
    ///
    /// # Returns
    /// * `u64` - Sequence number the finished task must report back
    ///
    /// # Details
    /// Any search started earlier is superseded: its outcome will be ignored.
    pub fn begin_search(&mut self) -> u64 {
        self.search_seq += 1;
        self.search_loading = true;
        self.error = None;
        self.search_seq
    }

    /// Mark a URL lookup as started. See [`App::begin_search`].
    pub fn begin_lookup(&mut self) -> u64 {
        self.lookup_seq += 1;
        self.lookup_loading = true;
        self.error = None;
        self.lookup_seq
    }

    /// Apply a finished lookup to the state.
    ///
    /// # Returns
    /// * `bool` - false if the outcome belonged to a superseded request and was dropped
    ///
    /// # Details
    /// Success replaces the result holder wholesale and clears the banner.
    /// Failure replaces the banner and leaves earlier results in place.
    pub fn apply_outcome(&mut self, outcome: Outcome) -> bool {
        match outcome {
            Outcome::Search { seq, result } => {
                if seq != self.search_seq {
                    tracing::debug!(seq, latest = self.search_seq, "dropping superseded search");
                    return false;
                }
                self.search_loading = false;
                match result {
                    Ok(videos) => {
                        self.set_status(format!("Found {} videos", videos.len()));
                        self.set_search_results(videos);
                        self.error = None;
                    }
                    Err(e) => {
                        tracing::warn!(status = ?e.status(), error = %e, "search failed");
                        self.error = Some(format!("Search error: {}", e));
                    }
                }
            }
            Outcome::Lookup { seq, result } => {
                if seq != self.lookup_seq {
                    tracing::debug!(seq, latest = self.lookup_seq, "dropping superseded lookup");
                    return false;
                }
                self.lookup_loading = false;
                match result {
                    Ok(video) => {
                        self.set_status(format!("Loaded: {}", video.snippet.title));
                        self.url_result = Some(video);
                        self.error = None;
                    }
                    Err(e) => {
                        tracing::warn!(status = ?e.status(), error = %e, "url lookup failed");
                        self.error = Some(format!("URL lookup error: {}", e));
                    }
                }
            }
        }
        true
    }

    /// Whether the active tab has a request in flight.
    pub fn is_loading(&self) -> bool {
        match self.active_tab {
            Tab::Search => self.search_loading,
            Tab::Url => self.lookup_loading,
        }
    }

    /// Set search results and reset selection.
    pub fn set_search_results(&mut self, videos: Vec<Video>) {
        self.search_results = videos;
        self.selected_index = 0;
    }

    /// Switch to the other tab.
    pub fn toggle_tab(&mut self) {
        self.active_tab = self.active_tab.toggled();
        self.mode = UiMode::Normal;
    }

    /// Input text of the active tab.
    pub fn active_input(&self) -> &str {
        match self.active_tab {
            Tab::Search => &self.search_query,
            Tab::Url => &self.url_query,
        }
    }

    fn active_input_mut(&mut self) -> &mut String {
        match self.active_tab {
            Tab::Search => &mut self.search_query,
            Tab::Url => &mut self.url_query,
        }
    }

    /// Add a character to the active input.
    ///
    /// # Details
    /// Only works in Editing mode.
    pub fn add_input_char(&mut self, ch: char) {
        if self.mode == UiMode::Editing {
            self.active_input_mut().push(ch);
        }
    }

    /// Remove last character from the active input.
    pub fn remove_input_char(&mut self) {
        if self.mode == UiMode::Editing {
            self.active_input_mut().pop();
        }
    }

    /// Clear the active input.
    pub fn clear_input(&mut self) {
        self.active_input_mut().clear();
    }

    /// Move selection up, wrapping to bottom if at top.
    pub fn move_up(&mut self) {
        if self.search_results.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.search_results.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Move selection down, wrapping to top if at bottom.
    pub fn move_down(&mut self) {
        if self.search_results.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.search_results.len();
    }

    /// Video the "open in YouTube" action applies to on the active tab.
    pub fn selected_video(&self) -> Option<&Video> {
        match self.active_tab {
            Tab::Search => self.search_results.get(self.selected_index),
            Tab::Url => self.url_result.as_ref(),
        }
    }

    /// Set status message.
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }
}
