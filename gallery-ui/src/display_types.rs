//! Display types for UI components
//!
//! Lightweight versions of the catalog payloads holding only what the views
//! render. Image URLs are resolved by the API layer so views stay config-free.

use gallery_common::{FeedItem, PhotoFeed};

/// One entry of the gallery grid
#[derive(Clone, Debug, PartialEq)]
pub struct PhotoSummary {
    pub id: String,
    pub author: String,
    /// Native width in pixels
    pub width: u32,
    /// Native height in pixels
    pub height: u32,
    pub thumbnail_url: String,
}

impl FeedItem for PhotoSummary {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Metadata for the detail view
#[derive(Clone, Debug, PartialEq)]
pub struct PhotoDetail {
    pub id: String,
    pub author: String,
    pub width: u32,
    pub height: u32,
    /// Page of the original upload
    pub source_url: String,
    /// Asset at native resolution, used for display and download
    pub full_size_url: String,
}

impl PhotoDetail {
    pub fn dimensions(&self) -> String {
        format_dimensions(self.width, self.height)
    }
}

/// `width × height` as shown on cards and in the detail view
pub fn format_dimensions(width: u32, height: u32) -> String {
    format!("{width} × {height}")
}

/// Everything the gallery renders around the grid itself
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedStatus {
    /// A page request is outstanding
    pub loading: bool,
    /// No further pages will be requested
    pub exhausted: bool,
    /// Message of the most recent failed page request
    pub error: Option<String>,
    /// Idle with nothing loaded and no error: "no results"
    pub show_empty_state: bool,
    /// Exhausted after showing at least one photo: "end of list"
    pub show_end_of_feed: bool,
}

impl FeedStatus {
    pub fn of<T: FeedItem>(feed: &PhotoFeed<T>) -> Self {
        Self {
            loading: feed.is_loading(),
            exhausted: feed.is_exhausted(),
            error: feed.error().map(str::to_string),
            show_empty_state: feed.shows_empty_state(),
            show_end_of_feed: feed.shows_end_of_feed(),
        }
    }

    /// Whether the last card should currently be observed
    pub fn observing(&self) -> bool {
        !self.loading && !self.exhausted
    }
}
