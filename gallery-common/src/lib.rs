//! gallery-common - Pure gallery logic shared by the UI and web crates
//!
//! No I/O lives here: pagination, stale-response tracking, captions and
//! endpoint URLs are plain data transformations.

mod caption;
mod config;
mod detail_session;
mod photo_feed;

pub use caption::{photo_description, photo_title};
pub use config::GalleryConfig;
pub use detail_session::{DetailSession, DetailState, Ticket};
pub use photo_feed::{FeedItem, PageOutcome, PageRequest, PhotoFeed};
