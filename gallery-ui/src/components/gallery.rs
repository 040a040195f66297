//! Gallery view component - pure rendering, no data fetching
//!
//! Unlike the detail view these states overlap: an error banner sits above
//! whatever was already loaded, and the loading indicator trails the grid
//! while the next page arrives.

use crate::components::helpers::{ErrorBanner, LoadingSpinner};
use crate::components::photo_grid::PhotoGrid;
use crate::display_types::{FeedStatus, PhotoSummary};
use dioxus::prelude::*;

#[component]
pub fn GalleryView(
    photos: Vec<PhotoSummary>,
    status: FeedStatus,
    /// Navigation callback - called with the photo id when a card is clicked
    on_photo_click: EventHandler<String>,
    on_last_item_visible: EventHandler<()>,
) -> Element {
    let paused = !status.observing();

    rsx! {
        div { class: "container mx-auto px-4 py-8",
            header { class: "mb-8 text-center",
                h1 { class: "text-4xl font-bold text-gray-800 mb-2", "Photo Gallery" }
                p { class: "text-gray-600", "Explore beautiful photos from Lorem Picsum" }
            }

            if let Some(message) = status.error.clone() {
                ErrorBanner { message }
            }

            PhotoGrid {
                photos,
                paused,
                on_photo_click,
                on_last_item_visible,
            }

            if status.loading {
                LoadingSpinner { message: "Loading more photos...".to_string() }
            }

            if status.show_end_of_feed {
                div { class: "text-center py-8",
                    p { class: "text-gray-600 font-semibold", "You've reached the end! 🎉" }
                }
            }

            if status.show_empty_state {
                div { class: "text-center py-16",
                    p { class: "text-gray-600 text-lg", "No photos found." }
                }
            }
        }
    }
}
