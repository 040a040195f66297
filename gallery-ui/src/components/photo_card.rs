//! Photo card component - pure view with callbacks

use crate::display_types::{format_dimensions, PhotoSummary};
use dioxus::prelude::*;
use std::rc::Rc;

/// Thumbnail tile in the gallery grid
///
/// Navigation is handled via `on_click`, not direct router calls. When
/// `is_last` is set at mount time the card reports its element through
/// `on_last_mounted` so the grid can observe it.
#[component]
pub fn PhotoCard(
    photo: PhotoSummary,
    /// Whether this card is the last one in the grid
    #[props(default)]
    is_last: bool,
    on_click: EventHandler<String>,
    on_last_mounted: EventHandler<Rc<MountedData>>,
) -> Element {
    let photo_id = photo.id.clone();
    let dimensions = format_dimensions(photo.width, photo.height);

    rsx! {
        a {
            class: "group relative block bg-white rounded-lg shadow-md overflow-hidden hover:shadow-xl transition-shadow duration-300 cursor-pointer",
            "data-testid": "photo-card",
            onclick: move |evt| {
                evt.prevent_default();
                on_click.call(photo_id.clone());
            },
            onmounted: move |evt| {
                if is_last {
                    on_last_mounted.call(evt.data());
                }
            },
            div { class: "aspect-square overflow-hidden",
                img {
                    src: "{photo.thumbnail_url}",
                    alt: "Photo by {photo.author}",
                    class: "w-full h-full object-cover group-hover:scale-110 transition-transform duration-300",
                    "loading": "lazy",
                }
            }
            div { class: "absolute bottom-0 left-0 right-0 bg-gradient-to-t from-black/70 to-transparent p-4",
                p { class: "text-white font-semibold text-sm truncate", title: "{photo.author}",
                    "{photo.author}"
                }
                p { class: "text-gray-300 text-xs", "{dimensions}" }
            }
        }
    }
}
