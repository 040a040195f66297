//! Infinite-scroll photo grid
//!
//! The last card is watched by a [`VisibilityObserver`]. Each time it scrolls
//! into view the grid calls `on_last_item_visible`; deciding whether that
//! actually loads a page is the caller's job.
//!
//! ## Observer lifecycle
//! The observer is rebuilt whenever the last card changes or `paused` flips.
//! While paused (a page is loading, or there is nothing left) no observer is
//! attached at all. Becoming unpaused re-attaches to the current last card,
//! which reports immediately if that card is still on screen, so a page that
//! contributed no new cards does not stall the feed.

use crate::components::photo_card::PhotoCard;
use crate::display_types::PhotoSummary;
use crate::wasm_utils::VisibilityObserver;
use dioxus::prelude::*;
use std::rc::Rc;

/// Responsive grid of photo cards with scroll-triggered pagination
#[component]
pub fn PhotoGrid(
    photos: Vec<PhotoSummary>,
    /// Keep the observer detached
    paused: bool,
    on_photo_click: EventHandler<String>,
    on_last_item_visible: EventHandler<()>,
) -> Element {
    let mut last_card: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut observer: Signal<Option<VisibilityObserver>> = use_signal(|| None);
    // Bumped from the JS callback; the effect below turns it into an event
    let mut sightings = use_signal(|| 0u64);

    use_effect(use_reactive!(|(paused,)| {
        let target = last_card.read().clone();
        observer.set(None);
        if paused {
            return;
        }
        let Some(target) = target else {
            return;
        };
        let Some(element) = target.downcast::<web_sys::Element>() else {
            return;
        };
        observer.set(VisibilityObserver::attach(element, move || {
            *sightings.write() += 1;
        }));
    }));

    use_effect(move || {
        if sightings() > 0 {
            on_last_item_visible.call(());
        }
    });

    let last_index = photos.len().saturating_sub(1);

    rsx! {
        div { class: "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6",
            for (idx, photo) in photos.into_iter().enumerate() {
                PhotoCard {
                    key: "{photo.id}",
                    photo,
                    is_last: idx == last_index,
                    on_click: on_photo_click,
                    on_last_mounted: move |data| last_card.set(Some(data)),
                }
            }
        }
    }
}
