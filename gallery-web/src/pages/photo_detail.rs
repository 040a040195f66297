use crate::api::PicsumClient;
use crate::Route;
use dioxus::prelude::*;
use gallery_common::{DetailSession, DetailState, GalleryConfig};
use gallery_ui::{
    PhotoDetail as Photo, PhotoDetailErrorView, PhotoDetailLoadingView, PhotoDetailView,
    ERROR_ACTION_CLASS,
};
use tracing::{debug, info, warn};

/// Where every way out of the detail page leads
fn back_route() -> Route {
    Route::Gallery {}
}

#[component]
pub fn PhotoDetail(id: String) -> Element {
    let config: GalleryConfig = use_context();
    let client = use_hook(|| PicsumClient::new(config.clone()));
    let mut session = use_signal(DetailSession::<Photo>::new);

    // Runs on mount and again whenever the routed id changes
    use_effect(use_reactive!(|(id,)| {
        let ticket = session.write().begin(&id);
        let client = client.clone();
        info!("Fetching photo {}", ticket.id());
        spawn(async move {
            let result = client.fetch_photo(ticket.id()).await.map_err(|e| {
                warn!("Failed to fetch photo {}: {}", ticket.id(), e);
                e.to_string()
            });
            if !session.write().resolve(&ticket, result) {
                debug!("Discarding stale response for photo {}", ticket.id());
            }
        });
    }));

    let on_back = move |_: ()| {
        navigator().push(back_route());
    };

    let state = session.read().state().clone();
    match state {
        DetailState::Loading => rsx! {
            PhotoDetailLoadingView {}
        },
        DetailState::Failed(message) => rsx! {
            PhotoDetailErrorView {
                message,
                back: rsx! {
                    Link { class: ERROR_ACTION_CLASS, to: back_route(), "Back to Gallery" }
                },
            }
        },
        DetailState::Loaded(photo) => rsx! {
            PhotoDetailView { photo, on_back }
        },
    }
}
