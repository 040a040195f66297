use crate::api::PicsumClient;
use crate::Route;
use dioxus::prelude::*;
use gallery_common::{GalleryConfig, PageOutcome, PageRequest, PhotoFeed};
use gallery_ui::{FeedStatus, GalleryView, PhotoSummary};
use tracing::{debug, info, warn};

async fn load_page(
    mut feed: Signal<PhotoFeed<PhotoSummary>>,
    client: PicsumClient,
    request: PageRequest,
) {
    info!("Fetching photo page {} (limit {})", request.page, request.limit);
    let result = client
        .list_photos(request.page, request.limit)
        .await
        .map_err(|e| {
            warn!("Failed to fetch photo page {}: {}", request.page, e);
            e.to_string()
        });

    match feed.write().apply_page(request, result) {
        PageOutcome::Appended(count) => debug!("Page {} added {} photos", request.page, count),
        PageOutcome::Exhausted => info!("Catalog exhausted at page {}", request.page),
        PageOutcome::Stale => debug!("Ignoring result for superseded page {}", request.page),
        PageOutcome::Failed(_) => {}
    }
}

#[component]
pub fn Gallery() -> Element {
    let config: GalleryConfig = use_context();
    let mut feed = use_signal(|| PhotoFeed::<PhotoSummary>::new(config.page_size));
    let client = use_hook(|| PicsumClient::new(config.clone()));

    // First page on mount; later pages come from the grid's observer
    use_hook({
        let client = client.clone();
        move || {
            spawn(async move {
                let request = feed.write().start();
                if let Some(request) = request {
                    load_page(feed, client, request).await;
                }
            })
        }
    });

    let (photos, status) = {
        let feed = feed.read();
        (feed.items().to_vec(), FeedStatus::of(&*feed))
    };

    rsx! {
        GalleryView {
            photos,
            status,
            on_photo_click: move |id: String| {
                navigator().push(Route::PhotoDetail { id });
            },
            on_last_item_visible: move |_| {
                let request = feed.write().advance();
                if let Some(request) = request {
                    spawn(load_page(feed, client.clone(), request));
                }
            },
        }
    }
}
