pub mod api;
pub mod pages;

use dioxus::prelude::*;
use gallery_common::GalleryConfig;
use pages::{Gallery, PhotoDetail};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Gallery {})]
    #[route("/photos")]
    Gallery {},
    #[route("/photos/:id")]
    PhotoDetail { id: String },
}

#[component]
pub fn App() -> Element {
    use_context_provider(GalleryConfig::default);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen bg-gray-50", Router::<Route> {} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_route() {
        assert_eq!("/photos".parse::<Route>().ok(), Some(Route::Gallery {}));
        assert_eq!(Route::Gallery {}.to_string(), "/photos");
    }

    #[test]
    fn test_root_redirects_to_gallery() {
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Gallery {}));
    }

    #[test]
    fn test_detail_route_forwards_id() {
        assert_eq!(
            "/photos/42".parse::<Route>().ok(),
            Some(Route::PhotoDetail { id: "42".into() })
        );
        assert_eq!(
            Route::PhotoDetail { id: "999".into() }.to_string(),
            "/photos/999"
        );
    }
}
